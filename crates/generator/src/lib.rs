use io::{write_text_file, IconIoError};
use std::path::Path;
use tracing::{debug, info_span};
use types::{icon_sizes, GeneratedIcon, IconSize};

mod template;

pub use template::SVG_TEMPLATE;

/// Render the SVG markup for one icon variant.
pub fn render_icon(size: IconSize) -> String {
    template::render(size)
}

/// Write every icon of the fixed size list into `dir`.
pub fn generate_icons(dir: &Path) -> Result<Vec<GeneratedIcon>, IconIoError> {
    generate_icons_with(dir, icon_sizes(), |_| {})
}

/// Write one icon per entry of `sizes` into `dir`, in order.
///
/// `on_written` runs after each file is on disk. The first failed write
/// aborts the pass; files already written are left in place, so the
/// directory always holds a prefix of `sizes`.
pub fn generate_icons_with<F>(
    dir: &Path,
    sizes: &[IconSize],
    mut on_written: F,
) -> Result<Vec<GeneratedIcon>, IconIoError>
where
    F: FnMut(&GeneratedIcon),
{
    let _span = info_span!("generate_icons", dir = %dir.display()).entered();
    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let path = dir.join(size.file_name());
        write_text_file(&path, &render_icon(size))?;
        let icon = GeneratedIcon { size, path };
        on_written(&icon);
        written.push(icon);
    }
    debug!(count = written.len(), "icon pass complete");
    Ok(written)
}
