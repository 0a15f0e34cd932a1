use std::fmt;
use std::path::PathBuf;

/// Pixel dimension of one icon variant. Icons are always square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconSize(pub u32);

impl IconSize {
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Output file name, e.g. `icon-192.png.svg`.
    /// Consumers reference the `.png.svg` double extension by name.
    pub fn file_name(self) -> String {
        format!("icon-{}.png.svg", self.0)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for IconSize {
    fn from(px: u32) -> Self {
        Self(px)
    }
}

pub const ICON_SIZES: [IconSize; 8] = [
    IconSize(72),
    IconSize(96),
    IconSize(128),
    IconSize(144),
    IconSize(152),
    IconSize(192),
    IconSize(384),
    IconSize(512),
];

/// The fixed size list, in generation order.
pub fn icon_sizes() -> &'static [IconSize] {
    &ICON_SIZES
}

/// One file written by a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: IconSize,
    pub path: PathBuf,
}

impl GeneratedIcon {
    pub fn file_name(&self) -> String {
        self.size.file_name()
    }
}
