use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IconIoError {
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to locate the generator executable")]
    Locate {
        #[source]
        source: std::io::Error,
    },
}

impl IconIoError {
    /// Path of the file that could not be written, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            IconIoError::Write { path, .. } => Some(path),
            IconIoError::Locate { .. } => None,
        }
    }
}

/// Write `contents` to `path`, truncating any existing file.
///
/// The handle is owned by this call and closed on every return path.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), IconIoError> {
    let wrap = |source| IconIoError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    out.write_all(contents.as_bytes()).map_err(wrap)?;
    // BufWriter swallows errors on drop, so flush explicitly.
    out.flush().map_err(wrap)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Absolute directory holding the running executable.
pub fn generator_dir() -> Result<PathBuf, IconIoError> {
    let exe = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .map_err(|source| IconIoError::Locate { source })?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| IconIoError::Locate {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        })?;
    debug!(dir = %dir.display(), "resolved generator directory");
    Ok(dir)
}
