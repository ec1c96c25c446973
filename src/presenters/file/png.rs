use crate::controllers::ports::file_presenter::FilePresenterPort;
use std::fs;
use std::io;
use std::path::Path;

/// Removes `dir` and everything under it. A missing directory is not an error.
pub fn clean_output_dir(dir: impl AsRef<Path>) -> io::Result<()> {
    match fs::remove_dir_all(dir) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        result => result,
    }
}

/// Writes encoded tiles to disk, creating missing parent directories.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, png: &[u8], filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(filepath, png)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
