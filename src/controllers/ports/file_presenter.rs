use std::path::Path;

pub trait FilePresenterPort {
    fn present(&self, png: &[u8], filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
