use crate::core::data::pixel_grid::PixelGrid;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use thiserror::Error;

pub const PNG_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, Error)]
pub enum EncodePngError {
    #[error("cannot encode a {width}x{height} image")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("grid holds {value_count} values for {width}x{height} pixels")]
    BufferMismatch {
        width: u32,
        height: u32,
        value_count: usize,
    },
    #[error("png encoder error: {0}")]
    Image(#[from] ImageError),
}

/// Serialises a grid as an 8-bit grayscale PNG, row 0 at the top.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodePngError> {
    let width = grid.width();
    let height = grid.height();

    if width == 0 || height == 0 {
        return Err(EncodePngError::InvalidDimensions { width, height });
    }

    let values = grid.values();

    if values.len() as u64 != u64::from(width) * u64::from(height) {
        return Err(EncodePngError::BufferMismatch {
            width,
            height,
            value_count: values.len(),
        });
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(values, width, height, ExtendedColorType::L8)?;

    Ok(png)
}
