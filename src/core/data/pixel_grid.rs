use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelGridError {
    #[error("pixel rect size {pixel_rect_size} does not match value count {value_count}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        value_count: usize,
    },
}

pub type PixelGridData = Vec<u8>;

/// Row-major grid of 8-bit intensities, one byte per pixel, with `(0, 0)`
/// at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixel_rect: PixelRect,
    values: PixelGridData,
}

impl PixelGrid {
    pub fn from_data(pixel_rect: PixelRect, values: PixelGridData) -> Result<Self, PixelGridError> {
        let pixel_rect_size = pixel_rect.size() as usize;

        if pixel_rect_size != values.len() {
            return Err(PixelGridError::BoundsMismatch {
                pixel_rect_size,
                value_count: values.len(),
            });
        }

        Ok(Self { pixel_rect, values })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Intensity at an absolute pixel position, `None` outside the grid.
    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<u8> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (i64::from(pixel.x) - i64::from(self.pixel_rect.top_left().x)) as usize;
        let relative_y = (i64::from(pixel.y) - i64::from(self.pixel_rect.top_left().y)) as usize;
        let index = relative_y * self.width() as usize + relative_x;

        self.values.get(index).copied()
    }
}
