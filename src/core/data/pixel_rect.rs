use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive rectangle of pixel positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// A `width × height` rect anchored at the origin, as used for one tile.
    pub fn of_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let invalid = PixelRectError::InvalidSize {
            width: i64::from(width),
            height: i64::from(height),
        };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let right = i32::try_from(width - 1).map_err(|_| invalid)?;
        let bottom = i32::try_from(height - 1).map_err(|_| invalid)?;

        Self::new(Point { x: 0, y: 0 }, Point { x: right, y: bottom })
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}
