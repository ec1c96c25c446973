use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PlaneRectError {
    #[error("plane rect corners must be finite: ({min_x}, {min_y}) to ({max_x}, {max_y})")]
    NonFinite {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    #[error("plane rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned rectangle of the complex plane covered by one tile.
///
/// `min` is the corner drawn at the top-left pixel of the tile. Construction
/// guarantees finite corners and a strictly positive extent on both axes, so
/// anything holding a `PlaneRect` can sample it without further checks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRect {
    min: Complex,
    max: Complex,
}

impl PlaneRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, PlaneRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlaneRectError::NonFinite {
                min_x: min.real,
                min_y: min.imag,
                max_x: max.real,
                max_y: max.imag,
            });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    pub fn from_bounds(
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Self, PlaneRectError> {
        Self::new(
            Complex {
                real: min_x,
                imag: min_y,
            },
            Complex {
                real: max_x,
                imag: max_y,
            },
        )
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.real
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.imag
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.real
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_rect_new_valid() {
        let rect = PlaneRect::from_bounds(-2.0, -1.25, 0.5, 1.25).unwrap();

        assert_eq!(rect.min_x(), -2.0);
        assert_eq!(rect.min_y(), -1.25);
        assert_eq!(rect.max_x(), 0.5);
        assert_eq!(rect.max_y(), 1.25);
    }

    #[test]
    fn test_plane_rect_dimensions() {
        let rect = PlaneRect::from_bounds(-2.0, -1.25, 0.5, 1.25).unwrap();

        assert_eq!(rect.width(), 2.5);
        assert_eq!(rect.height(), 2.5);
    }

    #[test]
    fn test_plane_rect_dimensions_must_be_positive() {
        assert_eq!(
            PlaneRect::from_bounds(0.0, 0.0, 0.0, 1.0),
            Err(PlaneRectError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            PlaneRect::from_bounds(0.0, 0.0, 1.0, -1.0),
            Err(PlaneRectError::InvalidSize {
                width: 1.0,
                height: -1.0
            })
        );
        assert_eq!(
            PlaneRect::from_bounds(2.0, 2.0, -2.0, -2.0),
            Err(PlaneRectError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_plane_rect_rejects_non_finite_corners() {
        let infinite = PlaneRect::from_bounds(0.0, 0.0, f64::INFINITY, 1.0);
        let nan = PlaneRect::from_bounds(f64::NAN, 0.0, 1.0, 1.0);
        let negative_infinite = PlaneRect::from_bounds(0.0, f64::NEG_INFINITY, 1.0, 1.0);

        assert!(matches!(infinite, Err(PlaneRectError::NonFinite { .. })));
        assert!(matches!(nan, Err(PlaneRectError::NonFinite { .. })));
        assert!(matches!(
            negative_infinite,
            Err(PlaneRectError::NonFinite { .. })
        ));
    }
}
