use thiserror::Error;

pub const DEFAULT_MIN_X: f64 = -2.0;
pub const DEFAULT_MIN_Y: f64 = -1.25;
pub const DEFAULT_BASE_RANGE_X: f64 = 2.5;
pub const DEFAULT_BASE_RANGE_Y: f64 = 2.5;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PlaneFramingError {
    #[error("framing origin must be finite: ({min_x}, {min_y})")]
    NonFiniteOrigin { min_x: f64, min_y: f64 },
    #[error("framing base range must be positive and finite: {range_x}x{range_y}")]
    InvalidRange { range_x: f64, range_y: f64 },
}

/// The plane rectangle covered by tile `0/0/0`: its top-left corner and
/// extent. Every other tile is derived from this by halving per zoom level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneFraming {
    min_x: f64,
    min_y: f64,
    base_range_x: f64,
    base_range_y: f64,
}

impl Default for PlaneFraming {
    // Frames the classic silhouette.
    fn default() -> Self {
        Self {
            min_x: DEFAULT_MIN_X,
            min_y: DEFAULT_MIN_Y,
            base_range_x: DEFAULT_BASE_RANGE_X,
            base_range_y: DEFAULT_BASE_RANGE_Y,
        }
    }
}

impl PlaneFraming {
    pub fn new(
        min_x: f64,
        min_y: f64,
        base_range_x: f64,
        base_range_y: f64,
    ) -> Result<Self, PlaneFramingError> {
        if !min_x.is_finite() || !min_y.is_finite() {
            return Err(PlaneFramingError::NonFiniteOrigin { min_x, min_y });
        }

        let valid_range = |range: f64| range.is_finite() && range > 0.0;

        if !valid_range(base_range_x) || !valid_range(base_range_y) {
            return Err(PlaneFramingError::InvalidRange {
                range_x: base_range_x,
                range_y: base_range_y,
            });
        }

        Ok(Self {
            min_x,
            min_y,
            base_range_x,
            base_range_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn base_range_x(&self) -> f64 {
        self.base_range_x
    }

    #[must_use]
    pub fn base_range_y(&self) -> f64 {
        self.base_range_y
    }
}
