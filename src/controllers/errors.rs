use crate::core::actions::encode_png::encode_png::EncodePngError;
use crate::core::actions::render_fractal::render_fractal::RenderFractalError;
use crate::core::data::plane_rect::PlaneRectError;
use crate::core::data::render_config::RenderConfigError;
use crate::core::data::tile_coordinate::TileCoordinate;
use std::error::Error;
use std::io;
use thiserror::Error;

/// Failures of a single tile render. None are retryable: rendering is
/// deterministic, so the same inputs fail the same way.
#[derive(Debug, Error)]
pub enum RenderTileError {
    /// The caller passed a config no tile can be rendered with.
    #[error("invalid render dimensions: {0}")]
    InvalidDimensions(#[from] RenderConfigError),

    /// The tile lies beyond what `f64` can address.
    #[error("tile {coordinate} maps to a degenerate plane rectangle: {source}")]
    NumericOverflow {
        coordinate: TileCoordinate,
        source: PlaneRectError,
    },

    /// An internal invariant broke between rendering and encoding.
    #[error("tile encoding failed: {0}")]
    EncodingFailure(#[source] Box<dyn Error + Send + Sync>),
}

impl From<RenderFractalError> for RenderTileError {
    fn from(err: RenderFractalError) -> Self {
        match err {
            RenderFractalError::InvalidConfig(config_err) => Self::InvalidDimensions(config_err),
            other => Self::EncodingFailure(Box::new(other)),
        }
    }
}

impl From<EncodePngError> for RenderTileError {
    fn from(err: EncodePngError) -> Self {
        Self::EncodingFailure(Box::new(err))
    }
}

/// Failures of a whole-pyramid run. The first failing tile stops the run.
#[derive(Debug, Error)]
pub enum GeneratePyramidError {
    #[error("max zoom {max_zoom} exceeds the deepest addressable zoom {limit}")]
    ZoomBeyondPrecision { max_zoom: u32, limit: u32 },

    #[error(transparent)]
    Render(#[from] RenderTileError),

    #[error("failed to write tile {coordinate}: {source}")]
    Write {
        coordinate: TileCoordinate,
        source: io::Error,
    },
}
