use thiserror::Error;

pub const DEFAULT_TILE_SIZE: u32 = 256;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const MAX_TILE_SIZE: u32 = 16384;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    #[error("tile size {tile_size} exceeds maximum {max_tile_size}")]
    TileSizeTooLarge { tile_size: u32, max_tile_size: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Per-render settings. Tiles are always square, `tile_size` pixels a side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub tile_size: u32,
    pub max_iterations: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub const fn new(tile_size: u32, max_iterations: u32) -> Self {
        Self {
            tile_size,
            max_iterations,
        }
    }

    pub fn validate(&self) -> Result<(), RenderConfigError> {
        if self.tile_size == 0 {
            return Err(RenderConfigError::ZeroTileSize);
        }

        if self.tile_size > MAX_TILE_SIZE {
            return Err(RenderConfigError::TileSizeTooLarge {
                tile_size: self.tile_size,
                max_tile_size: MAX_TILE_SIZE,
            });
        }

        if self.max_iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        Ok(())
    }
}
