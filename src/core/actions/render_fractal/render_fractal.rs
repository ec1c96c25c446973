use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_grid::generate_pixel_grid::{
    GeneratePixelGridError, generate_pixel_grid,
};
use crate::core::actions::generate_pixel_grid::ports::intensity_map::IntensityMap;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_grayscale::EscapeGrayscale;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use thiserror::Error;
use tracing::debug;

/// Tiles with fewer rows than this are rendered on the calling thread.
pub const PARALLEL_ROW_THRESHOLD: u32 = 32;

#[derive(Debug, Error)]
pub enum RenderFractalError {
    #[error("invalid render config: {0}")]
    InvalidConfig(#[from] RenderConfigError),
    #[error("pixel rect error: {0}")]
    PixelRect(#[from] PixelRectError),
    #[error("mandelbrot error: {0}")]
    Mandelbrot(#[from] MandelbrotError),
    #[error("fractal algorithm error: {0}")]
    Algorithm(#[from] PixelToComplexCoordsError),
    #[error("pixel grid error: {0}")]
    PixelGrid(#[from] GeneratePixelGridError),
}

/// Renders `plane_rect` as a square `tile_size` grid of grayscale
/// intensities.
pub fn render_fractal(
    plane_rect: PlaneRect,
    config: &RenderConfig,
) -> Result<PixelGrid, RenderFractalError> {
    config.validate()?;

    let pixel_rect = PixelRect::of_size(config.tile_size, config.tile_size)?;
    let algorithm = MandelbrotAlgorithm::new(pixel_rect, plane_rect, config.max_iterations)?;

    let palette = EscapeGrayscale::new(config.max_iterations);
    let parallel = pixel_rect.height() >= PARALLEL_ROW_THRESHOLD;

    debug!(
        tile_size = config.tile_size,
        max_iterations = config.max_iterations,
        parallel,
        palette = palette.display_name(),
        "rendering plane rect ({}, {}) to ({}, {})",
        plane_rect.min_x(),
        plane_rect.min_y(),
        plane_rect.max_x(),
        plane_rect.max_y()
    );

    let escape_counts = if parallel {
        generate_fractal_parallel_rayon(pixel_rect, &algorithm)?
    } else {
        generate_fractal(pixel_rect, &algorithm)?
    };

    Ok(generate_pixel_grid(escape_counts, &palette, pixel_rect)?)
}
