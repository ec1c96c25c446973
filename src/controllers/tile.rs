use std::time::Instant;

use tracing::{debug, warn};

use crate::controllers::errors::RenderTileError;
use crate::core::actions::encode_png::encode_png::encode_png;
use crate::core::actions::map_tile::map_tile::PlaneMapper;
use crate::core::actions::render_fractal::render_fractal::render_fractal;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::plane_framing::PlaneFraming;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::tile_coordinate::TileCoordinate;

/// Renders Mandelbrot tiles for one framing of the plane.
///
/// Holds only the immutable framing, so a single instance can be shared
/// across threads and several instances with different framings can coexist.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TileRenderer {
    mapper: PlaneMapper,
}

impl TileRenderer {
    #[must_use]
    pub fn new(framing: PlaneFraming) -> Self {
        Self {
            mapper: PlaneMapper::new(framing),
        }
    }

    #[must_use]
    pub fn framing(&self) -> PlaneFraming {
        self.mapper.framing()
    }

    pub fn render_grid(
        &self,
        coordinate: TileCoordinate,
        config: &RenderConfig,
    ) -> Result<PixelGrid, RenderTileError> {
        config.validate()?;

        let plane_rect = self.mapper.map_tile(coordinate).map_err(|source| {
            warn!(tile = %coordinate, error = %source, "tile maps to a degenerate plane rectangle");
            RenderTileError::NumericOverflow { coordinate, source }
        })?;

        Ok(render_fractal(plane_rect, config)?)
    }

    /// Renders `coordinate` and returns the tile as PNG bytes.
    pub fn render_tile(
        &self,
        coordinate: TileCoordinate,
        config: &RenderConfig,
    ) -> Result<Vec<u8>, RenderTileError> {
        let start = Instant::now();

        let grid = self.render_grid(coordinate, config)?;
        let png = encode_png(&grid)?;

        debug!(
            tile = %coordinate,
            tile_size = config.tile_size,
            max_iterations = config.max_iterations,
            bytes = png.len(),
            elapsed = ?start.elapsed(),
            "rendered tile"
        );

        Ok(png)
    }
}

/// Renders tile `z/x/y` with the default framing.
pub fn render_tile(
    z: i32,
    x: i64,
    y: i64,
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderTileError> {
    TileRenderer::default().render_tile(TileCoordinate::new(z, x, y), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::plane_rect::PlaneRectError;
    use crate::core::data::render_config::RenderConfigError;
    use image::{ImageFormat, load_from_memory_with_format};

    fn decode(png: &[u8]) -> image::GrayImage {
        load_from_memory_with_format(png, ImageFormat::Png)
            .unwrap()
            .into_luma8()
    }

    #[test]
    fn test_root_tile_scenario() {
        let png = render_tile(0, 0, 0, &RenderConfig::new(256, 256)).unwrap();
        let image = decode(&png);

        assert_eq!(image.dimensions(), (256, 256));
        assert_eq!(image.get_pixel(128, 128).0, [0]);
        assert_ne!(image.get_pixel(0, 0).0, [0]);
        assert_ne!(image.get_pixel(0, 255).0, [0]);
    }

    #[test]
    fn test_render_tile_is_byte_identical_across_calls() {
        let config = RenderConfig::default();

        let first = render_tile(3, 2, 3, &config).unwrap();
        let second = render_tile(3, 2, 3, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_png_round_trips_to_rendered_grid() {
        let renderer = TileRenderer::default();
        let coordinate = TileCoordinate::new(2, 1, 1);
        let config = RenderConfig::new(64, 128);

        let grid = renderer.render_grid(coordinate, &config).unwrap();
        let png = renderer.render_tile(coordinate, &config).unwrap();
        let image = decode(&png);

        assert_eq!(image.width(), grid.width());
        assert_eq!(image.height(), grid.height());
        assert_eq!(image.as_raw().as_slice(), grid.values());
    }

    #[test]
    fn test_child_tiles_render_at_tile_size() {
        let renderer = TileRenderer::default();
        let config = RenderConfig::new(32, 64);

        for child in TileCoordinate::new(1, 0, 1).children() {
            let grid = renderer.render_grid(child, &config).unwrap();
            assert_eq!(grid.values().len(), 32 * 32);
        }
    }

    #[test]
    fn test_negative_indices_render() {
        let png = render_tile(1, -1, -1, &RenderConfig::new(16, 32)).unwrap();

        assert_eq!(decode(&png).dimensions(), (16, 16));
    }

    #[test]
    fn test_alternate_framing_changes_output() {
        let config = RenderConfig::new(32, 64);
        let shifted = TileRenderer::new(PlaneFraming::new(-1.0, -1.0, 2.0, 2.0).unwrap());

        let default_png = TileRenderer::default()
            .render_tile(TileCoordinate::new(0, 0, 0), &config)
            .unwrap();
        let shifted_png = shifted
            .render_tile(TileCoordinate::new(0, 0, 0), &config)
            .unwrap();

        assert_ne!(default_png, shifted_png);
        assert_eq!(shifted.framing().min_x(), -1.0);
    }

    #[test]
    fn test_invalid_dimensions_are_rejected_before_mapping() {
        let result = render_tile(2000, 0, 0, &RenderConfig::new(0, 256));

        assert!(matches!(
            result,
            Err(RenderTileError::InvalidDimensions(RenderConfigError::ZeroTileSize))
        ));
        assert!(matches!(
            render_tile(0, 0, 0, &RenderConfig::new(256, 0)),
            Err(RenderTileError::InvalidDimensions(
                RenderConfigError::ZeroMaxIterations
            ))
        ));
    }

    #[test]
    fn test_zoom_beyond_precision_is_numeric_overflow() {
        let result = render_tile(60, 0, 0, &RenderConfig::default());

        assert!(matches!(
            result,
            Err(RenderTileError::NumericOverflow {
                coordinate: TileCoordinate { z: 60, x: 0, y: 0 },
                source: PlaneRectError::InvalidSize { .. },
            })
        ));
    }

    #[test]
    fn test_exponent_overflow_is_numeric_overflow() {
        assert!(matches!(
            render_tile(2000, 0, 0, &RenderConfig::default()),
            Err(RenderTileError::NumericOverflow { .. })
        ));
        assert!(matches!(
            render_tile(-2000, 1, 1, &RenderConfig::default()),
            Err(RenderTileError::NumericOverflow { .. })
        ));
    }
}
