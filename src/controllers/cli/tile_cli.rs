use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use crate::controllers::errors::{GeneratePyramidError, RenderTileError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::tile::TileRenderer;
use crate::core::data::plane_framing::PlaneFraming;
use crate::core::data::render_config::RenderConfig;
use crate::core::data::tile_coordinate::TileCoordinate;

/// Deepest pyramid zoom: tile indices up to `2^53 - 1` still convert to
/// `f64` exactly, so every tile at this zoom maps to its own rectangle.
pub const MAX_PYRAMID_ZOOM: u32 = f64::MANTISSA_DIGITS;

/// Number of tiles in a pyramid from zoom 0 through `max_zoom`.
#[must_use]
pub fn pyramid_tile_count(max_zoom: u32) -> u128 {
    (0..=max_zoom).map(|z| 1u128 << (2 * z)).sum()
}

/// `{root}/{z}/{x}/{y}.png`, the layout slippy-map clients request.
#[must_use]
pub fn tile_path(root: &Path, coordinate: TileCoordinate) -> PathBuf {
    root.join(coordinate.z.to_string())
        .join(coordinate.x.to_string())
        .join(format!("{}.png", coordinate.y))
}

/// Renders tiles for the command line and hands the PNGs to a presenter.
///
/// `generate` and `write` handle a single tile; `generate_pyramid` renders
/// and writes every tile from zoom 0 down to a given zoom.
pub struct CliTileController<P: FilePresenterPort> {
    presenter: P,
    png: Option<Vec<u8>>,
}

impl<P: FilePresenterPort> CliTileController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            png: None,
        }
    }

    pub fn generate(
        &mut self,
        coordinate: TileCoordinate,
        config: &RenderConfig,
        framing: PlaneFraming,
    ) -> Result<(), RenderTileError> {
        info!(
            tile = %coordinate,
            tile_size = config.tile_size,
            max_iterations = config.max_iterations,
            "rendering tile"
        );

        self.png = Some(TileRenderer::new(framing).render_tile(coordinate, config)?);

        Ok(())
    }

    #[must_use]
    pub fn png(&self) -> Option<&[u8]> {
        self.png.as_deref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(png) = &self.png {
            self.presenter.present(png, filepath)?
        }

        Ok(())
    }

    /// Renders every tile of zooms `0..=max_zoom` under `output_dir`.
    ///
    /// Columns of a zoom level are spread over the current rayon pool; each
    /// worker renders its column top to bottom. Levels run in order.
    pub fn generate_pyramid(
        &self,
        max_zoom: u32,
        config: &RenderConfig,
        framing: PlaneFraming,
        output_dir: impl AsRef<Path>,
    ) -> Result<(), GeneratePyramidError>
    where
        P: Sync,
    {
        if max_zoom > MAX_PYRAMID_ZOOM {
            return Err(GeneratePyramidError::ZoomBeyondPrecision {
                max_zoom,
                limit: MAX_PYRAMID_ZOOM,
            });
        }

        config.validate().map_err(RenderTileError::from)?;

        let renderer = TileRenderer::new(framing);
        let presenter = &self.presenter;
        let output_dir = output_dir.as_ref();

        info!(
            max_zoom,
            tiles = pyramid_tile_count(max_zoom),
            output = %output_dir.display(),
            threads = rayon::current_num_threads(),
            "generating tile pyramid"
        );

        for zoom in 0..=max_zoom {
            let z = zoom as i32;
            let side = 1i64 << zoom;

            info!(zoom, "generating level");

            (0..side)
                .into_par_iter()
                .try_for_each(|x| -> Result<(), GeneratePyramidError> {
                    for y in 0..side {
                        let coordinate = TileCoordinate::new(z, x, y);
                        let png = renderer.render_tile(coordinate, config)?;

                        presenter
                            .present(&png, tile_path(output_dir, coordinate))
                            .map_err(|source| GeneratePyramidError::Write {
                                coordinate,
                                source,
                            })?;
                    }

                    Ok(())
                })?;
        }

        Ok(())
    }
}
