mod controllers;
mod core;
mod logging;
mod presenters;

pub use controllers::cli::tile_cli::{
    CliTileController, MAX_PYRAMID_ZOOM, pyramid_tile_count, tile_path,
};
pub use controllers::errors::{GeneratePyramidError, RenderTileError};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::tile::{TileRenderer, render_tile};
pub use crate::core::actions::encode_png::encode_png::PNG_CONTENT_TYPE;
pub use crate::core::data::pixel_grid::PixelGrid;
pub use crate::core::data::plane_framing::{
    DEFAULT_BASE_RANGE_X, DEFAULT_BASE_RANGE_Y, DEFAULT_MIN_X, DEFAULT_MIN_Y, PlaneFraming,
    PlaneFramingError,
};
pub use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
pub use crate::core::data::render_config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TILE_SIZE, MAX_TILE_SIZE, RenderConfig, RenderConfigError,
};
pub use crate::core::data::tile_coordinate::TileCoordinate;
pub use logging::init_logging;
pub use presenters::file::png::{PngFilePresenter, clean_output_dir};
