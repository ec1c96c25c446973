pub mod complex;
pub mod pixel_grid;
pub mod pixel_rect;
pub mod plane_framing;
pub mod plane_rect;
pub mod point;
pub mod render_config;
pub mod tile_coordinate;
