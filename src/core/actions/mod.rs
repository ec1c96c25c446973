pub mod encode_png;
pub mod generate_fractal;
pub mod generate_pixel_grid;
pub mod map_tile;
pub mod render_fractal;
