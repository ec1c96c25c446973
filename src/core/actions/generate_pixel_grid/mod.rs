pub mod generate_pixel_grid;
pub mod ports;
