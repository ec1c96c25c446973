pub mod map_tile;
