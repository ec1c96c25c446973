pub mod intensity_map;
