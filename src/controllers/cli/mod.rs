pub mod tile_cli;
