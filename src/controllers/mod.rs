pub mod cli;
pub mod errors;
pub mod ports;
pub mod tile;
