pub mod algorithm;
pub mod errors;
pub mod escape_grayscale;
