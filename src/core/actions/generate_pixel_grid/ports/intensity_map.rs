use std::error::Error;

/// Reduces one computed value to an 8-bit display intensity.
pub trait IntensityMap {
    type T;
    type Failure: Error;

    fn map(&self, value: Self::T) -> Result<u8, Self::Failure>;

    fn display_name(&self) -> &str;
}
