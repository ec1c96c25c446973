use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven by the `generate_fractal` drivers.
///
/// `compute` must depend only on `pixel` and the algorithm's own immutable
/// state so that drivers are free to evaluate pixels in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
