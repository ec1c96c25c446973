use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel of `pixel_rect` on the calling thread, in row-major
/// order. Reference driver for the parallel one and the cheaper choice for
/// small tiles.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
