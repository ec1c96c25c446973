use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z ← z² + c` steps from `z = 0` before `|z| > 2`, or
/// `max_iterations` if the orbit stays bounded that long.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
        z = z.square_add(c);
    }

    max_iterations
}

#[derive(Debug, PartialEq)]
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    plane_rect: PlaneRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.plane_rect)?;

        Ok(escape_count(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        plane_rect: PlaneRect,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            pixel_rect,
            plane_rect,
            max_iterations,
        })
    }
}
