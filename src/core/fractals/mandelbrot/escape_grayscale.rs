use crate::core::actions::generate_pixel_grid::ports::intensity_map::IntensityMap;
use thiserror::Error;

pub const IN_SET_INTENSITY: u8 = 0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum EscapeGrayscaleError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

/// Linear grayscale over escape counts.
///
/// Points that never escaped are black. An escape after `n` of `max` steps
/// maps to `ceil(255 * n / max)`, which is non-decreasing in `n` and never
/// black for `n >= 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeGrayscale {
    max_iterations: u32,
}

impl EscapeGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl IntensityMap for EscapeGrayscale {
    type T = u32;
    type Failure = EscapeGrayscaleError;

    fn map(&self, iterations: u32) -> Result<u8, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(EscapeGrayscaleError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(IN_SET_INTENSITY);
        }

        let max = u64::from(self.max_iterations);
        let scaled = (255 * u64::from(iterations)).div_ceil(max);

        // iterations < max keeps scaled within 0..=255
        Ok(scaled as u8)
    }

    fn display_name(&self) -> &str {
        "Escape grayscale"
    }
}
