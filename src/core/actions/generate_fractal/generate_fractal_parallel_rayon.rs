use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work: each row is computed into its own vector and
/// the rows are concatenated in order, so the output is row-major and
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal)
/// regardless of how rayon schedules the rows.
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> =
        (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
            .into_par_iter()
            .map(|y| {
                let mut row = Vec::with_capacity(row_width);

                for x in x_start..=x_end {
                    row.push(algorithm.compute(Point { x, y })?);
                }

                Ok(row)
            })
            .collect();

    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for row in rows? {
        results.extend(row);
    }

    Ok(results)
}
