use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_rect::PlaneRect;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelToComplexCoordsError {
    #[error(
        "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
        .point.x,
        .point.y,
        .pixel_rect.top_left().x,
        .pixel_rect.top_left().y,
        .pixel_rect.bottom_right().x,
        .pixel_rect.bottom_right().y
    )]
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

/// Sample point for a pixel, taken at the pixel's centre.
///
/// A `w`-pixel row covers `[min_x, max_x)` in `w` equal cells, so the cells
/// of a tile's four children interleave exactly with the parent's cells.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    plane_rect: PlaneRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let top_left = pixel_rect.top_left();
    let relative_pixel_x = (i64::from(pixel_position.x) - i64::from(top_left.x)) as f64;
    let relative_pixel_y = (i64::from(pixel_position.y) - i64::from(top_left.y)) as f64;

    let real = plane_rect.min_x()
        + plane_rect.width() * (relative_pixel_x + 0.5) / f64::from(pixel_rect.width());
    let imag = plane_rect.min_y()
        + plane_rect.height() * (relative_pixel_y + 0.5) / f64::from(pixel_rect.height());

    Ok(Complex { real, imag })
}
