use crate::core::actions::generate_pixel_grid::ports::intensity_map::IntensityMap;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridData, PixelGridError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelGridError {
    #[error("intensity map error: {0}")]
    IntensityMap(#[source] Box<dyn Error + Send + Sync>),
    #[error("pixel grid error: {0}")]
    PixelGrid(#[from] PixelGridError),
}

/// Reduces per-pixel values to intensities, keeping their row-major order.
pub fn generate_pixel_grid<IMap>(
    input: Vec<IMap::T>,
    mapper: &IMap,
    pixel_rect: PixelRect,
) -> Result<PixelGrid, GeneratePixelGridError>
where
    IMap: IntensityMap,
    IMap::Failure: Send + Sync + 'static,
{
    let mut values: PixelGridData = Vec::with_capacity(input.len());

    for value in input {
        let intensity = mapper
            .map(value)
            .map_err(|err| GeneratePixelGridError::IntensityMap(Box::new(err)))?;

        values.push(intensity);
    }

    Ok(PixelGrid::from_data(pixel_rect, values)?)
}
