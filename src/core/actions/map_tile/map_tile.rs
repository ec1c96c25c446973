use crate::core::data::plane_framing::PlaneFraming;
use crate::core::data::plane_rect::{PlaneRect, PlaneRectError};
use crate::core::data::tile_coordinate::TileCoordinate;

/// Maps quadtree tile addresses onto the complex plane.
///
/// Each zoom level halves the extent of the framing on both axes, and tile
/// indices step by one extent from the framing's origin. Powers of two are
/// exact in binary floating point, so sibling tiles share edges bit for bit
/// until the extent drops below the precision of the origin.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PlaneMapper {
    framing: PlaneFraming,
}

impl PlaneMapper {
    #[must_use]
    pub fn new(framing: PlaneFraming) -> Self {
        Self { framing }
    }

    #[must_use]
    pub fn framing(&self) -> PlaneFraming {
        self.framing
    }

    /// Fails only when floating point can no longer describe the tile: the
    /// zoom overflows `2^z`, or the extent is lost against the origin.
    pub fn map_tile(&self, tile: TileCoordinate) -> Result<PlaneRect, PlaneRectError> {
        let scale = 2f64.powi(tile.z);
        let range_x = self.framing.base_range_x() / scale;
        let range_y = self.framing.base_range_y() / scale;

        let min_x = self.framing.min_x() + range_x * tile.x as f64;
        let min_y = self.framing.min_y() + range_y * tile.y as f64;

        PlaneRect::from_bounds(min_x, min_y, min_x + range_x, min_y + range_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_root_tile_frames_classic_view() {
        let rect = PlaneMapper::default()
            .map_tile(TileCoordinate::new(0, 0, 0))
            .unwrap();

        assert_eq!(rect.min_x(), -2.0);
        assert_eq!(rect.min_y(), -1.25);
        assert_eq!(rect.max_x(), 0.5);
        assert_eq!(rect.max_y(), 1.25);
    }

    #[test]
    fn test_zoom_one_quadrants() {
        let mapper = PlaneMapper::default();

        let top_left = mapper.map_tile(TileCoordinate::new(1, 0, 0)).unwrap();
        let bottom_right = mapper.map_tile(TileCoordinate::new(1, 1, 1)).unwrap();

        assert_eq!(top_left, PlaneRect::from_bounds(-2.0, -1.25, -0.75, 0.0).unwrap());
        assert_eq!(bottom_right, PlaneRect::from_bounds(-0.75, 0.0, 0.5, 1.25).unwrap());
    }

    #[test]
    fn test_children_cover_parent_exactly() {
        let mapper = PlaneMapper::default();

        for tile in [
            TileCoordinate::new(0, 0, 0),
            TileCoordinate::new(3, 5, 2),
            TileCoordinate::new(7, 100, 63),
            TileCoordinate::new(12, -40, 17),
            TileCoordinate::new(20, 524_287, 1),
        ] {
            let parent = mapper.map_tile(tile).unwrap();
            let [tl, tr, bl, br] = tile.children().map(|c| mapper.map_tile(c).unwrap());

            // Outer edges match the parent.
            assert_close(tl.min_x(), parent.min_x());
            assert_close(tl.min_y(), parent.min_y());
            assert_close(br.max_x(), parent.max_x());
            assert_close(br.max_y(), parent.max_y());
            assert_close(tr.max_x(), parent.max_x());
            assert_close(bl.max_y(), parent.max_y());

            // Inner edges meet with no gap or overlap.
            assert_close(tl.max_x(), tr.min_x());
            assert_close(bl.max_x(), br.min_x());
            assert_close(tl.max_y(), bl.min_y());
            assert_close(tr.max_y(), br.min_y());

            let child_area: f64 = [tl, tr, bl, br].iter().map(|r| r.width() * r.height()).sum();
            assert_close(child_area, parent.width() * parent.height());
        }
    }

    #[test]
    fn test_negative_indices_pan_outside_base_frame() {
        let rect = PlaneMapper::default()
            .map_tile(TileCoordinate::new(0, -1, -1))
            .unwrap();

        assert_eq!(rect, PlaneRect::from_bounds(-4.5, -3.75, -2.0, -1.25).unwrap());
    }

    #[test]
    fn test_negative_zoom_covers_more_than_base_frame() {
        let rect = PlaneMapper::default()
            .map_tile(TileCoordinate::new(-1, 0, 0))
            .unwrap();

        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 5.0);
        assert_eq!(rect.min_x(), -2.0);
        assert_eq!(rect.min_y(), -1.25);
    }

    #[test]
    fn test_alternate_framing() {
        let framing = PlaneFraming::new(-1.0, -1.0, 2.0, 1.0).unwrap();
        let rect = PlaneMapper::new(framing)
            .map_tile(TileCoordinate::new(1, 1, 0))
            .unwrap();

        assert_eq!(rect, PlaneRect::from_bounds(0.0, -1.0, 1.0, -0.5).unwrap());
        assert_eq!(PlaneMapper::new(framing).framing(), framing);
    }

    #[test]
    fn test_zoom_beyond_precision_is_degenerate() {
        let result = PlaneMapper::default().map_tile(TileCoordinate::new(60, 0, 0));

        assert!(matches!(result, Err(PlaneRectError::InvalidSize { .. })));
    }

    #[test]
    fn test_exponent_overflow_is_degenerate() {
        let mapper = PlaneMapper::default();

        assert!(mapper.map_tile(TileCoordinate::new(2000, 0, 0)).is_err());
        assert!(matches!(
            mapper.map_tile(TileCoordinate::new(-2000, 0, 0)),
            Err(PlaneRectError::NonFinite { .. })
        ));
        assert!(matches!(
            mapper.map_tile(TileCoordinate::new(-2000, 1, 1)),
            Err(PlaneRectError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let mapper = PlaneMapper::default();
        let tile = TileCoordinate::new(9, 300, 211);

        assert_eq!(mapper.map_tile(tile), mapper.map_tile(tile));
    }
}
