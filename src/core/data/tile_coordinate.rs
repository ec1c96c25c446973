use std::fmt;

/// Quadtree tile address in slippy-map order.
///
/// `z` is the zoom level and `x`/`y` index the `2^z × 2^z` grid at that
/// zoom, with `y` growing downwards. No range is enforced: negative indices
/// pan outside the canonical grid and a negative zoom covers more than the
/// base framing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    pub z: i32,
    pub x: i64,
    pub y: i64,
}

impl TileCoordinate {
    #[must_use]
    pub const fn new(z: i32, x: i64, y: i64) -> Self {
        Self { z, x, y }
    }

    /// The four tiles one zoom level deeper, in row-major order:
    /// top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn children(&self) -> [Self; 4] {
        let z = self.z + 1;
        let x = self.x * 2;
        let y = self.y * 2;

        [
            Self::new(z, x, y),
            Self::new(z, x + 1, y),
            Self::new(z, x, y + 1),
            Self::new(z, x + 1, y + 1),
        ]
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.z <= 0 {
            return None;
        }

        Some(Self::new(
            self.z - 1,
            self.x.div_euclid(2),
            self.y.div_euclid(2),
        ))
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
