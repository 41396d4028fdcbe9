//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl BoundingBox {
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        debug_assert!(xmin <= xmax, "xmin {xmin} > xmax {xmax}");
        debug_assert!(ymin <= ymax, "ymin {ymin} > ymax {ymax}");
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    #[inline]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        intersect(self, other)
    }
}

/// True if the closed regions of `a` and `b` overlap on both axes.
/// Touching edges count as an intersection.
#[inline]
pub fn intersect(a: &BoundingBox, b: &BoundingBox) -> bool {
    debug_assert!(a.xmin <= a.xmax && a.ymin <= a.ymax);
    debug_assert!(b.xmin <= b.xmax && b.ymin <= b.ymax);

    (a.xmin <= b.xmax && a.xmax >= b.xmin) && (a.ymin <= b.ymax && a.ymax >= b.ymin)
}
