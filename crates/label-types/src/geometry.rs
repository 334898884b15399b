use serde::{Deserialize, Serialize};

/// A principal coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis into an `[x, y, z]` array.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit vector pointing along the positive axis.
    pub fn unit(self) -> [f64; 3] {
        let mut v = [0.0; 3];
        v[self.index()] = 1.0;
        v
    }

    /// Coordinate of `point` along this axis.
    pub fn component(self, point: [f64; 3]) -> f64 {
        point[self.index()]
    }
}

/// Planar width × height of a label base, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Footprint {
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }
}

/// Rectangle with rounded corners, centered on its plane origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRectProfile {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl RoundedRectProfile {
    pub fn new(width: f64, height: f64, corner_radius: f64) -> Self {
        Self {
            width,
            height,
            corner_radius,
        }
    }

    /// Check that the profile describes a closed, non-self-intersecting loop.
    ///
    /// The corner radius may be zero (sharp corners) but must not exceed half
    /// of the smaller side.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(format!("width must be positive, got {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(format!("height must be positive, got {}", self.height));
        }
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(format!(
                "corner radius must be non-negative, got {}",
                self.corner_radius
            ));
        }
        let limit = self.width.min(self.height) / 2.0;
        if self.corner_radius > limit {
            return Err(format!(
                "corner radius {} exceeds half the smaller side ({})",
                self.corner_radius, limit
            ));
        }
        Ok(())
    }

    /// Whether the corners are rounded at all.
    pub fn has_arcs(&self) -> bool {
        self.corner_radius > 0.0
    }

    /// Enclosed area: full rectangle minus the four corner squares plus one circle.
    pub fn area(&self) -> f64 {
        let r = self.corner_radius;
        self.width * self.height - (4.0 - std::f64::consts::PI) * r * r
    }

    /// Perimeter of the loop.
    pub fn perimeter(&self) -> f64 {
        let r = self.corner_radius;
        2.0 * (self.width - 2.0 * r) + 2.0 * (self.height - 2.0 * r) + 2.0 * std::f64::consts::PI * r
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox {
            min: first,
            max: first,
        };
        for p in iter {
            for i in 0..3 {
                bbox.min[i] = bbox.min[i].min(p[i]);
                bbox.max[i] = bbox.max[i].max(p[i]);
            }
        }
        Some(bbox)
    }

    /// Length of the box along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max[axis.index()] - self.min[axis.index()]
    }
}
