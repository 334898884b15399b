// Re-export shared types from label-types
pub use label_types::{Axis, BoundingBox, RoundedRectProfile, TopoKind, TopoSignature};

/// Opaque handle to a solid in the geometry kernel.
/// Valid only for the kernel session that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Transient kernel-internal entity identifier.
/// Stable within a single kernel session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KernelId(pub u64);

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: String },

    #[error("extrusion failed: {reason}")]
    ExtrudeFailed { reason: String },

    #[error("fillet failed: {reason}")]
    FilletFailed { reason: String },

    #[error("entity not found: {id:?}")]
    EntityNotFound { id: KernelId },

    #[error("operation not supported: {operation}")]
    NotSupported { operation: String },

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// A planar frame: origin plus orthonormal in-plane axes and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    pub origin: [f64; 3],
    pub x_axis: [f64; 3],
    pub y_axis: [f64; 3],
    pub normal: [f64; 3],
}

impl PlaneFrame {
    /// Build a frame from an origin, a normal and an in-plane x direction.
    /// The y axis is `normal × x_axis`, so loops that wind counter-clockwise in
    /// (x, y) wind counter-clockwise about the normal.
    pub fn new(
        origin: [f64; 3],
        normal: [f64; 3],
        x_axis: [f64; 3],
    ) -> Result<Self, KernelError> {
        let normal = normalize(normal).ok_or_else(|| KernelError::Other {
            message: "plane normal has zero length".to_string(),
        })?;
        // Remove any component of x along the normal before normalizing.
        let d = dot(x_axis, normal);
        let x_axis = normalize(sub(x_axis, scale(normal, d))).ok_or_else(|| KernelError::Other {
            message: "plane x axis is parallel to the normal".to_string(),
        })?;
        let y_axis = cross(normal, x_axis);
        Ok(Self {
            origin,
            x_axis,
            y_axis,
            normal,
        })
    }

    /// The XY plane through the world origin.
    pub fn xy() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            x_axis: [1.0, 0.0, 0.0],
            y_axis: [0.0, 1.0, 0.0],
            normal: [0.0, 0.0, 1.0],
        }
    }

    /// Map plane coordinates (u, v) to a world point.
    pub fn point(&self, u: f64, v: f64) -> [f64; 3] {
        add(self.origin, add(scale(self.x_axis, u), scale(self.y_axis, v)))
    }

    /// Map an in-plane direction (du, dv) to a world vector.
    pub fn vector(&self, du: f64, dv: f64) -> [f64; 3] {
        add(scale(self.x_axis, du), scale(self.y_axis, dv))
    }
}

pub(crate) fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub(crate) fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn normalize(a: [f64; 3]) -> Option<[f64; 3]> {
    let len = dot(a, a).sqrt();
    if len < 1e-12 || !len.is_finite() {
        None
    } else {
        Some(scale(a, 1.0 / len))
    }
}
