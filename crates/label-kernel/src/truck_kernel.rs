//! TruckKernel: real geometry kernel wrapping truck's API.

use crate::primitives;
use crate::traits::Kernel;
use crate::types::*;
use std::collections::HashMap;

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::geometry::Surface;
use truck_modeling::topology::{Face, Solid};
use truck_modeling::{InnerSpace, Vector3};

use tracing::{debug, instrument};

/// Real geometry kernel backed by the truck BREP library.
pub struct TruckKernel {
    next_handle: u64,
    next_id: u64,
    solids: HashMap<u64, Solid>,
    /// Standalone faces created by make_rounded_rect_face, awaiting extrude.
    standalone_faces: HashMap<u64, Face>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_id: 1,
            solids: HashMap::new(),
            standalone_faces: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn store_solid(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    /// Borrow the truck solid behind a handle.
    pub fn get_solid(&self, handle: &KernelSolidHandle) -> Option<&Solid> {
        self.solids.get(&handle.id())
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Normal of a planar face as oriented in its shell.
fn face_normal(face: &Face) -> Option<Vector3> {
    match face.oriented_surface() {
        Surface::Plane(plane) => Some(plane.normal()),
        _ => None,
    }
}

impl Kernel for TruckKernel {
    #[instrument(skip(self), level = "debug")]
    fn make_rounded_rect_face(
        &mut self,
        profile: &RoundedRectProfile,
        plane_origin: [f64; 3],
        plane_normal: [f64; 3],
        plane_x_axis: [f64; 3],
    ) -> Result<KernelId, KernelError> {
        let frame = PlaneFrame::new(plane_origin, plane_normal, plane_x_axis)?;
        let face = primitives::rounded_rect_face(profile, &frame)?;

        let face_id = self.alloc_id();
        self.standalone_faces.insert(face_id.0, face);
        Ok(face_id)
    }

    #[instrument(skip(self), level = "debug")]
    fn extrude_face(
        &mut self,
        face: KernelId,
        direction: [f64; 3],
        distance: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        if !distance.is_finite() || distance.abs() < 1e-12 {
            return Err(KernelError::ExtrudeFailed {
                reason: format!("extrusion distance must be non-zero, got {}", distance),
            });
        }
        let dir = Vector3::new(direction[0], direction[1], direction[2]);
        if dir.magnitude() < 1e-12 {
            return Err(KernelError::ExtrudeFailed {
                reason: "extrude direction has zero length".to_string(),
            });
        }

        let mut truck_face = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;

        let sweep_vec = dir.normalize() * distance;

        // tsweep keeps the input face as the start cap with its orientation
        // reversed, so the face must point along the sweep for an outward shell.
        let normal = face_normal(&truck_face).ok_or_else(|| KernelError::ExtrudeFailed {
            reason: "only planar faces can be extruded".to_string(),
        })?;
        if normal.dot(sweep_vec) < 0.0 {
            debug!("flipping profile face to match sweep direction");
            truck_face = truck_face.inverse();
        }

        let solid = builder::tsweep(&truck_face, sweep_vec);
        Ok(self.store_solid(solid))
    }

    fn fillet_edges(
        &mut self,
        _solid: &KernelSolidHandle,
        _edges: &[KernelId],
        _radius: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "fillet_edges".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::KernelIntrospect;
    use approx::assert_relative_eq;

    fn make_plate(kernel: &mut TruckKernel, depth: f64) -> KernelSolidHandle {
        let profile = RoundedRectProfile::new(23.0, 13.0, 1.0);
        let face = kernel
            .make_rounded_rect_face(&profile, [0.0; 3], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0])
            .unwrap();
        kernel.extrude_face(face, [0.0, 0.0, 1.0], -depth).unwrap()
    }

    #[test]
    fn test_truck_kernel_extrude_rounded_rect() {
        let mut kernel = TruckKernel::new();
        let handle = make_plate(&mut kernel, 0.3);

        let solid = kernel.get_solid(&handle).unwrap();
        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1);

        let faces: Vec<_> = boundaries[0].face_iter().collect();
        assert_eq!(faces.len(), 10, "Two caps plus eight sides");
    }

    #[test]
    fn test_truck_kernel_negative_extrusion_bounds() {
        let mut kernel = TruckKernel::new();
        let handle = make_plate(&mut kernel, 2.0);

        let bounds = kernel.solid_bounds(&handle).unwrap();
        assert_relative_eq!(bounds.max[2], 0.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.min[2], -2.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.extent(Axis::X), 23.0, epsilon = 1e-9);
        assert_relative_eq!(bounds.extent(Axis::Y), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn test_truck_kernel_zero_distance_fails() {
        let mut kernel = TruckKernel::new();
        let profile = RoundedRectProfile::new(23.0, 13.0, 1.0);
        let face = kernel
            .make_rounded_rect_face(&profile, [0.0; 3], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0])
            .unwrap();
        let err = kernel.extrude_face(face, [0.0, 0.0, 1.0], 0.0).unwrap_err();
        assert!(matches!(err, KernelError::ExtrudeFailed { .. }));
    }

    #[test]
    fn test_truck_kernel_fillet_not_supported() {
        let mut kernel = TruckKernel::new();
        let handle = make_plate(&mut kernel, 0.3);
        let edges = kernel.list_edges(&handle);
        let err = kernel.fillet_edges(&handle, &edges, 0.1).unwrap_err();
        assert!(matches!(err, KernelError::NotSupported { .. }));
    }
}
