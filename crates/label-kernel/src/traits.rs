use crate::types::*;

/// Core geometry kernel trait. Provides the shape construction and modification
/// operations a label base needs.
/// Implemented by TruckKernel (wraps real truck) and MockKernel (deterministic test double).
pub trait Kernel {
    /// Create a planar face bounded by a rounded rectangle centered on the plane origin.
    ///
    /// Fails with `InvalidProfile` when the profile cannot form a closed loop
    /// (non-positive sides, or a corner radius above half the smaller side).
    fn make_rounded_rect_face(
        &mut self,
        profile: &RoundedRectProfile,
        plane_origin: [f64; 3],
        plane_normal: [f64; 3],
        plane_x_axis: [f64; 3],
    ) -> Result<KernelId, KernelError>;

    /// Extrude a planar face along a direction vector by a signed distance.
    /// A negative distance sweeps against `direction`. The face is consumed.
    fn extrude_face(
        &mut self,
        face: KernelId,
        direction: [f64; 3],
        distance: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Fillet (round) the specified edges with the given radius.
    fn fillet_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<KernelSolidHandle, KernelError>;
}

/// Topology introspection trait. Provides read-only queries on kernel geometry.
pub trait KernelIntrospect {
    /// List all faces of a solid.
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// List all edges of a solid.
    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// List all vertices of a solid.
    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId>;

    /// Get the edges bounding a face.
    fn face_edges(&self, face: KernelId) -> Vec<KernelId>;

    /// Get the faces adjacent to an edge.
    fn edge_faces(&self, edge: KernelId) -> Vec<KernelId>;

    /// Compute the geometric signature of a single entity.
    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature;

    /// Compute signatures for all entities of a given kind in a solid.
    fn compute_all_signatures(
        &self,
        solid: &KernelSolidHandle,
        kind: TopoKind,
    ) -> Vec<(KernelId, TopoSignature)> {
        let ids = match kind {
            TopoKind::Face => self.list_faces(solid),
            TopoKind::Edge => self.list_edges(solid),
            TopoKind::Vertex => self.list_vertices(solid),
        };
        ids.into_iter()
            .map(|id| {
                let sig = self.compute_signature(id, kind);
                (id, sig)
            })
            .collect()
    }

    /// Axis-aligned bounds of a solid, or `None` if the handle is unknown.
    fn solid_bounds(&self, solid: &KernelSolidHandle) -> Option<BoundingBox>;
}
