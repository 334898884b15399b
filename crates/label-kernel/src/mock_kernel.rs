//! MockKernel: deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Produces synthetic prism topology with exact vertex positions and
//! predictable entity counts. Fillet failures can be injected.

use std::collections::{HashMap, HashSet};

use crate::primitives::{rounded_rect_outline, OutlineSegment};
use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;

/// A mock vertex with known position.
#[derive(Debug, Clone)]
struct MockVertex {
    id: KernelId,
    position: [f64; 3],
}

/// A mock edge with known endpoints.
#[derive(Debug, Clone)]
struct MockEdge {
    id: KernelId,
    start: KernelId,
    end: KernelId,
    /// Point halfway along the edge (on the arc for curved edges).
    midpoint: [f64; 3],
    length: f64,
    curve_type: &'static str,
}

/// A mock face with known properties.
#[derive(Debug, Clone)]
struct MockFace {
    id: KernelId,
    edges: Vec<KernelId>,
    normal: [f64; 3],
    centroid: [f64; 3],
    area: f64,
    surface_type: &'static str,
}

/// A synthetic solid with deterministic topology.
#[derive(Debug, Clone)]
struct MockSolid {
    vertices: Vec<MockVertex>,
    edges: Vec<MockEdge>,
    faces: Vec<MockFace>,
}

impl MockSolid {
    fn vertex(&self, id: KernelId) -> Option<&MockVertex> {
        self.vertices.iter().find(|v| v.id == id)
    }
}

/// A planar face awaiting extrusion.
#[derive(Debug, Clone)]
struct StandaloneFace {
    frame: PlaneFrame,
    outline: Vec<OutlineSegment>,
    area: f64,
}

/// Deterministic test double for the geometry kernel.
/// Implements both Kernel and KernelIntrospect.
pub struct MockKernel {
    next_id: u64,
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    /// Tracks faces created by make_rounded_rect_face for subsequent extrude.
    standalone_faces: HashMap<u64, StandaloneFace>,
    fail_fillet: bool,
    fillet_calls: usize,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            next_handle: 1,
            solids: HashMap::new(),
            standalone_faces: HashMap::new(),
            fail_fillet: false,
            fillet_calls: 0,
        }
    }

    /// A kernel whose every fillet call fails, as an unsupported edge
    /// configuration would in a real kernel.
    pub fn with_failing_fillet() -> Self {
        Self {
            fail_fillet: true,
            ..Self::new()
        }
    }

    /// Number of times `fillet_edges` has been called, successful or not.
    pub fn fillet_calls(&self) -> usize {
        self.fillet_calls
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn get(&self, solid: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&solid.id())
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(solid.id()),
            })
    }

    /// Sweep an outline into a prism: one ring of vertices per cap, one side
    /// face per outline segment.
    fn make_prism(&mut self, face: &StandaloneFace, sweep: [f64; 3]) -> MockSolid {
        let frame = &face.frame;
        let n = face.outline.len();
        let height = dot(sweep, sweep).sqrt();
        let sweep_dir = scale(sweep, 1.0 / height);

        let mut vertices = Vec::with_capacity(2 * n);
        for level in [0.0, 1.0] {
            for segment in &face.outline {
                let s = segment.start();
                vertices.push(MockVertex {
                    id: self.alloc_id(),
                    position: add(frame.point(s[0], s[1]), scale(sweep, level)),
                });
            }
        }

        // Edge layout: [0, n) start ring, [n, 2n) end ring, [2n, 3n) laterals.
        let mut edges = Vec::with_capacity(3 * n);
        for level in 0..2 {
            for (i, segment) in face.outline.iter().enumerate() {
                let m = segment.midpoint();
                edges.push(MockEdge {
                    id: self.alloc_id(),
                    start: vertices[level * n + i].id,
                    end: vertices[level * n + (i + 1) % n].id,
                    midpoint: add(frame.point(m[0], m[1]), scale(sweep, level as f64)),
                    length: segment.length(),
                    curve_type: if segment.is_arc() { "arc" } else { "line" },
                });
            }
        }
        for i in 0..n {
            let p = vertices[i].position;
            edges.push(MockEdge {
                id: self.alloc_id(),
                start: vertices[i].id,
                end: vertices[n + i].id,
                midpoint: add(p, scale(sweep, 0.5)),
                length: height,
                curve_type: "line",
            });
        }

        let c = frame.origin;
        let mut faces = Vec::with_capacity(n + 2);
        faces.push(MockFace {
            id: self.alloc_id(),
            edges: edges[..n].iter().map(|e| e.id).collect(),
            normal: scale(sweep_dir, -1.0),
            centroid: c,
            area: face.area,
            surface_type: "planar",
        });
        faces.push(MockFace {
            id: self.alloc_id(),
            edges: edges[n..2 * n].iter().map(|e| e.id).collect(),
            normal: sweep_dir,
            centroid: add(c, sweep),
            area: face.area,
            surface_type: "planar",
        });
        for (i, segment) in face.outline.iter().enumerate() {
            let m = segment.midpoint();
            let out = segment.outward_normal();
            faces.push(MockFace {
                id: self.alloc_id(),
                edges: vec![
                    edges[i].id,
                    edges[2 * n + (i + 1) % n].id,
                    edges[n + i].id,
                    edges[2 * n + i].id,
                ],
                normal: frame.vector(out[0], out[1]),
                centroid: add(frame.point(m[0], m[1]), scale(sweep, 0.5)),
                area: segment.length() * height,
                surface_type: if segment.is_arc() {
                    "cylindrical"
                } else {
                    "planar"
                },
            });
        }

        MockSolid {
            vertices,
            edges,
            faces,
        }
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_rounded_rect_face(
        &mut self,
        profile: &RoundedRectProfile,
        plane_origin: [f64; 3],
        plane_normal: [f64; 3],
        plane_x_axis: [f64; 3],
    ) -> Result<KernelId, KernelError> {
        let outline = rounded_rect_outline(profile)?;
        let frame = PlaneFrame::new(plane_origin, plane_normal, plane_x_axis)?;

        let face_id = self.alloc_id();
        self.standalone_faces.insert(
            face_id.0,
            StandaloneFace {
                frame,
                outline,
                area: profile.area(),
            },
        );
        Ok(face_id)
    }

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
        let dir = normalize(direction).ok_or_else(|| KernelError::ExtrudeFailed {
            reason: "extrude direction has zero length".to_string(),
        })?;

        let mock_face = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;

        let solid = self.make_prism(&mock_face, scale(dir, distance));
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        Ok(handle)
    }

    fn fillet_edges(
        &mut self,
        solid: &KernelSolidHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.fillet_calls += 1;
        if self.fail_fillet {
            return Err(KernelError::FilletFailed {
                reason: "injected fillet failure".to_string(),
            });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(KernelError::FilletFailed {
                reason: "radius must be positive".to_string(),
            });
        }
        if edges.is_empty() {
            return Err(KernelError::FilletFailed {
                reason: "no edges to fillet".to_string(),
            });
        }
        let source = self.get(solid)?.clone();

        // The blend must fit inside the body in every direction.
        let bounds = solid_bounds_of(&source).ok_or_else(|| KernelError::FilletFailed {
            reason: "solid has no vertices".to_string(),
        })?;
        let thinnest = [Axis::X, Axis::Y, Axis::Z]
            .iter()
            .map(|&axis| bounds.extent(axis))
            .fold(f64::INFINITY, f64::min);
        if 2.0 * radius >= thinnest {
            return Err(KernelError::FilletFailed {
                reason: format!(
                    "radius {} too large for a body {} thick",
                    radius, thinnest
                ),
            });
        }

        let filleted: HashSet<KernelId> = edges.iter().copied().collect();
        for eid in &filleted {
            if !source.edges.iter().any(|e| e.id == *eid) {
                return Err(KernelError::FilletFailed {
                    reason: format!("edge {:?} not found in solid", eid),
                });
            }
        }

        // Each filleted edge is replaced by a cylindrical face bounded by two
        // copies of the edge, one set back into each adjacent face.
        // Topology: V+4n, E+n, F+n where n = edges.len(). Corner blends
        // between neighbouring fillets are not modelled.
        let mut id_map: HashMap<KernelId, KernelId> = HashMap::new();

        let mut new_vertices = Vec::new();
        for v in &source.vertices {
            let new_id = self.alloc_id();
            id_map.insert(v.id, new_id);
            new_vertices.push(MockVertex {
                id: new_id,
                position: v.position,
            });
        }

        let mut new_edges = Vec::new();
        for e in &source.edges {
            let new_id = self.alloc_id();
            id_map.insert(e.id, new_id);
            if !filleted.contains(&e.id) {
                new_edges.push(MockEdge {
                    id: new_id,
                    start: id_map[&e.start],
                    end: id_map[&e.end],
                    ..e.clone()
                });
            }
        }

        let mut new_faces = Vec::new();
        for f in &source.faces {
            let new_id = self.alloc_id();
            id_map.insert(f.id, new_id);
            new_faces.push(MockFace {
                id: new_id,
                edges: f
                    .edges
                    .iter()
                    .filter(|eid| !filleted.contains(eid))
                    .map(|eid| id_map[eid])
                    .collect(),
                ..f.clone()
            });
        }

        for orig in source.edges.iter().filter(|e| filleted.contains(&e.id)) {
            let adjacent: Vec<&MockFace> = source
                .faces
                .iter()
                .filter(|f| f.edges.contains(&orig.id))
                .collect();
            if adjacent.len() != 2 {
                return Err(KernelError::FilletFailed {
                    reason: format!(
                        "edge {:?} borders {} faces, expected 2",
                        orig.id,
                        adjacent.len()
                    ),
                });
            }
            let (n1, n2) = (adjacent[0].normal, adjacent[1].normal);
            let (start, end) = match (source.vertex(orig.start), source.vertex(orig.end)) {
                (Some(s), Some(e)) => (s.position, e.position),
                _ => {
                    return Err(KernelError::FilletFailed {
                        reason: format!("edge {:?} has dangling vertices", orig.id),
                    })
                }
            };

            let mut boundary = Vec::with_capacity(2);
            // The set-back on one face is measured along the other face's normal.
            for offset in [scale(n2, -radius), scale(n1, -radius)] {
                let v1 = MockVertex {
                    id: self.alloc_id(),
                    position: add(start, offset),
                };
                let v2 = MockVertex {
                    id: self.alloc_id(),
                    position: add(end, offset),
                };
                let edge = MockEdge {
                    id: self.alloc_id(),
                    start: v1.id,
                    end: v2.id,
                    midpoint: add(orig.midpoint, offset),
                    length: orig.length,
                    curve_type: orig.curve_type,
                };
                boundary.push(edge.id);
                new_vertices.push(v1);
                new_vertices.push(v2);
                new_edges.push(edge);
            }

            let blend_normal = normalize(add(n1, n2)).unwrap_or(n1);
            new_faces.push(MockFace {
                id: self.alloc_id(),
                edges: boundary,
                normal: blend_normal,
                centroid: add(orig.midpoint, scale(add(n1, n2), -radius / 2.0)),
                area: orig.length * radius * std::f64::consts::FRAC_PI_2,
                surface_type: if orig.curve_type == "arc" {
                    "toroidal"
                } else {
                    "cylindrical"
                },
            });
        }

        let handle = self.alloc_handle();
        self.solids.insert(
            handle.id(),
            MockSolid {
                vertices: new_vertices,
                edges: new_edges,
                faces: new_faces,
            },
        );
        Ok(handle)
    }
}

fn solid_bounds_of(solid: &MockSolid) -> Option<BoundingBox> {
    BoundingBox::from_points(solid.vertices.iter().map(|v| v.position))
}

impl KernelIntrospect for MockKernel {
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.faces.iter().map(|f| f.id).collect())
            .unwrap_or_default()
    }

    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.edges.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        self.solids
            .get(&solid.id())
            .map(|s| s.vertices.iter().map(|v| v.id).collect())
            .unwrap_or_default()
    }

    fn face_edges(&self, face: KernelId) -> Vec<KernelId> {
        self.solids
            .values()
            .flat_map(|s| s.faces.iter())
            .find(|f| f.id == face)
            .map(|f| f.edges.clone())
            .unwrap_or_default()
    }

    fn edge_faces(&self, edge: KernelId) -> Vec<KernelId> {
        self.solids
            .values()
            .flat_map(|s| s.faces.iter())
            .filter(|f| f.edges.contains(&edge))
            .map(|f| f.id)
            .collect()
    }

    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature {
        for solid in self.solids.values() {
            match kind {
                TopoKind::Face => {
                    if let Some(f) = solid.faces.iter().find(|f| f.id == entity) {
                        return TopoSignature {
                            surface_type: Some(f.surface_type.to_string()),
                            area: Some(f.area),
                            centroid: Some(f.centroid),
                            normal: Some(f.normal),
                            length: None,
                        };
                    }
                }
                TopoKind::Edge => {
                    if let Some(e) = solid.edges.iter().find(|e| e.id == entity) {
                        return TopoSignature {
                            surface_type: Some(e.curve_type.to_string()),
                            area: None,
                            centroid: Some(e.midpoint),
                            normal: None,
                            length: Some(e.length),
                        };
                    }
                }
                TopoKind::Vertex => {
                    if let Some(v) = solid.vertex(entity) {
                        return TopoSignature {
                            surface_type: Some("point".to_string()),
                            area: None,
                            centroid: Some(v.position),
                            normal: None,
                            length: None,
                        };
                    }
                }
            }
        }
        TopoSignature::empty()
    }

    fn solid_bounds(&self, solid: &KernelSolidHandle) -> Option<BoundingBox> {
        self.solids.get(&solid.id()).and_then(solid_bounds_of)
    }
}
