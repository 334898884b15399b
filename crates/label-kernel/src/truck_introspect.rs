//! `KernelIntrospect` for `TruckKernel`: topology queries over stored truck solids.
//!
//! Entity ids encode their solid handle: `handle * 10000 + offset`, with faces
//! at offset 0.., edges at 1000.. and vertices at 2000.. in shell iteration order.

use std::collections::HashSet;

use crate::traits::KernelIntrospect;
use crate::truck_kernel::TruckKernel;
use crate::types::*;

use truck_modeling::geometry::{Curve, Surface};
use truck_modeling::topology::{Edge, Face, Solid, Vertex};
use truck_modeling::{BoundedCurve, ParameterDivision1D, ParametricCurve, Point3};

const EDGE_OFFSET: u64 = 1000;
const VERTEX_OFFSET: u64 = 2000;
const HANDLE_STRIDE: u64 = 10000;
/// Chord tolerance used when sampling curved edges for their length.
const EDGE_SAMPLE_TOLERANCE: f64 = 1e-4;

/// Lets TruckKernel satisfy the KernelBundle blanket impl (Kernel + KernelIntrospect).
impl KernelIntrospect for TruckKernel {
    fn list_faces(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        faces_of(truck_solid)
            .iter()
            .enumerate()
            .map(|(i, _)| KernelId(solid.id() * HANDLE_STRIDE + i as u64))
            .collect()
    }

    fn list_edges(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        (0..unique_edges(truck_solid).len())
            .map(|i| KernelId(solid.id() * HANDLE_STRIDE + EDGE_OFFSET + i as u64))
            .collect()
    }

    fn list_vertices(&self, solid: &KernelSolidHandle) -> Vec<KernelId> {
        let Some(truck_solid) = self.get_solid(solid) else {
            return Vec::new();
        };
        (0..unique_vertices(truck_solid).len())
            .map(|i| KernelId(solid.id() * HANDLE_STRIDE + VERTEX_OFFSET + i as u64))
            .collect()
    }

    fn face_edges(&self, face: KernelId) -> Vec<KernelId> {
        let (handle, face_idx) = split_id(face, 0);
        let Some(truck_solid) = self.get_solid(&handle) else {
            return Vec::new();
        };
        let faces = faces_of(truck_solid);
        let Some(target) = faces.get(face_idx) else {
            return Vec::new();
        };

        let edges = unique_edges(truck_solid);
        target
            .boundaries()
            .iter()
            .flat_map(|w| w.edge_iter())
            .filter_map(|edge| edges.iter().position(|e| e.id() == edge.id()))
            .map(|ei| KernelId(handle.id() * HANDLE_STRIDE + EDGE_OFFSET + ei as u64))
            .collect()
    }

    fn edge_faces(&self, edge: KernelId) -> Vec<KernelId> {
        let (handle, edge_idx) = split_id(edge, EDGE_OFFSET);
        let Some(truck_solid) = self.get_solid(&handle) else {
            return Vec::new();
        };
        let edges = unique_edges(truck_solid);
        let Some(target) = edges.get(edge_idx) else {
            return Vec::new();
        };
        let target_id = target.id();

        faces_of(truck_solid)
            .iter()
            .enumerate()
            .filter(|(_, face)| {
                face.boundaries()
                    .iter()
                    .flat_map(|w| w.edge_iter())
                    .any(|e| e.id() == target_id)
            })
            .map(|(fi, _)| KernelId(handle.id() * HANDLE_STRIDE + fi as u64))
            .collect()
    }

    fn compute_signature(&self, entity: KernelId, kind: TopoKind) -> TopoSignature {
        let offset = match kind {
            TopoKind::Face => 0,
            TopoKind::Edge => EDGE_OFFSET,
            TopoKind::Vertex => VERTEX_OFFSET,
        };
        let (handle, idx) = split_id(entity, offset);
        let Some(truck_solid) = self.get_solid(&handle) else {
            return TopoSignature::empty();
        };

        let sig = match kind {
            TopoKind::Face => faces_of(truck_solid).get(idx).map(compute_face_signature),
            TopoKind::Edge => unique_edges(truck_solid).get(idx).map(compute_edge_signature),
            TopoKind::Vertex => unique_vertices(truck_solid)
                .get(idx)
                .map(compute_vertex_signature),
        };
        sig.unwrap_or_else(TopoSignature::empty)
    }

    fn solid_bounds(&self, solid: &KernelSolidHandle) -> Option<BoundingBox> {
        // Vertex hull. Exact for prisms whose curved edges are quarter arcs,
        // which never leave the box spanned by their endpoints.
        let truck_solid = self.get_solid(solid)?;
        BoundingBox::from_points(unique_vertices(truck_solid).iter().map(|v| {
            let p = v.point();
            [p[0], p[1], p[2]]
        }))
    }
}

// ── Shared implementation functions ─────────────────────────────────────

fn split_id(id: KernelId, offset: u64) -> (KernelSolidHandle, usize) {
    let handle = KernelSolidHandle(id.0 / HANDLE_STRIDE);
    let idx = (id.0 % HANDLE_STRIDE).saturating_sub(offset) as usize;
    (handle, idx)
}

fn faces_of(solid: &Solid) -> Vec<Face> {
    solid
        .boundaries()
        .iter()
        .flat_map(|shell| shell.face_iter().cloned())
        .collect()
}

fn unique_edges(solid: &Solid) -> Vec<Edge> {
    let mut seen = HashSet::new();
    solid
        .boundaries()
        .iter()
        .flat_map(|shell| shell.edge_iter())
        .filter(|e| seen.insert(e.id()))
        .collect()
}

fn unique_vertices(solid: &Solid) -> Vec<Vertex> {
    let mut seen = HashSet::new();
    solid
        .boundaries()
        .iter()
        .flat_map(|shell| shell.vertex_iter())
        .filter(|v| seen.insert(v.id()))
        .collect()
}

fn compute_face_signature(face: &Face) -> TopoSignature {
    let surface = face.oriented_surface();
    let surface_type = classify_surface(&surface);
    let centroid = face_vertex_centroid(face);
    let normal = match &surface {
        Surface::Plane(plane) => {
            let n = plane.normal();
            Some([n[0], n[1], n[2]])
        }
        _ => None,
    };

    TopoSignature {
        surface_type: Some(surface_type),
        area: None,
        centroid: Some(centroid),
        normal,
        length: None,
    }
}

fn compute_edge_signature(edge: &Edge) -> TopoSignature {
    let curve = edge.oriented_curve();
    let range = curve.range_tuple();
    let mid = curve.subs((range.0 + range.1) / 2.0);

    let (curve_type, length) = match &curve {
        Curve::Line(_) => ("line", distance(edge.front().point(), edge.back().point())),
        _ => {
            let (_params, points) = curve.parameter_division(range, EDGE_SAMPLE_TOLERANCE);
            let length = points.windows(2).map(|w| distance(w[0], w[1])).sum::<f64>();
            ("curve", length)
        }
    };

    TopoSignature {
        surface_type: Some(curve_type.to_string()),
        area: None,
        centroid: Some([mid[0], mid[1], mid[2]]),
        normal: None,
        length: Some(length),
    }
}

fn distance(a: Point3, b: Point3) -> f64 {
    let d = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

fn compute_vertex_signature(vertex: &Vertex) -> TopoSignature {
    let p = vertex.point();
    TopoSignature {
        surface_type: Some("point".to_string()),
        area: None,
        centroid: Some([p[0], p[1], p[2]]),
        normal: None,
        length: None,
    }
}

fn classify_surface(surface: &Surface) -> String {
    match surface {
        Surface::Plane(_) => "planar".to_string(),
        Surface::RevolutedCurve(_) => "revolved".to_string(),
        Surface::BSplineSurface(_) => "nurbs".to_string(),
        Surface::NurbsSurface(_) => "nurbs".to_string(),
    }
}

fn face_vertex_centroid(face: &Face) -> [f64; 3] {
    let mut sum = [0.0; 3];
    let mut count = 0.0;
    for wire in face.boundaries() {
        for v in wire.vertex_iter() {
            let p = v.point();
            sum[0] += p[0];
            sum[1] += p[1];
            sum[2] += p[2];
            count += 1.0;
        }
    }
    if count > 0.0 {
        [sum[0] / count, sum[1] / count, sum[2] / count]
    } else {
        [0.0; 3]
    }
}
