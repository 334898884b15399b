//! Edge selection by position along an axis.

use label_kernel::{KernelId, KernelIntrospect, KernelSolidHandle};
use label_types::{Axis, TopoKind};

/// Edges whose centroids share one position along an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGroup {
    /// Position of the group along the axis (centroid of its first member).
    pub position: f64,
    pub edges: Vec<KernelId>,
}

/// Group the edges of a solid by the position of their centroids along `axis`.
///
/// Groups are ordered by ascending position. Edges closer than `tolerance` to
/// the first member of a group join it. Edges without a centroid are ignored.
pub fn group_edges_by_axis(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
    axis: Axis,
    tolerance: f64,
) -> Vec<EdgeGroup> {
    let mut positioned: Vec<(KernelId, f64)> = introspect
        .compute_all_signatures(solid, TopoKind::Edge)
        .into_iter()
        .filter_map(|(id, sig)| sig.centroid.map(|c| (id, axis.component(c))))
        .filter(|(_, pos)| pos.is_finite())
        .collect();
    positioned.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut groups: Vec<EdgeGroup> = Vec::new();
    for (id, pos) in positioned {
        match groups.last_mut() {
            Some(group) if (pos - group.position).abs() <= tolerance => group.edges.push(id),
            _ => groups.push(EdgeGroup {
                position: pos,
                edges: vec![id],
            }),
        }
    }
    groups
}

/// The extremal group of edges in the positive direction of `axis`.
pub fn top_edges(
    introspect: &dyn KernelIntrospect,
    solid: &KernelSolidHandle,
    axis: Axis,
    tolerance: f64,
) -> Option<EdgeGroup> {
    group_edges_by_axis(introspect, solid, axis, tolerance).pop()
}
