//! Rounded-rectangle outlines and the truck wires built from them.
//!
//! truck has no rounded-rectangle primitive: the loop is assembled from four
//! lines and four quarter arcs sharing their endpoints.

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Vertex, Wire};
use truck_modeling::Point3;

use crate::types::{KernelError, PlaneFrame, RoundedRectProfile};

/// Shortest segment kept in an outline. Lines collapse to nothing when the
/// corner radius is exactly half a side.
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// One piece of a closed planar outline, in plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineSegment {
    Line {
        start: [f64; 2],
        end: [f64; 2],
    },
    /// Quarter arc. `transit` is the arc midpoint, used by truck to pick the
    /// arc side.
    Arc {
        start: [f64; 2],
        end: [f64; 2],
        center: [f64; 2],
        transit: [f64; 2],
        radius: f64,
    },
}

impl OutlineSegment {
    pub fn start(&self) -> [f64; 2] {
        match *self {
            OutlineSegment::Line { start, .. } | OutlineSegment::Arc { start, .. } => start,
        }
    }

    pub fn end(&self) -> [f64; 2] {
        match *self {
            OutlineSegment::Line { end, .. } | OutlineSegment::Arc { end, .. } => end,
        }
    }

    /// A point on the segment halfway along it.
    pub fn midpoint(&self) -> [f64; 2] {
        match *self {
            OutlineSegment::Line { start, end } => {
                [(start[0] + end[0]) / 2.0, (start[1] + end[1]) / 2.0]
            }
            OutlineSegment::Arc { transit, .. } => transit,
        }
    }

    pub fn length(&self) -> f64 {
        match *self {
            OutlineSegment::Line { start, end } => {
                let dx = end[0] - start[0];
                let dy = end[1] - start[1];
                (dx * dx + dy * dy).sqrt()
            }
            OutlineSegment::Arc { radius, .. } => radius * FRAC_PI_2,
        }
    }

    /// Outward in-plane normal at the segment midpoint, for a counter-clockwise loop.
    pub fn outward_normal(&self) -> [f64; 2] {
        match *self {
            OutlineSegment::Line { start, end } => {
                let dx = end[0] - start[0];
                let dy = end[1] - start[1];
                let len = (dx * dx + dy * dy).sqrt();
                // Rotate the tangent clockwise by 90 degrees.
                [dy / len, -dx / len]
            }
            OutlineSegment::Arc {
                center, transit, ..
            } => {
                let dx = transit[0] - center[0];
                let dy = transit[1] - center[1];
                let len = (dx * dx + dy * dy).sqrt();
                [dx / len, dy / len]
            }
        }
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, OutlineSegment::Arc { .. })
    }
}

/// Counter-clockwise outline of a rounded rectangle centered on the origin.
///
/// Starts at the left end of the bottom side. A zero radius yields four lines;
/// a radius of half a side drops the collapsed lines.
pub fn rounded_rect_outline(
    profile: &RoundedRectProfile,
) -> Result<Vec<OutlineSegment>, KernelError> {
    profile
        .validate()
        .map_err(|reason| KernelError::InvalidProfile { reason })?;

    let a = profile.width / 2.0;
    let b = profile.height / 2.0;
    let r = profile.corner_radius;

    // Corner sign pairs in counter-clockwise order, each preceded by the side
    // leading into it.
    let corners = [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];
    let mut segments = Vec::with_capacity(8);
    let mut cursor = [-a + r, -b];

    for (sx, sy) in corners {
        let center = [sx * (a - r), sy * (b - r)];
        // Arc enters on the side perpendicular to the previous travel direction.
        let (arc_start, arc_end) = if sx * sy < 0.0 {
            ([center[0], sy * b], [sx * a, center[1]])
        } else {
            ([sx * a, center[1]], [center[0], sy * b])
        };

        let line = OutlineSegment::Line {
            start: cursor,
            end: arc_start,
        };
        if line.length() > MIN_SEGMENT_LENGTH {
            segments.push(line);
        }

        if r > 0.0 {
            segments.push(OutlineSegment::Arc {
                start: arc_start,
                end: arc_end,
                center,
                transit: [
                    center[0] + sx * r * FRAC_1_SQRT_2,
                    center[1] + sy * r * FRAC_1_SQRT_2,
                ],
                radius: r,
            });
        }
        cursor = arc_end;
    }

    Ok(segments)
}

/// Build the closed truck wire for a rounded rectangle lying in `frame`.
pub fn rounded_rect_wire(
    profile: &RoundedRectProfile,
    frame: &PlaneFrame,
) -> Result<Wire, KernelError> {
    let segments = rounded_rect_outline(profile)?;
    let to_point = |p: [f64; 2]| {
        let w = frame.point(p[0], p[1]);
        Point3::new(w[0], w[1], w[2])
    };

    // Create all vertices first so consecutive edges share endpoints.
    let vertices: Vec<Vertex> = segments
        .iter()
        .map(|s| builder::vertex(to_point(s.start())))
        .collect();

    let n = segments.len();
    let mut edges: Vec<Edge> = Vec::with_capacity(n);
    for (i, segment) in segments.iter().enumerate() {
        let v0 = &vertices[i];
        let v1 = &vertices[(i + 1) % n];
        let edge: Edge = match *segment {
            OutlineSegment::Line { .. } => builder::line(v0, v1),
            OutlineSegment::Arc { transit, .. } => builder::circle_arc(v0, v1, to_point(transit)),
        };
        edges.push(edge);
    }
    Ok(Wire::from_iter(edges))
}

/// Attach a plane to a rounded-rectangle wire.
pub fn rounded_rect_face(
    profile: &RoundedRectProfile,
    frame: &PlaneFrame,
) -> Result<Face, KernelError> {
    let wire = rounded_rect_wire(profile, frame)?;
    builder::try_attach_plane(&[wire]).map_err(|e| KernelError::InvalidProfile {
        reason: format!("failed to create planar face: {}", e),
    })
}
