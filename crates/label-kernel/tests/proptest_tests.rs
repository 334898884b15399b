//! Property-based tests for profile construction and extrusion.

use proptest::prelude::*;

use label_kernel::primitives::rounded_rect_outline;
use label_kernel::{Kernel, KernelIntrospect, MockKernel, TopoKind};
use label_types::{Axis, RoundedRectProfile};

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// A valid profile: positive sides, radius anywhere in [0, half the smaller side].
fn arb_profile() -> impl Strategy<Value = RoundedRectProfile> {
    (0.5f64..200.0, 0.5f64..200.0, 0.0f64..=1.0).prop_map(|(w, h, t)| {
        RoundedRectProfile::new(w, h, t * w.min(h) / 2.0)
    })
}

/// Signed extrusion distance away from zero.
fn arb_distance() -> impl Strategy<Value = f64> {
    prop_oneof![-50.0f64..-0.01, 0.01f64..50.0]
}

// ---------------------------------------------------------------------------
// Outline
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn outline_is_closed(profile in arb_profile()) {
        let segments = rounded_rect_outline(&profile).unwrap();
        for i in 0..segments.len() {
            let end = segments[i].end();
            let next = segments[(i + 1) % segments.len()].start();
            prop_assert!((end[0] - next[0]).abs() < TOL && (end[1] - next[1]).abs() < TOL,
                "gap after segment {}: {:?} -> {:?}", i, end, next);
        }
    }

    #[test]
    fn outline_length_matches_perimeter(profile in arb_profile()) {
        let segments = rounded_rect_outline(&profile).unwrap();
        let total: f64 = segments.iter().map(|s| s.length()).sum();
        prop_assert!((total - profile.perimeter()).abs() < 1e-6,
            "outline {} vs perimeter {}", total, profile.perimeter());
    }

    #[test]
    fn outline_spans_profile(profile in arb_profile()) {
        let segments = rounded_rect_outline(&profile).unwrap();
        let max_x = segments.iter().map(|s| s.start()[0]).fold(f64::MIN, f64::max);
        let max_y = segments.iter().map(|s| s.start()[1]).fold(f64::MIN, f64::max);
        prop_assert!((max_x - profile.width / 2.0).abs() < TOL);
        prop_assert!((max_y - profile.height / 2.0).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// Extrusion on the mock kernel
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn extrusion_spans_signed_distance(profile in arb_profile(), distance in arb_distance()) {
        let mut kernel = MockKernel::new();
        let face = kernel
            .make_rounded_rect_face(&profile, [0.0; 3], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0])
            .unwrap();
        let solid = kernel.extrude_face(face, [0.0, 0.0, 1.0], distance).unwrap();

        let bounds = kernel.solid_bounds(&solid).unwrap();
        prop_assert!((bounds.max[2] - distance.max(0.0)).abs() < TOL);
        prop_assert!((bounds.min[2] - distance.min(0.0)).abs() < TOL);
        prop_assert!((bounds.extent(Axis::X) - profile.width).abs() < TOL);
        prop_assert!((bounds.extent(Axis::Y) - profile.height).abs() < TOL);
    }

    #[test]
    fn every_edge_borders_two_faces(profile in arb_profile(), distance in arb_distance()) {
        let mut kernel = MockKernel::new();
        let face = kernel
            .make_rounded_rect_face(&profile, [0.0; 3], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0])
            .unwrap();
        let solid = kernel.extrude_face(face, [0.0, 0.0, 1.0], distance).unwrap();

        for edge in kernel.list_edges(&solid) {
            prop_assert_eq!(kernel.edge_faces(edge).len(), 2);
        }
        prop_assert!(kernel
            .compute_all_signatures(&solid, TopoKind::Face)
            .iter()
            .all(|(_, sig)| sig.area.unwrap_or(0.0) > 0.0));
    }
}
