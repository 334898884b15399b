use std::time::Instant;

use label_kernel::KernelId;
use label_types::RoundedRectProfile;
use tracing::debug;

use crate::kernel_ext::KernelBundle;
use crate::types::{Diagnostics, OpError, OpResult};

/// Execute an extrude operation.
///
/// Takes a face ID (from make_rounded_rect_face) and extrudes it along
/// a direction vector by a signed distance.
pub fn execute_extrude(
    kb: &mut dyn KernelBundle,
    face_id: KernelId,
    direction: [f64; 3],
    distance: f64,
) -> Result<OpResult, OpError> {
    let started = Instant::now();
    let handle = kb.extrude_face(face_id, direction, distance)?;
    let kernel_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    debug!(
        faces = kb.as_introspect().list_faces(&handle).len(),
        distance, "extruded profile face"
    );

    Ok(OpResult {
        handle,
        diagnostics: Diagnostics { kernel_time_ms },
    })
}

/// Build a rounded-rectangle face on the given plane and extrude it along the
/// plane normal by a signed distance.
pub fn extrude_rounded_rect(
    kb: &mut dyn KernelBundle,
    profile: &RoundedRectProfile,
    plane_origin: [f64; 3],
    plane_normal: [f64; 3],
    plane_x_axis: [f64; 3],
    distance: f64,
) -> Result<OpResult, OpError> {
    let face = kb.make_rounded_rect_face(profile, plane_origin, plane_normal, plane_x_axis)?;
    execute_extrude(kb, face, plane_normal, distance)
}
