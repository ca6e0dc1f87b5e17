use tracing::debug;

use crate::geometry::mirror_x;
use crate::types::FaceLandmarks;

/// Horizontal asymmetry, in pixels, beyond which the head is considered
/// turned too far for iris normalization to be trusted. Empirical tolerance.
pub const ROTATION_TOLERANCE_PX: f32 = 5.0;

/// Returns true when the face is rotated away from frontal, judged by the
/// symmetry of the two horizontal face halves in mirrored space.
///
/// A missing landmark fails closed: without all three points the symmetry
/// check is meaningless, so the frame is reported as rotated.
pub fn is_face_rotated(landmarks: &FaceLandmarks, frame_width: f32) -> bool {
    is_face_rotated_with_tolerance(landmarks, frame_width, ROTATION_TOLERANCE_PX)
}

/// [`is_face_rotated`] with a caller-supplied asymmetry tolerance.
pub fn is_face_rotated_with_tolerance(
    landmarks: &FaceLandmarks,
    frame_width: f32,
    tolerance_px: f32,
) -> bool {
    let (left_cheek, right_cheek, midway) = match landmarks.symmetry_points() {
        Ok(points) => points,
        Err(e) => {
            debug!("treating face as rotated: {e}");
            return true;
        }
    };

    let left_cheek_x = mirror_x(left_cheek.x, frame_width);
    let right_cheek_x = mirror_x(right_cheek.x, frame_width);
    let midway_x = mirror_x(midway.x, frame_width);

    let width_left_side = midway_x - left_cheek_x;
    let width_right_side = right_cheek_x - midway_x;

    (width_right_side - width_left_side).abs() > tolerance_px
}
