use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geometry::{clamp_signed_unit, mirror_x};
use crate::normalize::normalize;
use crate::rotation::{is_face_rotated_with_tolerance, ROTATION_TOLERANCE_PX};
use crate::types::{Detection, GazeVector};

/// Calibrated affine remap from normalized iris position to gaze.
///
/// The centers encode the eye's natural resting position within the detected
/// iris range; horizontally that is not the geometric center of the box,
/// hence 0.335 rather than 0.5. All four values are empirical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeCalibration {
    pub x_center: f32,
    pub x_gain: f32,
    pub y_center: f32,
    pub y_gain: f32,
}

impl Default for GazeCalibration {
    fn default() -> Self {
        Self {
            x_center: 0.335,
            x_gain: 3.0,
            y_center: 0.5,
            y_gain: 2.0,
        }
    }
}

impl GazeCalibration {
    /// Remaps one normalized iris position to a clamped gaze vector.
    pub fn apply(&self, norm_x: f32, norm_y: f32) -> GazeVector {
        GazeVector {
            x: clamp_signed_unit((norm_x - self.x_center) * self.x_gain),
            y: clamp_signed_unit((norm_y - self.y_center) * self.y_gain),
        }
    }
}

/// Maps one detection to a gaze vector, or `None` when the frame cannot be
/// trusted (face at the frame boundary, head rotated, degenerate box,
/// missing iris). `None` means "no update this frame", never "center".
pub fn map_gaze(
    detection: &Detection,
    frame_width: f32,
    calibration: &GazeCalibration,
) -> Option<GazeVector> {
    map_gaze_with_tolerance(detection, frame_width, calibration, ROTATION_TOLERANCE_PX)
}

/// [`map_gaze`] with a caller-supplied rotation tolerance.
pub fn map_gaze_with_tolerance(
    detection: &Detection,
    frame_width: f32,
    calibration: &GazeCalibration,
    rotation_tolerance_px: f32,
) -> Option<GazeVector> {
    let face = detection.bounding_box.mirrored(frame_width);

    if face.is_degenerate() {
        debug!("rejecting detection: degenerate bounding box after mirroring");
        return None;
    }
    // Face partially off-frame on the left edge. Expected and frequent,
    // not a fault.
    if face.bottom_left.x <= 0.0 {
        debug!(left_x = face.bottom_left.x, "rejecting detection: face at frame boundary");
        return None;
    }
    if is_face_rotated_with_tolerance(&detection.landmarks, frame_width, rotation_tolerance_px) {
        debug!("rejecting detection: head rotated beyond symmetry tolerance");
        return None;
    }
    let iris = match detection.landmarks.iris() {
        Ok(point) => point,
        Err(e) => {
            debug!("rejecting detection: {e}");
            return None;
        }
    };

    let iris_x = mirror_x(iris.x, frame_width);
    let norm_x = match normalize(iris_x, face.top_right.x, face.bottom_left.x) {
        Ok(v) => v,
        Err(e) => {
            debug!("rejecting detection: horizontal extent: {e}");
            return None;
        }
    };
    // Vertical axis is not mirrored; the box convention puts the top y at
    // the "max" end of the extent.
    let norm_y = match normalize(iris.y, face.top_right.y, face.bottom_left.y) {
        Ok(v) => v,
        Err(e) => {
            debug!("rejecting detection: vertical extent: {e}");
            return None;
        }
    };

    let gaze = calibration.apply(norm_x, norm_y);
    trace!(x = gaze.x, y = gaze.y, "mapped gaze vector");
    Some(gaze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, FaceLandmarks, Point2D};

    const FRAME_WIDTH: f32 = 500.0;

    // Frontal face whose mirrored box spans x 100..300, y 50..250, with the
    // iris at a given mirrored-space position.
    fn detection_with_iris(iris_mirrored_x: f32, iris_y: f32) -> Detection {
        Detection {
            landmarks: FaceLandmarks {
                left_cheek: Some(Point2D::new(FRAME_WIDTH - 120.0, 180.0)),
                right_cheek: Some(Point2D::new(FRAME_WIDTH - 280.0, 180.0)),
                midway_between_eyes: Some(Point2D::new(FRAME_WIDTH - 200.0, 120.0)),
                left_eye_iris: Some(Point2D::new(FRAME_WIDTH - iris_mirrored_x, iris_y)),
            },
            bounding_box: BoundingBox::new(
                Point2D::new(FRAME_WIDTH - 300.0, 50.0),
                Point2D::new(FRAME_WIDTH - 100.0, 250.0),
            ),
        }
    }

    #[test]
    fn near_center_iris_maps_near_zero() {
        let detection = detection_with_iris(166.5, 150.0);
        let gaze = map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()).unwrap();

        // norm_x = (166.5 - 100) / 200 = 0.3325 -> (0.3325 - 0.335) * 3.0
        assert!((gaze.x - -0.0075).abs() < 1e-4, "gaze.x = {}", gaze.x);
        // norm_y = (150 - 250) / (50 - 250) = 0.5 -> exactly centered
        assert!(gaze.y.abs() < 1e-6, "gaze.y = {}", gaze.y);
    }

    #[test]
    fn extreme_iris_positions_clamp_to_unit_range() {
        for (x, y) in [(0.0, -400.0), (499.0, 900.0), (300.0, 50.0), (100.0, 250.0)] {
            let detection = detection_with_iris(x, y);
            let gaze = map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()).unwrap();
            assert!((-1.0..=1.0).contains(&gaze.x), "gaze.x = {}", gaze.x);
            assert!((-1.0..=1.0).contains(&gaze.y), "gaze.y = {}", gaze.y);
        }
    }

    #[test]
    fn face_at_frame_boundary_yields_no_signal() {
        let mut detection = detection_with_iris(166.5, 150.0);
        // push the mirrored left edge to exactly 0
        detection.bounding_box.bottom_right.x = FRAME_WIDTH;
        assert_eq!(map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()), None);
    }

    #[test]
    fn rotated_face_yields_no_signal_regardless_of_iris() {
        let mut detection = detection_with_iris(166.5, 150.0);
        // midway pushed 40px toward the left cheek in mirrored space
        detection.landmarks.midway_between_eyes = Some(Point2D::new(FRAME_WIDTH - 160.0, 120.0));
        assert_eq!(map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()), None);
    }

    #[test]
    fn missing_iris_yields_no_signal() {
        let mut detection = detection_with_iris(166.5, 150.0);
        detection.landmarks.left_eye_iris = None;
        assert_eq!(map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()), None);
    }

    #[test]
    fn degenerate_vertical_extent_yields_no_signal() {
        let mut detection = detection_with_iris(166.5, 150.0);
        detection.bounding_box.top_left.y = 250.0;
        detection.bounding_box.bottom_right.y = 250.0;
        assert_eq!(map_gaze(&detection, FRAME_WIDTH, &GazeCalibration::default()), None);
    }

    #[test]
    fn calibration_overrides_are_honored() {
        let calibration = GazeCalibration {
            x_center: 0.5,
            x_gain: 2.0,
            y_center: 0.5,
            y_gain: 2.0,
        };
        // iris at the exact box center maps to (0, 0) under a centered remap
        let detection = detection_with_iris(200.0, 150.0);
        let gaze = map_gaze(&detection, FRAME_WIDTH, &calibration).unwrap();
        assert!(gaze.x.abs() < 1e-6);
        assert!(gaze.y.abs() < 1e-6);
    }
}
