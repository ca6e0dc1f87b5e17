use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapper::{map_gaze_with_tolerance, GazeCalibration};
use crate::rotation::ROTATION_TOLERANCE_PX;
use crate::types::{Detection, GazeVector};

/// Explicit per-frame state: the capture width the mirroring transform needs
/// and a caller-maintained frame counter for logging. Passed by value into
/// each frame's processing instead of living in shared mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    pub width: f32,
    pub frame_id: u64,
}

impl FrameContext {
    pub fn new(width: f32, frame_id: u64) -> Self {
        Self { width, frame_id }
    }
}

/// Which detection's mapping wins when the estimator reports several faces
/// in one frame. Single-face tracking is the expected case; this exists so
/// the multi-face behavior is a stated choice rather than iteration-order
/// accident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Keep the mapping of the last detection that produced one.
    #[default]
    LastDetection,
    /// Keep the first successful mapping and skip the rest.
    FirstDetection,
}

/// Processes one frame's detections into at most one gaze vector.
///
/// Detections that fail gating are skipped; they do not erase a vector an
/// earlier detection already produced. Zero detections (or all rejected)
/// yields `None`.
pub fn process_frame(
    detections: &[Detection],
    ctx: &FrameContext,
    calibration: &GazeCalibration,
    policy: SelectionPolicy,
) -> Option<GazeVector> {
    process_frame_with_tolerance(detections, ctx, calibration, policy, ROTATION_TOLERANCE_PX)
}

/// [`process_frame`] with a caller-supplied rotation tolerance.
pub fn process_frame_with_tolerance(
    detections: &[Detection],
    ctx: &FrameContext,
    calibration: &GazeCalibration,
    policy: SelectionPolicy,
    rotation_tolerance_px: f32,
) -> Option<GazeVector> {
    let mut result = None;
    for detection in detections {
        if let Some(gaze) =
            map_gaze_with_tolerance(detection, ctx.width, calibration, rotation_tolerance_px)
        {
            result = Some(gaze);
            if policy == SelectionPolicy::FirstDetection {
                break;
            }
        }
    }
    if result.is_none() && !detections.is_empty() {
        debug!(frame_id = ctx.frame_id, "no usable detection this frame");
    }
    result
}
