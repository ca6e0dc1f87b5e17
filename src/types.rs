use serde::{Deserialize, Serialize};

use crate::error::GazeError;
use crate::geometry::mirror_x;

/// Represents a single 2D point in pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Face extent as reported by the detector, in raw (un-mirrored) camera
/// space. Field names follow the detector's own convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top_left: Point2D,
    pub bottom_right: Point2D,
}

impl BoundingBox {
    pub fn new(top_left: Point2D, bottom_right: Point2D) -> Self {
        Self { top_left, bottom_right }
    }

    /// Applies the horizontal mirroring transform to both corners.
    ///
    /// The capture is flipped horizontally, so the raw top-left corner is
    /// actually the top-right of the face and the raw bottom-right is the
    /// bottom-left. This is the only place that flip is applied to a box.
    pub fn mirrored(&self, frame_width: f32) -> MirroredBox {
        MirroredBox {
            top_right: Point2D::new(mirror_x(self.top_left.x, frame_width), self.top_left.y),
            bottom_left: Point2D::new(mirror_x(self.bottom_right.x, frame_width), self.bottom_right.y),
        }
    }
}

/// Face extent in mirrored pixel space. Well-formed boxes have
/// `top_right.x >= bottom_left.x` and `top_right.y <= bottom_left.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredBox {
    pub top_right: Point2D,
    pub bottom_left: Point2D,
}

impl MirroredBox {
    pub fn is_degenerate(&self) -> bool {
        self.top_right.x < self.bottom_left.x || self.top_right.y > self.bottom_left.y
    }
}

/// Named landmark points for one detected face, plus the left-eye iris
/// annotation. The detector is free to omit points it could not place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceLandmarks {
    pub left_cheek: Option<Point2D>,
    pub right_cheek: Option<Point2D>,
    pub midway_between_eyes: Option<Point2D>,
    pub left_eye_iris: Option<Point2D>,
}

impl FaceLandmarks {
    /// The three points the rotation gate needs, or the first one missing.
    /// Names match the detector's annotation keys.
    pub fn symmetry_points(&self) -> Result<(Point2D, Point2D, Point2D), GazeError> {
        let left = self.left_cheek.ok_or(GazeError::MissingLandmark { name: "leftCheek" })?;
        let right = self.right_cheek.ok_or(GazeError::MissingLandmark { name: "rightCheek" })?;
        let mid = self
            .midway_between_eyes
            .ok_or(GazeError::MissingLandmark { name: "midwayBetweenEyes" })?;
        Ok((left, right, mid))
    }

    pub fn iris(&self) -> Result<Point2D, GazeError> {
        self.left_eye_iris.ok_or(GazeError::MissingLandmark { name: "leftEyeIris" })
    }
}

/// One face's full per-frame detection result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub landmarks: FaceLandmarks,
    pub bounding_box: BoundingBox,
}

/// Estimated gaze direction, each component in [-1, 1]. Frame-local output;
/// produced and consumed within a single prediction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GazeVector {
    pub x: f32,
    pub y: f32,
}
