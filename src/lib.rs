//! irisgaze — per-frame facial landmark measurements to a normalized gaze
//! vector.
//!
//! Takes the output of an external face-geometry estimator (bounding box,
//! cheek/eye-midpoint landmarks, iris annotation) for a single tracked face
//! and produces a gaze vector in [-1, 1] x [-1, 1], suitable for driving an
//! eye-controlled pointer. The stages are:
//!
//! 1. **Rotation gate** — bilateral symmetry check that rejects frames where
//!    the head is turned too far for iris normalization to be trusted.
//! 2. **Normalizer** — raw pixel coordinate to [0, 1] within the face
//!    bounding box, in the mirrored horizontal convention of the capture.
//! 3. **Gaze mapper** — calibrated affine remap of the normalized iris
//!    position into a clamped [-1, 1] vector.
//!
//! Every stage is a pure function of one frame's data; nothing is retained
//! between frames. A frame that cannot be trusted (face rotated, at the
//! frame boundary, landmarks missing, degenerate box) yields `None`, which
//! callers must treat as "no update this frame", never as "center".

pub mod config;
pub mod error;
pub mod estimator;
pub mod frame;
pub mod geometry;
pub mod mapper;
pub mod normalize;
pub mod rotation;
pub mod types;

pub use config::TrackerConfig;
pub use error::GazeError;
pub use estimator::{FaceGeometryEstimator, StaticEstimator};
pub use frame::{process_frame, FrameContext, SelectionPolicy};
pub use mapper::{map_gaze, GazeCalibration};
pub use normalize::normalize;
pub use rotation::{is_face_rotated, ROTATION_TOLERANCE_PX};
pub use types::{BoundingBox, Detection, FaceLandmarks, GazeVector, MirroredBox, Point2D};
