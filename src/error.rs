use thiserror::Error;

/// Failure conditions of the gaze-geometry core.
///
/// None of these are fatal: components fail closed and the per-frame result
/// becomes "no gaze signal this frame". A face at the frame boundary is an
/// expected condition, not an error, and is expressed as `None` directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GazeError {
    /// A required named landmark or iris point is absent from a detection.
    #[error("required landmark `{name}` missing from detection")]
    MissingLandmark { name: &'static str },

    /// Normalization range collapsed to a single value (`max == min`).
    /// Left undefined, the division would silently produce NaN.
    #[error("degenerate normalization range (max == min)")]
    DegenerateRange,
}
