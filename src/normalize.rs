use crate::error::GazeError;

/// Maps `value` into [0, 1] relative to the extent spanned by `min` and
/// `max`, clamping anything outside the extent to the nearest endpoint.
///
/// Argument order matches the bounding-box convention of the callers: for
/// the vertical axis `max` is the box's *top* y pixel and `min` the bottom,
/// so the extent may run in either pixel direction.
///
/// A collapsed extent (`max == min`) is reported as
/// [`GazeError::DegenerateRange`] instead of dividing to NaN.
pub fn normalize(value: f32, max: f32, min: f32) -> Result<f32, GazeError> {
    if max == min {
        return Err(GazeError::DegenerateRange);
    }
    Ok(((value - min) / (max - min)).clamp(0.0, 1.0))
}
