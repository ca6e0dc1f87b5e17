//! Shared coordinate helpers.

/// Mirrors an x coordinate into the flipped horizontal convention.
///
/// The capture source is flipped horizontally relative to true physical
/// left/right, so every horizontal comparison in this crate happens in
/// mirrored space. Vertical coordinates are never mirrored.
pub fn mirror_x(x: f32, frame_width: f32) -> f32 {
    frame_width - x
}

/// Clamps a value to the signed unit range [-1, 1].
pub fn clamp_signed_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_is_its_own_inverse() {
        let x = 166.5;
        assert_eq!(mirror_x(mirror_x(x, 500.0), 500.0), x);
        assert_eq!(mirror_x(0.0, 500.0), 500.0);
        assert_eq!(mirror_x(500.0, 500.0), 0.0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_signed_unit(3.2), 1.0);
        assert_eq!(clamp_signed_unit(-57.0), -1.0);
        assert_eq!(clamp_signed_unit(0.25), 0.25);
    }
}
