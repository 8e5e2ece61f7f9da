use glam::DVec2;

/// Smallest magnitude allowed on either axis of a contact delta.
pub const MIN_AXIS_DELTA: f64 = 0.001;

pub fn dot(a: DVec2, b: DVec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Squared length, without the square root
pub fn magnitude_squared(v: DVec2) -> f64 {
    v.x * v.x + v.y * v.y
}

pub fn magnitude(v: DVec2) -> f64 {
    magnitude_squared(v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// A zero vector divides by zero and yields NaN components. Hot paths that can
/// see coincident points use [`floored_delta`] instead.
pub fn normalized(v: DVec2) -> DVec2 {
    let mag = magnitude(v);
    DVec2::new(v.x / mag, v.y / mag)
}

/// Per-axis absolute difference between two points, each axis floored to
/// [`MIN_AXIS_DELTA`].
pub fn floored_delta(a: DVec2, b: DVec2) -> DVec2 {
    DVec2::new(
        (a.x - b.x).abs().max(MIN_AXIS_DELTA),
        (a.y - b.y).abs().max(MIN_AXIS_DELTA),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_magnitudes() {
        let a = DVec2::new(3.0, 4.0);
        let b = DVec2::new(-2.0, 0.5);

        assert_eq!(dot(a, b), -4.0);
        assert_eq!(magnitude_squared(a), 25.0);
        assert_eq!(magnitude(a), 5.0);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = normalized(DVec2::new(0.0, -7.5));
        assert_eq!(n, DVec2::new(0.0, -1.0));
    }

    #[test]
    fn normalized_zero_is_nan() {
        let n = normalized(DVec2::ZERO);
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn floored_delta_never_drops_below_minimum() {
        let d = floored_delta(DVec2::new(5.0, 2.0), DVec2::new(5.0, -1.0));
        assert_eq!(d, DVec2::new(MIN_AXIS_DELTA, 3.0));
    }
}
