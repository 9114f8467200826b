// src/vec3.rs

/// 3D vector dot product.
#[inline]
pub fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Squared Euclidean length.
#[inline]
pub fn length_sqr(v: [f32; 3]) -> f32 {
    dot(v, v)
}

/// Euclidean length.
#[inline]
pub fn length(v: [f32; 3]) -> f32 {
    length_sqr(v).sqrt()
}

/// 3D vector cross product: a × b.
#[inline]
pub fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Component-wise scaling.
#[inline]
pub fn scale(v: [f32; 3], k: f32) -> [f32; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// Normalise a 3D vector to unit length.
///
/// The caller must ensure `length(v) != 0`: a zero-length input divides
/// by zero and the resulting Inf/NaN components propagate through any
/// later arithmetic. See `basis::basis_fast` for the guarded alternative
/// when degenerate inputs are possible.
#[inline]
pub fn normalize(v: [f32; 3]) -> [f32; 3] {
    scale(v, 1.0 / length(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_of_axes_is_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(cross([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]), [1.0, 0.0, 0.0]);
        assert_eq!(cross([0.0, 0.0, 1.0], [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn cross_is_orthogonal_to_both_inputs() {
        let a = [0.3, -1.2, 0.7];
        let b = [2.0, 0.4, -0.9];
        let c = cross(a, b);
        assert!(dot(a, c).abs() < 1e-6, "dot(a, a x b) = {}", dot(a, c));
        assert!(dot(b, c).abs() < 1e-6, "dot(b, a x b) = {}", dot(b, c));
    }

    #[test]
    fn normalize_gives_unit_length() {
        let v = normalize([3.0, -4.0, 12.0]);
        assert!((length(v) - 1.0).abs() < 1e-6, "|v| = {}", length(v));
    }

    #[test]
    fn normalize_of_zero_is_not_finite() {
        // Documented precondition violation: division by zero, not a panic.
        let v = normalize([0.0, 0.0, 0.0]);
        assert!(v.iter().any(|c| !c.is_finite()));
    }
}
