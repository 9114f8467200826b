// src/basis.rs
//
// Tangent-frame construction: given a unit normal `n` and an arbitrary
// reference direction `v`, produce two vectors (s, t) so that {n, s, t}
// is a mutually orthogonal unit triad. Two paths share that contract:
//
//  - `basis_exact` normalises with a scalar sqrt and leaves the
//    parallel-input singularity unguarded;
//  - `basis_fast` replaces the sqrt with a reciprocal-square-root
//    estimate refined by one Newton-Raphson step, and falls back to the
//    raw (zero) cross product when its length vanishes, so parallel
//    inputs give a finite degenerate result instead of NaN.

use crate::vec3::{cross, dot, normalize, scale};

/// Reference tangent-frame construction.
///
/// `t = normalize(n × v)`, `s = t × n`. Requires `v` not parallel to
/// `n`; otherwise the cross product has zero length and the normalise
/// singularity propagates NaN (see `vec3::normalize`).
pub fn basis_exact(n: [f32; 3], v: [f32; 3]) -> ([f32; 3], [f32; 3]) {
    let t = normalize(cross(n, v));
    let s = cross(t, n);
    (s, t)
}

/// Hardware reciprocal-square-root estimate, relative error at most
/// 1.5 * 2^-12. SSE is baseline on x86_64.
#[cfg(target_arch = "x86_64")]
#[inline]
fn rsqrt_estimate(x: f32) -> f32 {
    use std::arch::x86_64::{_mm_cvtss_f32, _mm_rsqrt_ss, _mm_set_ss};

    unsafe { _mm_cvtss_f32(_mm_rsqrt_ss(_mm_set_ss(x))) }
}

/// Bit-pattern reciprocal-square-root estimate for targets without a
/// hardware one. Coarser (~3.4e-2 relative), tightened by the
/// Newton-Raphson step in `basis_fast`.
#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn rsqrt_estimate(x: f32) -> f32 {
    f32::from_bits(0x5f37_59df_u32.wrapping_sub(x.to_bits() >> 1))
}

/// Fast tangent-frame construction.
///
/// Agrees with `basis_exact` componentwise to within ~1e-3 relative for
/// non-degenerate inputs. For `v` parallel to `n` (zero cross product)
/// it returns `t = [0, 0, 0]` and `s = [0, 0, 0]` rather than NaN.
pub fn basis_fast(n: [f32; 3], v: [f32; 3]) -> ([f32; 3], [f32; 3]) {
    let u = cross(n, v);
    let lsqr = dot(u, u);

    // One Newton-Raphson refinement of the estimate.
    let r0 = rsqrt_estimate(lsqr);
    let r1 = r0 * 0.5 * (3.0 - lsqr * r0 * r0);

    // lsqr == 0 would turn the refinement into NaN; keep the raw cross
    // product in that case so the output stays finite.
    let t = if lsqr > 0.0 { scale(u, r1) } else { u };
    let s = cross(t, n);
    (s, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::length;

    #[test]
    fn axis_aligned_frame_matches_hand_computation() {
        // n = +x, v = +y: n x v = +z, so t = +z and s = t x n = +y.
        let (s, t) = basis_exact([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(t, [0.0, 0.0, 1.0]);
        assert_eq!(s, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn fast_path_close_to_exact_on_axis_frame() {
        let (s, t) = basis_fast([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!((t[2] - 1.0).abs() < 2e-3, "t = {:?}", t);
        assert!((s[1] - 1.0).abs() < 2e-3, "s = {:?}", s);
        assert!((length(t) - 1.0).abs() < 2e-3);
        assert!((length(s) - 1.0).abs() < 2e-3);
    }

    #[test]
    fn fast_path_guards_parallel_inputs() {
        let n = [0.0, 0.0, 1.0];
        let (s, t) = basis_fast(n, scale(n, 2.5));
        assert_eq!(t, [0.0, 0.0, 0.0]);
        assert_eq!(s, [0.0, 0.0, 0.0]);
    }
}
