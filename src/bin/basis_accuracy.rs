// src/bin/basis_accuracy.rs
//
// Fast-vs-exact comparison sweep: draw random (normal, reference) pairs
// from the counter sampler, build the tangent frame with both paths and
// record the worst componentwise deviation plus the orthogonality
// residuals of the fast path.
//
// Run:
//   cargo run --release --bin basis_accuracy
//
// Output:
//   out/basis_accuracy/errors.csv   (one row per sampled frame)

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use tangent_frame::basis::{basis_exact, basis_fast};
use tangent_frame::fpenv::enable_flush_to_zero;
use tangent_frame::hash::hash_u32;
use tangent_frame::random::pseudo_random_f32;
use tangent_frame::vec3::{cross, dot, length, length_sqr, normalize, scale};

/// Draw one non-degenerate (n, v) pair, or None if the raw draws are too
/// close to a singular configuration to make a fair comparison.
fn sample_inputs(frame: u32, scramble: u32, scaler: f32) -> Option<([f32; 3], [f32; 3])> {
    let mut index = frame.wrapping_mul(6);
    let draw = |index: &mut u32| -> f32 {
        let x = pseudo_random_f32(*index, scramble);
        *index += 1;
        x
    };

    let raw_n = [
        draw(&mut index) - 0.5,
        draw(&mut index) - 0.5,
        draw(&mut index) - 0.5,
    ];
    if length(raw_n) < 0.05 {
        return None;
    }
    let n = normalize(raw_n);

    let v = scale(
        [
            draw(&mut index) - 0.5,
            draw(&mut index) - 0.5,
            draw(&mut index) - 0.5,
        ],
        scaler,
    );
    // Exclude short references and near-parallel pairs; the exact path
    // is undefined at the singularity and loses accuracy approaching it.
    if length_sqr(v) < 1.0 || length_sqr(cross(n, v)) < 0.01 * length_sqr(v) {
        return None;
    }

    Some((n, v))
}

fn max_component_diff(a: [f32; 3], b: [f32; 3]) -> f32 {
    (0..3).fold(0.0f32, |acc, i| acc.max((a[i] - b[i]).abs()))
}

fn main() -> std::io::Result<()> {
    enable_flush_to_zero();

    let n_frames: u32 = 10_000;
    let scramble = hash_u32(1);
    let scaler = 23.0;

    let out_dir = Path::new("out").join("basis_accuracy");
    create_dir_all(&out_dir)?;
    let mut w = BufWriter::new(File::create(out_dir.join("errors.csv"))?);
    writeln!(w, "frame,max_diff,cos_st,cos_sn,cos_nt")?;

    let mut used = 0u32;
    let mut max_diff = 0.0f32;
    let mut sum_diff = 0.0f64;

    for frame in 0..n_frames {
        let (n, v) = match sample_inputs(frame, scramble, scaler) {
            Some(pair) => pair,
            None => continue,
        };

        let (s_exact, t_exact) = basis_exact(n, v);
        let (s_fast, t_fast) = basis_fast(n, v);

        let diff = max_component_diff(s_fast, s_exact).max(max_component_diff(t_fast, t_exact));
        max_diff = max_diff.max(diff);
        sum_diff += f64::from(diff);
        used += 1;

        writeln!(
            w,
            "{},{:.3e},{:.3e},{:.3e},{:.3e}",
            frame,
            diff,
            dot(s_fast, t_fast),
            dot(s_fast, n),
            dot(n, t_fast)
        )?;
    }

    println!("frames compared: {used} of {n_frames} sampled");
    println!("max componentwise |fast - exact|: {max_diff:.3e}");
    println!("mean componentwise |fast - exact|: {:.3e}", sum_diff / f64::from(used.max(1)));

    Ok(())
}
