// src/bin/uniformity.rs
//
// Uniformity check for the counter sampler: draw a batch of floats for a
// fixed scramble seed and save a histogram so deviations from a flat
// profile are visible at a glance.
//
// Run:
//   cargo run --release --bin uniformity
//
// Output:
//   out/uniformity/histogram.png

use std::fs::create_dir_all;
use std::path::Path;

use tangent_frame::hash::hash_u32;
use tangent_frame::random::pseudo_random_f32;
use tangent_frame::visualisation::save_unit_histogram;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let n_samples: u32 = 100_000;
    let scramble = hash_u32(0);

    let samples: Vec<f32> = (0..n_samples)
        .map(|i| pseudo_random_f32(i, scramble))
        .collect();

    create_dir_all(Path::new("out").join("uniformity"))?;
    let filename = "out/uniformity/histogram.png";
    save_unit_histogram(
        &samples,
        64,
        filename,
        "counter sampler, 100k draws (flat = uniform)",
    )?;

    let mean: f64 = samples.iter().map(|&x| f64::from(x)).sum::<f64>() / f64::from(n_samples);
    println!("sample mean: {mean:.5} (ideal 0.5)");
    println!("wrote {filename}");

    Ok(())
}
