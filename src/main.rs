// src/main.rs
//
// Demonstration driver: draws a random unit normal and a scaled random
// reference direction from the counter sampler, then builds the tangent
// frame with both the exact and the fast path and prints the vectors,
// their lengths and the pairwise cosines for inspection.
//
// Examples:
//
//   cargo run --release
//       -> frame for the default seed input 0 and reference scale 23.
//
//   cargo run --release -- seed=7 scaler=5.0
//       -> different seed, shorter reference vector.
//
//   cargo run --release -- seed=7 out=runs/frame7
//       -> additionally writes runs/frame7/config.json and frame.csv.

use std::env;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tangent_frame::basis::{basis_exact, basis_fast};
use tangent_frame::config::{RunConfig, RunInfo, SamplerConfig};
use tangent_frame::fpenv::enable_flush_to_zero;
use tangent_frame::hash::hash_u32;
use tangent_frame::random::pseudo_random_f32;
use tangent_frame::vec3::{dot, length, normalize};

fn print_frame(title: &str, n: [f32; 3], s: [f32; 3], t: [f32; 3], v: [f32; 3]) {
    println!("{title}:\n");
    println!("n: {:9.6} {:9.6} {:9.6}  l: {:.6}", n[0], n[1], n[2], length(n));
    println!("s: {:9.6} {:9.6} {:9.6}  l: {:.6}", s[0], s[1], s[2], length(s));
    println!("t: {:9.6} {:9.6} {:9.6}  l: {:.6}", t[0], t[1], t[2], length(t));
    println!();
    println!(
        "reference: {:9.6} {:9.6} {:9.6}  l: {:.6}",
        v[0], v[1], v[2], length(v)
    );
    println!();
    println!(
        "cos(st): {:.6}  cos(sn): {:.6}  cos(nt): {:.6}",
        dot(s, t),
        dot(s, n),
        dot(n, t)
    );
    println!();
}

fn write_frame_csv(
    path: &PathBuf,
    rows: &[(&str, &str, [f32; 3])],
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "path,vector,x,y,z,length")?;
    for (which, name, v) in rows {
        writeln!(
            w,
            "{},{},{},{},{},{}",
            which,
            name,
            v[0],
            v[1],
            v[2],
            length(*v)
        )?;
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    // Must run before any basis computation.
    enable_flush_to_zero();

    let mut seed_input: u32 = 0;
    let mut scaler: f32 = 23.0;
    let mut out_dir: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        if let Some(v) = arg.strip_prefix("seed=") {
            match v.parse::<u32>() {
                Ok(val) => seed_input = val,
                Err(_) => eprintln!("Warning: could not parse seed value '{v}', using {seed_input}"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("scaler=") {
            match v.parse::<f32>() {
                Ok(val) => scaler = val,
                Err(_) => eprintln!("Warning: could not parse scaler value '{v}', using {scaler}"),
            }
            continue;
        }
        if let Some(v) = arg.strip_prefix("out=") {
            out_dir = Some(PathBuf::from(v));
            continue;
        }
        eprintln!("Warning: ignoring unknown argument '{arg}'");
    }

    let scramble = hash_u32(seed_input);
    let mut index: u32 = 0;
    let draw = |index: &mut u32| -> f32 {
        let x = pseudo_random_f32(*index, scramble);
        *index += 1;
        x
    };

    let n = normalize([
        draw(&mut index) - 0.5,
        draw(&mut index) - 0.5,
        draw(&mut index) - 0.5,
    ]);

    let v = [
        (draw(&mut index) - 0.5) * scaler,
        (draw(&mut index) - 0.5) * scaler,
        (draw(&mut index) - 0.5) * scaler,
    ];

    let (s_exact, t_exact) = basis_exact(n, v);
    print_frame("Exact basis", n, s_exact, t_exact, v);

    let (s_fast, t_fast) = basis_fast(n, v);
    print_frame("Fast basis", n, s_fast, t_fast, v);

    if let Some(dir) = out_dir {
        create_dir_all(&dir)?;

        let config = RunConfig {
            sampler: SamplerConfig {
                seed_input,
                scramble,
                index_start: 0,
                reference_scale: scaler,
            },
            run: RunInfo {
                binary: "tangent_frame".to_string(),
                run_id: format!("seed{seed_input}"),
            },
        };
        config.write_to_dir(&dir)?;

        write_frame_csv(
            &dir.join("frame.csv"),
            &[
                ("exact", "n", n),
                ("exact", "s", s_exact),
                ("exact", "t", t_exact),
                ("fast", "n", n),
                ("fast", "s", s_fast),
                ("fast", "t", t_fast),
                ("input", "reference", v),
            ],
        )?;

        println!("Wrote config.json and frame.csv to {}", dir.display());
    }

    Ok(())
}
