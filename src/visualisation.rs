// src/visualisation.rs

use plotters::prelude::*;

/// Save a histogram of unit-interval samples as a PNG with axes and
/// labels. A perfectly uniform generator draws a flat profile at
/// `samples.len() / n_bins` counts per bin.
pub fn save_unit_histogram(
    samples: &[f32],
    n_bins: usize,
    filename: &str,
    caption: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut counts = vec![0usize; n_bins];
    for &x in samples {
        // Values are in [0, 1); clamp anyway so a stray 1.0 cannot index
        // past the last bin.
        let bin = ((x * n_bins as f32) as usize).min(n_bins - 1);
        counts[bin] += 1;
    }

    let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
    let y_top = max_count + max_count / 10 + 1;

    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .caption(caption, ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0f32..1.0f32, 0usize..y_top)?;

    chart
        .configure_mesh()
        .x_desc("value")
        .y_desc("count")
        .draw()?;

    let bin_width = 1.0f32 / n_bins as f32;
    chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
        let x0 = i as f32 * bin_width;
        Rectangle::new([(x0, 0), (x0 + bin_width, c)], BLUE.mix(0.5).filled())
    }))?;

    root.present()?;
    Ok(())
}
