//! Enhance command: decode, enhance, report metrics, encode.

use std::path::PathBuf;

use relume_core::config;
use relume_core::metrics::evaluate;
use relume_core::pipeline::{enhance, EnhanceOptions};
use relume_core::verbose_println;

use relume_cli::processing::is_supported_input;
use relume_cli::{
    determine_output_path, load_bgr_image, parse_tile_grid, save_bgr_image, SUPPORTED_EXTENSIONS,
};

/// Render a metric value, keeping the infinite CII sentinel readable.
fn format_metric(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.4}", value)
    }
}

/// Execute the enhance command on a single image.
pub fn cmd_enhance(
    input: PathBuf,
    output: Option<PathBuf>,
    gamma: Option<f32>,
    clip_limit: Option<f32>,
    tile_grid: Option<String>,
    no_metrics: bool,
) -> Result<(), String> {
    if !is_supported_input(&input) {
        return Err(format!(
            "Unsupported input {}: expected one of {}",
            input.display(),
            SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    if let Some(g) = gamma {
        if !g.is_finite() || g <= 0.0 {
            return Err(format!("Invalid gamma {}: must be positive", g));
        }
    }

    config::log_config_usage();
    let defaults = &config::config_handle().config.defaults;

    let mut clahe = defaults.clahe_params();
    if let Some(clip) = clip_limit {
        clahe.clip_limit = clip;
    }
    if let Some(grid) = &tile_grid {
        let (rows, cols) = parse_tile_grid(grid)?;
        clahe.tile_rows = rows;
        clahe.tile_cols = cols;
    }
    let clahe = clahe.sanitized();

    verbose_println!(
        "[relume] Enhancing {} (clip {}, grid {}x{}, gamma {})",
        input.display(),
        clahe.clip_limit,
        clahe.tile_rows,
        clahe.tile_cols,
        gamma.map_or_else(|| "random".to_string(), |g| g.to_string())
    );

    let original = load_bgr_image(&input)?;
    let options = EnhanceOptions { gamma, clahe };

    let enhanced = enhance(Some(&original), &options)?
        .ok_or_else(|| "Enhancement produced no image".to_string())?;

    if !no_metrics {
        let original_gray = original.to_grayscale()?;
        let enhanced_gray = enhanced.to_grayscale()?;
        let report = evaluate(Some(&original_gray), Some(&enhanced_gray));

        println!("Original entropy:           {}", format_metric(report.entropy_original));
        println!("Enhanced entropy:           {}", format_metric(report.entropy_enhanced));
        println!("Contrast Improvement Index: {}", format_metric(report.cii));
    }

    let output_path = determine_output_path(&input, output);
    save_bgr_image(&enhanced, &output_path)?;
    println!("Saved: {}", output_path.display());

    Ok(())
}
