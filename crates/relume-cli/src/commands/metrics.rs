//! Metrics command: entropy and CII for an original/enhanced pair.

use std::path::PathBuf;

use serde::Serialize;

use relume_core::metrics::evaluate;

use relume_cli::load_bgr_image;

/// Metrics result structure for JSON output.
///
/// The CII is carried as a string so the infinite sentinel survives
/// serialization (JSON has no representation for infinity).
#[derive(Serialize)]
struct MetricsOutput {
    original: String,
    enhanced: String,
    entropy_original: f64,
    entropy_enhanced: f64,
    cii: String,
}

fn format_cii(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.4}", value)
    }
}

/// Execute the metrics command over two images on disk.
pub fn cmd_metrics(original: PathBuf, enhanced: PathBuf, json_output: bool) -> Result<(), String> {
    let original_gray = load_bgr_image(&original)?.to_grayscale()?;
    let enhanced_gray = load_bgr_image(&enhanced)?.to_grayscale()?;

    let report = evaluate(Some(&original_gray), Some(&enhanced_gray));

    if json_output {
        let output = MetricsOutput {
            original: original.display().to_string(),
            enhanced: enhanced.display().to_string(),
            entropy_original: report.entropy_original,
            entropy_enhanced: report.entropy_enhanced,
            cii: format_cii(report.cii),
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| format!("Failed to serialize metrics: {}", e))?;
        println!("{}", json);
    } else {
        println!("Original entropy:           {:.4}", report.entropy_original);
        println!("Enhanced entropy:           {:.4}", report.entropy_enhanced);
        println!("Contrast Improvement Index: {}", format_cii(report.cii));
    }

    Ok(())
}
