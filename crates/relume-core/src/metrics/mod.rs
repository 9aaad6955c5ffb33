//! Image quality metrics
//!
//! Two pure statistics over grayscale images, consumed for reporting only:
//! Shannon entropy of the intensity distribution, and the Contrast
//! Improvement Index (CII), the ratio of enhanced to original intensity
//! standard deviation.
//!
//! Absent images are defined sentinels (`0.0`), not errors, and a constant
//! original image makes the CII positive infinity rather than a failure.


use crate::image::Image;
use serde::Serialize;

/// Shannon entropy of the intensity histogram, in bits.
///
/// Computed over every sample; callers pass single-channel grayscale images.
/// Bounded by `[0, 8]` for 8-bit data: a constant image yields exactly 0.0
/// and a perfectly uniform 256-level histogram exactly 8.0. An absent image
/// yields 0.0 by convention.
pub fn entropy(image: Option<&Image>) -> f64 {
    let Some(image) = image else {
        return 0.0;
    };
    if image.data.is_empty() {
        return 0.0;
    }

    let mut histogram = [0u64; 256];
    for &v in &image.data {
        histogram[v as usize] += 1;
    }

    let total = image.data.len() as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Contrast Improvement Index: enhanced over original population standard
/// deviation.
///
/// Either image absent yields 0.0. A zero-deviation (constant) original
/// yields `f64::INFINITY`; callers must render the non-finite value, not
/// treat it as a failure.
pub fn cii(original: Option<&Image>, enhanced: Option<&Image>) -> f64 {
    let (Some(original), Some(enhanced)) = (original, enhanced) else {
        return 0.0;
    };

    let std_original = std_dev(&original.data);
    let std_enhanced = std_dev(&enhanced.data);

    if std_original == 0.0 {
        return f64::INFINITY;
    }
    std_enhanced / std_original
}

/// Population standard deviation of 8-bit samples.
fn std_dev(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}

/// The metric triple reported after each enhancement call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsReport {
    pub entropy_original: f64,
    pub entropy_enhanced: f64,
    pub cii: f64,
}

/// Compute the full report for one original/enhanced grayscale pair.
pub fn evaluate(original: Option<&Image>, enhanced: Option<&Image>) -> MetricsReport {
    MetricsReport {
        entropy_original: entropy(original),
        entropy_enhanced: entropy(enhanced),
        cii: cii(original, enhanced),
    }
}
