//! Relume Core Library
//!
//! Contrast and illumination enhancement for low-light images, plus the
//! statistical quality metrics used to judge the result before it is handed
//! to an object detector.
//!
//! The enhancement pipeline is a fixed chain: gamma correction over the full
//! color image, conversion to YCrCb, contrast-limited adaptive histogram
//! equalization on the luminance channel only, and conversion back to BGR.
//! Metrics (Shannon entropy and the Contrast Improvement Index) are computed
//! separately over grayscale derivations of the original and enhanced images.

pub mod color;
pub mod config;
pub mod detect;
pub mod equalize;
pub mod image;
pub mod metrics;
pub mod pipeline;

// Re-export commonly used types
pub use detect::{
    count_detections, BoundingBox, Detection, DetectionCounts, Detector,
    DEFAULT_CONFIDENCE_THRESHOLD,
};
pub use equalize::ClaheParams;
pub use image::Image;
pub use metrics::{cii, entropy, evaluate, MetricsReport};
pub use pipeline::{apply_gamma, draw_gamma, enhance, EnhanceOptions};

/// Pixel-count cutoff above which per-pixel loops switch to rayon.
pub(crate) const PARALLEL_THRESHOLD: usize = 100_000;
