//! Object detector contract
//!
//! The detector itself is an external collaborator (a pretrained vehicle
//! model); the core only fixes the calling convention so the pipeline and its
//! tests can substitute a stub instead of loading real weights.

use crate::image::Image;
use serde::Serialize;

/// Confidence threshold used by the reference deployment.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Axis-aligned box in pixel coordinates, `(x1, y1)` top-left inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

/// One detection returned by the collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub bbox: BoundingBox,

    /// Class label; the reference label set includes at least
    /// bus, car, motor, and truck
    pub label: String,

    /// Confidence score in [0, 1]
    pub confidence: f32,
}

/// Capability interface for the pretrained detector.
pub trait Detector {
    /// Run detection over an enhanced color image, keeping only detections
    /// at or above `confidence_threshold`.
    fn detect(&self, image: &Image, confidence_threshold: f32)
        -> Result<Vec<Detection>, String>;
}

/// Per-class tallies displayed after a detection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DetectionCounts {
    pub bus: usize,
    pub car: usize,
    pub motor: usize,
    pub truck: usize,

    /// Labels outside the known set, counted but not broken out
    pub other: usize,
}

impl DetectionCounts {
    pub fn total(&self) -> usize {
        self.bus + self.car + self.motor + self.truck + self.other
    }
}

/// Aggregate detections into per-class counts. Labels match
/// case-insensitively.
pub fn count_detections(detections: &[Detection]) -> DetectionCounts {
    let mut counts = DetectionCounts::default();
    for detection in detections {
        match detection.label.to_lowercase().as_str() {
            "bus" => counts.bus += 1,
            "car" => counts.car += 1,
            "motor" => counts.motor += 1,
            "truck" => counts.truck += 1,
            _ => counts.other += 1,
        }
    }
    counts
}
