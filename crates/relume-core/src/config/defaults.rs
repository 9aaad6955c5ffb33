//! Built-in enhancement defaults and their sanitization

use serde::Deserialize;

use crate::detect::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::equalize::{ClaheParams, DEFAULT_CLIP_LIMIT, DEFAULT_TILE_COLS, DEFAULT_TILE_ROWS};

/// Tunable defaults loadable from a config file.
///
/// These are process-wide values read once at startup; per-call behavior
/// (the gamma draw) is deliberately not configurable here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnhanceDefaults {
    /// Equalizer histogram clip ceiling
    pub clip_limit: f32,

    /// Equalizer tile grid rows
    pub tile_rows: u32,

    /// Equalizer tile grid columns
    pub tile_cols: u32,

    /// Detector confidence threshold handed to the collaborator
    pub confidence_threshold: f32,
}

impl Default for EnhanceDefaults {
    fn default() -> Self {
        Self {
            clip_limit: DEFAULT_CLIP_LIMIT,
            tile_rows: DEFAULT_TILE_ROWS,
            tile_cols: DEFAULT_TILE_COLS,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl EnhanceDefaults {
    /// Clamp loaded values into usable ranges, replacing nonsense with the
    /// built-in defaults.
    pub fn sanitize(&mut self) {
        let clahe = self.clahe_params().sanitized();
        self.clip_limit = clahe.clip_limit;
        self.tile_rows = clahe.tile_rows;
        self.tile_cols = clahe.tile_cols;

        if !self.confidence_threshold.is_finite()
            || !(0.0..=1.0).contains(&self.confidence_threshold)
        {
            self.confidence_threshold = DEFAULT_CONFIDENCE_THRESHOLD;
        }
    }

    /// View the equalizer portion as pipeline parameters.
    pub fn clahe_params(&self) -> ClaheParams {
        ClaheParams {
            clip_limit: self.clip_limit,
            tile_rows: self.tile_rows,
            tile_cols: self.tile_cols,
        }
    }
}
