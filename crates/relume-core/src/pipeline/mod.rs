//! Enhancement pipeline
//!
//! Fixed-order stage chain over one color image:
//! gamma tone map -> YCrCb conversion -> adaptive equalization of the
//! luminance channel -> conversion back to BGR. The chroma planes pass
//! through untouched, so color is preserved while local contrast improves.

mod tonemap;

#[cfg(test)]
mod tests;

pub use tonemap::{apply_gamma, draw_gamma, gamma_table, GAMMA_MAX, GAMMA_MIN};

use crate::color::{from_ycrcb, merge3, split3, to_ycrcb};
use crate::equalize::{equalize, ClaheParams};
use crate::image::Image;

/// Per-invocation pipeline options.
///
/// The defaults reproduce the reference behavior: an independently drawn
/// gamma each call and the stock equalizer constants.
#[derive(Debug, Clone, Default)]
pub struct EnhanceOptions {
    /// Fixed gamma override. `None` draws uniformly from
    /// [`GAMMA_MIN`, `GAMMA_MAX`] per call; tests inject a value here to get
    /// deterministic output.
    pub gamma: Option<f32>,

    /// Equalizer tuning
    pub clahe: ClaheParams,
}

/// Enhance one color image.
///
/// An absent input is a defined no-op: `Ok(None)`, never an error. A present
/// input must be 3-channel BGR; the output is a freshly allocated image of
/// identical dimensions, and the input is never mutated. Any stage failure
/// aborts the whole call with no partial result.
pub fn enhance(image: Option<&Image>, options: &EnhanceOptions) -> Result<Option<Image>, String> {
    let Some(image) = image else {
        return Ok(None);
    };
    image.expect_channels(3, "enhance")?;

    let gamma = options
        .gamma
        .unwrap_or_else(|| draw_gamma(&mut rand::rng()));

    let toned = apply_gamma(image, gamma);
    let ycrcb = to_ycrcb(&toned)?;

    let [luma, cr, cb] = split3(&ycrcb)?;
    let equalized_luma = equalize(&luma, &options.clahe)?;

    let merged = merge3(&equalized_luma, &cr, &cb)?;
    let enhanced = from_ycrcb(&merged)?;

    Ok(Some(enhanced))
}
