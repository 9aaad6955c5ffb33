//! Gamma tone mapping
//!
//! Pointwise intensity remap through a 256-entry lookup table. The table is
//! rebuilt per call from a scalar gamma; the enhancement pipeline draws that
//! gamma uniformly from [`GAMMA_MIN`, `GAMMA_MAX`] unless the caller injects
//! a fixed value.

use crate::image::Image;
use crate::PARALLEL_THRESHOLD;
use rand::Rng;
use rayon::prelude::*;

/// Bounds of the per-call gamma draw. Values below 1.0 brighten shadows,
/// which is the point for low-light input.
pub const GAMMA_MIN: f32 = 0.5;
pub const GAMMA_MAX: f32 = 1.0;

/// Draw a gamma value uniformly from [`GAMMA_MIN`, `GAMMA_MAX`].
///
/// The generator is an explicit parameter so tests can seed it; production
/// callers pass `rand::rng()`.
pub fn draw_gamma<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(GAMMA_MIN..=GAMMA_MAX)
}

/// Build the lookup table for one gamma value:
/// `table[i] = round(255 * (i / 255)^gamma)`.
///
/// Monotone nondecreasing for any positive gamma; the identity map at 1.0.
pub fn gamma_table(gamma: f32) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        let normalized = i as f32 / 255.0;
        *entry = (normalized.powf(gamma) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    table
}

/// Remap every sample of every channel through the gamma curve.
///
/// Applied to the full color image, before any colorspace conversion. The
/// output has identical dimensions and channel count.
pub fn apply_gamma(image: &Image, gamma: f32) -> Image {
    let table = gamma_table(gamma);

    let data: Vec<u8> = if image.data.len() >= PARALLEL_THRESHOLD {
        image
            .data
            .par_iter()
            .map(|&v| table[v as usize])
            .collect()
    } else {
        image.data.iter().map(|&v| table[v as usize]).collect()
    };

    Image {
        width: image.width,
        height: image.height,
        channels: image.channels,
        data,
    }
}
