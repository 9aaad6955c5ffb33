//! Contrast-limited adaptive histogram equalization
//!
//! Tile-local histogram equalization over a single-channel image, with the
//! per-bin clip limit bounding noise amplification and bilinear blending
//! between neighboring tile curves suppressing blocking artifacts.
//!
//! The whole operation is deterministic given its input and parameters.

#[cfg(test)]
mod tests;

use crate::image::Image;
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;

/// Default per-bin clip ceiling, as a multiple of the uniform bin count.
pub const DEFAULT_CLIP_LIMIT: f32 = 2.0;

/// Default tile grid: 16 rows by 32 columns.
///
/// Deliberately wide and thin rather than square; kept as-is for parity with
/// the tuning the downstream detector was evaluated against.
pub const DEFAULT_TILE_ROWS: u32 = 16;
pub const DEFAULT_TILE_COLS: u32 = 32;

/// Excess redistribution repeats until stable or this many passes.
const MAX_REDISTRIBUTION_PASSES: usize = 64;

/// Equalizer tuning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClaheParams {
    /// Histogram clip ceiling, scaled by tile pixel count over 256 bins
    pub clip_limit: f32,

    /// Tile grid rows
    pub tile_rows: u32,

    /// Tile grid columns
    pub tile_cols: u32,
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: DEFAULT_CLIP_LIMIT,
            tile_rows: DEFAULT_TILE_ROWS,
            tile_cols: DEFAULT_TILE_COLS,
        }
    }
}

impl ClaheParams {
    /// Clamp parameters into usable ranges.
    ///
    /// A clip limit below 1.0 would clip bins under the uniform distribution
    /// and the redistribution pass could never converge, so 1.0 is the floor.
    pub fn sanitized(mut self) -> Self {
        if !self.clip_limit.is_finite() || self.clip_limit < 1.0 {
            self.clip_limit = DEFAULT_CLIP_LIMIT;
        }
        self.tile_rows = self.tile_rows.max(1);
        self.tile_cols = self.tile_cols.max(1);
        self
    }
}

/// Apply contrast-limited adaptive histogram equalization to a grayscale
/// image.
///
/// Tiles are `ceil(height / tile_rows)` by `ceil(width / tile_cols)` pixels,
/// so the grid covers dimensions that do not divide evenly; edge tiles are
/// simply smaller. Pixels outside the outermost tile centers reuse the
/// nearest tile's curve without extrapolation.
pub fn equalize(gray: &Image, params: &ClaheParams) -> Result<Image, String> {
    gray.expect_channels(1, "equalize")?;

    let params = params.sanitized();
    let w = gray.width as usize;
    let h = gray.height as usize;
    if w == 0 || h == 0 {
        return Ok(gray.clone());
    }

    let tiles_x = params.tile_cols as usize;
    let tiles_y = params.tile_rows as usize;
    let tile_w = w.div_ceil(tiles_x);
    let tile_h = h.div_ceil(tiles_y);

    // Per-tile remap curves
    let tile_count = tiles_x * tiles_y;
    let luts: Vec<[u8; 256]> = if gray.data.len() >= PARALLEL_THRESHOLD {
        (0..tile_count)
            .into_par_iter()
            .map(|idx| {
                tile_lut(
                    &gray.data,
                    w,
                    h,
                    idx % tiles_x,
                    idx / tiles_x,
                    tile_w,
                    tile_h,
                    params.clip_limit,
                )
            })
            .collect()
    } else {
        (0..tile_count)
            .map(|idx| {
                tile_lut(
                    &gray.data,
                    w,
                    h,
                    idx % tiles_x,
                    idx / tiles_x,
                    tile_w,
                    tile_h,
                    params.clip_limit,
                )
            })
            .collect()
    };

    // Blend between the four nearest tile curves per pixel
    let mut output = vec![0u8; w * h];
    if gray.data.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, out_row)| {
                interpolate_row(
                    &gray.data[y * w..(y + 1) * w],
                    out_row,
                    y,
                    &luts,
                    tiles_x,
                    tiles_y,
                    tile_w,
                    tile_h,
                );
            });
    } else {
        for (y, out_row) in output.chunks_mut(w).enumerate() {
            interpolate_row(
                &gray.data[y * w..(y + 1) * w],
                out_row,
                y,
                &luts,
                tiles_x,
                tiles_y,
                tile_w,
                tile_h,
            );
        }
    }

    Image::from_raw(gray.width, gray.height, 1, output)
}

/// Build the remap curve for one tile: histogram, clip, redistribute, CDF.
#[allow(clippy::too_many_arguments)]
fn tile_lut(
    data: &[u8],
    w: usize,
    h: usize,
    tx: usize,
    ty: usize,
    tile_w: usize,
    tile_h: usize,
    clip_limit: f32,
) -> [u8; 256] {
    let x0 = tx * tile_w;
    let y0 = ty * tile_h;
    let x1 = (x0 + tile_w).min(w);
    let y1 = (y0 + tile_h).min(h);

    // Degenerate grid cell past the image edge: identity curve
    if x0 >= x1 || y0 >= y1 {
        let mut lut = [0u8; 256];
        for (i, v) in lut.iter_mut().enumerate() {
            *v = i as u8;
        }
        return lut;
    }

    let tile_area = (x1 - x0) * (y1 - y0);

    let mut hist = [0u32; 256];
    for row in data[y0 * w..y1 * w].chunks_exact(w) {
        for &val in &row[x0..x1] {
            hist[val as usize] += 1;
        }
    }

    let bin_limit = ((clip_limit * tile_area as f32) / 256.0).max(1.0) as u32;
    clip_histogram(&mut hist, bin_limit);

    // Cumulative distribution scaled back to [0, 255]
    let scale = 255.0 / tile_area as f32;
    let mut lut = [0u8; 256];
    let mut cdf = 0u32;
    for (i, &count) in hist.iter().enumerate() {
        cdf += count;
        lut[i] = (cdf as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Clip histogram bins at `limit` and redistribute the excess uniformly.
///
/// Redistribution is iterated to a fixed point: a pass can push bins back
/// over the limit, so the loop re-clips until no excess remains (bounded by
/// [`MAX_REDISTRIBUTION_PASSES`]). Total mass is preserved between passes.
fn clip_histogram(hist: &mut [u32; 256], limit: u32) {
    for _ in 0..MAX_REDISTRIBUTION_PASSES {
        let mut excess = 0u32;
        for bin in hist.iter_mut() {
            if *bin > limit {
                excess += *bin - limit;
                *bin = limit;
            }
        }
        if excess == 0 {
            return;
        }

        let step = excess / 256;
        let remainder = (excess % 256) as usize;

        if step > 0 {
            for bin in hist.iter_mut() {
                *bin += step;
            }
        }

        // Spread the remainder across the range rather than piling it into
        // the lowest bins
        if remainder > 0 {
            let stride = (256 / remainder).max(1);
            let mut placed = 0;
            let mut i = 0;
            while placed < remainder && i < 256 {
                hist[i] += 1;
                placed += 1;
                i += stride;
            }
        }
    }
}

/// Remap one output row by bilinear interpolation between tile curves.
///
/// Tile coordinates follow the uniform `tile_w`/`tile_h` spacing; indices are
/// clamped at the grid border so edge pixels take the nearest curve.
#[allow(clippy::too_many_arguments)]
fn interpolate_row(
    in_row: &[u8],
    out_row: &mut [u8],
    y: usize,
    luts: &[[u8; 256]],
    tiles_x: usize,
    tiles_y: usize,
    tile_w: usize,
    tile_h: usize,
) {
    let tyf = y as f32 / tile_h as f32 - 0.5;
    let ty_floor = tyf.floor() as isize;
    let wy = tyf - ty_floor as f32;
    // Clamping both indices from the unclamped floor collapses them to the
    // same tile outside the outermost tile centers, so border pixels take the
    // nearest curve instead of extrapolating
    let ty0 = ty_floor.clamp(0, tiles_y as isize - 1) as usize;
    let ty1 = (ty_floor + 1).clamp(0, tiles_y as isize - 1) as usize;

    for (x, (&val, out)) in in_row.iter().zip(out_row.iter_mut()).enumerate() {
        let txf = x as f32 / tile_w as f32 - 0.5;
        let tx_floor = txf.floor() as isize;
        let wx = txf - tx_floor as f32;
        let tx0 = tx_floor.clamp(0, tiles_x as isize - 1) as usize;
        let tx1 = (tx_floor + 1).clamp(0, tiles_x as isize - 1) as usize;

        let v = val as usize;
        let tl = luts[ty0 * tiles_x + tx0][v] as f32;
        let tr = luts[ty0 * tiles_x + tx1][v] as f32;
        let bl = luts[ty1 * tiles_x + tx0][v] as f32;
        let br = luts[ty1 * tiles_x + tx1][v] as f32;

        let top = tl * (1.0 - wx) + tr * wx;
        let bottom = bl * (1.0 - wx) + br * wx;
        let blended = top * (1.0 - wy) + bottom * wy;

        *out = blended.round().clamp(0.0, 255.0) as u8;
    }
}
