//! Luma/chroma colorspace conversion
//!
//! BT.601 full-range YCrCb, the 8-bit variant: brightness lands in Y and the
//! color difference signals in Cr/Cb, so the equalizer can work on luminance
//! without shifting hue. The transform is per-pixel and stateless; it is
//! lossy only through rounding, and a round trip stays within +-2 levels.


use crate::image::Image;
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;

/// Chroma channels are offset so that zero color difference sits at 128.
const CHROMA_OFFSET: f32 = 128.0;

/// Convert a 3-channel BGR image to YCrCb.
///
/// Output pixel order is [Y, Cr, Cb]. Rejects anything that is not exactly
/// 3-channel.
pub fn to_ycrcb(image: &Image) -> Result<Image, String> {
    image.expect_channels(3, "to_ycrcb")?;

    let mut data = image.data.clone();
    if image.pixel_count() >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(3).for_each(forward_pixel);
    } else {
        for pixel in data.chunks_exact_mut(3) {
            forward_pixel(pixel);
        }
    }

    Image::from_raw(image.width, image.height, 3, data)
}

/// Convert a 3-channel YCrCb image back to BGR. Exact inverse of [`to_ycrcb`]
/// up to rounding.
pub fn from_ycrcb(image: &Image) -> Result<Image, String> {
    image.expect_channels(3, "from_ycrcb")?;

    let mut data = image.data.clone();
    if image.pixel_count() >= PARALLEL_THRESHOLD {
        data.par_chunks_exact_mut(3).for_each(inverse_pixel);
    } else {
        for pixel in data.chunks_exact_mut(3) {
            inverse_pixel(pixel);
        }
    }

    Image::from_raw(image.width, image.height, 3, data)
}

#[inline]
fn forward_pixel(pixel: &mut [u8]) {
    let b = pixel[0] as f32;
    let g = pixel[1] as f32;
    let r = pixel[2] as f32;

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cr = (r - y) * 0.713 + CHROMA_OFFSET;
    let cb = (b - y) * 0.564 + CHROMA_OFFSET;

    pixel[0] = y.round().clamp(0.0, 255.0) as u8;
    pixel[1] = cr.round().clamp(0.0, 255.0) as u8;
    pixel[2] = cb.round().clamp(0.0, 255.0) as u8;
}

#[inline]
fn inverse_pixel(pixel: &mut [u8]) {
    let y = pixel[0] as f32;
    let cr = pixel[1] as f32 - CHROMA_OFFSET;
    let cb = pixel[2] as f32 - CHROMA_OFFSET;

    let r = y + 1.403 * cr;
    let g = y - 0.714 * cr - 0.344 * cb;
    let b = y + 1.773 * cb;

    pixel[0] = b.round().clamp(0.0, 255.0) as u8;
    pixel[1] = g.round().clamp(0.0, 255.0) as u8;
    pixel[2] = r.round().clamp(0.0, 255.0) as u8;
}

/// Split a 3-channel image into three single-channel planes.
pub fn split3(image: &Image) -> Result<[Image; 3], String> {
    image.expect_channels(3, "split3")?;

    let pixels = image.pixel_count();
    let mut planes = [
        Vec::with_capacity(pixels),
        Vec::with_capacity(pixels),
        Vec::with_capacity(pixels),
    ];
    for pixel in image.data.chunks_exact(3) {
        planes[0].push(pixel[0]);
        planes[1].push(pixel[1]);
        planes[2].push(pixel[2]);
    }

    let [p0, p1, p2] = planes;
    Ok([
        Image::from_raw(image.width, image.height, 1, p0)?,
        Image::from_raw(image.width, image.height, 1, p1)?,
        Image::from_raw(image.width, image.height, 1, p2)?,
    ])
}

/// Interleave three single-channel planes into one 3-channel image.
///
/// All planes must share dimensions.
pub fn merge3(c0: &Image, c1: &Image, c2: &Image) -> Result<Image, String> {
    c0.expect_channels(1, "merge3")?;
    c1.expect_channels(1, "merge3")?;
    c2.expect_channels(1, "merge3")?;
    if !c0.same_shape(c1) || !c0.same_shape(c2) {
        return Err(format!(
            "merge3: plane dimensions differ ({}x{}, {}x{}, {}x{})",
            c0.width, c0.height, c1.width, c1.height, c2.width, c2.height
        ));
    }

    let mut data = Vec::with_capacity(c0.data.len() * 3);
    for i in 0..c0.data.len() {
        data.push(c0.data[i]);
        data.push(c1.data[i]);
        data.push(c2.data[i]);
    }

    Image::from_raw(c0.width, c0.height, 3, data)
}
