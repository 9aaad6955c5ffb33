//! Decode/encode glue for the core image type
//!
//! File decoding and encoding is the `image` crate's job; the core only sees
//! the in-memory BGR representation. The channel swap happens here, once, at
//! the boundary.

use std::path::Path;

use relume_core::Image;

/// Decode any supported file into a 3-channel BGR core image.
pub fn load_bgr_image<P: AsRef<Path>>(path: P) -> Result<Image, String> {
    let path = path.as_ref();
    let decoded = image::open(path)
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for pixel in rgb.pixels() {
        let [r, g, b] = pixel.0;
        data.push(b);
        data.push(g);
        data.push(r);
    }

    Image::from_raw(width, height, 3, data)
}

/// Encode a 3-channel BGR core image to disk; the format follows the output
/// path's extension.
pub fn save_bgr_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), String> {
    let path = path.as_ref();
    image.expect_channels(3, "save_bgr_image")?;

    let mut data = Vec::with_capacity(image.data.len());
    for pixel in image.data.chunks_exact(3) {
        data.push(pixel[2]);
        data.push(pixel[1]);
        data.push(pixel[0]);
    }

    let rgb = image::RgbImage::from_raw(image.width, image.height, data)
        .ok_or_else(|| "Failed to build output image buffer".to_string())?;
    rgb.save(path)
        .map_err(|e| format!("Failed to encode {}: {}", path.display(), e))
}
