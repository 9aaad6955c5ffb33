//! Tests for the adaptive equalizer

use super::*;

/// Horizontal gradient compressed into a narrow band around mid-gray.
fn low_contrast_gradient(width: u32, height: u32) -> Image {
    let mut data = Vec::with_capacity((width * height) as usize);
    for _y in 0..height {
        for x in 0..width {
            let t = x as f32 / (width - 1) as f32;
            data.push((110.0 + t * 40.0).round() as u8);
        }
    }
    Image::from_raw(width, height, 1, data).unwrap()
}

#[test]
fn test_output_shape_and_range() {
    let img = low_contrast_gradient(100, 60);
    let out = equalize(&img, &ClaheParams::default()).unwrap();
    assert_eq!(out.width, img.width);
    assert_eq!(out.height, img.height);
    assert_eq!(out.channels, 1);
    assert_eq!(out.data.len(), img.data.len());
    // u8 output is in range by construction; the interesting check is that
    // the equalizer actually produced data for every pixel
    assert!(out.data.iter().any(|&v| v != 0));
}

#[test]
fn test_deterministic() {
    let img = low_contrast_gradient(128, 128);
    let params = ClaheParams::default();
    let a = equalize(&img, &params).unwrap();
    let b = equalize(&img, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_stretches_low_contrast_input() {
    let img = low_contrast_gradient(256, 128);
    let out = equalize(&img, &ClaheParams::default()).unwrap();

    let spread = |d: &[u8]| {
        let min = *d.iter().min().unwrap() as i32;
        let max = *d.iter().max().unwrap() as i32;
        max - min
    };
    assert!(
        spread(&out.data) > spread(&img.data),
        "equalizer should widen the intensity range of a low-contrast image"
    );
}

#[test]
fn test_uniform_image_stays_nearly_uniform() {
    let img = Image::filled(64, 64, 1, 128);
    let out = equalize(&img, &ClaheParams::default()).unwrap();
    let first = out.data[0] as i32;
    assert!(
        out.data.iter().all(|&v| (v as i32 - first).abs() <= 1),
        "constant input should map to a (nearly) constant output"
    );
}

#[test]
fn test_rejects_color_input() {
    let img = Image::filled(8, 8, 3, 0);
    assert!(equalize(&img, &ClaheParams::default()).is_err());
}

#[test]
fn test_handles_image_smaller_than_grid() {
    // 5x3 image under a 16x32 grid: most grid cells are empty
    let img = low_contrast_gradient(5, 3);
    let out = equalize(&img, &ClaheParams::default()).unwrap();
    assert_eq!(out.width, 5);
    assert_eq!(out.height, 3);
}

#[test]
fn test_non_divisible_dimensions() {
    let img = low_contrast_gradient(250, 94);
    let out = equalize(&img, &ClaheParams::default()).unwrap();
    assert_eq!(out.pixel_count(), img.pixel_count());
}

#[test]
fn test_sanitized_params() {
    let params = ClaheParams {
        clip_limit: 0.0,
        tile_rows: 0,
        tile_cols: 0,
    }
    .sanitized();
    assert_eq!(params.clip_limit, DEFAULT_CLIP_LIMIT);
    assert_eq!(params.tile_rows, 1);
    assert_eq!(params.tile_cols, 1);
}

#[test]
fn test_clip_histogram_caps_bins() {
    let mut hist = [0u32; 256];
    hist[0] = 1000;
    hist[128] = 500;
    clip_histogram(&mut hist, 100);
    assert!(hist.iter().all(|&c| c <= 100));
}

#[test]
fn test_clip_histogram_preserves_mass_until_converged() {
    // Mass fits under the ceiling, so the fixed point keeps every count
    let mut hist = [0u32; 256];
    hist[10] = 300;
    hist[20] = 50;
    let before: u32 = hist.iter().sum();
    clip_histogram(&mut hist, 200);
    let after: u32 = hist.iter().sum();
    assert_eq!(before, after);
    assert!(hist.iter().all(|&c| c <= 200));
}

#[test]
fn test_clip_histogram_noop_below_limit() {
    let mut hist = [0u32; 256];
    hist[5] = 10;
    hist[200] = 10;
    let original = hist;
    clip_histogram(&mut hist, 50);
    assert_eq!(hist, original);
}
