//! Tests for the enhancement pipeline and gamma stage

use super::*;
use crate::metrics::entropy;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 256x256 color image, left half black, right half white, all channels
/// equal. Its grayscale entropy is exactly 1.0 bit.
fn half_split_image() -> Image {
    let mut data = Vec::with_capacity(256 * 256 * 3);
    for _y in 0..256 {
        for x in 0..256 {
            let v = if x < 128 { 0u8 } else { 255u8 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    Image::from_raw(256, 256, 3, data).unwrap()
}

#[test]
fn test_gamma_identity() {
    let table = gamma_table(1.0);
    for (i, &v) in table.iter().enumerate() {
        assert!(
            (v as i32 - i as i32).abs() <= 1,
            "gamma 1.0 should be the identity map, table[{}] = {}",
            i,
            v
        );
    }
}

#[test]
fn test_gamma_table_monotone() {
    for &gamma in &[0.5, 0.6, 0.75, 0.9, 0.99] {
        let table = gamma_table(gamma);
        for i in 1..256 {
            assert!(
                table[i] >= table[i - 1],
                "gamma {} curve not monotone at {}",
                gamma,
                i
            );
        }
    }
}

#[test]
fn test_gamma_below_one_brightens() {
    let table = gamma_table(0.5);
    for (i, &v) in table.iter().enumerate() {
        assert!(
            v as usize >= i,
            "concave curve must lift every level, table[{}] = {}",
            i,
            v
        );
    }
    // End points are fixed
    assert_eq!(table[0], 0);
    assert_eq!(table[255], 255);
}

#[test]
fn test_apply_gamma_preserves_shape() {
    let img = Image::filled(20, 10, 3, 64);
    let out = apply_gamma(&img, 0.7);
    assert!(img.same_shape(&out));
    // gamma < 1 brightens mid-tones
    assert!(out.data[0] > img.data[0]);
}

#[test]
fn test_draw_gamma_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let g = draw_gamma(&mut rng);
        assert!((GAMMA_MIN..=GAMMA_MAX).contains(&g), "gamma {} out of range", g);
    }
}

#[test]
fn test_enhance_none_is_noop() {
    let result = enhance(None, &EnhanceOptions::default()).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_enhance_rejects_grayscale() {
    let gray = Image::filled(16, 16, 1, 100);
    assert!(enhance(Some(&gray), &EnhanceOptions::default()).is_err());
}

#[test]
fn test_enhance_allocates_fresh_output() {
    let img = Image::filled(64, 48, 3, 40);
    let before = img.clone();
    let options = EnhanceOptions {
        gamma: Some(0.8),
        ..Default::default()
    };
    let out = enhance(Some(&img), &options).unwrap().unwrap();
    assert_eq!(img, before, "input must not be mutated");
    assert!(img.same_shape(&out));
}

#[test]
fn test_enhance_deterministic_with_fixed_gamma() {
    let img = half_split_image();
    let options = EnhanceOptions {
        gamma: Some(0.75),
        ..Default::default()
    };
    let a = enhance(Some(&img), &options).unwrap().unwrap();
    let b = enhance(Some(&img), &options).unwrap().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_end_to_end_entropy_not_reduced() {
    let img = half_split_image();
    let original_entropy = entropy(Some(&img.to_grayscale().unwrap()));
    assert!((original_entropy - 1.0).abs() < 1e-12);

    let options = EnhanceOptions {
        gamma: Some(0.75),
        ..Default::default()
    };
    let enhanced = enhance(Some(&img), &options).unwrap().unwrap();
    let enhanced_entropy = entropy(Some(&enhanced.to_grayscale().unwrap()));

    assert!(
        enhanced_entropy >= original_entropy - 1e-6,
        "enhancement dropped entropy below the two-level baseline: {} < {}",
        enhanced_entropy,
        original_entropy
    );
}
