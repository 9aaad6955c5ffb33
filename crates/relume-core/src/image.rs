//! In-memory image representation
//!
//! All pipeline stages operate on this one type: a row-major grid of 8-bit
//! samples, interleaved per pixel. Color images are 3-channel in BGR order,
//! matching the detector collaborator and the on-disk convention the rest of
//! the system assumes.

/// An 8-bit image, row-major, channels interleaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Number of channels (1 for grayscale, 3 for BGR color)
    pub channels: u8,

    /// Sample data, `width * height * channels` bytes
    pub data: Vec<u8>,
}

impl Image {
    /// Build an image from raw sample data, validating the buffer length.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(format!(
                "Image buffer length {} does not match {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Build a constant-valued image.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        let len = width as usize * height as usize * channels as usize;
        Self {
            width,
            height,
            channels,
            data: vec![value; len],
        }
    }

    /// Number of pixels (not samples).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether two images share spatial dimensions and channel count.
    pub fn same_shape(&self, other: &Image) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }

    /// Reject images with an unexpected channel count.
    ///
    /// Used by stages that only accept a specific layout; the context string
    /// names the rejecting operation in the error message.
    pub fn expect_channels(&self, expected: u8, context: &str) -> Result<(), String> {
        if self.channels != expected {
            return Err(format!(
                "{}: expected {}-channel image, got {} channels",
                context, expected, self.channels
            ));
        }
        Ok(())
    }

    /// Derive a single-channel grayscale image.
    ///
    /// Grayscale input is returned as a copy. Color input is reduced with the
    /// BT.601 luma weights (data is BGR, so the red weight applies to the
    /// third sample of each pixel).
    pub fn to_grayscale(&self) -> Result<Image, String> {
        match self.channels {
            1 => Ok(self.clone()),
            3 => {
                let gray: Vec<u8> = self
                    .data
                    .chunks_exact(3)
                    .map(|bgr| {
                        let y = 0.114 * bgr[0] as f32
                            + 0.587 * bgr[1] as f32
                            + 0.299 * bgr[2] as f32;
                        y.round().clamp(0.0, 255.0) as u8
                    })
                    .collect();
                Image::from_raw(self.width, self.height, 1, gray)
            }
            n => Err(format!(
                "to_grayscale: unsupported channel count {} (expected 1 or 3)",
                n
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_validates_length() {
        assert!(Image::from_raw(4, 4, 3, vec![0u8; 48]).is_ok());
        assert!(Image::from_raw(4, 4, 3, vec![0u8; 47]).is_err());
    }

    #[test]
    fn test_expect_channels() {
        let img = Image::filled(2, 2, 3, 10);
        assert!(img.expect_channels(3, "test").is_ok());
        let err = img.expect_channels(1, "test").unwrap_err();
        assert!(err.contains("expected 1-channel"));
    }

    #[test]
    fn test_grayscale_of_gray_is_identity() {
        let img = Image::filled(3, 2, 1, 77);
        let gray = img.to_grayscale().unwrap();
        assert_eq!(gray, img);
    }

    #[test]
    fn test_grayscale_weights() {
        // Pure red pixel in BGR order
        let img = Image::from_raw(1, 1, 3, vec![0, 0, 255]).unwrap();
        let gray = img.to_grayscale().unwrap();
        assert_eq!(gray.data[0], (0.299f32 * 255.0).round() as u8);

        // Neutral pixel stays put
        let img = Image::from_raw(1, 1, 3, vec![128, 128, 128]).unwrap();
        assert_eq!(img.to_grayscale().unwrap().data[0], 128);
    }

    #[test]
    fn test_grayscale_rejects_two_channel() {
        let img = Image::filled(2, 2, 2, 0);
        assert!(img.to_grayscale().is_err());
    }
}
