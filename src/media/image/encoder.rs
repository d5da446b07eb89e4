use image::RgbaImage;
use log::debug;

use super::channel::{ChannelPlane, CARRIER_CHANNEL};
use super::coefficient::CoefficientCodec;
use super::cursor::RasterLayout;
use super::header::HeaderCodec;
use super::transform::{forward, inverse};
use crate::media::codec_options::DctCodecOptions;
use crate::media::payload::Payload;
use crate::{Result, SteganoError};

/// Hides a payload in the DCT coefficients of an `RgbaImage`
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use stegano_dct::media::image::DctCodec;
/// use stegano_dct::DctCodecOptions;
///
/// let mut image = RgbaImage::from_pixel(64, 64, image::Rgba([128, 128, 128, 255]));
/// DctCodec::encoder(&mut image, &DctCodecOptions::default())
///     .hide_data(b"A")
///     .expect("Cannot hide the secret");
///
/// let secret = DctCodec::decoder(&image, &DctCodecOptions::default())
///     .unveil()
///     .expect("Cannot unveil the secret");
/// assert_eq!(secret, b"A");
/// ```
pub struct DctEncoder<'a> {
    carrier: &'a mut RgbaImage,
    codec: CoefficientCodec,
    options: DctCodecOptions,
}

impl<'a> DctEncoder<'a> {
    pub fn new(carrier: &'a mut RgbaImage, options: &DctCodecOptions) -> Self {
        Self {
            carrier,
            codec: CoefficientCodec::new(options.epsilon),
            options: options.clone(),
        }
    }

    pub fn hide_data(&mut self, data: &[u8]) -> Result<()> {
        self.hide(&Payload::from_bytes(data))
    }

    /// Writes the length header and all payload bits into the carrier.
    /// Every error is raised before the carrier is touched.
    pub fn hide(&mut self, payload: &Payload) -> Result<()> {
        self.options.validate()?;
        let (width, height) = self.carrier.dimensions();
        let layout = RasterLayout::new(width as usize, height as usize);

        let available = layout.payload_capacity();
        if available == 0 {
            return Err(SteganoError::ImageTooSmall { width, height });
        }
        if payload.len() > available {
            return Err(SteganoError::PayloadTooLarge {
                required: payload.len(),
                available,
            });
        }

        let mut grid = forward(&ChannelPlane::from_image(self.carrier, CARRIER_CHANNEL));
        HeaderCodec::write(self.carrier, &layout, payload.len());
        for (block, bit) in layout.carrier_blocks().zip(payload.bits()) {
            self.codec.hide_bit(&mut grid, block, *bit);
        }
        inverse(&grid).write_into(self.carrier, CARRIER_CHANNEL);

        debug!(
            "Hid {} of {available} bits in a {width}x{height} image, epsilon {}",
            payload.len(),
            self.codec.epsilon()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::channel::MARKER_CHANNEL;
    use crate::test_utils::{prepare_smooth_gradient_image, prepare_uniform_image};

    #[test]
    fn should_reject_a_payload_that_exceeds_the_capacity() {
        let img_ro = prepare_smooth_gradient_image(64, 64);
        let mut img = img_ro.clone();

        let result = DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"abcd");

        match result {
            Err(SteganoError::PayloadTooLarge {
                required: 32,
                available: 28,
            }) => (),
            other => panic!("expected a capacity error, got {other:?}"),
        }
        assert_eq!(img, img_ro, "carrier must stay untouched");
    }

    #[test]
    fn should_reject_an_image_without_carrier_blocks() {
        let mut img = prepare_uniform_image(7, 7, 128);

        match DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"") {
            Err(SteganoError::ImageTooSmall {
                width: 7,
                height: 7,
            }) => (),
            other => panic!("expected a too small image, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_invalid_epsilon_before_touching_the_carrier() {
        let img_ro = prepare_uniform_image(64, 64, 128);
        let mut img = img_ro.clone();
        let options = DctCodecOptions::default().with_epsilon(-2.0);

        assert!(DctEncoder::new(&mut img, &options).hide_data(b"A").is_err());
        assert_eq!(img, img_ro);
    }

    #[test]
    fn should_only_change_carrier_and_marker_channel() -> Result<()> {
        let img_ro = prepare_smooth_gradient_image(64, 64);
        let mut img = img_ro.clone();

        DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"Hi")?;

        let mut carrier_changed = false;
        for (given, expected) in img.pixels().zip(img_ro.pixels()) {
            assert_eq!(given.0[0], expected.0[0]);
            assert_eq!(given.0[3], expected.0[3]);
            assert!(given.0[MARKER_CHANNEL].abs_diff(expected.0[MARKER_CHANNEL]) <= 1);
            carrier_changed |= given.0[CARRIER_CHANNEL] != expected.0[CARRIER_CHANNEL];
        }
        assert!(carrier_changed);
        Ok(())
    }

    #[test]
    fn should_leave_the_image_below_the_carrier_rows_untouched() -> Result<()> {
        let img_ro = prepare_smooth_gradient_image(64, 64);
        let mut img = img_ro.clone();

        DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"Hi")?;

        for y in 56..64 {
            for x in 0..64 {
                assert_eq!(img.get_pixel(x, y), img_ro.get_pixel(x, y));
            }
        }
        Ok(())
    }
}
