use image::RgbaImage;
use log::debug;

use super::channel::{ChannelPlane, CARRIER_CHANNEL};
use super::coefficient::CoefficientCodec;
use super::cursor::RasterLayout;
use super::header::HeaderCodec;
use super::transform::forward;
use crate::media::codec_options::DctCodecOptions;
use crate::media::payload::Payload;
use crate::{Result, SteganoError};

/// Reads a payload back from the DCT coefficients of an `RgbaImage`
pub struct DctDecoder<'a> {
    carrier: &'a RgbaImage,
    codec: CoefficientCodec,
    options: DctCodecOptions,
}

impl<'a> DctDecoder<'a> {
    pub fn new(carrier: &'a RgbaImage, options: &DctCodecOptions) -> Self {
        Self {
            carrier,
            codec: CoefficientCodec::new(options.epsilon),
            options: options.clone(),
        }
    }

    /// the payload packed into bytes
    pub fn unveil(&self) -> Result<Vec<u8>> {
        self.unveil_bits()?.to_bytes()
    }

    /// the payload exactly as many bits as the length header announces
    pub fn unveil_bits(&self) -> Result<Payload> {
        self.options.validate()?;
        let (width, height) = self.carrier.dimensions();
        let layout = RasterLayout::new(width as usize, height as usize);

        let capacity = layout.payload_capacity();
        if capacity == 0 {
            return Err(SteganoError::ImageTooSmall { width, height });
        }
        let length = HeaderCodec::read(self.carrier, &layout)?;
        if length > capacity {
            return Err(SteganoError::CorruptHeader { length, capacity });
        }

        let grid = forward(&ChannelPlane::from_image(self.carrier, CARRIER_CHANNEL));
        let bits = layout
            .carrier_blocks()
            .take(length)
            .map(|block| self.codec.unveil_bit(&grid, block))
            .collect();
        debug!("Unveiled {length} bits from a {width}x{height} image");

        Ok(Payload::from_bits(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::encoder::DctEncoder;
    use crate::test_utils::{prepare_smooth_gradient_image, prepare_uniform_image};

    #[test]
    fn should_unveil_what_was_hidden() -> Result<()> {
        let mut img = prepare_smooth_gradient_image(64, 64);
        let options = DctCodecOptions::default().with_epsilon(5.0);

        DctEncoder::new(&mut img, &options).hide_data(b"Hi")?;

        assert_eq!(DctDecoder::new(&img, &options).unveil()?, b"Hi");
        Ok(())
    }

    #[test]
    fn should_unveil_single_bits() -> Result<()> {
        let mut img = prepare_uniform_image(64, 64, 128);
        let options = DctCodecOptions::default();
        let payload = Payload::from_bits(vec![true, false, true]);

        DctEncoder::new(&mut img, &options).hide(&payload)?;

        assert_eq!(DctDecoder::new(&img, &options).unveil_bits()?, payload);
        Ok(())
    }

    #[test]
    fn should_unveil_nothing_from_an_empty_header() -> Result<()> {
        let mut img = prepare_uniform_image(64, 64, 128);

        DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"")?;

        assert!(DctDecoder::new(&img, &DctCodecOptions::default())
            .unveil()?
            .is_empty());
        Ok(())
    }

    #[test]
    fn should_reject_a_header_beyond_the_capacity() {
        // every marker bit is set, far more than 28 bits are announced
        let img = prepare_uniform_image(64, 64, 255);

        match DctDecoder::new(&img, &DctCodecOptions::default()).unveil() {
            Err(SteganoError::CorruptHeader { .. }) => (),
            other => panic!("expected a corrupt header, got {other:?}"),
        }
    }

    #[test]
    fn should_not_change_the_carrier() -> Result<()> {
        let mut img = prepare_smooth_gradient_image(64, 64);
        DctEncoder::new(&mut img, &DctCodecOptions::default()).hide_data(b"A")?;
        let img_ro = img.clone();

        DctDecoder::new(&img, &DctCodecOptions::default()).unveil()?;

        assert_eq!(img, img_ro);
        Ok(())
    }
}
