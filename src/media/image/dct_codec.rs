use image::RgbaImage;

use super::cursor::RasterLayout;
use super::decoder::DctDecoder;
use super::encoder::DctEncoder;
use crate::media::codec_options::DctCodecOptions;

/// Factory for decoder and encoder
pub struct DctCodec;

impl DctCodec {
    /// builds a DCT Image Decoder
    pub fn decoder<'i>(input: &'i RgbaImage, opts: &DctCodecOptions) -> DctDecoder<'i> {
        DctDecoder::new(input, opts)
    }

    /// builds a DCT Image Encoder
    pub fn encoder<'i>(carrier: &'i mut RgbaImage, opts: &DctCodecOptions) -> DctEncoder<'i> {
        DctEncoder::new(carrier, opts)
    }

    /// Number of payload bits an image of the given dimensions can carry
    pub fn capacity(width: u32, height: u32) -> usize {
        RasterLayout::new(width as usize, height as usize).payload_capacity()
    }
}
