use image::RgbaImage;
use log::debug;

use super::channel::MARKER_CHANNEL;
use super::cursor::RasterLayout;
use crate::{Result, SteganoError};

/// Length header in the least significant bits of the marker channel.
///
/// The payload length in bits is stored as an unsigned big endian number,
/// right aligned within the header field, every leading bit is written as 0.
pub struct HeaderCodec;

impl HeaderCodec {
    /// The header field as it is written for `length`, most significant bit first.
    pub fn bits(length: usize, capacity: usize) -> impl Iterator<Item = bool> {
        (0..capacity).map(move |i| {
            let shift = capacity - 1 - i;
            shift < usize::BITS as usize && (length >> shift) & 1 == 1
        })
    }

    /// stores `length` in the header field of `carrier`
    pub fn write(carrier: &mut RgbaImage, layout: &RasterLayout, length: usize) {
        let capacity = layout.header_capacity();
        debug!("Writing length header {length} into {capacity} pixels");

        for (at, bit) in layout.header_positions().zip(Self::bits(length, capacity)) {
            let pixel = carrier.get_pixel_mut(at.col as u32, at.row as u32);
            let c = &mut pixel.0[MARKER_CHANNEL];
            *c = (*c & (u8::MAX - 1)) | u8::from(bit);
        }
    }

    /// parses the whole header field of `carrier` back into a length
    pub fn read(carrier: &RgbaImage, layout: &RasterLayout) -> Result<usize> {
        let mut length: usize = 0;
        let mut overflow = false;
        for at in layout.header_positions() {
            let bit = carrier.get_pixel(at.col as u32, at.row as u32).0[MARKER_CHANNEL] & 1;
            overflow |= length.leading_zeros() == 0;
            length = (length << 1) | usize::from(bit);
        }

        if overflow {
            return Err(SteganoError::CorruptHeader {
                length: usize::MAX,
                capacity: layout.carrier_capacity(),
            });
        }
        debug!("Read length header {length}");

        Ok(length)
    }
}
