use std::io::Read;

use bitstream_io::{BitWrite, BitWriter, LittleEndian};

use crate::{BitIterator, Result};

/// Ordered bits of a secret, least significant bit of every byte first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    bits: Vec<bool>,
}

impl Payload {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            bits: BitIterator::new(data).collect(),
        }
    }

    /// reads `reader` to its end, a failing read is returned as error
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        Ok(Self::from_bytes(&data))
    }

    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// packs the bits into bytes, a trailing partial byte is padded with 0 bits
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let buffer = Vec::with_capacity(self.bits.len().div_ceil(8));
        let mut writer = BitWriter::endian(buffer, LittleEndian);
        for bit in &self.bits {
            writer.write_bit(*bit)?;
        }
        writer.byte_align()?;

        Ok(writer.into_writer())
    }
}
