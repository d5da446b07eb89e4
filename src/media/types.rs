use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use log::error;

use super::codec_options::DctCodecOptions;
use super::image::DctCodec;
use super::Persist;
use crate::error::SteganoError;
use crate::result::Result;

/// a carrier image for steganography
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// opens a PNG file, the only lossless format the codec accepts
    pub fn from_file(f: &Path) -> Result<Self> {
        match f.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => {
                Ok(Self::from_image(image::open(f)?.to_rgba8()))
            }
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn hide_data(&mut self, msg_data: &[u8], opts: &DctCodecOptions) -> Result<&mut Self> {
        DctCodec::encoder(&mut self.image, opts).hide_data(msg_data)?;

        Ok(self)
    }

    pub fn unveil_data(&self, opts: &DctCodecOptions) -> Result<Vec<u8>> {
        DctCodec::decoder(&self.image, opts).unveil()
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageCodec(e)
            })
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer.flush().map_err(|e| {
            error!("Error flushing file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })
    }
}
