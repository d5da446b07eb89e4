use image::RgbaImage;

/// Index of the color channel that carries the payload in its DCT coefficients (green)
pub const CARRIER_CHANNEL: usize = 1;

/// Index of the color channel whose least significant bits hold the length header (blue)
pub const MARKER_CHANNEL: usize = 2;

/// One color channel of an image, row major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPlane {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl ChannelPlane {
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Self {
        debug_assert_eq!(samples.len(), width * height);
        Self {
            width,
            height,
            samples,
        }
    }

    /// copies the color channel `channel` out of `image`
    pub fn from_image(image: &RgbaImage, channel: usize) -> Self {
        let (width, height) = image.dimensions();
        Self::new(
            width as usize,
            height as usize,
            image.pixels().map(|p| p.0[channel]).collect(),
        )
    }

    /// writes all samples back into the color channel `channel` of `image`,
    /// leaving every other channel untouched
    pub fn write_into(&self, image: &mut RgbaImage, channel: usize) {
        debug_assert_eq!(image.width() as usize, self.width);
        debug_assert_eq!(image.height() as usize, self.height);
        for (pixel, sample) in image.pixels_mut().zip(self.samples.iter()) {
            pixel.0[channel] = *sample;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.samples[row * self.width + col]
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}
