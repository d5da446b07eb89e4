//! # Stegano DCT API
//!
//! Hides data in the frequency domain of PNG images. The green channel of an
//! image is split into 8×8 blocks and transformed with a discrete cosine
//! transform, every payload bit is then stored in the magnitude relation of two
//! coefficients of one block. The payload length is kept in the least
//! significant bits of the blue channel, so that unveiling needs nothing but
//! the image and the epsilon margin used for hiding.
//!
//! - [`DctCodec`][codec] works on in-memory `RgbaImage`s
//! - [`api::hide`] and [`api::unveil`] work on PNG files
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use image::RgbaImage;
//! use stegano_dct::{DctCodec, DctCodecOptions};
//!
//! let mut image = RgbaImage::from_fn(128, 128, |x, y| {
//!     image::Rgba([0, (60 + x / 2 + y / 3) as u8, 0, 255])
//! });
//! let options = DctCodecOptions::default();
//!
//! DctCodec::encoder(&mut image, &options)
//!     .hide_data(b"Hello")
//!     .expect("Failed to hide data in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust
//! use image::RgbaImage;
//! use stegano_dct::{DctCodec, DctCodecOptions};
//!
//! let mut image = RgbaImage::from_pixel(64, 64, image::Rgba([128, 128, 128, 255]));
//! let options = DctCodecOptions::default().with_epsilon(5.0);
//! DctCodec::encoder(&mut image, &options)
//!     .hide_data(b"A")
//!     .expect("Failed to hide data in image");
//!
//! let secret = DctCodec::decoder(&image, &options)
//!     .unveil()
//!     .expect("Failed to unveil data from image");
//! assert_eq!(secret, b"A");
//! ```
//!
//! [codec]: ./media/image/dct_codec/struct.DctCodec.html

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod error;
pub mod media;
pub mod result;

pub use crate::error::SteganoError;
pub use crate::media::image::DctCodec;
pub use crate::media::{DctCodecOptions, Media, Payload, Persist};
pub use crate::result::Result;
