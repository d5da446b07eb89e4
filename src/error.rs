use image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a JPEG or a WAV file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure of the image codec while decoding or encoding a carrier image
    #[error("Image codec error")]
    ImageCodec(#[from] ImageError),

    /// Represents a payload that does not fit into the carrier blocks of an image
    #[error(
        "Capacity Error: The payload requires {required} bits but the image offers only {available} bits"
    )]
    PayloadTooLarge { required: usize, available: usize },

    /// Represents an image that does not offer a single carrier block
    #[error("The image with the dimensions {width}x{height} is too small to carry any data")]
    ImageTooSmall { width: u32, height: u32 },

    /// Represents an epsilon margin that is negative, NaN or infinite
    #[error("Epsilon must be a finite, non-negative number, got {0}")]
    InvalidEpsilon(f64),

    /// Represents a length header that cannot describe a payload of this image.
    /// For example when an image did not contain any secrets
    #[error("Length header announces {length} bits but the image carries at most {capacity} bits")]
    CorruptHeader { length: usize, capacity: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
