pub mod channel;
pub mod coefficient;
pub mod cursor;
pub mod dct_codec;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod transform;

pub use channel::{CARRIER_CHANNEL, MARKER_CHANNEL};
pub use dct_codec::DctCodec;
