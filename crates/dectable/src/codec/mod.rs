//! Conversion between the table model and DMN XML.

mod decoder;
mod encoder;
mod escape;

pub use decoder::decode;
pub use encoder::{EncoderOptions, encode, encode_with};
pub use escape::{escape, unescape};
