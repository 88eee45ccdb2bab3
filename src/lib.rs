//! Encoding of Code 128, Code 39 and UPC-A barcodes into module sequences, and decoding of Code 39 scanlines.
//! # Example
//! ```
//! use barab::{decode, encode, Symbology};
//! let scanline = encode(Symbology::Code39, "HELLO").unwrap().to_scanline(2, 10);
//! assert_eq!(decode(Symbology::Code39, &scanline).unwrap(), "HELLO");
//! ```

pub use barab_core::{checksum, Barcode, CodeSet, Module, ModuleSequence, Scanline, Symbology};
pub use barab_decode::{decode, load_scanline, Code39Decoder, DecodeError, SampleError};
pub use barab_encode::{
    encode, Code128Encoder, Code39Encoder, Encoder, EncodingError, LinearEncoder, TextRenderer, UpcAEncoder,
};
