mod code39;
mod decode;
pub mod sample;
pub mod scan;

pub use code39::{decode_elements, Code39Decoder};
pub use decode::{decode, DecodeError};
pub use sample::{load_scanline, SampleError};
pub use scan::{classify, runs, Threshold};
