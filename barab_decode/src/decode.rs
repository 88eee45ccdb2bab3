use barab_core::{Scanline, Symbology};
use thiserror::Error;

use crate::Code39Decoder;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("scanline has no bars between its quiet zones")]
    NoRuns,
    #[error("unknown Code 39 pattern {pattern} at element {offset}")]
    UnknownPattern { offset: usize, pattern: String },
    #[error("decoded Code 39 text {0:?} is not wrapped in '*' guards")]
    MissingGuard(String),
    #[error("decoding {0} is not supported")]
    Unsupported(Symbology),
}

/// Decode `scanline` as a barcode of `symbology`. Only Code 39 can be decoded.
/// # Example
/// ```
/// use barab_core::Symbology;
/// use barab_decode::{decode, DecodeError};
/// let scanline = [false; 8].into_iter().collect();
/// assert_eq!(
///     decode(Symbology::UpcA, &scanline),
///     Err(DecodeError::Unsupported(Symbology::UpcA))
/// );
/// ```
pub fn decode(symbology: Symbology, scanline: &Scanline) -> Result<String, DecodeError> {
    match symbology {
        Symbology::Code39 => Code39Decoder::new().decode(scanline),
        Symbology::Code128 | Symbology::UpcA => Err(DecodeError::Unsupported(symbology)),
    }
}
