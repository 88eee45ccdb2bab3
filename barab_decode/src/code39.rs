use barab_core::{code39, Element, Scanline, CODE39_ELEMENTS};

use crate::scan::{self, Threshold, DEFAULT_FACTOR};
use crate::DecodeError;

/// Elements between the starts of two consecutive characters: the nine of the character and the gap.
const STRIDE: usize = CODE39_ELEMENTS + 1;

/// Decoder for Code 39 scanlines.
#[derive(Debug, Clone, PartialEq)]
pub struct Code39Decoder {
    factor: f64,
}

impl Code39Decoder {
    /// Construct a new decoder using the default threshold factor.
    pub fn new() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
        }
    }

    /// Set the factor applied to half the longest run to get the wide threshold.
    pub fn with_threshold_factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Peek at the threshold factor.
    pub fn threshold_factor(&self) -> f64 {
        self.factor
    }

    /// Decode `scanline` and return the text between the `*` guards.
    /// # Example
    /// ```
    /// use barab_core::Symbology;
    /// use barab_decode::Code39Decoder;
    /// use barab_encode::encode;
    /// let scanline = encode(Symbology::Code39, "barab").unwrap().to_scanline(3, 10);
    /// assert_eq!(Code39Decoder::new().decode(&scanline).unwrap(), "BARAB");
    /// ```
    pub fn decode(&self, scanline: &Scanline) -> Result<String, DecodeError> {
        let runs = scan::runs(scanline);
        let threshold = Threshold::with_factor(&runs, self.factor).ok_or(DecodeError::NoRuns)?;
        let elements = scan::classify(&runs, &threshold);
        let text = decode_elements(&elements)?;
        strip_guards(text)
    }
}

impl Default for Code39Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the characters of `elements`, guards included. Characters are read every ten elements, the element in
/// between is taken to be the gap and never looked at.
/// # Example
/// ```
/// use barab_core::Element;
/// use barab_decode::decode_elements;
/// let elements: Vec<_> = "bWbwBwBwb w BwbwbWbwB w bWbwBwBwb"
///     .chars()
///     .filter_map(Element::from_letter)
///     .collect();
/// assert_eq!(decode_elements(&elements).unwrap(), "*A*");
/// ```
pub fn decode_elements(elements: &[Element]) -> Result<String, DecodeError> {
    (0..elements.len())
        .step_by(STRIDE)
        .map(|offset| {
            let end = elements.len().min(offset + CODE39_ELEMENTS);
            let chunk = &elements[offset..end];
            code39::symbol_of(chunk).ok_or_else(|| DecodeError::UnknownPattern {
                offset,
                pattern: chunk.iter().map(Element::letter).collect(),
            })
        })
        .collect()
}

fn strip_guards(text: String) -> Result<String, DecodeError> {
    match text
        .strip_prefix(code39::GUARD)
        .and_then(|rest| rest.strip_suffix(code39::GUARD))
    {
        Some(payload) => Ok(payload.to_string()),
        None => Err(DecodeError::MissingGuard(text)),
    }
}
