use barab_core::{Alphabet, Barcode, ModuleSequence, Symbol, Symbology, TableError};

use crate::{Code128Encoder, Code39Encoder, UpcAEncoder};

/// Capabilities shared by the encoders of every symbology.
pub trait LinearEncoder {
    /// Get the symbology produced by the encoder.
    fn symbology(&self) -> Symbology;

    /// Validate `data` and convert it into the full codeword sequence, guards and check value included.
    fn codewords(&self, data: &str) -> Result<Vec<u8>, EncodingError>;

    /// Concatenate the module patterns of `codewords`, as returned by [LinearEncoder::codewords].
    /// # Panics
    /// Panics if a codeword is out of the symbology's range.
    fn modules(&self, codewords: &[u8]) -> ModuleSequence;

    /// Check that `data` can be encoded.
    fn validate(&self, data: &str) -> Result<(), EncodingError> {
        self.codewords(data).map(|_| ())
    }

    /// Encode `data` into its module sequence.
    fn encode(&self, data: &str) -> Result<ModuleSequence, EncodingError> {
        let codewords = self.codewords(data)?;
        Ok(self.modules(&codewords))
    }

    /// Encode `data`, keeping the codewords alongside the modules.
    fn barcode(&self, data: &str) -> Result<Barcode, EncodingError> {
        let codewords = self.codewords(data)?;
        let modules = self.modules(&codewords);
        let symbology = self.symbology();
        Ok(Barcode::new(symbology, codewords, modules)
            .unwrap_or_else(|| unreachable!("{} always draws its guards", symbology)))
    }
}

/// Encoder for any supported symbology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoder {
    Code128(Code128Encoder),
    Code39(Code39Encoder),
    UpcA(UpcAEncoder),
}

impl Encoder {
    /// Construct the default encoder of `symbology`.
    pub fn new(symbology: Symbology) -> Self {
        match symbology {
            Symbology::Code128 => Self::Code128(Code128Encoder::new()),
            Symbology::Code39 => Self::Code39(Code39Encoder::new()),
            Symbology::UpcA => Self::UpcA(UpcAEncoder::new()),
        }
    }

    fn inner(&self) -> &dyn LinearEncoder {
        match self {
            Self::Code128(encoder) => encoder,
            Self::Code39(encoder) => encoder,
            Self::UpcA(encoder) => encoder,
        }
    }
}

impl LinearEncoder for Encoder {
    fn symbology(&self) -> Symbology {
        self.inner().symbology()
    }

    fn codewords(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        self.inner().codewords(data)
    }

    fn modules(&self, codewords: &[u8]) -> ModuleSequence {
        self.inner().modules(codewords)
    }
}

impl From<Code128Encoder> for Encoder {
    fn from(value: Code128Encoder) -> Self {
        Self::Code128(value)
    }
}

impl From<Code39Encoder> for Encoder {
    fn from(value: Code39Encoder) -> Self {
        Self::Code39(value)
    }
}

impl From<UpcAEncoder> for Encoder {
    fn from(value: UpcAEncoder) -> Self {
        Self::UpcA(value)
    }
}

/// Encode `data` with the default encoder of `symbology`.
/// # Example
/// ```
/// use barab_core::Symbology;
/// let modules = barab_encode::encode(Symbology::UpcA, "03600029145").unwrap();
/// assert_eq!(modules.len(), 95);
/// ```
pub fn encode(symbology: Symbology, data: &str) -> Result<ModuleSequence, EncodingError> {
    Encoder::new(symbology).encode(data)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("cannot encode {symbol} at position {position} using {alphabet}")]
    InvalidSymbol {
        alphabet: Alphabet,
        position: usize,
        symbol: Symbol,
    },
    #[error("{symbology} cannot encode {found} characters, expected {expected}")]
    InvalidLength {
        symbology: Symbology,
        found: usize,
        expected: &'static str,
    },
    #[error("symbology table does not match validation: {0}")]
    UnknownSymbol(#[from] TableError),
}

impl EncodingError {
    /// Get the symbology that rejected the input.
    pub fn symbology(&self) -> Symbology {
        match self {
            Self::InvalidSymbol { alphabet, .. } => alphabet.symbology(),
            Self::InvalidLength { symbology, .. } => *symbology,
            Self::UnknownSymbol(TableError::UnknownSymbol { alphabet, .. }) => alphabet.symbology(),
        }
    }

    /// Check whether the error is due to the caller's input rather than to an internal inconsistency.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidSymbol { .. } | Self::InvalidLength { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use barab_core::CodeSet;

    #[test]
    fn test_encoder_dispatch() {
        for symbology in [Symbology::Code128, Symbology::Code39, Symbology::UpcA] {
            assert_eq!(Encoder::new(symbology).symbology(), symbology);
        }
    }

    #[test]
    fn test_encoder_matches_inner_encoder() {
        let inner = Code128Encoder::new().with_code_set(CodeSet::B);
        let encoder = Encoder::from(inner.clone());
        assert_eq!(encoder.encode("Hello"), inner.encode("Hello"));
    }

    #[test]
    fn test_barcode_keeps_codewords() {
        let barcode = Encoder::new(Symbology::UpcA).barcode("03600029145").unwrap();
        assert_eq!(barcode.symbology(), Symbology::UpcA);
        assert_eq!(barcode.codewords(), &[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5, 2]);
        assert_eq!(barcode.modules().len(), 95);
    }

    #[test]
    fn test_validate() {
        assert!(Encoder::new(Symbology::Code39).validate("HELLO-1").is_ok());
        let err = Encoder::new(Symbology::Code39).validate("HELLO#").unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.symbology(), Symbology::Code39);
    }

    #[test]
    fn test_error_messages() {
        let err = encode(Symbology::Code128, "012").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Code 128 cannot encode 3 characters, expected an even number of digits"
        );
        let err = encode(Symbology::Code39, "AB#").unwrap_err();
        assert_eq!(err.to_string(), "cannot encode '#' at position 2 using Code 39");
    }
}
