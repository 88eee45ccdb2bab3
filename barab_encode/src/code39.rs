use itertools::{Itertools, Position};

use barab_core::{checksum, code39, table};
use barab_core::{Alphabet, Module, ModuleSequence, Symbol, Symbology, CODE39_ELEMENTS};

use crate::{EncodingError, LinearEncoder};

/// Encoder for Code 39. Lowercase input is encoded as uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code39Encoder {
    check_character: bool,
}

impl Code39Encoder {
    /// Construct a new encoder without check character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the mod 43 check character is appended to the data.
    pub fn check_character(&self) -> bool {
        self.check_character
    }

    /// Append the mod 43 check character before the stop guard. Data containing `*` cannot be checked.
    pub fn with_check_character(mut self, check_character: bool) -> Self {
        self.check_character = check_character;
        self
    }
}

impl LinearEncoder for Code39Encoder {
    fn symbology(&self) -> Symbology {
        Symbology::Code39
    }

    /// # Example
    /// ```
    /// use barab_encode::{Code39Encoder, LinearEncoder};
    /// let codewords = Code39Encoder::new().codewords("a-1").unwrap();
    /// assert_eq!(codewords, vec![43, 10, 36, 1, 43]);
    /// ```
    fn codewords(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        if data.is_empty() {
            return Err(EncodingError::InvalidLength {
                symbology: Symbology::Code39,
                found: 0,
                expected: "at least one character",
            });
        }
        // Validate everything before looking anything up.
        for (position, c) in data.chars().enumerate() {
            let uncheckable = self.check_character && c == code39::GUARD;
            if uncheckable || !code39::is_encodable(c) {
                return Err(EncodingError::InvalidSymbol {
                    alphabet: Alphabet::Code39,
                    position,
                    symbol: Symbol::Char(c),
                });
            }
        }
        let values = data
            .chars()
            .map(|c| table::value_of(Alphabet::Code39, Symbol::Char(c.to_ascii_uppercase())))
            .collect::<Result<Vec<_>, _>>()?;
        let mut codewords = Vec::with_capacity(values.len() + 3);
        codewords.push(code39::GUARD_VALUE);
        codewords.extend_from_slice(&values);
        if self.check_character {
            codewords.push(checksum::code39_check_value(&values));
        }
        codewords.push(code39::GUARD_VALUE);
        Ok(codewords)
    }

    fn modules(&self, codewords: &[u8]) -> ModuleSequence {
        // Six narrow and three wide elements, plus the gap.
        let per_char = CODE39_ELEMENTS + 3 * (code39::WIDE_MODULES - 1) + 1;
        let mut modules = ModuleSequence::with_capacity(per_char * codewords.len());
        for (position, &value) in codewords.iter().with_position() {
            modules.push_module_pattern(table::pattern_of(Alphabet::Code39, value), code39::WIDE_MODULES);
            if matches!(position, Position::First | Position::Middle) {
                // Narrow inter-character gap.
                modules.push_module(Module::Space, 1);
            }
        }
        modules
    }
}
