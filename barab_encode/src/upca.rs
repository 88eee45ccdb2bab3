use barab_core::{checksum, table, upca};
use barab_core::{Alphabet, ModuleSequence, Symbol, Symbology, UpcGroup};

use crate::{EncodingError, LinearEncoder};

/// Encoder for UPC-A. Accepts 11 digits, or 12 digits whose last one is replaced by the computed check digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcAEncoder {}

impl UpcAEncoder {
    pub fn new() -> Self {
        Self {}
    }
}

/// Get the group the digit at `index` is drawn in.
fn group(index: usize) -> UpcGroup {
    if index < upca::DIGITS_PER_GROUP {
        UpcGroup::Left
    } else {
        UpcGroup::Right
    }
}

impl LinearEncoder for UpcAEncoder {
    fn symbology(&self) -> Symbology {
        Symbology::UpcA
    }

    fn codewords(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        let found = data.chars().count();
        if found != upca::DIGITS - 1 && found != upca::DIGITS {
            return Err(EncodingError::InvalidLength {
                symbology: Symbology::UpcA,
                found,
                expected: "11 or 12 digits",
            });
        }
        for (position, c) in data.chars().enumerate() {
            if !c.is_ascii_digit() {
                return Err(EncodingError::InvalidSymbol {
                    alphabet: Alphabet::UpcA(group(position)),
                    position,
                    symbol: Symbol::Char(c),
                });
            }
        }
        // A supplied check digit is not trusted.
        let mut digits = data
            .chars()
            .take(upca::DIGITS - 1)
            .enumerate()
            .map(|(i, c)| table::value_of(Alphabet::UpcA(group(i)), Symbol::Char(c)))
            .collect::<Result<Vec<_>, _>>()?;
        digits.push(checksum::upca_check_digit(&digits));
        Ok(digits)
    }

    fn modules(&self, codewords: &[u8]) -> ModuleSequence {
        assert_eq!(
            codewords.len(),
            upca::DIGITS,
            "UPC-A has exactly {} digits",
            upca::DIGITS
        );
        let mut modules = ModuleSequence::with_capacity(upca::SYMBOL_LEN);
        modules.push_pattern(upca::END_GUARD);
        for (i, &digit) in codewords.iter().enumerate() {
            if i == upca::DIGITS_PER_GROUP {
                modules.push_pattern(upca::CENTER_GUARD);
            }
            modules.push_module_pattern(table::pattern_of(Alphabet::UpcA(group(i)), digit), 1);
        }
        modules.push_pattern(upca::END_GUARD);
        modules
    }
}
