use barab_core::{checksum, code128, table};
use barab_core::{Alphabet, CodeSet, Control, ModuleSequence, Symbol, Symbology};

use crate::{EncodingError, LinearEncoder};

/// Encoder for Code 128.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128Encoder {
    code_set: CodeSet,
    fnc1: bool,
}

impl Code128Encoder {
    /// Construct a new encoder starting in code set C, without FNC1.
    pub fn new() -> Self {
        Self {
            code_set: CodeSet::C,
            fnc1: false,
        }
    }

    /// Get the code set the symbol starts in.
    pub fn code_set(&self) -> CodeSet {
        self.code_set
    }

    /// Start the symbol in `code_set`. Text input is read entirely in this set.
    pub fn with_code_set(mut self, code_set: CodeSet) -> Self {
        self.code_set = code_set;
        self
    }

    /// Check whether FNC1 follows the START codeword.
    pub fn fnc1(&self) -> bool {
        self.fnc1
    }

    /// Place FNC1 right after the START codeword, marking the data as GS1-128.
    pub fn with_fnc1(mut self, fnc1: bool) -> Self {
        self.fnc1 = fnc1;
        self
    }

    /// Convert explicit `symbols` into the full codeword sequence. Unlike text input, symbols may contain control
    /// codewords: [Control::Code] switches the code set for the rest of the symbol and [Control::Shift] reads only
    /// the next symbol from the other of sets A and B.
    /// # Example
    /// ```
    /// use barab_core::{CodeSet, Control, Symbol};
    /// use barab_encode::Code128Encoder;
    /// let encoder = Code128Encoder::new().with_code_set(CodeSet::A);
    /// let symbols = [
    ///     Symbol::Char('A'),
    ///     Control::Code(CodeSet::C).into(),
    ///     Symbol::Pair(['4', '2']),
    /// ];
    /// let codewords = encoder.codewords_of_symbols(symbols).unwrap();
    /// assert_eq!(&codewords[..4], &[103, 33, 99, 42]);
    /// ```
    pub fn codewords_of_symbols<I>(&self, symbols: I) -> Result<Vec<u8>, EncodingError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.codewords_of_positioned(symbols.into_iter().enumerate(), None)
    }

    /// Split text into the symbols of the starting code set, along with their position in `data`.
    fn symbols(&self, data: &str) -> Result<Vec<(usize, Symbol)>, EncodingError> {
        let chars: Vec<char> = data.chars().collect();
        match self.code_set {
            CodeSet::A | CodeSet::B => Ok(chars.into_iter().map(Symbol::Char).enumerate().collect()),
            CodeSet::C => {
                if chars.len() % 2 != 0 {
                    return Err(EncodingError::InvalidLength {
                        symbology: Symbology::Code128,
                        found: chars.len(),
                        expected: "an even number of digits",
                    });
                }
                Ok(chars
                    .chunks_exact(2)
                    .enumerate()
                    .map(|(i, pair)| (2 * i, Symbol::Pair([pair[0], pair[1]])))
                    .collect())
            }
        }
    }

    fn codewords_of_positioned<I>(
        &self,
        symbols: I,
        len: Option<usize>,
    ) -> Result<Vec<u8>, EncodingError>
    where
        I: IntoIterator<Item = (usize, Symbol)>,
    {
        let start = code128::start(self.code_set);
        let mut data = Vec::with_capacity(len.unwrap_or_default() + 1);
        if self.fnc1 {
            data.push(code128::FNC1);
        }
        let mut code_set = self.code_set;
        // Position of a SHIFT still waiting for its symbol.
        let mut shifted: Option<usize> = None;
        let mut count = 0;
        for (position, symbol) in symbols {
            let current = if shifted.is_some() { shift(code_set) } else { code_set };
            let invalid = || EncodingError::InvalidSymbol {
                alphabet: Alphabet::Code128(current),
                position,
                symbol,
            };
            let value = table::value_of(Alphabet::Code128(current), symbol).map_err(|_| invalid())?;
            match symbol {
                // SHIFT only reads a data character.
                Symbol::Control(_) if shifted.is_some() => return Err(invalid()),
                // Guards are placed by the encoder only.
                Symbol::Control(Control::Start(_) | Control::Stop) => return Err(invalid()),
                Symbol::Control(Control::Code(next)) => code_set = next,
                Symbol::Control(Control::Shift) => shifted = Some(position),
                _ => shifted = None,
            }
            data.push(value);
            count += 1;
        }
        if let Some(position) = shifted {
            return Err(EncodingError::InvalidSymbol {
                alphabet: Alphabet::Code128(code_set),
                position,
                symbol: Control::Shift.into(),
            });
        }
        if count == 0 {
            return Err(EncodingError::InvalidLength {
                symbology: Symbology::Code128,
                found: 0,
                expected: "at least one symbol",
            });
        }
        let check = checksum::code128(start, &data);
        let mut codewords = Vec::with_capacity(data.len() + 3);
        codewords.push(start);
        codewords.extend(data);
        codewords.push(check);
        codewords.push(code128::STOP);
        Ok(codewords)
    }
}

impl Default for Code128Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearEncoder for Code128Encoder {
    fn symbology(&self) -> Symbology {
        Symbology::Code128
    }

    fn codewords(&self, data: &str) -> Result<Vec<u8>, EncodingError> {
        let symbols = self.symbols(data)?;
        let len = symbols.len();
        self.codewords_of_positioned(symbols, Some(len))
    }

    fn modules(&self, codewords: &[u8]) -> ModuleSequence {
        let len = code128::PATTERN_LEN * codewords.len() + code128::STOP_LEN - code128::PATTERN_LEN;
        let mut modules = ModuleSequence::with_capacity(len);
        for &value in codewords {
            modules.push_module_pattern(table::pattern_of(Alphabet::Code128(self.code_set), value), 1);
        }
        modules
    }
}

/// Get the set SHIFT reads the next symbol from.
fn shift(code_set: CodeSet) -> CodeSet {
    match code_set {
        CodeSet::A => CodeSet::B,
        CodeSet::B => CodeSet::A,
        CodeSet::C => CodeSet::C,
    }
}
