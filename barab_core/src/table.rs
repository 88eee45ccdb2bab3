use crate::{code128, code39, upca};
use crate::{Alphabet, ModulePattern, Symbol};

/// Error raised by lookups in the symbology tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("symbol {symbol} is not defined in {alphabet}")]
    UnknownSymbol { alphabet: Alphabet, symbol: Symbol },
}

/// Get the codeword value of `symbol` in `alphabet`.
/// # Example
/// ```
/// use barab_core::{table, Alphabet, CodeSet, Symbol, UpcGroup};
/// assert_eq!(table::value_of(Alphabet::Code128(CodeSet::B), Symbol::Char('b')), Ok(66));
/// assert_eq!(table::value_of(Alphabet::Code39, Symbol::Char('Z')), Ok(35));
/// assert_eq!(table::value_of(Alphabet::UpcA(UpcGroup::Left), Symbol::Char('4')), Ok(4));
/// assert!(table::value_of(Alphabet::Code39, Symbol::Char('z')).is_err());
/// ```
pub fn value_of(alphabet: Alphabet, symbol: Symbol) -> Result<u8, TableError> {
    let value = match (alphabet, symbol) {
        (Alphabet::Code128(set), symbol) => code128::value_of(set, symbol),
        (Alphabet::Code39, Symbol::Char(c)) => code39::value_of(c),
        (Alphabet::UpcA(_), Symbol::Char(c)) => upca::value_of(c),
        _ => None,
    };
    value.ok_or(TableError::UnknownSymbol { alphabet, symbol })
}

/// Get the module pattern of codeword `value` in `alphabet`.
/// # Panics
/// Panics if `value` is out of the alphabet's range. Values obtained through [value_of] are always in range.
pub fn pattern_of(alphabet: Alphabet, value: u8) -> ModulePattern {
    match alphabet {
        Alphabet::Code128(_) => ModulePattern::Binary(code128::pattern(value)),
        Alphabet::Code39 => ModulePattern::Elements(code39::pattern(value)),
        Alphabet::UpcA(group) => ModulePattern::Binary(upca::pattern(group, value)),
    }
}
