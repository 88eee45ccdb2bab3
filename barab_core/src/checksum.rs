//! Check values of every supported symbology. Usable on their own to verify externally supplied codes.

use crate::table::TableError;
use crate::{code128, code39, upca};
use crate::{Alphabet, Symbol, UpcGroup};

/// Error raised when computing or verifying a check value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecksumError {
    #[error(transparent)]
    UnknownSymbol(#[from] TableError),
    #[error("expected {expected} digits, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("cannot verify an empty code")]
    Empty,
}

/// Compute the Code 128 check codeword: `start` has weight 1, and so does the first codeword after it, the second
/// one weight 2 and so on, modulo 103.
/// # Example
/// ```
/// use barab_core::{checksum, code128};
/// // "PJJ123C" in set B.
/// let data = [48, 42, 42, 17, 18, 19, 35];
/// assert_eq!(checksum::code128(code128::START_B, &data), 55);
/// ```
pub fn code128(start: u8, data: &[u8]) -> u8 {
    let sum = data
        .iter()
        .enumerate()
        .fold(start as u32, |sum, (i, &value)| {
            sum + (i as u32 + 1) * value as u32
        });
    (sum % code128::CHECKSUM_MODULUS) as u8
}

/// Compute the Code 39 check character: the character whose index is the sum of the indices of `data` modulo 43.
/// The guard `*` has no index.
/// # Example
/// ```
/// use barab_core::checksum;
/// assert_eq!(checksum::code39("0123456789A"), Ok('C'));
/// assert!(checksum::code39("abc").is_err());
/// ```
pub fn code39(data: &str) -> Result<char, ChecksumError> {
    let values = data
        .chars()
        .map(|c| match code39::value_of(c) {
            Some(value) if value != code39::GUARD_VALUE => Ok(value),
            _ => Err(TableError::UnknownSymbol {
                alphabet: Alphabet::Code39,
                symbol: Symbol::Char(c),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let check = code39_check_value(&values);
    Ok(code39::char_of(check).expect("check value is below the modulus"))
}

/// Compute the Code 39 check value of character values, none of which may be the guard.
pub fn code39_check_value(values: &[u8]) -> u8 {
    let sum: u32 = values.iter().map(|&value| value as u32).sum();
    (sum % code39::CHECKSUM_MODULUS) as u8
}

/// Verify a Code 39 payload whose last character is the check character.
pub fn code39_verify(code: &str) -> Result<bool, ChecksumError> {
    let mut chars = code.chars();
    let check = chars.next_back().ok_or(ChecksumError::Empty)?;
    Ok(code39(chars.as_str())? == check)
}

/// Compute the UPC-A check digit of 11 digits, weighting them 3, 1, 3, ... from the left.
/// # Example
/// ```
/// use barab_core::checksum;
/// assert_eq!(checksum::upca("03600029145"), Ok(2));
/// ```
pub fn upca(data: &str) -> Result<u8, ChecksumError> {
    let digits = upca_digits(data, upca::DIGITS - 1)?;
    Ok(upca_check_digit(&digits))
}

/// Verify a full 12 digits UPC-A code.
/// # Example
/// ```
/// use barab_core::checksum;
/// assert_eq!(checksum::upca_verify("036000291452"), Ok(true));
/// assert_eq!(checksum::upca_verify("036000291453"), Ok(false));
/// ```
pub fn upca_verify(code: &str) -> Result<bool, ChecksumError> {
    let digits = upca_digits(code, upca::DIGITS)?;
    let (check, data) = digits.split_last().expect("length was checked");
    Ok(upca_check_digit(data) == *check)
}

/// Compute the check digit of digit values. The data is read as if prefixed by a zero so that the EAN-13 weights
/// line up: positions at odd indices of the padded string weigh 3.
pub fn upca_check_digit(digits: &[u8]) -> u8 {
    let (mut even, mut odd) = (0u32, 0u32);
    for (i, &digit) in std::iter::once(&0).chain(digits).enumerate() {
        if i % 2 == 0 {
            even += digit as u32;
        } else {
            odd += digit as u32;
        }
    }
    ((10 - (odd * 3 + even) % 10) % 10) as u8
}

fn upca_digits(data: &str, expected: usize) -> Result<Vec<u8>, ChecksumError> {
    let found = data.chars().count();
    if found != expected {
        return Err(ChecksumError::InvalidLength { expected, found });
    }
    data.chars()
        .map(|c| {
            upca::value_of(c).ok_or(ChecksumError::UnknownSymbol(TableError::UnknownSymbol {
                alphabet: Alphabet::UpcA(UpcGroup::Left),
                symbol: Symbol::Char(c),
            }))
        })
        .collect()
}
