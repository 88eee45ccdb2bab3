//! Code 39 alphabet and element patterns.

use crate::pattern::CODE39_ELEMENTS;
use crate::{Code39Pattern, Element};

/// Characters with a checksum index, in index order.
pub const CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";
/// Number of characters taking part in the checksum, which is also its modulus.
pub const CHECKSUM_MODULUS: u32 = 43;
/// The start/stop guard character.
pub const GUARD: char = '*';
/// Value of [GUARD].
pub const GUARD_VALUE: u8 = 43;
/// Modules spent on a wide element when rendering, a narrow one takes a single module.
pub const WIDE_MODULES: usize = 3;

/// Wide masks indexed by value, the last one being the guard.
#[rustfmt::skip]
const PATTERNS: [u16; GUARD_VALUE as usize + 1] = [
    0x034, 0x121, 0x061, 0x160, 0x031, 0x130, 0x070, 0x025, 0x124, 0x064, // 0-9
    0x109, 0x049, 0x148, 0x019, 0x118, 0x058, 0x00d, 0x10c, 0x04c, 0x01c, // A-J
    0x103, 0x043, 0x142, 0x013, 0x112, 0x052, 0x007, 0x106, 0x046, 0x016, // K-T
    0x181, 0x0c1, 0x1c0, 0x091, 0x190, 0x0d0,                             // U-Z
    0x085, 0x184, 0x0c4, 0x0a8, 0x0a2, 0x08a, 0x02a,                      // - . space $ / + %
    0x094,                                                                // *
];

/// Get the value of `c`, the guard included. Lowercase letters have no value.
/// # Example
/// ```
/// use barab_core::code39;
/// assert_eq!(code39::value_of('0'), Some(0));
/// assert_eq!(code39::value_of('%'), Some(42));
/// assert_eq!(code39::value_of('*'), Some(43));
/// assert_eq!(code39::value_of('a'), None);
/// ```
pub fn value_of(c: char) -> Option<u8> {
    if c == GUARD {
        return Some(GUARD_VALUE);
    }
    CHARSET.chars().position(|x| x == c).map(|index| index as u8)
}

/// Get the character of `value`, the guard included.
pub fn char_of(value: u8) -> Option<char> {
    if value == GUARD_VALUE {
        return Some(GUARD);
    }
    CHARSET.chars().nth(value as usize)
}

/// Check whether `c` can be written in Code 39 after uppercasing.
pub fn is_encodable(c: char) -> bool {
    value_of(c.to_ascii_uppercase()).is_some()
}

/// Get the pattern of `value`.
/// # Panics
/// Panics if `value` is greater than [GUARD_VALUE].
pub fn pattern(value: u8) -> Code39Pattern {
    let Some(&mask) = PATTERNS.get(value as usize) else {
        panic!("invalid Code 39 value {}", value)
    };
    Code39Pattern::from_mask(mask)
}

/// Find the character whose pattern is exactly `elements`.
/// # Example
/// ```
/// use barab_core::{code39, Element};
/// let elements: Vec<_> = "bWbwBwBwb".chars().filter_map(Element::from_letter).collect();
/// assert_eq!(code39::symbol_of(&elements), Some('*'));
/// ```
pub fn symbol_of(elements: &[Element]) -> Option<char> {
    if elements.len() != CODE39_ELEMENTS {
        return None;
    }
    let mask = Code39Pattern::from_elements(elements)?.mask();
    let value = PATTERNS.iter().position(|&candidate| candidate == mask)?;
    char_of(value as u8)
}
