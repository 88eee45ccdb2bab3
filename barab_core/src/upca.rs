//! UPC-A digit patterns and guards.

use crate::{Pattern, UpcGroup};

/// Number of digits in a UPC-A symbol, check digit included.
pub const DIGITS: usize = 12;
/// Number of digits on each side of the center guard.
pub const DIGITS_PER_GROUP: usize = DIGITS / 2;
/// Modules of a digit.
pub const DIGIT_LEN: usize = 7;
/// Total modules of a UPC-A symbol.
pub const SYMBOL_LEN: usize = 2 * END_GUARD.len() + CENTER_GUARD.len() + DIGITS * DIGIT_LEN;

/// Guard at both ends of the symbol.
pub const END_GUARD: Pattern = Pattern::new(0b101, 3);
/// Guard between the left and right groups.
pub const CENTER_GUARD: Pattern = Pattern::new(0b01010, 5);

#[rustfmt::skip]
const LEFT: [u16; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// Get the pattern of `digit` in `group`. Right patterns are the complement of the left ones.
/// # Panics
/// Panics if `digit` is greater than 9.
/// # Example
/// ```
/// use barab_core::{upca, UpcGroup};
/// assert_eq!(upca::pattern(UpcGroup::Left, 0).bits(), 0b0001101);
/// assert_eq!(upca::pattern(UpcGroup::Right, 0).bits(), 0b1110010);
/// ```
pub fn pattern(group: UpcGroup, digit: u8) -> Pattern {
    let Some(&left) = LEFT.get(digit as usize) else {
        panic!("invalid UPC-A digit {}", digit)
    };
    let bits = match group {
        UpcGroup::Left => left,
        UpcGroup::Right => !left & 0b1111111,
    };
    Pattern::new(bits, DIGIT_LEN as u8)
}

/// Get the value of digit `c`.
pub fn value_of(c: char) -> Option<u8> {
    c.to_digit(10).map(|digit| digit as u8)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pattern_lengths() {
        for digit in 0..10 {
            assert_eq!(pattern(UpcGroup::Left, digit).len(), 7);
            assert_eq!(pattern(UpcGroup::Right, digit).len(), 7);
        }
        assert_eq!(END_GUARD.len(), 3);
        assert_eq!(CENTER_GUARD.len(), 5);
        assert_eq!(SYMBOL_LEN, 95);
    }

    #[rustfmt::skip]
    #[test]
    fn test_right_patterns() {
        let right = [
            0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100,
            0b1001110, 0b1010000, 0b1000100, 0b1001000, 0b1110100,
        ];
        for (digit, bits) in right.into_iter().enumerate() {
            assert_eq!(pattern(UpcGroup::Right, digit as u8).bits(), bits);
        }
    }

    #[test]
    fn test_left_patterns_start_with_space() {
        for digit in 0..10 {
            let left = pattern(UpcGroup::Left, digit);
            assert_eq!(left.bits() >> 6, 0);
            assert_eq!(left.bits() & 1, 1);
        }
    }

    #[test]
    fn test_value_of() {
        assert_eq!(value_of('7'), Some(7));
        assert_eq!(value_of('x'), None);
    }
}
