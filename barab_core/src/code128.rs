//! Code 128 codeword values and module patterns.

use crate::{CodeSet, Control, Pattern, Symbol};

/// Number of modules of every codeword but STOP.
pub const PATTERN_LEN: usize = 11;
/// Number of modules of the STOP codeword, which carries the final bar.
pub const STOP_LEN: usize = 13;

pub const FNC3: u8 = 96;
pub const FNC2: u8 = 97;
pub const SHIFT: u8 = 98;
pub const FNC1: u8 = 102;
pub const START_A: u8 = 103;
pub const START_B: u8 = 104;
pub const START_C: u8 = 105;
pub const STOP: u8 = 106;

/// Modulus of the checksum.
pub const CHECKSUM_MODULUS: u32 = 103;

#[rustfmt::skip]
const PATTERNS: [u16; STOP as usize] = [
    0b11011001100, 0b11001101100, 0b11001100110, 0b10010011000, 0b10010001100, 0b10001001100,
    0b10011001000, 0b10011000100, 0b10001100100, 0b11001001000, 0b11001000100, 0b11000100100,
    0b10110011100, 0b10011011100, 0b10011001110, 0b10111001100, 0b10011101100, 0b10011100110,
    0b11001110010, 0b11001011100, 0b11001001110, 0b11011100100, 0b11001110100, 0b11101101110,
    0b11101001100, 0b11100101100, 0b11100100110, 0b11101100100, 0b11100110100, 0b11100110010,
    0b11011011000, 0b11011000110, 0b11000110110, 0b10100011000, 0b10001011000, 0b10001000110,
    0b10110001000, 0b10001101000, 0b10001100010, 0b11010001000, 0b11000101000, 0b11000100010,
    0b10110111000, 0b10110001110, 0b10001101110, 0b10111011000, 0b10111000110, 0b10001110110,
    0b11101110110, 0b11010001110, 0b11000101110, 0b11011101000, 0b11011100010, 0b11011101110,
    0b11101011000, 0b11101000110, 0b11100010110, 0b11101101000, 0b11101100010, 0b11100011010,
    0b11101111010, 0b11001000010, 0b11110001010, 0b10100110000, 0b10100001100, 0b10010110000,
    0b10010000110, 0b10000101100, 0b10000100110, 0b10110010000, 0b10110000100, 0b10011010000,
    0b10011000010, 0b10000110100, 0b10000110010, 0b11000010010, 0b11001010000, 0b11110111010,
    0b11000010100, 0b10001111010, 0b10100111100, 0b10010111100, 0b10010011110, 0b10111100100,
    0b10011110100, 0b10011110010, 0b11110100100, 0b11110010100, 0b11110010010, 0b11011011110,
    0b11011110110, 0b11110110110, 0b10101111000, 0b10100011110, 0b10001011110, 0b10111101000,
    0b10111100010, 0b11110101000, 0b11110100010, 0b10111011110, 0b10111101110, 0b11101011110,
    0b11110101110, 0b11010000100, 0b11010010000, 0b11010011100,
];

const STOP_PATTERN: Pattern = Pattern::new(0b1100011101011, STOP_LEN as u8);

/// Get the module pattern of codeword `value`.
/// # Panics
/// Panics if `value` is not a Code 128 codeword, i.e. greater than [STOP].
/// # Example
/// ```
/// use barab_core::code128;
/// assert_eq!(code128::pattern(code128::START_B).bits(), 0b11010010000);
/// assert_eq!(code128::pattern(code128::STOP).len(), 13);
/// ```
pub fn pattern(value: u8) -> Pattern {
    match value {
        STOP => STOP_PATTERN,
        value if value < STOP => Pattern::new(PATTERNS[value as usize], PATTERN_LEN as u8),
        invalid => panic!("invalid Code 128 codeword {}", invalid),
    }
}

/// Get the START codeword of `set`.
pub fn start(set: CodeSet) -> u8 {
    match set {
        CodeSet::A => START_A,
        CodeSet::B => START_B,
        CodeSet::C => START_C,
    }
}

/// Get the value of `symbol` in `set`, if it has one.
/// # Example
/// ```
/// use barab_core::{code128, CodeSet, Control, Symbol};
/// assert_eq!(code128::value_of(CodeSet::A, Symbol::Char('\n')), Some(74));
/// assert_eq!(code128::value_of(CodeSet::A, Symbol::Char('a')), None);
/// assert_eq!(code128::value_of(CodeSet::B, Symbol::Char('a')), Some(65));
/// assert_eq!(code128::value_of(CodeSet::C, Symbol::Pair(['4', '2'])), Some(42));
/// assert_eq!(code128::value_of(CodeSet::C, Control::Code(CodeSet::A).into()), Some(101));
/// ```
pub fn value_of(set: CodeSet, symbol: Symbol) -> Option<u8> {
    match symbol {
        Symbol::Char(c) => char_value(set, c),
        Symbol::Pair(pair) => pair_value(set, pair),
        Symbol::Control(control) => control_value(set, control),
    }
}

fn char_value(set: CodeSet, c: char) -> Option<u8> {
    // Every character of sets A and B is ASCII, so its value is an offset from its code point.
    let code = u8::try_from(c).ok()?;
    match (set, code) {
        (CodeSet::A, 0x20..=0x5f) | (CodeSet::B, 0x20..=0x7f) => Some(code - 0x20),
        (CodeSet::A, 0x00..=0x1f) => Some(code + 0x40),
        _ => None,
    }
}

fn pair_value(set: CodeSet, [tens, units]: [char; 2]) -> Option<u8> {
    if set != CodeSet::C {
        return None;
    }
    let tens = tens.to_digit(10)?;
    let units = units.to_digit(10)?;
    Some((tens * 10 + units) as u8)
}

fn control_value(set: CodeSet, control: Control) -> Option<u8> {
    use CodeSet::{A, B, C};
    let value = match (set, control) {
        (_, Control::Start(start_set)) => start(start_set),
        (_, Control::Stop) => STOP,
        (_, Control::Fnc1) => FNC1,
        (A | B, Control::Fnc2) => FNC2,
        (A | B, Control::Fnc3) => FNC3,
        (A, Control::Fnc4) => 101,
        (B, Control::Fnc4) => 100,
        (A | B, Control::Shift) => SHIFT,
        (A | B, Control::Code(C)) => 99,
        (A | C, Control::Code(B)) => 100,
        (B | C, Control::Code(A)) => 101,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pattern_lengths() {
        for value in 0..STOP {
            let pattern = pattern(value);
            assert_eq!(pattern.len(), PATTERN_LEN, "codeword {}", value);
            // Every codeword starts with a bar and ends with a space.
            assert_eq!(pattern.bits() >> (PATTERN_LEN - 1), 1);
            assert_eq!(pattern.bits() & 1, 0);
        }
        assert_eq!(pattern(STOP).len(), STOP_LEN);
    }

    #[test]
    fn test_patterns_have_eleven_modules_in_six_runs() {
        // Three bars and three spaces per codeword.
        for value in 0..STOP {
            let modules: Vec<_> = pattern(value).modules().collect();
            let runs = 1 + modules.windows(2).filter(|w| w[0] != w[1]).count();
            assert_eq!(runs, 6, "codeword {}", value);
        }
    }

    #[test]
    #[should_panic(expected = "invalid Code 128 codeword 107")]
    fn test_pattern_out_of_range() {
        pattern(107);
    }

    #[test]
    fn test_set_a_values() {
        assert_eq!(value_of(CodeSet::A, Symbol::Char(' ')), Some(0));
        assert_eq!(value_of(CodeSet::A, Symbol::Char(';')), Some(27));
        assert_eq!(value_of(CodeSet::A, Symbol::Char('_')), Some(63));
        assert_eq!(value_of(CodeSet::A, Symbol::Char('\0')), Some(64));
        assert_eq!(value_of(CodeSet::A, Symbol::Char('\x1f')), Some(95));
        assert_eq!(value_of(CodeSet::A, Symbol::Char('`')), None);
        assert_eq!(value_of(CodeSet::A, Symbol::Char('é')), None);
    }

    #[test]
    fn test_set_b_values() {
        assert_eq!(value_of(CodeSet::B, Symbol::Char('A')), Some(33));
        assert_eq!(value_of(CodeSet::B, Symbol::Char('~')), Some(94));
        assert_eq!(value_of(CodeSet::B, Symbol::Char('\x7f')), Some(95));
        assert_eq!(value_of(CodeSet::B, Symbol::Char('\n')), None);
    }

    #[test]
    fn test_set_c_values() {
        assert_eq!(value_of(CodeSet::C, Symbol::Pair(['0', '0'])), Some(0));
        assert_eq!(value_of(CodeSet::C, Symbol::Pair(['9', '9'])), Some(99));
        assert_eq!(value_of(CodeSet::C, Symbol::Pair(['0', 'A'])), None);
        assert_eq!(value_of(CodeSet::C, Symbol::Char('1')), None);
        assert_eq!(value_of(CodeSet::B, Symbol::Pair(['1', '2'])), None);
    }

    #[test]
    fn test_control_values() {
        let values = |control| {
            [CodeSet::A, CodeSet::B, CodeSet::C].map(|set| value_of(set, Symbol::Control(control)))
        };
        assert_eq!(values(Control::Fnc1), [Some(102); 3]);
        assert_eq!(values(Control::Fnc4), [Some(101), Some(100), None]);
        assert_eq!(values(Control::Shift), [Some(98), Some(98), None]);
        assert_eq!(values(Control::Code(CodeSet::A)), [None, Some(101), Some(101)]);
        assert_eq!(values(Control::Code(CodeSet::B)), [Some(100), None, Some(100)]);
        assert_eq!(values(Control::Code(CodeSet::C)), [Some(99), Some(99), None]);
        assert_eq!(values(Control::Start(CodeSet::C)), [Some(105); 3]);
        assert_eq!(values(Control::Stop), [Some(106); 3]);
    }
}
