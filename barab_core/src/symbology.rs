/// Linear barcode standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Code128,
    Code39,
    UpcA,
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Code128 => "Code 128",
            Self::Code39 => "Code 39",
            Self::UpcA => "UPC-A",
        };
        write!(f, "{}", name)
    }
}

/// Error returned when parsing an unknown [Symbology] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbology '{0}'")]
pub struct ParseSymbologyError(String);

impl std::str::FromStr for Symbology {
    type Err = ParseSymbologyError;

    /// Parse a symbology name, ignoring case, dashes and spaces.
    /// # Example
    /// ```
    /// use barab_core::Symbology;
    /// assert_eq!("UPC-A".parse::<Symbology>(), Ok(Symbology::UpcA));
    /// assert_eq!("code 128".parse::<Symbology>(), Ok(Symbology::Code128));
    /// assert!("qr".parse::<Symbology>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | ' ' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "code128" => Ok(Self::Code128),
            "code39" => Ok(Self::Code39),
            "upca" => Ok(Self::UpcA),
            _ => Err(ParseSymbologyError(s.to_string())),
        }
    }
}

/// One of the three Code 128 character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSet {
    /// Uppercase ASCII, punctuation and control characters.
    A,
    /// Printable ASCII including lowercase.
    B,
    /// Pairs of digits.
    C,
}

impl CodeSet {
    /// Get the letter naming the set.
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

impl std::fmt::Display for CodeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Half of a UPC-A symbol. Digits are drawn differently on each side of the center guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpcGroup {
    Left,
    Right,
}

/// An alphabet mapping symbols to codeword values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Code128(CodeSet),
    Code39,
    UpcA(UpcGroup),
}

impl Alphabet {
    /// Get the [Symbology] the alphabet belongs to.
    /// # Example
    /// ```
    /// use barab_core::{Alphabet, CodeSet, Symbology};
    /// assert_eq!(Alphabet::Code128(CodeSet::C).symbology(), Symbology::Code128);
    /// ```
    pub fn symbology(self) -> Symbology {
        match self {
            Self::Code128(_) => Symbology::Code128,
            Self::Code39 => Symbology::Code39,
            Self::UpcA(_) => Symbology::UpcA,
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code128(set) => write!(f, "Code 128 set {}", set),
            Self::Code39 => write!(f, "Code 39"),
            Self::UpcA(UpcGroup::Left) => write!(f, "UPC-A left group"),
            Self::UpcA(UpcGroup::Right) => write!(f, "UPC-A right group"),
        }
    }
}

/// Named control codewords of Code 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Start(CodeSet),
    Stop,
    /// Switch to another code set for the rest of the symbol.
    Code(CodeSet),
    /// Encode the next character only from the other of sets A and B.
    Shift,
    Fnc1,
    Fnc2,
    Fnc3,
    Fnc4,
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start(set) => write!(f, "START {}", set),
            Self::Stop => write!(f, "STOP"),
            Self::Code(set) => write!(f, "CODE {}", set),
            Self::Shift => write!(f, "SHIFT"),
            Self::Fnc1 => write!(f, "FNC1"),
            Self::Fnc2 => write!(f, "FNC2"),
            Self::Fnc3 => write!(f, "FNC3"),
            Self::Fnc4 => write!(f, "FNC4"),
        }
    }
}

/// A unit of input that an [Alphabet] may assign a value to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    /// Two digits packed into one Code 128 set C codeword.
    Pair([char; 2]),
    Control(Control),
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<Control> for Symbol {
    fn from(value: Control) -> Self {
        Self::Control(value)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{:?}", c),
            Self::Pair([a, b]) => write!(f, "\"{}{}\"", a, b),
            Self::Control(control) => write!(f, "{}", control),
        }
    }
}
