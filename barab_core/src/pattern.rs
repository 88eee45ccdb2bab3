use crate::{Element, Module, Width};

/// Fixed-length sequence of modules, stored as the `len` least significant bits of `bits` with the first module as
/// the most significant one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    bits: u16,
    len: u8,
}

impl Pattern {
    /// Construct a new pattern of `len` modules.
    /// # Example
    /// ```
    /// use barab_core::{Module, Pattern};
    /// let guard = Pattern::new(0b101, 3);
    /// assert_eq!(guard.len(), 3);
    /// assert_eq!(guard.module(1), Module::Space);
    /// ```
    pub const fn new(bits: u16, len: u8) -> Self {
        assert!(len as u32 <= u16::BITS, "pattern does not fit in 16 bits");
        Self { bits, len }
    }

    /// Get the raw bits.
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Get the number of modules.
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Check whether the pattern has no modules.
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Get the module at `index`.
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn module(self, index: usize) -> Module {
        assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        Module::from((self.bits >> (self.len() - 1 - index)) & 1 == 1)
    }

    /// Iterate over the modules in order.
    pub fn modules(self) -> impl Iterator<Item = Module> {
        (0..self.len()).map(move |i| self.module(i))
    }
}

/// Number of elements in a Code 39 character.
pub const CODE39_ELEMENTS: usize = 9;

/// Code 39 character pattern: nine alternating bars and spaces, starting with a bar, of which exactly three are
/// wide. Stored as a mask whose most significant of nine bits marks the first element as wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code39Pattern {
    wide: u16,
}

impl Code39Pattern {
    pub(crate) const fn from_mask(wide: u16) -> Self {
        Self { wide }
    }

    /// Build the pattern of `elements`. Returns `None` unless they are nine alternating bars and spaces starting
    /// with a bar.
    /// # Example
    /// ```
    /// use barab_core::{Code39Pattern, Element};
    /// let elements: Vec<_> = "bwbWBwBwb".chars().filter_map(Element::from_letter).collect();
    /// assert!(Code39Pattern::from_elements(&elements).is_some());
    /// assert!(Code39Pattern::from_elements(&elements[1..]).is_none());
    /// ```
    pub fn from_elements(elements: &[Element]) -> Option<Self> {
        if elements.len() != CODE39_ELEMENTS {
            return None;
        }
        let mut wide = 0;
        for (i, element) in elements.iter().enumerate() {
            if element.module != Self::module_at(i) {
                return None;
            }
            wide <<= 1;
            if element.width == Width::Wide {
                wide |= 1;
            }
        }
        Some(Self { wide })
    }

    /// Get the wide mask.
    pub const fn mask(self) -> u16 {
        self.wide
    }

    /// Get the elements in order.
    pub fn elements(self) -> [Element; CODE39_ELEMENTS] {
        std::array::from_fn(|i| {
            let width = if (self.wide >> (CODE39_ELEMENTS - 1 - i)) & 1 == 1 {
                Width::Wide
            } else {
                Width::Narrow
            };
            Element::new(Self::module_at(i), width)
        })
    }

    fn module_at(index: usize) -> Module {
        if index % 2 == 0 {
            Module::Bar
        } else {
            Module::Space
        }
    }
}

impl std::fmt::Display for Code39Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for element in self.elements() {
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Module pattern of a codeword in any symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulePattern {
    Binary(Pattern),
    Elements(Code39Pattern),
}

impl ModulePattern {
    /// Get the length of the pattern: modules for binary patterns, elements for Code 39.
    pub fn len(&self) -> usize {
        match self {
            Self::Binary(pattern) => pattern.len(),
            Self::Elements(_) => CODE39_ELEMENTS,
        }
    }

    /// Check whether the pattern has no modules or elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pattern_modules() {
        let pattern = Pattern::new(0b0001101, 7);
        let modules: Vec<bool> = pattern.modules().map(bool::from).collect();
        assert_eq!(modules, [false, false, false, true, true, false, true]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_pattern_module_out_of_bounds() {
        Pattern::new(0b101, 3).module(3);
    }

    #[test]
    fn test_code39_pattern_display() {
        assert_eq!(Code39Pattern::from_mask(0x034).to_string(), "bwbWBwBwb");
        assert_eq!(Code39Pattern::from_mask(0x094).to_string(), "bWbwBwBwb");
    }

    #[test]
    fn test_code39_pattern_rejects_wrong_colors() {
        let elements: Vec<_> = "wbbWBwBwb"
            .chars()
            .filter_map(Element::from_letter)
            .collect();
        assert_eq!(Code39Pattern::from_elements(&elements), None);
    }

    #[test]
    fn test_code39_pattern_element_round_trip() {
        let pattern = Code39Pattern::from_mask(0x121);
        assert_eq!(Code39Pattern::from_elements(&pattern.elements()), Some(pattern));
    }
}
