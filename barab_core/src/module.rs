use bitvec::{order::Msb0, slice::BitSlice, vec::BitVec, view::BitView};
use itertools::Itertools;

use crate::{ModulePattern, Pattern};

/// Module (aka, the narrowest unit) of a linear barcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Module {
    Space,
    Bar,
}

impl Module {
    /// Get the inverted module.
    /// # Example
    /// ```
    /// use barab_core::Module;
    /// assert_eq!(Module::Bar.inverted(), Module::Space);
    /// assert_eq!(Module::Space.inverted(), Module::Bar);
    /// ```
    pub fn inverted(&self) -> Self {
        match self {
            Module::Bar => Module::Space,
            Module::Space => Module::Bar,
        }
    }
}

impl From<bool> for Module {
    fn from(value: bool) -> Self {
        match value {
            true => Module::Bar,
            false => Module::Space,
        }
    }
}

impl From<Module> for bool {
    fn from(value: Module) -> Self {
        match value {
            Module::Bar => true,
            Module::Space => false,
        }
    }
}

/// Relative width of a Code 39 bar or space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    Narrow,
    Wide,
}

/// A bar or a space tagged with its relative width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    pub module: Module,
    pub width: Width,
}

impl Element {
    /// Construct a new [Element].
    pub const fn new(module: Module, width: Width) -> Self {
        Self { module, width }
    }

    /// Parse an element from its letter: `b`/`w` for a narrow bar/space, `B`/`W` for a wide one.
    /// # Example
    /// ```
    /// use barab_core::{Element, Module, Width};
    /// assert_eq!(Element::from_letter('W'), Some(Element::new(Module::Space, Width::Wide)));
    /// assert_eq!(Element::from_letter('x'), None);
    /// ```
    pub fn from_letter(letter: char) -> Option<Self> {
        let element = match letter {
            'b' => Self::new(Module::Bar, Width::Narrow),
            'B' => Self::new(Module::Bar, Width::Wide),
            'w' => Self::new(Module::Space, Width::Narrow),
            'W' => Self::new(Module::Space, Width::Wide),
            _ => return None,
        };
        Some(element)
    }

    /// Get the letter of the element, see [Element::from_letter].
    pub fn letter(&self) -> char {
        match (self.module, self.width) {
            (Module::Bar, Width::Narrow) => 'b',
            (Module::Bar, Width::Wide) => 'B',
            (Module::Space, Width::Narrow) => 'w',
            (Module::Space, Width::Wide) => 'W',
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Maximal span of equal modules or samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub module: Module,
    pub len: usize,
}

impl Run {
    pub const fn new(module: Module, len: usize) -> Self {
        Self { module, len }
    }
}

/// Group consecutive equal bits into [Run]s.
pub fn runs_of(bits: &BitSlice<u8, Msb0>) -> Vec<Run> {
    bits.iter()
        .by_vals()
        .chunk_by(|bit| *bit)
        .into_iter()
        .map(|(bit, chunk)| Run::new(Module::from(bit), chunk.count()))
        .collect()
}

/// The ordered modules of an encoded barcode, ready to be handed to a renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleSequence {
    bits: BitVec<u8, Msb0>,
}

impl ModuleSequence {
    /// Construct an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty sequence able to hold `capacity` modules without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(capacity),
        }
    }

    /// Append a binary [Pattern].
    pub fn push_pattern(&mut self, pattern: Pattern) {
        let raw = pattern.bits();
        let bits = raw.view_bits::<Msb0>();
        self.bits
            .extend_from_bitslice(&bits[bits.len() - pattern.len()..]);
    }

    /// Append `element`, spending `wide_modules` modules on it if it is wide and one module otherwise.
    pub fn push_element(&mut self, element: Element, wide_modules: usize) {
        let len = match element.width {
            Width::Narrow => 1,
            Width::Wide => wide_modules,
        };
        self.push_module(element.module, len);
    }

    /// Append a pattern from the symbology tables, spending `wide_modules` modules on wide Code 39 elements.
    pub fn push_module_pattern(&mut self, pattern: ModulePattern, wide_modules: usize) {
        match pattern {
            ModulePattern::Binary(pattern) => self.push_pattern(pattern),
            ModulePattern::Elements(pattern) => {
                for element in pattern.elements() {
                    self.push_element(element, wide_modules);
                }
            }
        }
    }

    /// Append `len` copies of `module`.
    pub fn push_module(&mut self, module: Module, len: usize) {
        self.bits.resize(self.bits.len() + len, module.into());
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check whether the sequence has no modules.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the module at `index`.
    pub fn get(&self, index: usize) -> Option<Module> {
        self.bits.get(index).map(|bit| Module::from(*bit))
    }

    /// Iterate over the modules in order.
    pub fn iter(&self) -> impl Iterator<Item = Module> + '_ {
        self.bits.iter().by_vals().map(Module::from)
    }

    /// Get the underlying bits, where `1` is a bar.
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Get the run-length view of the sequence.
    /// # Example
    /// ```
    /// use barab_core::{Module, ModuleSequence, Pattern, Run};
    /// let mut modules = ModuleSequence::new();
    /// modules.push_pattern(Pattern::new(0b11001, 5));
    /// assert_eq!(
    ///     modules.runs(),
    ///     vec![Run::new(Module::Bar, 2), Run::new(Module::Space, 2), Run::new(Module::Bar, 1)]
    /// );
    /// ```
    pub fn runs(&self) -> Vec<Run> {
        runs_of(&self.bits)
    }

    /// Sample the sequence as a scanline would see it: every module becomes `pixels_per_module` samples and
    /// `quiet_zone` modules of space are added on both sides.
    pub fn to_scanline(&self, pixels_per_module: usize, quiet_zone: usize) -> Scanline {
        let margin = quiet_zone * pixels_per_module;
        let mut samples = BitVec::with_capacity(self.len() * pixels_per_module + 2 * margin);
        samples.resize(margin, false);
        for bit in self.bits.iter().by_vals() {
            samples.resize(samples.len() + pixels_per_module, bit);
        }
        samples.resize(samples.len() + margin, false);
        Scanline { samples }
    }
}

impl AsRef<ModuleSequence> for ModuleSequence {
    fn as_ref(&self) -> &ModuleSequence {
        self
    }
}

impl std::fmt::Display for ModuleSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// One horizontal row of an image, reduced to a bar/space sample per pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanline {
    samples: BitVec<u8, Msb0>,
}

impl Scanline {
    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check whether the scanline has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the sample at `index`, `true` meaning bar.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.samples.get(index).map(|bit| *bit)
    }

    /// Get the underlying samples.
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.samples
    }

    /// Group the samples into [Run]s of equal color.
    pub fn runs(&self) -> Vec<Run> {
        runs_of(&self.samples)
    }
}

impl FromIterator<bool> for Scanline {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl From<&[bool]> for Scanline {
    fn from(value: &[bool]) -> Self {
        value.iter().copied().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_push_pattern_keeps_leading_zeros() {
        let mut modules = ModuleSequence::new();
        modules.push_pattern(Pattern::new(0b01010, 5));
        assert_eq!(modules.to_string(), "01010");
        assert_eq!(modules.len(), 5);
    }

    #[test]
    fn test_push_element_widths() {
        let mut modules = ModuleSequence::new();
        modules.push_element(Element::new(Module::Bar, Width::Wide), 3);
        modules.push_element(Element::new(Module::Space, Width::Narrow), 3);
        modules.push_element(Element::new(Module::Bar, Width::Narrow), 3);
        assert_eq!(modules.to_string(), "11101");
    }

    #[test]
    fn test_push_module_pattern() {
        let mut modules = ModuleSequence::new();
        modules.push_module_pattern(ModulePattern::Binary(Pattern::new(0b110, 3)), 3);
        modules.push_module_pattern(ModulePattern::Elements(crate::code39::pattern(43)), 2);
        // The guard is bWbwBwBwb.
        assert_eq!(modules.to_string(), "110100101101101");
    }

    #[test]
    fn test_to_scanline_scales_and_pads() {
        let mut modules = ModuleSequence::new();
        modules.push_pattern(Pattern::new(0b101, 3));
        let scanline = modules.to_scanline(2, 1);
        assert_eq!(scanline.len(), 10);
        assert_eq!(
            scanline.runs(),
            vec![
                Run::new(Module::Space, 2),
                Run::new(Module::Bar, 2),
                Run::new(Module::Space, 2),
                Run::new(Module::Bar, 2),
                Run::new(Module::Space, 2),
            ]
        );
    }

    #[test]
    fn test_scanline_from_bools() {
        let scanline = Scanline::from(&[false, true, true, false][..]);
        assert_eq!(scanline.get(1), Some(true));
        assert_eq!(scanline.get(4), None);
        assert_eq!(scanline.runs().len(), 3);
    }

    #[test]
    fn test_element_letters() {
        for letter in ['b', 'B', 'w', 'W'] {
            assert_eq!(Element::from_letter(letter).unwrap().letter(), letter);
        }
    }
}
