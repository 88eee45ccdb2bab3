pub mod checksum;
pub mod code128;
pub mod code39;
mod module;
mod pattern;
mod symbology;
pub mod table;
pub mod upca;

pub use module::{runs_of, Element, Module, ModuleSequence, Run, Scanline, Width};
pub use pattern::{Code39Pattern, ModulePattern, Pattern, CODE39_ELEMENTS};
pub use symbology::{Alphabet, CodeSet, Control, ParseSymbologyError, Symbol, Symbology, UpcGroup};
pub use table::TableError;

/// An encoded linear barcode: the codewords of a message and the modules drawing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    symbology: Symbology,
    codewords: Vec<u8>,
    modules: ModuleSequence,
}

impl Barcode {
    /// Construct a new [Barcode]. Returns `None` if `modules` is empty, since every symbology draws at least its
    /// guards.
    pub fn new(symbology: Symbology, codewords: Vec<u8>, modules: ModuleSequence) -> Option<Self> {
        if modules.is_empty() {
            None
        } else {
            Some(Self {
                symbology,
                codewords,
                modules,
            })
        }
    }

    /// Get the symbology.
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Get the codeword sequence, guards and check value included.
    pub fn codewords(&self) -> &[u8] {
        &self.codewords
    }

    /// Get the modules.
    pub fn modules(&self) -> &ModuleSequence {
        &self.modules
    }
}

impl AsRef<ModuleSequence> for Barcode {
    fn as_ref(&self) -> &ModuleSequence {
        self.modules()
    }
}

impl From<Barcode> for ModuleSequence {
    fn from(value: Barcode) -> Self {
        value.modules
    }
}
