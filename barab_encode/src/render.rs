use std::io::Write;

use barab_core::{Module, ModuleSequence};

/// Renders a [ModuleSequence] as lines of text.
pub struct TextRenderer {
    space_pattern: Box<str>,
    bar_pattern: Box<str>,
    height: usize,
    quiet_zone: usize,
}

impl TextRenderer {
    /// Construct a new [TextRenderer] that uses "█" to render bars and " " to print spaces, on 4 lines with a quiet
    /// zone of 10 modules on each side.
    pub fn new() -> Self {
        Self {
            space_pattern: " ".into(),
            bar_pattern: "█".into(),
            height: 4,
            quiet_zone: 10,
        }
    }

    /// Set the space module `pattern` to be used when rendering.
    pub fn with_space_pattern(mut self, pattern: &str) -> Self {
        self.space_pattern = pattern.into();
        self
    }

    /// Set the bar module `pattern` to be used when rendering.
    pub fn with_bar_pattern(mut self, pattern: &str) -> Self {
        self.bar_pattern = pattern.into();
        self
    }

    /// Set the number of lines.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the number of space modules printed before and after the symbol.
    pub fn with_quiet_zone(mut self, quiet_zone: usize) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Invert the bar and space patterns.
    pub fn inverted(mut self) -> Self {
        std::mem::swap(&mut self.space_pattern, &mut self.bar_pattern);
        self
    }

    /// Peek at the pattern used to render spaces.
    pub fn space_pattern(&self) -> &str {
        self.space_pattern.as_ref()
    }

    /// Peek at the pattern used to render bars.
    pub fn bar_pattern(&self) -> &str {
        self.bar_pattern.as_ref()
    }

    /// Render `modules` into `output`.
    /// # Example
    /// ```
    /// use barab_core::{ModuleSequence, Pattern};
    /// use barab_encode::TextRenderer;
    /// let mut modules = ModuleSequence::new();
    /// modules.push_pattern(Pattern::new(0b101, 3));
    /// let mut output = Vec::new();
    /// let renderer = TextRenderer::new().with_bar_pattern("#").with_height(2).with_quiet_zone(1);
    /// renderer.render(&mut output, &modules).unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), " # # \n # # \n");
    /// ```
    pub fn render<M, W>(&self, output: &mut W, modules: M) -> std::io::Result<()>
    where
        M: AsRef<ModuleSequence>,
        W: Write,
    {
        let modules = modules.as_ref();
        let margin = self.space_pattern().repeat(self.quiet_zone);
        let mut line = margin.clone();
        for module in modules.iter() {
            let pattern = match module {
                Module::Bar => self.bar_pattern(),
                Module::Space => self.space_pattern(),
            };
            line.push_str(pattern);
        }
        line.push_str(&margin);
        for _ in 0..self.height {
            writeln!(output, "{}", line)?;
        }
        Ok(())
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
