//! Output buffer for one generated module.
//!
//! Append-only text with indentation tracking. Indentation is written lazily
//! at the first write of a line, so blank lines never carry trailing spaces.

const INDENT: &str = "    ";

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Write text to the current line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// End the current line.
    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a complete line.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    pub fn blank_line(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
        self.write_line();
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod source_writer_tests;
