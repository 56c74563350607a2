// SPDX-License-Identifier: MIT OR Apache-2.0

//! ANSI color spans.

/// Escape code that resets every attribute.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Argument names.
    Bold,
    /// Elapsed-time stamps.
    Yellow,
    /// Argument values.
    Cyan,
}

impl Color {
    pub const fn code(self) -> &'static str {
        match self {
            Color::Bold => "\x1b[1m",
            Color::Yellow => "\x1b[33m",
            Color::Cyan => "\x1b[36m",
        }
    }
}

/// Wraps `text` in the escape code for `color`, followed by a reset.
pub fn colorize(text: &str, color: Color) -> String {
    let mut out = String::with_capacity(text.len() + 9);
    out.push_str(color.code());
    out.push_str(text);
    out.push_str(RESET);
    out
}

/**
Whether output carries color escapes.

Plain output is the same text with the spans left out.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Color,
    Plain,
}

impl Paint {
    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            Paint::Color => colorize(text, color),
            Paint::Plain => text.to_string(),
        }
    }
}

impl From<bool> for Paint {
    fn from(color: bool) -> Self {
        if color { Paint::Color } else { Paint::Plain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_reset() {
        assert_eq!(colorize("x", Color::Bold), "\x1b[1mx\x1b[0m");
        assert_eq!(colorize("0.000s", Color::Yellow), "\x1b[33m0.000s\x1b[0m");
        assert_eq!(colorize("5", Color::Cyan), "\x1b[36m5\x1b[0m");
    }

    #[test]
    fn plain_leaves_text_alone() {
        assert_eq!(Paint::Plain.paint("x", Color::Bold), "x");
        assert_eq!(Paint::from(true), Paint::Color);
        assert_eq!(Paint::default().paint("x", Color::Cyan), colorize("x", Color::Cyan));
    }
}
