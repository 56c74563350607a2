// SPDX-License-Identifier: MIT OR Apache-2.0

//! A single formatted log line.
//!
//! A [`LogRecord`] collects the colorized pieces of one line (the elapsed-time
//! stamp followed by one piece per argument) and is written out in one go,
//! space-separated and newline-terminated.

use std::fmt::Display;

/**
A formatted log line.

Parts are kept separate until the record is written, so a line is assembled
without repeated string concatenation and is never visible half-built.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Append a part to the record.
    pub fn log_owned(&mut self, part: String) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

impl Extend<String> for LogRecord {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.parts.extend(iter);
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug, Clone, PartialEq/Eq, Hash: Derived
- Default: Derived - an empty line
- Display: the line as written, parts joined by single spaces
- Extend<String>: appending formatted arguments after the stamp

NOT IMPLEMENTED:
- Copy: Vec<String> is heap-allocated
- Ord/PartialOrd: No meaningful ordering for lines
*/
