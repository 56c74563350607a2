// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Call-site capture.

A [CallSite] is recorded by the [`call_site!`](crate::call_site) macro at the
point where a qq macro is invoked.  It is recomputed on every log call and
never cached.
*/

use std::path::Path;

/// The logging namespace a qq invocation must be written under, e.g. `qq::log!`.
pub const NAMESPACE: &str = "qq";

/**
Which entry point produced a call site.

The two entry points differ by exactly one leading macro argument: `qq::log_to!`
takes the logger first, `qq::log!` does not.  The matcher uses this to pick
the right macro name and to skip the logger expression.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// `qq::log!(..)` on the default logger.
    Default,
    /// `qq::log_to!(logger, ..)` on an explicit logger.
    Explicit,
}

impl Entry {
    /// The macro name that follows the namespace at the call site.
    pub const fn macro_name(self) -> &'static str {
        match self {
            Entry::Default => "log",
            Entry::Explicit => "log_to",
        }
    }

    /// Number of leading macro arguments that are not logged values.
    pub const fn skip(self) -> usize {
        match self {
            Entry::Default => 0,
            Entry::Explicit => 1,
        }
    }
}

/**
Source location of a qq invocation.

`line` and `column` are 1-based and refer to the start of the invocation, as
reported by `line!()` and `column!()`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
    function: &'static str,
    manifest_dir: Option<&'static str>,
    entry: Entry,
}

impl CallSite {
    pub const fn new(
        file: &'static str,
        line: u32,
        column: u32,
        function: &'static str,
        entry: Entry,
    ) -> Self {
        Self {
            file,
            line,
            column,
            function,
            manifest_dir: None,
            entry,
        }
    }

    /**
    Records the manifest directory of the crate that contains the call.

    `file!()` is relative to wherever cargo was invoked, so the source locator
    uses this directory and its ancestors to find the file.
    */
    pub const fn with_manifest_dir(mut self, manifest_dir: Option<&'static str>) -> Self {
        self.manifest_dir = manifest_dir;
        self
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Fully-qualified path of the function containing the call.
    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn manifest_dir(&self) -> Option<&'static str> {
        self.manifest_dir
    }

    pub fn entry(&self) -> Entry {
        self.entry
    }

    /// Whether the site carries enough information to look the call up.
    pub fn is_known(&self) -> bool {
        !self.file.is_empty() && self.line > 0
    }

    /// Base name of the source file, as printed in headers.
    pub fn short_file(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

/**
Captures the [CallSite] of the surrounding code.

```
let site = qq::call_site!(qq::Entry::Default);
assert_eq!(site.line(), line!() - 1);
assert!(site.function().ends_with("main"));
```
*/
#[macro_export]
macro_rules! call_site {
    ($entry:expr) => {
        $crate::CallSite::new(
            ::core::file!(),
            ::core::line!(),
            ::core::column!(),
            $crate::function_name!(),
            $entry,
        )
        .with_manifest_dir(::core::option_env!("CARGO_MANIFEST_DIR"))
    };
}

/// Fully-qualified path of the enclosing function, e.g. `my_crate::net::connect`.
#[doc(hidden)]
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __qq_here() {}
        fn __qq_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = __qq_type_name_of(__qq_here);
        match name.strip_suffix("::__qq_here") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_location_and_function() {
        let site = crate::call_site!(Entry::Explicit);
        assert_eq!(site.line(), line!() - 1);
        assert!(site.column() > 0);
        assert!(site.file().ends_with("call_site.rs"), "{}", site.file());
        assert_eq!(site.short_file(), "call_site.rs");
        assert_eq!(
            site.function(),
            "qq::call_site::tests::capture_records_location_and_function"
        );
        assert!(site.manifest_dir().is_some());
        assert_eq!(site.entry(), Entry::Explicit);
        assert!(site.is_known());
    }

    #[test]
    fn entries_differ_by_one_argument() {
        assert_eq!(Entry::Default.macro_name(), "log");
        assert_eq!(Entry::Explicit.macro_name(), "log_to");
        assert_eq!(Entry::Explicit.skip(), Entry::Default.skip() + 1);
    }

    #[test]
    fn empty_site_is_unknown() {
        let site = CallSite::new("", 0, 0, "", Entry::Default);
        assert!(!site.is_known());
        assert_eq!(site.short_file(), "");
    }
}
