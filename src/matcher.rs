// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Finding the qq invocation that produced a call site.

Several macro invocations can start on one line, so a candidate must start on
the call-site line *and* be written as `qq::<macro>!` for the right entry
point.  Remaining ties are broken by column.
*/

use crate::call_site::{Entry, NAMESPACE};
use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::visit::{self, Visit};
use syn::{Expr, Macro, Path, Token};

/// Returns the logged argument expressions of the invocation starting at
/// `line`/`column` (both 1-based), or `None` when there is no such invocation.
///
/// For [Entry::Explicit] the leading logger argument is not returned.
pub fn find_call(tree: &syn::File, line: u32, column: u32, entry: Entry) -> Option<Vec<Expr>> {
    let mut finder = CallFinder::new(line, entry);
    finder.visit_file(tree);
    let CallFinder { mut found, .. } = finder;
    let exact = found.iter().position(|candidate| candidate.column == column);
    let index = exact.unwrap_or(0);
    if index < found.len() {
        Some(found.swap_remove(index).args)
    } else {
        None
    }
}

/// Whether `path` names the qq macro for `entry`, e.g. `qq::log` or `::qq::log_to`.
pub fn is_qq_call(path: &Path, entry: Entry) -> bool {
    let mut segments = path.segments.iter();
    match (segments.next(), segments.next(), segments.next()) {
        (Some(namespace), Some(name), None) => {
            namespace.arguments.is_none()
                && name.arguments.is_none()
                && namespace.ident == NAMESPACE
                && name.ident == entry.macro_name()
        }
        _ => false,
    }
}

struct Candidate {
    column: u32,
    args: Vec<Expr>,
}

struct CallFinder {
    line: u32,
    entry: Entry,
    found: Vec<Candidate>,
}

impl CallFinder {
    fn new(line: u32, entry: Entry) -> Self {
        Self {
            line,
            entry,
            found: Vec::new(),
        }
    }

    fn search_nested(&mut self, args: &Punctuated<Expr, Token![,]>) {
        // parsed bodies don't share the tree's lifetime, so search them with a fresh finder
        let mut nested = CallFinder::new(self.line, self.entry);
        for arg in args {
            nested.visit_expr(arg);
        }
        self.found.append(&mut nested.found);
    }
}

fn path_start(path: &Path) -> Span {
    match (&path.leading_colon, path.segments.first()) {
        (Some(colon), _) => colon.spans[0],
        (None, Some(segment)) => segment.ident.span(),
        (None, None) => Span::call_site(),
    }
}

fn parse_args(mac: &Macro) -> syn::Result<Punctuated<Expr, Token![,]>> {
    mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated)
}

impl<'ast> Visit<'ast> for CallFinder {
    fn visit_macro(&mut self, mac: &'ast Macro) {
        if is_qq_call(&mac.path, self.entry) {
            let start = path_start(&mac.path).start();
            if start.line as u32 == self.line {
                if let Ok(args) = parse_args(mac) {
                    self.found.push(Candidate {
                        column: start.column as u32 + 1,
                        args: args.into_iter().skip(self.entry.skip()).collect(),
                    });
                }
                return;
            }
        }
        if let Ok(args) = parse_args(mac) {
            self.search_nested(&args);
        }
        visit::visit_macro(self, mac);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;

    fn args_at(source: &str, line: u32, column: u32, entry: Entry) -> Option<Vec<String>> {
        let tree = syn::parse_file(source).unwrap();
        find_call(&tree, line, column, entry).map(|args| {
            args.iter()
                .map(|arg| arg.to_token_stream().to_string())
                .collect()
        })
    }

    #[test]
    fn matches_by_line_and_callee() {
        let source = "\
fn main() {
    let x = 1;
    other::log!(nope);
    qq::log!(x, 2);
}
";
        assert_eq!(
            args_at(source, 4, 5, Entry::Default),
            Some(vec!["x".to_string(), "2".to_string()])
        );
        assert_eq!(args_at(source, 3, 5, Entry::Default), None);
    }

    #[test]
    fn other_calls_on_the_same_line_are_ignored() {
        let source = "fn main() { foo(bar(1)); qq::log!(y); println!(\"{}\", z); }\n";
        assert_eq!(
            args_at(source, 1, 26, Entry::Default),
            Some(vec!["y".to_string()])
        );
    }

    #[test]
    fn column_breaks_ties() {
        let source = "fn main() { qq::log!(a); qq::log!(b); }\n";
        assert_eq!(args_at(source, 1, 26, Entry::Default), Some(vec!["b".to_string()]));
        assert_eq!(args_at(source, 1, 13, Entry::Default), Some(vec!["a".to_string()]));
        // unknown column falls back to the first invocation on the line
        assert_eq!(args_at(source, 1, 99, Entry::Default), Some(vec!["a".to_string()]));
    }

    #[test]
    fn explicit_entry_skips_the_logger() {
        let source = "fn main() {\n    qq::log_to!(&logger, a, b);\n}\n";
        assert_eq!(
            args_at(source, 2, 5, Entry::Explicit),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(args_at(source, 2, 5, Entry::Default), None);
    }

    #[test]
    fn multiline_invocation_matches_its_first_line() {
        let source = "\
fn main() {
    qq::log!(
        a,
        b,
    );
}
";
        assert_eq!(
            args_at(source, 2, 5, Entry::Default),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(args_at(source, 5, 5, Entry::Default), None);
    }

    #[test]
    fn searches_inside_other_macros() {
        let source = "fn main() {\n    let v = vec![qq::log!(n), 1];\n}\n";
        assert_eq!(args_at(source, 2, 18, Entry::Default), Some(vec!["n".to_string()]));
    }

    #[test]
    fn searches_closures_and_nested_functions() {
        let source = "\
fn main() {
    let f = |k: u8| {
        qq::log!(k);
    };
    fn inner() {
        qq::log!(z);
    }
}
";
        assert_eq!(args_at(source, 3, 9, Entry::Default), Some(vec!["k".to_string()]));
        assert_eq!(args_at(source, 6, 9, Entry::Default), Some(vec!["z".to_string()]));
    }

    #[test]
    fn callee_shape() {
        let path = |s: &str| syn::parse_str::<Path>(s).unwrap();
        assert!(is_qq_call(&path("qq::log"), Entry::Default));
        assert!(is_qq_call(&path("::qq::log"), Entry::Default));
        assert!(is_qq_call(&path("qq::log_to"), Entry::Explicit));
        assert!(!is_qq_call(&path("log"), Entry::Default));
        assert!(!is_qq_call(&path("qq::log"), Entry::Explicit));
        assert!(!is_qq_call(&path("other::log"), Entry::Default));
        assert!(!is_qq_call(&path("a::qq::log"), Entry::Default));
    }
}
