// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merging argument names with runtime values.
//!
//! Whether an argument prints as `name=value` depends only on the shape of its
//! source text, never on the runtime type of the value.

use crate::color::{Color, Paint};
use crate::names::NO_NAME;
use std::fmt::Debug;

/**
Formats each value, prefixed by its name when it has one.

Values are rendered with `{:?}`, so strings are quoted and struct fields are
named.  Entry `i` of the result corresponds to `values[i]`.

```
use qq::color::Paint;
let count = 5;
let names = vec!["count".to_string(), String::new()];
let formatted = qq::format::format_args(&names, &[&count, &"done"], Paint::Plain);
assert_eq!(formatted, vec!["count=5", "\"done\""]);
```
*/
pub fn format_args(names: &[String], values: &[&dyn Debug], paint: Paint) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let name = names.get(i).map(String::as_str).unwrap_or(NO_NAME);
            format_arg(name, *value, paint)
        })
        .collect()
}

/// Formats values without names, for when no names could be recovered.
pub fn bare_args(values: &[&dyn Debug], paint: Paint) -> Vec<String> {
    format_args(&[], values, paint)
}

fn format_arg(name: &str, value: &dyn Debug, paint: Paint) -> String {
    let value = paint.paint(&format!("{value:?}"), Color::Cyan);
    if name.is_empty() {
        value
    } else {
        format!("{}={}", paint.paint(name, Color::Bold), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn named_and_literal_arguments() {
        let names = vec!["count".to_string(), NO_NAME.to_string()];
        let formatted = format_args(&names, &[&5, &"done"], Paint::Color);
        assert_eq!(
            formatted,
            vec![
                "\x1b[1mcount\x1b[0m=\x1b[36m5\x1b[0m".to_string(),
                "\x1b[36m\"done\"\x1b[0m".to_string(),
            ]
        );
        assert!(!formatted[1].contains('='));
    }

    #[test]
    fn values_reveal_structure() {
        let p = Point { x: 1, y: 2 };
        let names = vec!["p".to_string(), "a+b".to_string()];
        let formatted = format_args(&names, &[&p, &5u8], Paint::Plain);
        assert_eq!(formatted, vec!["p=Point { x: 1, y: 2 }", "a+b=5"]);
        let _ = (p.x, p.y);
    }

    #[test]
    fn bare_values_have_no_names() {
        let formatted = bare_args(&[&1, &Some("x"), &'c'], Paint::Plain);
        assert_eq!(formatted, vec!["1", "Some(\"x\")", "'c'"]);
    }

    #[test]
    fn output_length_follows_values() {
        assert!(format_args(&[], &[], Paint::Plain).is_empty());
        let names = vec![String::new(); 3];
        assert_eq!(format_args(&names, &[&1, &2, &3], Paint::Color).len(), 3);
    }
}
