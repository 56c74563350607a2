// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Recovering argument names from source text.

Each argument of the matched invocation gets a name:

* a variable, e.g. `port`, is named by its identifier;
* an expression, e.g. `a + b` or `v[i]`, is named by its rendered source text;
* anything else, literals and constants included, gets an empty name.

The names list always has one entry per logged argument, in order.
*/

use crate::call_site::CallSite;
use crate::error::{Error, Result};
use crate::matcher::find_call;
use crate::source::{parse_source, resolve};
use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use std::collections::HashSet;
use syn::visit::{self, Visit};
use syn::{Expr, ExprPath, Ident, UnOp};

/// The name given to arguments that have no symbolic name.
pub const NO_NAME: &str = "";

/**
Locates, parses and inspects the source of `site`, returning one name per
logged argument.

proc-macro2 keeps the text of every file parsed on a thread for span lookups.
Each call releases it afterwards, which invalidates *all* `proc_macro2` spans
created on the calling thread, including any the host program still holds.
Inside a procedural macro no lookup is attempted and
[Error::InsideProcMacro] is returned, so the values are logged without names.
*/
pub fn names_at(site: &CallSite) -> Result<Vec<String>> {
    if !site.is_known() {
        return Err(Error::UnknownCallSite);
    }
    if inside_proc_macro() {
        return Err(Error::InsideProcMacro);
    }
    let path = resolve(site);
    let names = parse_source(&path).and_then(|tree| arg_names(&tree, site));
    // span locations of every parsed file are kept per thread until released
    proc_macro2::extra::invalidate_current_thread_spans();
    names
}

/// Whether the current thread is running a procedural macro, where compiler
/// spans carry no line information and spans can't be released.
pub fn inside_proc_macro() -> bool {
    proc_macro::is_available()
}

/// Finds the invocation for `site` in `tree` and names its arguments.
pub fn arg_names(tree: &syn::File, site: &CallSite) -> Result<Vec<String>> {
    let args = find_call(tree, site.line(), site.column(), site.entry()).ok_or_else(|| {
        Error::NoMatch {
            file: site.file().to_string(),
            line: site.line(),
        }
    })?;
    let items = Items::of(tree);
    Ok(args.iter().map(|arg| arg_name(arg, &items)).collect())
}

/// Names a single argument expression.
pub fn arg_name(arg: &Expr, items: &Items) -> String {
    match arg {
        Expr::Path(path) => match single_ident(path) {
            Some(ident) if items.is_binding(ident) => ident.to_string(),
            _ => NO_NAME.to_string(),
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) && is_literal(&unary.expr) => {
            NO_NAME.to_string()
        }
        Expr::Group(group) => arg_name(&group.expr, items),
        Expr::Binary(_)
        | Expr::Call(_)
        | Expr::MethodCall(_)
        | Expr::Index(_)
        | Expr::Paren(_)
        | Expr::Range(_)
        | Expr::Cast(_)
        | Expr::Unary(_)
        | Expr::Reference(_) => render_expr(arg),
        _ => NO_NAME.to_string(),
    }
}

fn single_ident(path: &ExprPath) -> Option<&Ident> {
    if path.qself.is_some() {
        return None;
    }
    path.path.get_ident()
}

fn is_literal(expr: &Expr) -> bool {
    match expr {
        Expr::Lit(_) => true,
        Expr::Group(group) => is_literal(&group.expr),
        _ => false,
    }
}

/**
Names declared in a file that can't be variable bindings.

Rust has no name resolution at this level, so bindings are told apart by
convention: identifiers starting with an uppercase letter are types, constants
or variants.  Lowercase `const` and `fn` items declared in the file are
excluded too.
*/
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Items {
    names: HashSet<String>,
}

impl Items {
    pub fn of(tree: &syn::File) -> Self {
        let mut collector = ItemCollector::default();
        collector.visit_file(tree);
        Self {
            names: collector.names,
        }
    }

    /// Whether `ident` refers to a variable.
    pub fn is_binding(&self, ident: &Ident) -> bool {
        let name = ident.to_string();
        let bare = name.strip_prefix("r#").unwrap_or(&name);
        match bare.chars().next() {
            Some(first) if first.is_uppercase() => false,
            Some(_) => !self.names.contains(bare),
            None => false,
        }
    }
}

#[derive(Default)]
struct ItemCollector {
    names: HashSet<String>,
}

impl ItemCollector {
    fn insert(&mut self, ident: &Ident) {
        let name = ident.to_string();
        let bare = name.strip_prefix("r#").unwrap_or(&name).to_string();
        self.names.insert(bare);
    }
}

impl<'ast> Visit<'ast> for ItemCollector {
    fn visit_item_const(&mut self, node: &'ast syn::ItemConst) {
        self.insert(&node.ident);
        visit::visit_item_const(self, node);
    }

    fn visit_item_fn(&mut self, node: &'ast syn::ItemFn) {
        self.insert(&node.sig.ident);
        visit::visit_item_fn(self, node);
    }

    fn visit_impl_item_const(&mut self, node: &'ast syn::ImplItemConst) {
        self.insert(&node.ident);
        visit::visit_impl_item_const(self, node);
    }

    fn visit_trait_item_const(&mut self, node: &'ast syn::TraitItemConst) {
        self.insert(&node.ident);
        visit::visit_trait_item_const(self, node);
    }

    fn visit_foreign_item_fn(&mut self, node: &'ast syn::ForeignItemFn) {
        self.insert(&node.sig.ident);
        visit::visit_foreign_item_fn(self, node);
    }
}

/**
Renders an expression as normalized source text.

Whitespace from the file is not kept.  Tokens are joined directly, with a
space after `,` and `;`, between adjacent words, and between two identical
standalone operators other than `>`.

```
let expr: syn::Expr = syn::parse_str("a  +  f( x,y )").unwrap();
assert_eq!(qq::names::render_expr(&expr), "a+f(x, y)");
```
*/
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    render_tokens(expr.to_token_stream(), &mut out);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Word,
    // closing delimiter or postfix `?`
    Close,
    Separator,
    Punct(char, Spacing),
}

fn render_tokens(tokens: TokenStream, out: &mut String) {
    let mut last = Last::Start;
    for tree in tokens {
        match tree {
            TokenTree::Ident(_) | TokenTree::Literal(_) => {
                if matches!(last, Last::Word | Last::Close | Last::Separator) {
                    out.push(' ');
                }
                out.push_str(&tree.to_string());
                last = Last::Word;
            }
            TokenTree::Punct(punct) => {
                let ch = punct.as_char();
                let separated = match last {
                    Last::Separator => true,
                    // `>>` closing nested generics stays joined
                    Last::Punct(prev, Spacing::Alone) => prev == ch && ch != '>',
                    _ => false,
                };
                if separated {
                    out.push(' ');
                }
                out.push(ch);
                last = match ch {
                    ',' | ';' => Last::Separator,
                    '?' => Last::Close,
                    _ => Last::Punct(ch, punct.spacing()),
                };
            }
            TokenTree::Group(group) => {
                if last == Last::Separator {
                    out.push(' ');
                }
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{", "}"),
                    Delimiter::None => ("", ""),
                };
                out.push_str(open);
                render_tokens(group.stream(), out);
                out.push_str(close);
                last = Last::Close;
            }
        }
    }
}
