//! Update expressions
//!
//! Textual updates use `path=value`, where `value` is cast with
//! [`crate::cast::cast`]. A literal `=` inside the value is written `\=`.
//! All other update forms carry typed values and are stored without casting.

use crate::cast::cast;
use crate::error::{ConfigError, Result};
use crate::tree::{ConfigNode, ConfigTree, ConfigValue, PropertyPath};

/// An update request, decided once at the call boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// `path=value` strings. A single string may hold several
    /// whitespace-separated expressions; with several strings each one is a
    /// single expression. Applied left to right, so later ones win.
    Expressions(Vec<String>),
    /// Root keys of the mapping replace the same root keys wholesale.
    Replace(ConfigTree),
    /// Typed value at a dotted path. Subtrees replace whatever is there.
    Assign { path: String, node: ConfigNode },
    /// Root-level name/value pairs, values used as-is.
    Named(Vec<(String, ConfigNode)>),
}

impl Update {
    pub fn expression(expr: impl Into<String>) -> Self {
        Update::Expressions(vec![expr.into()])
    }

    pub fn expressions<I, S>(exprs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Update::Expressions(exprs.into_iter().map(Into::into).collect())
    }

    pub fn assign(path: impl Into<String>, node: impl Into<ConfigNode>) -> Self {
        Update::Assign {
            path: path.into(),
            node: node.into(),
        }
    }

    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigNode>,
    {
        Update::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<&str> for Update {
    fn from(expr: &str) -> Self {
        Update::expression(expr)
    }
}

impl From<String> for Update {
    fn from(expr: String) -> Self {
        Update::expression(expr)
    }
}

impl From<ConfigTree> for Update {
    fn from(tree: ConfigTree) -> Self {
        Update::Replace(tree)
    }
}

/// Parse one `path=value` expression.
///
/// Fails with `UpdateNotValid` unless there is exactly one unescaped `=` and
/// the path is non-empty with no empty segments.
pub fn parse(expr: &str) -> Result<(PropertyPath, ConfigValue)> {
    let invalid = || ConfigError::UpdateNotValid(expr.to_string());

    let separators: Vec<usize> = unescaped_equals(expr).collect();
    let &[at] = separators.as_slice() else {
        return Err(invalid());
    };

    let path = PropertyPath::parse(&expr[..at]).map_err(|_| invalid())?;
    let raw = expr[at + 1..].replace("\\=", "=");
    Ok((path, cast(&raw)))
}

/// Parse a whitespace-separated batch of expressions, in order.
pub fn parse_batch(exprs: &str) -> Result<Vec<(PropertyPath, ConfigValue)>> {
    exprs.split_whitespace().map(parse).collect()
}

fn unescaped_equals(expr: &str) -> impl Iterator<Item = usize> + '_ {
    expr.char_indices()
        .filter(move |&(i, c)| c == '=' && !expr[..i].ends_with('\\'))
        .map(|(i, _)| i)
}
