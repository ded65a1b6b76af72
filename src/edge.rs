// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use crate::{AsKey, Key};

/// A key path contains an unset key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nil key")]
pub struct NilKeyError;

/// A single transition in the trie.
///
/// Derived from one or more consecutive keys. All consecutive parameter
/// keys collapse into a single edge whose arity is the number of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Edge<'k> {
    Literal(&'k str),
    Parameter(SmallVec<[&'k str; 4]>),
    Wildcard,
    Value,
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "const({text})"),
            Self::Parameter(names) => write!(f, "param({})", names.join(",")),
            Self::Wildcard => f.write_str("wild"),
            Self::Value => f.write_str("value"),
        }
    }
}

/// Split off the leading edge of a key path.
///
/// Returns the edge and the remaining keys.
pub(crate) fn pop_edge<K: AsKey>(path: &[K]) -> Result<(Edge<'_>, &[K]), NilKeyError> {
    if path.is_empty() {
        return Ok((Edge::Value, path));
    }
    let mut names = SmallVec::new();
    for (index, key) in path.iter().enumerate() {
        match key.as_key().ok_or(NilKeyError)? {
            Key::Parameter(name) => names.push(name.as_str()),
            Key::Literal(text) => {
                if index == 0 {
                    return Ok((Edge::Literal(text), &path[1..]));
                }
                return Ok((Edge::Parameter(names), &path[index..]));
            }
            Key::Wildcard => {
                if index == 0 {
                    return Ok((Edge::Wildcard, &path[1..]));
                }
                return Ok((Edge::Parameter(names), &path[index..]));
            }
        }
    }
    Ok((Edge::Parameter(names), &path[path.len()..]))
}
