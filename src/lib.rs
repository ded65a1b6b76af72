// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

//! Prioritized path-matching trie.
//!
//! Stores patterns made of literal, parameter and wildcard keys and
//! matches sequences of text segments against them, most specific
//! pattern first.

mod edge;
pub use self::edge::NilKeyError;

mod key;
pub use self::key::{display_path, display_query, AsKey, DisplayPath, DisplayQuery, Key};

mod node;

mod tree;
pub use self::tree::{AddError, Tree};

mod visit;
pub use self::visit::{Match, Parameters, Searcher, Walker};

pub mod search;

pub mod walk;

#[cfg(feature = "im")]
type HashMap<K, V> = im::HashMap<K, V>;

#[cfg(not(feature = "im"))]
type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(feature = "im")]
type OrdMap<K, V> = im::OrdMap<K, V>;

#[cfg(not(feature = "im"))]
type OrdMap<K, V> = std::collections::BTreeMap<K, V>;
