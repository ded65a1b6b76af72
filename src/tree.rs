// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::{ops::ControlFlow, sync::Arc};

use thiserror::Error;

use crate::{
    display_path, display_query,
    edge::{pop_edge, Edge},
    node::{AddState, LiteralNode, SearchState},
    AsKey, Key, Match, NilKeyError, Searcher, Walker,
};

#[derive(Debug, Error)]
pub enum AddError<V> {
    /// The path contains an unset key.
    #[error(transparent)]
    NilKey(#[from] NilKeyError),

    /// A wildcard key is followed by more keys.
    #[error("invalid continuation after wildcard: {}", display_path(.continuation))]
    InvalidContinuation {
        /// All keys following the wildcard.
        continuation: Vec<Option<Key>>,
    },

    /// A value has already been stored for the same path.
    ///
    /// The existing value is kept and the new value is dropped.
    #[error("duplicate value")]
    DuplicateValue { existing_value: Arc<V> },

    #[error("internal: {0}")]
    Internal(&'static str),
}

impl<V> AddError<V> {
    pub(crate) fn invalid_continuation<K: AsKey>(continuation: &[K]) -> Self {
        Self::InvalidContinuation {
            continuation: continuation
                .iter()
                .map(|key| key.as_key().cloned())
                .collect(),
        }
    }
}

/// Trie of patterns that are matched against queries in priority order.
///
/// Patterns are sequences of [`Key`]s, queries are sequences of plain
/// text segments. Literal keys take precedence over parameter keys,
/// which in turn take precedence over wildcard keys.
///
/// With the `im` feature enabled cloning is cheap and clones share
/// their structure. A clone could be published as an immutable
/// snapshot and shared safely between multiple threads while the
/// original is still modified.
#[derive(Debug)]
pub struct Tree<V> {
    root: LiteralNode<V>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Tree<V> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<V> Tree<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: LiteralNode::default(),
        }
    }

    /// Store a value for a pattern.
    ///
    /// An empty path stores the value at the root, matching only the
    /// empty query.
    ///
    /// Either succeeds or leaves the tree unmodified. The path is
    /// validated before any node is created. If a value has already
    /// been stored for the same path then the new value is dropped
    /// and the existing value is returned in the error.
    ///
    /// # Errors
    ///
    /// - [`AddError::NilKey`] if the path contains an unset key.
    /// - [`AddError::InvalidContinuation`] if a wildcard key is followed
    ///   by more keys.
    /// - [`AddError::DuplicateValue`] if a value has already been stored
    ///   for an equivalent path. Parameter names are not significant.
    /// - [`AddError::Internal`] if the tree is corrupted.
    pub fn add<K: AsKey>(&mut self, value: V, path: &[K]) -> Result<(), AddError<V>> {
        log::debug!("Adding value for path {}", display_path(path));
        validate_path(path)?;
        self.root.add(path, AddState::new(value))
    }

    /// Match a query against all stored patterns.
    ///
    /// The searcher is invoked once per matching pattern, most specific
    /// first, until it breaks. Returns [`ControlFlow::Break`] if the
    /// searcher stopped the search.
    pub fn search<'a, S: AsRef<str>>(
        &'a self,
        searcher: &mut impl Searcher<'a, V, S>,
        query: &'a [S],
    ) -> ControlFlow<()> {
        log::trace!("Searching for {}", display_query(query));
        let mut state = SearchState::new(searcher);
        self.root.search(query, &mut state)
    }

    /// Same as [`Self::search()`] with a closure.
    pub fn search_fn<'a, S: AsRef<str>>(
        &'a self,
        mut searcher: impl FnMut(Match<'a, V, S>) -> ControlFlow<()>,
        query: &'a [S],
    ) -> ControlFlow<()> {
        self.search(&mut searcher, query)
    }

    /// Visit all stored values in no particular order.
    ///
    /// Returns [`ControlFlow::Break`] if the walker stopped the walk.
    pub fn walk<'a>(&'a self, walker: &mut impl Walker<'a, V>) -> ControlFlow<()> {
        log::trace!("Walking all values");
        self.root.walk(walker)
    }

    /// Same as [`Self::walk()`] with a closure.
    pub fn walk_fn<'a>(
        &'a self,
        mut walker: impl FnMut(&'a V) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        self.walk(&mut walker)
    }

    /// Check if no values have been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walk_fn(|_| ControlFlow::Break(())).is_continue()
    }

    /// Total number of nodes in the tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }
}

/// Dry run of the edge segmentation performed when adding a path.
fn validate_path<V, K: AsKey>(mut path: &[K]) -> Result<(), AddError<V>> {
    loop {
        let (edge, rest) = pop_edge(path)?;
        match edge {
            Edge::Value => return Ok(()),
            Edge::Wildcard if !rest.is_empty() => {
                return Err(AddError::invalid_continuation(rest));
            }
            Edge::Literal(_) | Edge::Parameter(_) | Edge::Wildcard => path = rest,
        }
    }
}
