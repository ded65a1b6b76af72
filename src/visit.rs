// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::ops::{ControlFlow, Deref};

use smallvec::SmallVec;

/// Parameter names bound to the query segments they matched.
///
/// Ordered by the position of the parameters in the stored pattern.
/// Names are unique, a repeated name keeps the segment bound last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters<'a> {
    pairs: SmallVec<[(&'a str, &'a str); 4]>,
}

impl<'a> Parameters<'a> {
    pub(crate) fn zip(names: &'a [String], segments: &[&'a str]) -> Self {
        debug_assert_eq!(names.len(), segments.len());
        let mut parameters = Self::default();
        for (name, &segment) in names.iter().zip(segments) {
            parameters.bind(name, segment);
        }
        parameters
    }

    fn bind(&mut self, name: &'a str, segment: &'a str) {
        for (bound_name, bound) in &mut self.pairs {
            if *bound_name == name {
                *bound = segment;
                return;
            }
        }
        self.pairs.push((name, segment));
    }

    /// The segment bound to the given parameter name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(bound_name, _)| *bound_name == name)
            .map(|&(_, segment)| segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }
}

impl<'a> Deref for Parameters<'a> {
    type Target = [(&'a str, &'a str)];

    fn deref(&self) -> &Self::Target {
        &self.pairs
    }
}

/// A stored pattern that matched a query.
///
/// Borrows both from the tree and from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a, V, S> {
    /// The stored value.
    pub value: &'a V,

    /// Bound parameters.
    ///
    /// `None` if the pattern has no parameters.
    pub parameters: Option<Parameters<'a>>,

    /// The trailing segments captured by a wildcard.
    ///
    /// `None` if the pattern has no wildcard or if the wildcard
    /// matched no segments.
    pub tail: Option<&'a [S]>,
}

impl<'a, V, S> Match<'a, V, S> {
    /// The segment bound to the given parameter name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&'a str> {
        self.parameters.as_ref().and_then(|parameters| parameters.get(name))
    }
}

/// Receives search results in priority order.
pub trait Searcher<'a, V, S> {
    /// Visit the next match.
    ///
    /// Return [`ControlFlow::Break`] to stop the search.
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()>;
}

impl<'a, V: 'a, S: 'a, F> Searcher<'a, V, S> for F
where
    F: FnMut(Match<'a, V, S>) -> ControlFlow<()>,
{
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()> {
        self(found)
    }
}

/// Receives stored values in no particular order.
///
/// Only values are visited, keys are not retained by the tree. A layer
/// that needs (path, value) pairs stores the key path inside `V`.
pub trait Walker<'a, V> {
    /// Visit the next value.
    ///
    /// Return [`ControlFlow::Break`] to stop the walk.
    fn visit_walk(&mut self, value: &'a V) -> ControlFlow<()>;
}

impl<'a, V: 'a, F> Walker<'a, V> for F
where
    F: FnMut(&'a V) -> ControlFlow<()>,
{
    fn visit_walk(&mut self, value: &'a V) -> ControlFlow<()> {
        self(value)
    }
}
