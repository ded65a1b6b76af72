// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

//! Common searchers.

use std::{fmt, ops::ControlFlow};

use crate::{Match, Searcher, Tree};

/// Collects all matches in priority order.
#[derive(Debug)]
pub struct AllMatches<'a, V, S> {
    pub matches: Vec<Match<'a, V, S>>,
}

impl<V, S> Default for AllMatches<'_, V, S> {
    fn default() -> Self {
        Self {
            matches: Vec::new(),
        }
    }
}

impl<'a, V, S> Searcher<'a, V, S> for AllMatches<'a, V, S> {
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()> {
        self.matches.push(found);
        ControlFlow::Continue(())
    }
}

/// Collects all matches that satisfy a predicate in priority order.
pub struct AllMatchesFiltered<'a, V, S, P> {
    predicate: P,
    pub matches: Vec<Match<'a, V, S>>,
}

impl<V, S, P> AllMatchesFiltered<'_, V, S, P> {
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            matches: Vec::new(),
        }
    }
}

impl<V, S, P> fmt::Debug for AllMatchesFiltered<'_, V, S, P>
where
    V: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllMatchesFiltered")
            .field("matches", &self.matches)
            .finish_non_exhaustive()
    }
}

impl<'a, V, S, P> Searcher<'a, V, S> for AllMatchesFiltered<'a, V, S, P>
where
    P: FnMut(&Match<'a, V, S>) -> bool,
{
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()> {
        if (self.predicate)(&found) {
            self.matches.push(found);
        }
        ControlFlow::Continue(())
    }
}

/// Stops at the most specific match.
#[derive(Debug)]
pub struct FirstMatch<'a, V, S> {
    pub found: Option<Match<'a, V, S>>,
}

impl<V, S> Default for FirstMatch<'_, V, S> {
    fn default() -> Self {
        Self { found: None }
    }
}

impl<'a, V, S> Searcher<'a, V, S> for FirstMatch<'a, V, S> {
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()> {
        self.found = Some(found);
        ControlFlow::Break(())
    }
}

/// Stops at the most specific match that satisfies a predicate.
pub struct FirstMatchFiltered<'a, V, S, P> {
    predicate: P,
    pub found: Option<Match<'a, V, S>>,
}

impl<V, S, P> FirstMatchFiltered<'_, V, S, P> {
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            found: None,
        }
    }
}

impl<V, S, P> fmt::Debug for FirstMatchFiltered<'_, V, S, P>
where
    V: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstMatchFiltered")
            .field("found", &self.found)
            .finish_non_exhaustive()
    }
}

impl<'a, V, S, P> Searcher<'a, V, S> for FirstMatchFiltered<'a, V, S, P>
where
    P: FnMut(&Match<'a, V, S>) -> bool,
{
    fn visit_search(&mut self, found: Match<'a, V, S>) -> ControlFlow<()> {
        if !(self.predicate)(&found) {
            return ControlFlow::Continue(());
        }
        self.found = Some(found);
        ControlFlow::Break(())
    }
}

/// All matches in priority order.
#[must_use]
pub fn all<'a, V, S: AsRef<str>>(tree: &'a Tree<V>, query: &'a [S]) -> Vec<Match<'a, V, S>> {
    let mut searcher = AllMatches::default();
    let _ = tree.search(&mut searcher, query);
    searcher.matches
}

/// All matches that satisfy the predicate in priority order.
#[must_use]
pub fn all_filtered<'a, V, S: AsRef<str>>(
    tree: &'a Tree<V>,
    predicate: impl FnMut(&Match<'a, V, S>) -> bool,
    query: &'a [S],
) -> Vec<Match<'a, V, S>> {
    let mut searcher = AllMatchesFiltered::new(predicate);
    let _ = tree.search(&mut searcher, query);
    searcher.matches
}

/// The most specific match.
#[must_use]
pub fn first<'a, V, S: AsRef<str>>(
    tree: &'a Tree<V>,
    query: &'a [S],
) -> Option<Match<'a, V, S>> {
    let mut searcher = FirstMatch::default();
    let _ = tree.search(&mut searcher, query);
    searcher.found
}

/// The most specific match that satisfies the predicate.
#[must_use]
pub fn first_filtered<'a, V, S: AsRef<str>>(
    tree: &'a Tree<V>,
    predicate: impl FnMut(&Match<'a, V, S>) -> bool,
    query: &'a [S],
) -> Option<Match<'a, V, S>> {
    let mut searcher = FirstMatchFiltered::new(predicate);
    let _ = tree.search(&mut searcher, query);
    searcher.found
}
