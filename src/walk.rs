// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

//! Common walkers.

use std::{fmt, ops::ControlFlow};

use crate::{Tree, Walker};

/// Collects all values.
#[derive(Debug)]
pub struct AllValues<'a, V> {
    pub values: Vec<&'a V>,
}

impl<V> Default for AllValues<'_, V> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<'a, V> Walker<'a, V> for AllValues<'a, V> {
    fn visit_walk(&mut self, value: &'a V) -> ControlFlow<()> {
        self.values.push(value);
        ControlFlow::Continue(())
    }
}

/// Collects all values that satisfy a predicate.
pub struct AllValuesFiltered<'a, V, P> {
    predicate: P,
    pub values: Vec<&'a V>,
}

impl<V, P> AllValuesFiltered<'_, V, P> {
    #[must_use]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            values: Vec::new(),
        }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for AllValuesFiltered<'_, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllValuesFiltered")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl<'a, V, P> Walker<'a, V> for AllValuesFiltered<'a, V, P>
where
    P: FnMut(&V) -> bool,
{
    fn visit_walk(&mut self, value: &'a V) -> ControlFlow<()> {
        if (self.predicate)(value) {
            self.values.push(value);
        }
        ControlFlow::Continue(())
    }
}

/// All stored values in no particular order.
#[must_use]
pub fn all<V>(tree: &Tree<V>) -> Vec<&V> {
    let mut walker = AllValues::default();
    let _ = tree.walk(&mut walker);
    walker.values
}

/// All stored values that satisfy the predicate in no particular order.
#[must_use]
pub fn all_filtered<V>(tree: &Tree<V>, predicate: impl FnMut(&V) -> bool) -> Vec<&V> {
    let mut walker = AllValuesFiltered::new(predicate);
    let _ = tree.walk(&mut walker);
    walker.values
}
