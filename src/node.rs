// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::{ops::ControlFlow, sync::Arc};

use smallvec::SmallVec;

use crate::{
    edge::{pop_edge, Edge},
    AddError, AsKey, HashMap, Match, OrdMap, Parameters, Searcher, Walker,
};

/// Carried through the recursive descent of [`crate::Tree::add()`].
#[derive(Debug)]
pub(crate) struct AddState<V> {
    pub(crate) parameter_names: Vec<String>,
    pub(crate) value: V,
}

impl<V> AddState<V> {
    pub(crate) const fn new(value: V) -> Self {
        Self {
            parameter_names: Vec::new(),
            value,
        }
    }
}

/// Carried through the recursive descent of [`crate::Tree::search()`].
pub(crate) struct SearchState<'a, 's, V, S> {
    searcher: &'s mut dyn Searcher<'a, V, S>,
    parameter_values: SmallVec<[&'a str; 8]>,
}

impl<'a, 's, V, S> SearchState<'a, 's, V, S>
where
    S: AsRef<str>,
{
    pub(crate) fn new(searcher: &'s mut dyn Searcher<'a, V, S>) -> Self {
        Self {
            searcher,
            parameter_values: SmallVec::new(),
        }
    }

    fn visit(&mut self, node: Option<&'a ValueNode<V>>, tail: &'a [S]) -> ControlFlow<()> {
        let Some(node) = node else {
            return ControlFlow::Continue(());
        };
        let names: &'a [String] = &node.parameter_names;
        let parameters = if names.is_empty() {
            None
        } else {
            Some(Parameters::zip(names, &self.parameter_values))
        };
        let tail = (!tail.is_empty()).then_some(tail);
        self.searcher.visit_search(Match {
            value: &node.value,
            parameters,
            tail,
        })
    }

    /// Bind the given segments to parameters while searching below them.
    fn with_bound(
        &mut self,
        segments: &'a [S],
        search: impl FnOnce(&mut Self) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        let bound_count = self.parameter_values.len();
        self.parameter_values
            .extend(segments.iter().map(AsRef::as_ref));
        let flow = search(self);
        self.parameter_values.truncate(bound_count);
        flow
    }
}

/// A stored value.
#[derive(Debug)]
pub(crate) struct ValueNode<V> {
    value: Arc<V>,

    /// The names of all parameters on the path to this node, in order.
    parameter_names: Arc<[String]>,
}

impl<V> Clone for ValueNode<V> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            parameter_names: Arc::clone(&self.parameter_names),
        }
    }
}

impl<V> From<AddState<V>> for ValueNode<V> {
    fn from(state: AddState<V>) -> Self {
        let AddState {
            parameter_names,
            value,
        } = state;
        Self {
            value: Arc::new(value),
            parameter_names: parameter_names.into(),
        }
    }
}

fn add_value<V>(slot: &mut Option<ValueNode<V>>, state: AddState<V>) -> Result<(), AddError<V>> {
    if let Some(existing) = slot {
        return Err(AddError::DuplicateValue {
            existing_value: Arc::clone(&existing.value),
        });
    }
    log::debug!(
        "Storing value with parameters {parameter_names:?}",
        parameter_names = state.parameter_names
    );
    *slot = Some(state.into());
    Ok(())
}

fn add_wildcard_value<V, K: AsKey>(
    slot: &mut Option<ValueNode<V>>,
    rest: &[K],
    state: AddState<V>,
) -> Result<(), AddError<V>> {
    if !rest.is_empty() {
        return Err(AddError::invalid_continuation(rest));
    }
    add_value(slot, state)
}

fn walk_value<'a, V>(
    node: Option<&'a ValueNode<V>>,
    walker: &mut dyn Walker<'a, V>,
) -> ControlFlow<()> {
    match node {
        Some(node) => walker.visit_walk(&node.value),
        None => ControlFlow::Continue(()),
    }
}

/// Bound segments, remaining query and the parameter node whose
/// wildcard is searched after all static continuations.
type DeferredWildcard<'a, V, S> = (&'a [S], &'a [S], &'a ParameterNode<V>);

/// Node that is reached by a literal edge or the root.
#[derive(Debug)]
pub(crate) struct LiteralNode<V> {
    literals: HashMap<String, LiteralNode<V>>,

    /// Keyed by arity, iterated in ascending order.
    parameters: OrdMap<usize, ParameterNode<V>>,

    wildcard: Option<ValueNode<V>>,
    value: Option<ValueNode<V>>,
}

impl<V> Default for LiteralNode<V> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            parameters: OrdMap::new(),
            wildcard: None,
            value: None,
        }
    }
}

impl<V> Clone for LiteralNode<V> {
    fn clone(&self) -> Self {
        Self {
            literals: self.literals.clone(),
            parameters: self.parameters.clone(),
            wildcard: self.wildcard.clone(),
            value: self.value.clone(),
        }
    }
}

impl<V> LiteralNode<V> {
    pub(crate) fn add<K: AsKey>(
        &mut self,
        path: &[K],
        mut state: AddState<V>,
    ) -> Result<(), AddError<V>> {
        let (edge, rest) = pop_edge(path)?;
        log::trace!("Following edge {edge}");
        match edge {
            Edge::Value => add_value(&mut self.value, state),
            Edge::Literal(text) => self
                .literals
                .entry(text.to_owned())
                .or_insert_with(|| {
                    log::debug!("Creating literal node for segment {text:?}");
                    Self::default()
                })
                .add(rest, state),
            Edge::Parameter(names) => {
                let arity = names.len();
                state
                    .parameter_names
                    .extend(names.iter().map(|&name| name.to_owned()));
                self.parameters
                    .entry(arity)
                    .or_insert_with(|| {
                        log::debug!("Creating parameter node with arity {arity}");
                        ParameterNode::default()
                    })
                    .add(rest, state)
            }
            Edge::Wildcard => add_wildcard_value(&mut self.wildcard, rest, state),
        }
    }

    pub(crate) fn search<'a, S: AsRef<str>>(
        &'a self,
        query: &'a [S],
        state: &mut SearchState<'a, '_, V, S>,
    ) -> ControlFlow<()> {
        let Some((head, rest)) = query.split_first() else {
            state.visit(self.value.as_ref(), query)?;
            return state.visit(self.wildcard.as_ref(), query);
        };
        if let Some(child) = self.literals.get(head.as_ref()) {
            child.search(rest, state)?;
        }
        // Fewer bound segments first for static continuations, but
        // more bound segments first for wildcard continuations.
        let mut deferred: SmallVec<[DeferredWildcard<'a, V, S>; 4]> = SmallVec::new();
        for (&arity, child) in self.parameters.iter() {
            if arity > query.len() {
                break;
            }
            let (bound, rest) = query.split_at(arity);
            state.with_bound(bound, |state| child.search_static(rest, state))?;
            if child.wildcard.is_some() {
                deferred.push((bound, rest, child));
            }
        }
        for (bound, rest, child) in deferred.into_iter().rev() {
            state.with_bound(bound, |state| child.search_wildcard(rest, state))?;
        }
        state.visit(self.wildcard.as_ref(), query)
    }

    pub(crate) fn walk<'a>(&'a self, walker: &mut dyn Walker<'a, V>) -> ControlFlow<()> {
        walk_value(self.value.as_ref(), walker)?;
        for child in self.literals.values() {
            child.walk(walker)?;
        }
        for child in self.parameters.values() {
            child.walk(walker)?;
        }
        walk_value(self.wildcard.as_ref(), walker)
    }

    /// Number of nodes in this subtree, including this node.
    pub(crate) fn count_nodes(&self) -> usize {
        1 + self
            .literals
            .values()
            .map(LiteralNode::count_nodes)
            .chain(self.parameters.values().map(ParameterNode::count_nodes))
            .sum::<usize>()
    }
}

/// Node that is reached by a parameter edge.
///
/// Never has parameter children because consecutive parameter keys
/// are collapsed into a single edge.
#[derive(Debug)]
pub(crate) struct ParameterNode<V> {
    literals: HashMap<String, LiteralNode<V>>,
    wildcard: Option<ValueNode<V>>,
    value: Option<ValueNode<V>>,
}

impl<V> Default for ParameterNode<V> {
    fn default() -> Self {
        Self {
            literals: HashMap::new(),
            wildcard: None,
            value: None,
        }
    }
}

impl<V> Clone for ParameterNode<V> {
    fn clone(&self) -> Self {
        Self {
            literals: self.literals.clone(),
            wildcard: self.wildcard.clone(),
            value: self.value.clone(),
        }
    }
}

impl<V> ParameterNode<V> {
    pub(crate) fn add<K: AsKey>(
        &mut self,
        path: &[K],
        state: AddState<V>,
    ) -> Result<(), AddError<V>> {
        let (edge, rest) = pop_edge(path)?;
        log::trace!("Following edge {edge}");
        match edge {
            Edge::Value => add_value(&mut self.value, state),
            Edge::Literal(text) => self
                .literals
                .entry(text.to_owned())
                .or_insert_with(|| {
                    log::debug!("Creating literal node for segment {text:?}");
                    LiteralNode::default()
                })
                .add(rest, state),
            Edge::Wildcard => add_wildcard_value(&mut self.wildcard, rest, state),
            Edge::Parameter(_) => Err(AddError::Internal(
                "parameter node: unexpected parameter edge",
            )),
        }
    }

    /// Search literal and value continuations.
    fn search_static<'a, S: AsRef<str>>(
        &'a self,
        query: &'a [S],
        state: &mut SearchState<'a, '_, V, S>,
    ) -> ControlFlow<()> {
        let Some((head, rest)) = query.split_first() else {
            return state.visit(self.value.as_ref(), query);
        };
        match self.literals.get(head.as_ref()) {
            Some(child) => child.search(rest, state),
            None => ControlFlow::Continue(()),
        }
    }

    fn search_wildcard<'a, S: AsRef<str>>(
        &'a self,
        query: &'a [S],
        state: &mut SearchState<'a, '_, V, S>,
    ) -> ControlFlow<()> {
        state.visit(self.wildcard.as_ref(), query)
    }

    fn walk<'a>(&'a self, walker: &mut dyn Walker<'a, V>) -> ControlFlow<()> {
        walk_value(self.value.as_ref(), walker)?;
        for child in self.literals.values() {
            child.walk(walker)?;
        }
        walk_value(self.wildcard.as_ref(), walker)
    }

    fn count_nodes(&self) -> usize {
        1 + self
            .literals
            .values()
            .map(LiteralNode::count_nodes)
            .sum::<usize>()
    }
}
