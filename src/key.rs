// SPDX-FileCopyrightText: The priority-pathtree authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

/// A single unit of a stored pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Key {
    /// Matches exactly this segment.
    #[display(fmt = "const({})", _0)]
    Literal(String),

    /// Matches any single segment and binds it to this name.
    #[display(fmt = "param({})", _0)]
    Parameter(String),

    /// Matches all remaining segments, including none.
    ///
    /// Only allowed as the last key of a pattern.
    #[display(fmt = "wild")]
    Wildcard,
}

impl Key {
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    #[must_use]
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }
}

/// Access to a possibly unset key.
///
/// Key decoders may fail to produce a key for a segment. Such paths
/// are still accepted by [`Tree::add()`](crate::Tree::add) which
/// rejects them with [`AddError::NilKey`](crate::AddError::NilKey).
pub trait AsKey {
    /// The key, or `None` if unset.
    #[must_use]
    fn as_key(&self) -> Option<&Key>;
}

impl AsKey for Key {
    fn as_key(&self) -> Option<&Key> {
        Some(self)
    }
}

impl AsKey for Option<Key> {
    fn as_key(&self) -> Option<&Key> {
        self.as_ref()
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> Option<&Key> {
        (**self).as_key()
    }
}

const CHAIN_SEPARATOR: &str = "→";

fn fmt_chain<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(CHAIN_SEPARATOR)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Displays a key path, e.g. `const(foo)→param(id)→wild`.
///
/// Unset keys are displayed as `<nil>`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayPath<'a, K>(&'a [K]);

#[must_use]
pub const fn display_path<K: AsKey>(path: &[K]) -> DisplayPath<'_, K> {
    DisplayPath(path)
}

impl<K: AsKey> fmt::Display for DisplayPath<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<empty>");
        }
        fmt_chain(
            f,
            self.0.iter().map(|key| match key.as_key() {
                Some(key) => key.to_string(),
                None => "<nil>".to_owned(),
            }),
        )
    }
}

/// Displays query segments, e.g. `foo→a→x`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayQuery<'a, S>(&'a [S]);

#[must_use]
pub const fn display_query<S: AsRef<str>>(query: &[S]) -> DisplayQuery<'_, S> {
    DisplayQuery(query)
}

impl<S: AsRef<str>> fmt::Display for DisplayQuery<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<empty>");
        }
        fmt_chain(f, self.0.iter().map(AsRef::as_ref))
    }
}
