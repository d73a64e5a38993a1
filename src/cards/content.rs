//! Content sources - where card faces come from.
//!
//! A `ContentSource` is a finite ordered list of values plus a fallback.
//! Pair indices past the end of the list receive the fallback, so the
//! content factory handed to `MemoryGame` is total over any pair count.

use serde::{Deserialize, Serialize};

/// Finite ordered list of card faces with a fallback for missing indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSource<T> {
    items: Vec<T>,
    fallback: T,
}

impl<T: Clone> ContentSource<T> {
    /// Create a source from `items`, answering `fallback` past the end.
    pub fn new(items: impl IntoIterator<Item = T>, fallback: T) -> Self {
        Self {
            items: items.into_iter().collect(),
            fallback,
        }
    }

    /// Content for a pair index.
    ///
    /// ```
    /// use memorize::cards::ContentSource;
    ///
    /// let source = ContentSource::new(["A", "B"], "?");
    /// assert_eq!(source.content_for(1), "B");
    /// assert_eq!(source.content_for(2), "?");
    /// ```
    #[must_use]
    pub fn content_for(&self, pair_index: usize) -> T {
        self.items
            .get(pair_index)
            .unwrap_or(&self.fallback)
            .clone()
    }

    /// Borrowing closure suitable as a `MemoryGame` content factory.
    pub fn factory(&self) -> impl Fn(usize) -> T + '_ {
        move |pair_index| self.content_for(pair_index)
    }

    /// Consume the source into an owned content factory.
    pub fn into_factory(self) -> impl Fn(usize) -> T {
        move |pair_index| self.content_for(pair_index)
    }

    /// Number of distinct (non-fallback) values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn fallback(&self) -> &T {
        &self.fallback
    }
}
