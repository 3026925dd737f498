use crate::applied::Applied;
use std::collections::HashSet;
use std::hash::Hash;

/// Extension trait adding conditionally-applied combinators to any iterator
///
/// Each method mirrors a standard adapter but only applies it when
/// `condition` is true; otherwise the source is yielded unchanged. This
/// keeps pipelines built from optional request parameters a single
/// expression instead of a ladder of `if` rebindings.
///
/// Implemented blanket-style for every sized `Iterator`.
pub trait ConditionalIterator: Iterator + Sized {
    /// Conditional `filter`: keeps only matching items when enabled
    fn filter_if<P>(self, condition: bool, mut predicate: P) -> impl Iterator<Item = Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(move |item| !condition || predicate(item))
    }

    /// Conditional `take`: limits the pipeline to `n` items when enabled
    ///
    /// A zero `n` also leaves the source unchanged, so callers can feed an
    /// unvalidated page size straight through.
    fn take_if(self, condition: bool, n: usize) -> std::iter::Take<Self> {
        if condition && n > 0 {
            self.take(n)
        } else {
            self.take(usize::MAX)
        }
    }

    /// Conditional `skip`: discards the first `n` items when enabled
    fn skip_if(self, condition: bool, n: usize) -> std::iter::Skip<Self> {
        if condition { self.skip(n) } else { self.skip(0) }
    }

    /// Conditional sort by key extractor
    ///
    /// Collects the source either way (the output is an owning iterator);
    /// the sort itself only runs when `condition` holds.
    fn sorted_by_key_if<K, F>(self, condition: bool, key: F) -> std::vec::IntoIter<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.collect();
        if condition {
            items.sort_by_key(key);
        }
        items.into_iter()
    }

    /// Sorts only when a key extractor is provided
    fn sorted_by_key_opt<K, F>(self, key: Option<F>) -> std::vec::IntoIter<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.collect();
        if let Some(key) = key {
            items.sort_by_key(key);
        }
        items.into_iter()
    }

    /// Conditionally applies an arbitrary pipeline transform
    ///
    /// The escape hatch for anything the other combinators do not cover:
    /// `f` may rebuild the pipeline however it likes as long as the item
    /// type is preserved.
    ///
    /// ```rust
    /// use omnitool_iter::ConditionalIterator;
    ///
    /// let reverse = true;
    /// let out: Vec<i32> = (1..=3)
    ///     .apply_if(reverse, |iter| iter.rev())
    ///     .collect();
    /// assert_eq!(out, vec![3, 2, 1]);
    /// ```
    fn apply_if<J, F>(self, condition: bool, f: F) -> impl Iterator<Item = Self::Item>
    where
        J: IntoIterator<Item = Self::Item>,
        F: FnOnce(Self) -> J,
    {
        if condition {
            Applied::Transformed(f(self).into_iter())
        } else {
            Applied::Unchanged(self)
        }
    }

    /// Conditional distinct: drops repeated items when enabled
    ///
    /// First occurrences win and source order is preserved.
    fn unique_if(self, condition: bool) -> impl Iterator<Item = Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        self.filter(move |item| !condition || seen.insert(item.clone()))
    }

    /// Conditional set union: appends `other` and deduplicates when enabled
    fn union_if<J>(self, condition: bool, other: J) -> impl Iterator<Item = Self::Item>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash + Clone,
    {
        if condition {
            let mut seen = HashSet::new();
            Applied::Transformed(
                self.chain(other)
                    .filter(move |item| seen.insert(item.clone())),
            )
        } else {
            Applied::Unchanged(self)
        }
    }

    /// Conditional set intersection when enabled
    ///
    /// Yields the items also present in `other`, deduplicated, in source
    /// order.
    fn intersect_if<J>(self, condition: bool, other: J) -> impl Iterator<Item = Self::Item>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash,
    {
        let mut other: HashSet<_> = if condition {
            other.into_iter().collect()
        } else {
            HashSet::new()
        };
        // remove() doubles as the dedup: each match is yielded once
        self.filter(move |item| !condition || other.remove(item))
    }

    /// Conditional set difference when enabled
    ///
    /// Yields the items not present in `other`, deduplicated, in source
    /// order.
    fn except_if<J>(self, condition: bool, other: J) -> impl Iterator<Item = Self::Item>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Eq + Hash + Clone,
    {
        let excluded: HashSet<_> = if condition {
            other.into_iter().collect()
        } else {
            HashSet::new()
        };
        let mut seen = HashSet::new();
        self.filter(move |item| {
            !condition || (!excluded.contains(item) && seen.insert(item.clone()))
        })
    }
}

impl<I: Iterator> ConditionalIterator for I {}
