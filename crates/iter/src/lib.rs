//! Conditional query-style combinators for iterators
//!
//! When building a query-like pipeline from optional request parameters, the
//! usual pattern is an awkward ladder of rebindings:
//!
//! ```ignore
//! let mut results: Vec<_> = rows.collect();
//! if let Some(pred) = filter {
//!     results.retain(|r| pred(r));
//! }
//! if page_size > 0 {
//!     results.truncate(page_size);
//! }
//! ```
//!
//! The [`ConditionalIterator`] trait keeps the pipeline a single expression:
//! every combinator takes a `condition` and applies its underlying adapter
//! only when the condition holds, yielding the source unchanged otherwise.
//!
//! ```rust
//! use omnitool_iter::ConditionalIterator;
//!
//! let filter_large = true;
//! let paginate = false;
//!
//! let rows: Vec<i32> = (1..=10)
//!     .filter_if(filter_large, |n| *n > 5)
//!     .take_if(paginate, 3)
//!     .collect();
//!
//! assert_eq!(rows, vec![6, 7, 8, 9, 10]);
//! ```
//!
//! Everything stays lazy except the sorting combinators, which have to
//! collect. The set-flavored combinators (`unique_if`, `union_if`,
//! `intersect_if`, `except_if`) deduplicate their output, keeping first
//! occurrences in source order.

mod applied;
mod conditional;

pub use applied::Applied;
pub use conditional::ConditionalIterator;
