//! # Tokio Deadline Extensions
//!
//! This crate provides extension traits and helpers for racing Tokio futures
//! against cancellation tokens and timeouts in a clean and ergonomic way,
//! eliminating the need for repetitive `tokio::select!` boilerplate.
//!
//! ## Problem
//!
//! When working with async Rust and Tokio, bounding a future by a
//! cancellation signal or a deadline usually means writing the same
//! `tokio::select!` block over and over:
//!
//! ```ignore
//! // Repetitive boilerplate code
//! let result = tokio::select! {
//!     _ = cancellation_token.cancelled() => {
//!         return Err(MyError::Cancelled);
//!     }
//!     _ = tokio::time::sleep(timeout) => {
//!         return Err(MyError::TimedOut);
//!     }
//!     result = some_future => {
//!         result?
//!     }
//! };
//! ```
//!
//! ## Solution
//!
//! A simple extension trait that turns the race into a method call:
//!
//! ```rust
//! use tokio_deadline_ext::{DeadlineExt, DeadlineError, CancellationToken};
//! use std::time::Duration;
//!
//! #[derive(Debug)]
//! enum MyError {
//!     Interrupted,
//!     Database(String),
//! }
//!
//! impl From<DeadlineError> for MyError {
//!     fn from(_: DeadlineError) -> Self {
//!         MyError::Interrupted
//!     }
//! }
//!
//! # async fn fetch_data() -> Result<String, MyError> { Ok("data".to_string()) }
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), MyError> {
//! let token = CancellationToken::new();
//!
//! // Clean, readable code without boilerplate
//! let result = fetch_data()
//!     .with_cancellation::<MyError>(&token, "fetch_data")
//!     .with_timeout::<MyError>(Duration::from_secs(5), "fetch_data")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - **Exactly one outcome** per wrapper invocation: the original result, a
//!   [`DeadlineError::Cancelled`], or a [`DeadlineError::TimedOut`] -
//!   whichever trigger settles first wins, and a result that is already
//!   ready always beats a simultaneous interrupt.
//! - **No leaked completions**: a future that loses the race is driven to
//!   completion on a detached task and its failure is logged, never
//!   silently dropped. The wrapper observes the operation, it does not
//!   cancel it.
//! - **Scoped resources**: the token registration and the timeout timer are
//!   released on every exit path, so repeated invocations in a long-running
//!   process leak nothing.
//! - **Late registration is safe**: wrapping with an already-cancelled token
//!   fails immediately; there is no missed-signal window.
//!
//! ## Features
//!
//! - **Zero boilerplate**: replace `tokio::select!` with `.with_cancellation()`
//!   and `.with_timeout()` calls
//! - **Type-safe**: works with any error type convertible from [`DeadlineError`]
//! - **Chainable**: the wrappers are plain future-to-future transforms and
//!   compose in either order
//! - **Sync support**: [`check_cancellation`] and [`check_deadline`] for
//!   synchronous loops and polling
//! - **Minimal dependencies**: only requires `tokio`, `tokio-util` and `log`

mod async_ext;
mod error;
mod sync_ext;

pub use async_ext::{DeadlineExt, DeadlineFuture};
pub use error::DeadlineError;
pub use sync_ext::{check_cancellation, check_deadline};

// Re-export CancellationToken for convenience
pub use tokio_util::sync::CancellationToken;
