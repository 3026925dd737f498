//! # Omnitool
//!
//! Omnitool is a collection of small extension-trait utility crates for
//! everyday Rust: deadline/cancellation wrappers for futures, conditional
//! iterator combinators, map upsert helpers, string checks, bitflag
//! decomposition, and structured-logging wiring with a guaranteed
//! flush-on-shutdown guard.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use omnitool::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Structured logging with a flush-on-shutdown guard
//!     let _guard = omnitool::logging::install(LoggingConfig::from_env())?;
//!
//!     // Deadline-bound async work
//!     let token = CancellationToken::new();
//!     let rows: Vec<String> = fetch_rows()
//!         .with_cancellation::<anyhow::Error>(&token, "fetch_rows")
//!         .await?;
//!
//!     // Conditional query-style iterator pipelines
//!     let filter_active = true;
//!     let page_size = 50;
//!     let page: Vec<_> = rows
//!         .into_iter()
//!         .filter_if(filter_active, |r| !r.is_empty())
//!         .take_if(page_size > 0, page_size)
//!         .collect();
//!
//!     println!("{} rows", page.len());
//!     Ok(())
//! }
//! # async fn fetch_rows() -> Result<Vec<String>, std::io::Error> { Ok(vec![]) }
//! ```
//!
//! ## Crates
//!
//! - **tokio-deadline-ext**: race a future against a cancellation token or a
//!   timeout without `tokio::select!` boilerplate
//! - **omnitool-iter**: `Conditional*`-style iterator combinators
//! - **omnitool-collections**: map upsert and grouped-insert helpers
//! - **omnitool-str**: empty/blank checks, safe truncation, UUID parsing
//! - **omnitool-flags**: decompose a bitflags value into its set flags
//! - **omnitool-logging**: tracing install with flush-on-shutdown guard,
//!   runtime level switching, and log-and-return error helpers
//!
//! ## Features
//!
//! Every member crate sits behind a default-on feature (`deadline`, `iter`,
//! `collections`, `str`, `flags`, `logging`). Use
//! `default-features = false` to include only what you need.

/// Re-export of the deadline/cancellation future wrappers
#[cfg(feature = "deadline")]
pub use tokio_deadline_ext as deadline;

/// Re-export of the conditional iterator combinators
#[cfg(feature = "iter")]
pub use omnitool_iter as iter;

/// Re-export of the map helpers
#[cfg(feature = "collections")]
pub use omnitool_collections as collections;

/// Re-export of the string helpers
#[cfg(feature = "str")]
pub use omnitool_str as str;

/// Re-export of the bitflag decomposition helpers
#[cfg(feature = "flags")]
pub use omnitool_flags as flags;

/// Re-export of the structured-logging glue
#[cfg(feature = "logging")]
pub use omnitool_logging as logging;

/// Convenient re-exports of commonly used traits and types
pub mod prelude {
    #[cfg(feature = "deadline")]
    pub use crate::deadline::{
        check_cancellation, check_deadline, CancellationToken, DeadlineError, DeadlineExt,
    };

    #[cfg(feature = "iter")]
    pub use crate::iter::ConditionalIterator;

    #[cfg(feature = "collections")]
    pub use crate::collections::{GroupMapExt, MapExt};

    #[cfg(feature = "str")]
    pub use crate::str::{OptionStrExt, StrExt};

    #[cfg(feature = "flags")]
    pub use crate::flags::FlagsExt;

    #[cfg(feature = "logging")]
    pub use crate::logging::{
        exit_fatal, throwable, throwable_error, throwable_fatal, ExitError, LoggingConfig,
        LoggingGuard,
    };
}
