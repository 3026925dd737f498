//! Structured-logging glue
//!
//! [`install`] swaps the process's logging for a `tracing` subscriber with
//! three properties the raw builder does not give you in one call:
//!
//! - **Guaranteed flush on shutdown**: records are written through a
//!   non-blocking worker, and the returned [`LoggingGuard`] flushes whatever
//!   is still buffered when it drops - keep it alive for the lifetime of
//!   `main`.
//! - **Runtime level switching**: the filter sits behind a reload handle, so
//!   [`LoggingGuard::set_level`] can rewrite it while the process runs.
//! - **`log` bridge**: records emitted through the `log` facade (for
//!   example by `tokio-deadline-ext`) land in the same subscriber.
//!
//! ```rust,ignore
//! use omnitool_logging::{install, LoggingConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let guard = install(LoggingConfig::from_env())?;
//!
//!     tracing::info!("service starting");
//!     guard.set_level("debug")?;
//!
//!     // buffered records are flushed when `guard` drops
//!     Ok(())
//! }
//! ```
//!
//! The crate also carries the log-and-return helpers ([`throwable_error`],
//! [`throwable`], [`throwable_fatal`]) and the process-exit error type
//! ([`ExitError`], [`exit_fatal`]).

mod config;
mod throwable;

pub use config::LoggingConfig;
pub use throwable::{exit_fatal, throwable, throwable_error, throwable_fatal, ExitError};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Keeps the logging pipeline alive and flushes it on drop
///
/// Dropping the guard blocks briefly while the non-blocking writer drains
/// its buffer, so records logged just before shutdown are not lost. Bind it
/// in `main` (`let _guard = install(...)?;`) rather than discarding it with
/// a bare `_`.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl LoggingGuard {
    /// Replaces the active filter directives at runtime
    ///
    /// Accepts the same syntax as [`LoggingConfig::level`], e.g. `"debug"`
    /// or `"info,hyper=warn"`.
    pub fn set_level(&self, directives: &str) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(directives)?;
        self.reload_handle.reload(filter)?;
        Ok(())
    }
}

/// Installs the global `tracing` subscriber described by `config`
///
/// Fails if the directives do not parse or if a global subscriber is
/// already installed. Call once, early in `main`, and hold the returned
/// guard until shutdown.
pub fn install(config: LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let filter = EnvFilter::try_new(&config.level)?;
    let (filter, reload_handle) = reload::Layer::new(filter);
    let (writer, worker_guard) = tracing_appender::non_blocking(std::io::stdout());

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        registry.with(fmt::layer().with_writer(writer)).try_init()?;
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        reload_handle,
    })
}
