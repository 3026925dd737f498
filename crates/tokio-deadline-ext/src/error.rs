use std::time::Duration;

/// Error type produced when a deadline wrapper loses the race
///
/// A wrapped future that is interrupted fails with exactly one of these
/// variants, depending on which interrupt source fired first. The original
/// future's own error is never replaced by this type when the future settles
/// in time - it is passed through unchanged.
///
/// The type implements the standard `Error` trait and is designed to be
/// absorbed into application error types via `From`/`Into`.
///
/// # Examples
///
/// ```rust
/// use tokio_deadline_ext::DeadlineError;
///
/// #[derive(Debug)]
/// enum MyError {
///     Cancelled,
///     TimedOut,
///     Network(String),
/// }
///
/// impl From<DeadlineError> for MyError {
///     fn from(err: DeadlineError) -> Self {
///         match err {
///             DeadlineError::Cancelled { .. } => MyError::Cancelled,
///             DeadlineError::TimedOut { .. } => MyError::TimedOut,
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// The cancellation token fired before the future settled.
    ///
    /// `context` is the operation label the wrapper was invoked with; the
    /// token itself carries no reason payload, so the label is the reason
    /// callers get to see.
    Cancelled {
        /// Operation label passed to `with_cancellation`
        context: String,
    },

    /// The configured duration elapsed before the future settled.
    TimedOut {
        /// The duration that was configured on the wrapper
        timeout: Duration,
    },
}

impl std::fmt::Display for DeadlineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeadlineError::Cancelled { context } => {
                write!(f, "{context}: operation was cancelled")
            }
            DeadlineError::TimedOut { timeout } => {
                write!(f, "operation timed out after {timeout:?}")
            }
        }
    }
}

impl std::error::Error for DeadlineError {}

impl DeadlineError {
    /// Returns true if this error was produced by a cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DeadlineError::Cancelled { .. })
    }

    /// Returns true if this error was produced by an elapsed timeout
    pub fn is_timed_out(&self) -> bool {
        matches!(self, DeadlineError::TimedOut { .. })
    }
}
