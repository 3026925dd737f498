use thiserror::Error;

/// Logs an error-level record and returns a matching `anyhow::Error`
///
/// The log-then-return shape keeps call sites to a single line while
/// guaranteeing the failure reaches the log before it starts unwinding
/// through `?` conversions:
///
/// ```rust,ignore
/// let Some(user) = lookup(id) else {
///     return Err(throwable_error(format!("unknown user {id}")));
/// };
/// ```
pub fn throwable_error(message: impl Into<String>) -> anyhow::Error {
    let message = message.into();
    tracing::error!("{message}");
    anyhow::anyhow!(message)
}

/// Logs an existing error at error level and hands it back unchanged
///
/// For error types that already carry their own structure; the caller keeps
/// the typed value for `return Err(...)`.
pub fn throwable<E: std::error::Error>(err: E) -> E {
    tracing::error!(error = %err, "operation failed");
    err
}

/// Like [`throwable_error`], but the record is marked fatal
///
/// `tracing` has no level above error, so fatality is carried as a field
/// that filters and alerting can key on.
pub fn throwable_fatal(message: impl Into<String>) -> anyhow::Error {
    let message = message.into();
    tracing::error!(fatal = true, "{message}");
    anyhow::anyhow!(message)
}

/// Failure that should terminate the process with a specific exit code
///
/// Returned by [`exit_fatal`]; a binary's `main` surfaces it as the process
/// exit status:
///
/// ```rust,ignore
/// fn main() {
///     if let Err(err) = run() {
///         match err.downcast::<ExitError>() {
///             Ok(exit) => std::process::exit(exit.code),
///             Err(other) => {
///                 eprintln!("{other:#}");
///                 std::process::exit(1);
///             }
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
#[error("{message} (exit code {code})")]
pub struct ExitError {
    /// Exit status the process should terminate with
    pub code: i32,
    /// Human-readable reason, already logged when the error was created
    pub message: String,
}

/// Logs a fatal record and returns an [`ExitError`] carrying `code`
pub fn exit_fatal(code: i32, message: impl Into<String>) -> ExitError {
    let message = message.into();
    tracing::error!(fatal = true, exit_code = code, "{message}");
    ExitError { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throwable_error_carries_message() {
        let err = throwable_error("disk full");
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_throwable_returns_same_error() {
        let original = std::io::Error::other("boom");
        let returned = throwable(original);
        assert_eq!(returned.to_string(), "boom");
    }

    #[test]
    fn test_exit_fatal_carries_code() {
        let err = exit_fatal(3, "unrecoverable");
        assert_eq!(err.code, 3);
        assert_eq!(err.to_string(), "unrecoverable (exit code 3)");
    }

    #[test]
    fn test_exit_error_downcasts_from_anyhow() {
        let err: anyhow::Error = exit_fatal(2, "bad config").into();
        let exit = err.downcast::<ExitError>().unwrap();
        assert_eq!(exit.code, 2);
    }
}
