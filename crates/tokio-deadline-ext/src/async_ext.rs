use crate::error::DeadlineError;
use log::{info, warn};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Boxed future returned by the deadline wrappers
///
/// Boxing keeps the wrappers freely chainable: the returned future owns all
/// of its state (token clone, context label, the pinned operation) and is
/// therefore `'static`, so it can itself be wrapped again.
pub type DeadlineFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Extension trait for racing a Future against a cancellation token or a
/// timeout
///
/// Wrapping a future with one of these methods produces a future of the same
/// result shape that additionally fails early when the interrupt source
/// fires first, without the repetitive `tokio::select!` boilerplate at every
/// call site.
///
/// The trait is implemented for all futures that return `Result<T, E>` where
/// both the original error `E` and [`DeadlineError`] can be converted to the
/// target error type.
///
/// Both wrappers are plain future-to-future transforms with no shared state,
/// so they chain freely; whichever interrupt fires first wins:
///
/// ```rust,ignore
/// let rows = query()
///     .with_cancellation::<AppError>(&token, "query")
///     .with_timeout::<AppError>(Duration::from_secs(5), "query")
///     .await?;
/// ```
///
/// # Examples
///
/// ```rust
/// use tokio_deadline_ext::{DeadlineExt, DeadlineError, CancellationToken};
///
/// #[derive(Debug)]
/// enum MyError {
///     Interrupted(DeadlineError),
///     Io(String),
/// }
///
/// impl From<DeadlineError> for MyError {
///     fn from(err: DeadlineError) -> Self {
///         MyError::Interrupted(err)
///     }
/// }
///
/// impl From<std::io::Error> for MyError {
///     fn from(e: std::io::Error) -> Self {
///         MyError::Io(e.to_string())
///     }
/// }
///
/// # async fn some_io_operation() -> Result<String, std::io::Error> {
/// #     Ok("success".to_string())
/// # }
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), MyError> {
/// let token = CancellationToken::new();
///
/// let result = some_io_operation()
///     .with_cancellation::<MyError>(&token, "io_operation")
///     .await?;
///
/// println!("Got result: {}", result);
/// # Ok(())
/// # }
/// ```
pub trait DeadlineExt<T>: Sized {
    /// The original error type from the future
    ///
    /// Must be convertible to the target error type `E` so the wrapped
    /// future's own failure passes through unchanged.
    type OriginalError;

    /// Races this future against a cancellation token
    ///
    /// # Arguments
    ///
    /// * `token` - The cancellation token to listen for cancellation signals.
    ///   Registering on an already-cancelled token fails immediately; there
    ///   is no missed-signal window.
    /// * `context` - A label describing the operation. It is included in log
    ///   records and carried inside [`DeadlineError::Cancelled`].
    ///
    /// # Returns
    ///
    /// A future that completes with:
    /// - `Ok(T)` if the wrapped future completes successfully first
    /// - `Err(E)` converted from the wrapped future's own error
    /// - `Err(E)` converted from [`DeadlineError::Cancelled`] if the token
    ///   fires first
    ///
    /// If the wrapped future and the token are both ready on the first poll,
    /// the wrapped future's own outcome wins - a cancellation that arrives
    /// no earlier than the result never replaces it. Callers can rely on
    /// this tie-break.
    ///
    /// When cancellation wins, the wrapped future is not dropped: it is
    /// handed to a detached task that drives it to completion and logs any
    /// failure, so an in-flight operation's error is never silently
    /// discarded. The wrapper observes the operation; it does not cancel it.
    fn with_cancellation<E>(
        self,
        token: &CancellationToken,
        context: &str,
    ) -> DeadlineFuture<T, E>
    where
        DeadlineError: Into<E>,
        Self::OriginalError: Into<E>,
        T: Send + 'static,
        E: Send + 'static;

    /// Races this future against a fixed timeout
    ///
    /// The timer is armed when the wrapper is invoked and disposed on every
    /// exit path, including the one where the wrapped future wins, so a
    /// losing timer can neither fire late nor keep the runtime alive.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Fail with [`DeadlineError::TimedOut`] if the wrapped
    ///   future has not settled within this duration.
    /// * `context` - A label describing the operation, used in log records.
    ///
    /// Tie-break and observation behavior are identical to
    /// [`with_cancellation`](DeadlineExt::with_cancellation): a result that
    /// is ready by the time the timer fires is authoritative, and a future
    /// that loses the race is driven to completion on a detached task.
    fn with_timeout<E>(self, timeout: Duration, context: &str) -> DeadlineFuture<T, E>
    where
        DeadlineError: Into<E>,
        Self::OriginalError: Into<E>,
        T: Send + 'static,
        E: Send + 'static;
}

impl<F, T, OriginalError> DeadlineExt<T> for F
where
    F: Future<Output = Result<T, OriginalError>> + Send + 'static,
    T: Send + 'static,
    OriginalError: std::fmt::Debug + Send + 'static,
{
    type OriginalError = OriginalError;

    fn with_cancellation<E>(self, token: &CancellationToken, context: &str) -> DeadlineFuture<T, E>
    where
        DeadlineError: Into<E>,
        OriginalError: Into<E>,
        T: Send + 'static,
        E: Send + 'static,
    {
        let token = token.clone();
        let context = context.to_string();
        Box::pin(async move {
            let mut operation = Box::pin(self);
            tokio::select! {
                // The operation arm comes first: if both are ready, the
                // operation's own outcome is authoritative.
                biased;
                result = &mut operation => {
                    result.map_err(Into::into)
                }
                _ = token.cancelled() => {
                    info!("{}: cancellation signal received", context);
                    observe_to_completion(operation, context.clone());
                    Err(DeadlineError::Cancelled { context }.into())
                }
            }
        })
    }

    fn with_timeout<E>(self, timeout: Duration, context: &str) -> DeadlineFuture<T, E>
    where
        DeadlineError: Into<E>,
        OriginalError: Into<E>,
        T: Send + 'static,
        E: Send + 'static,
    {
        let context = context.to_string();
        Box::pin(async move {
            let mut operation = Box::pin(self);
            tokio::select! {
                biased;
                result = &mut operation => {
                    result.map_err(Into::into)
                }
                _ = tokio::time::sleep(timeout) => {
                    info!("{}: deadline of {:?} elapsed", context, timeout);
                    observe_to_completion(operation, context);
                    Err(DeadlineError::TimedOut { timeout }.into())
                }
            }
        })
    }
}

/// Drives a future that lost its race to completion on a detached task
///
/// The wrapper never owns or cancels the underlying operation, so when an
/// interrupt wins the remainder must still be awaited somewhere; dropping it
/// would silently discard its eventual failure.
fn observe_to_completion<F, T, E>(operation: Pin<Box<F>>, context: String)
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: std::fmt::Debug + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = operation.await {
            warn!(
                "{}: operation failed after losing the race: {:?}",
                context, err
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Cancelled,
        TimedOut(Duration),
        Custom(String),
    }

    impl From<DeadlineError> for TestError {
        fn from(err: DeadlineError) -> Self {
            match err {
                DeadlineError::Cancelled { .. } => TestError::Cancelled,
                DeadlineError::TimedOut { timeout } => TestError::TimedOut(timeout),
            }
        }
    }

    impl From<std::io::Error> for TestError {
        fn from(e: std::io::Error) -> Self {
            TestError::Custom(e.to_string())
        }
    }

    async fn delayed_ok(delay: Duration) -> Result<String, std::io::Error> {
        tokio::time::sleep(delay).await;
        Ok("completed".to_string())
    }

    #[tokio::test]
    async fn test_cancellation_passes_success_through() {
        let token = CancellationToken::new();

        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(10))
            .with_cancellation(&token, "test")
            .await;

        assert_eq!(result.unwrap(), "completed");
    }

    #[tokio::test]
    async fn test_timeout_passes_success_through() {
        // Scenario: operation completes in 100ms against a 1000ms timeout
        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(100))
            .with_timeout(Duration::from_millis(1000), "test")
            .await;

        assert_eq!(result.unwrap(), "completed");
    }

    #[tokio::test]
    async fn test_original_error_passes_through_unchanged() {
        let token = CancellationToken::new();

        async fn failing_operation() -> Result<String, std::io::Error> {
            Err(std::io::Error::other("boom"))
        }

        let result: Result<String, TestError> = failing_operation()
            .with_cancellation(&token, "test")
            .await;

        match result.unwrap_err() {
            TestError::Custom(msg) => assert!(msg.contains("boom")),
            other => panic!("expected Custom error, got {other:?}"),
        }

        let result: Result<String, TestError> = failing_operation()
            .with_timeout(Duration::from_millis(500), "test")
            .await;

        match result.unwrap_err() {
            TestError::Custom(msg) => assert!(msg.contains("boom")),
            other => panic!("expected Custom error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_prefired_token_cancels_immediately() {
        // Scenario: operation would take 1000ms, token fired at t=0
        let token = CancellationToken::new();
        token.cancel();

        let started = Instant::now();
        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(1000))
            .with_cancellation(&token, "test_prefired")
            .await;

        assert_eq!(result.unwrap_err(), TestError::Cancelled);
        assert!(started.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_timeout_fires_before_slow_operation() {
        // Scenario: operation would take 2000ms against a 500ms timeout
        let started = Instant::now();
        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(2000))
            .with_timeout(Duration::from_millis(500), "test_slow")
            .await;

        assert_eq!(
            result.unwrap_err(),
            TestError::TimedOut(Duration::from_millis(500))
        );
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_chained_cancellation_beats_timeout() {
        // Scenario: 2000ms operation, token fired at t=0, outer 5000ms
        // timeout - the earlier interrupt determines the error kind
        let token = CancellationToken::new();
        token.cancel();

        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(2000))
            .with_cancellation::<TestError>(&token, "test_chain")
            .with_timeout(Duration::from_secs(5), "test_chain")
            .await;

        assert_eq!(result.unwrap_err(), TestError::Cancelled);
    }

    #[tokio::test]
    async fn test_chained_timeout_beats_never_fired_token() {
        let token = CancellationToken::new();

        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(2000))
            .with_cancellation::<TestError>(&token, "test_chain")
            .with_timeout(Duration::from_millis(100), "test_chain")
            .await;

        assert_eq!(
            result.unwrap_err(),
            TestError::TimedOut(Duration::from_millis(100))
        );
    }

    #[tokio::test]
    async fn test_repeated_cancel_is_idempotent() {
        let token = CancellationToken::new();
        token.cancel();

        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(200))
            .with_cancellation(&token, "test_idempotent")
            .await;
        assert_eq!(result.unwrap_err(), TestError::Cancelled);

        // Firing again is a no-op and a fresh wrapper observes the same state
        token.cancel();
        let result: Result<String, TestError> = delayed_ok(Duration::from_millis(200))
            .with_cancellation(&token, "test_idempotent")
            .await;
        assert_eq!(result.unwrap_err(), TestError::Cancelled);
    }

    #[tokio::test]
    async fn test_ready_result_wins_tie_against_fired_token() {
        let token = CancellationToken::new();
        token.cancel();

        // The operation is ready on the very first poll, so its result is
        // authoritative even though the token already fired.
        async fn immediate() -> Result<String, std::io::Error> {
            Ok("instant".to_string())
        }

        let result: Result<String, TestError> =
            immediate().with_cancellation(&token, "test_tie").await;

        assert_eq!(result.unwrap(), "instant");
    }

    #[tokio::test]
    async fn test_losing_operation_still_runs_to_completion() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let token = CancellationToken::new();
        token.cancel();

        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let operation = async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, std::io::Error>(())
        };

        let result: Result<(), TestError> =
            operation.with_cancellation(&token, "test_observe").await;
        assert_eq!(result.unwrap_err(), TestError::Cancelled);
        assert!(!finished.load(Ordering::SeqCst));

        // The loser was detached, not dropped - it finishes on its own
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(finished.load(Ordering::SeqCst));
    }
}
