use crate::error::DeadlineError;
use log::info;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Checks whether cancellation was requested and errors if so
///
/// Helper for synchronous code that needs to honor a cancellation token at
/// specific points, typically at the top of a loop iteration.
///
/// # Returns
///
/// * `Ok(())` - cancellation has not been requested
/// * `Err(DeadlineError::Cancelled)` - the token has fired
///
/// # Examples
///
/// ```rust
/// use tokio_deadline_ext::{check_cancellation, CancellationToken, DeadlineError};
///
/// fn process_items(token: &CancellationToken, items: &[i32]) -> Result<Vec<i32>, DeadlineError> {
///     let mut results = Vec::new();
///     for item in items {
///         check_cancellation(token, "process_items")?;
///         results.push(item * 2);
///     }
///     Ok(results)
/// }
/// ```
pub fn check_cancellation(
    token: &CancellationToken,
    context: &str,
) -> Result<(), DeadlineError> {
    if token.is_cancelled() {
        info!("{}: cancellation detected", context);
        return Err(DeadlineError::Cancelled {
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Checks whether a deadline computed at `started + timeout` has passed
///
/// Companion to [`check_cancellation`] for synchronous retry/polling loops:
/// capture an `Instant` once before the loop and check it each iteration
/// instead of re-arming timers.
///
/// # Returns
///
/// * `Ok(())` - there is still time left
/// * `Err(DeadlineError::TimedOut)` - the duration has fully elapsed
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use tokio_deadline_ext::{check_deadline, DeadlineError};
///
/// fn poll_until_ready(mut ready: impl FnMut() -> bool) -> Result<(), DeadlineError> {
///     let started = Instant::now();
///     while !ready() {
///         check_deadline(started, Duration::from_secs(5), "poll_until_ready")?;
///         std::thread::sleep(Duration::from_millis(50));
///     }
///     Ok(())
/// }
/// ```
pub fn check_deadline(
    started: Instant,
    timeout: Duration,
    context: &str,
) -> Result<(), DeadlineError> {
    if started.elapsed() >= timeout {
        info!("{}: deadline of {:?} elapsed", context, timeout);
        return Err(DeadlineError::TimedOut { timeout });
    }
    Ok(())
}
