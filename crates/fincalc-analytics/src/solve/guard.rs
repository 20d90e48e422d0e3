//! Wall-clock bound on solver work.

use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinError;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default solver budget.
pub const DEFAULT_SOLVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared stop signal for a computation the caller no longer waits for.
///
/// Solvers poll it between residual evaluations and stop once it is set.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates an unset flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks every holder to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once [`cancel`](Self::cancel) was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Sets the flag when the waiting side goes away, whether by timeout or by
/// the request future being dropped.
struct CancelOnDrop(CancelFlag);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Runs blocking computations on a fresh blocking thread under a deadline.
///
/// Each call gets its own `spawn_blocking` task and its own [`CancelFlag`].
/// When the deadline passes the flag is set, so a solver that overran stops
/// at its next residual evaluation and releases its blocking thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionGuard {
    timeout: Duration,
}

impl Default for ExecutionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_SOLVER_TIMEOUT)
    }
}

impl ExecutionGuard {
    /// Creates a guard with the given budget.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Returns the budget.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs `work` and returns its result unchanged if it finishes in time.
    ///
    /// `work` receives the flag that is set once nobody waits for it any
    /// more. Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// - `SolverTimeout` when the budget elapses first.
    /// - `SolverError` when `work` panics.
    /// - Any error `work` itself returns.
    pub async fn run<T, F>(&self, work: F) -> AnalyticsResult<T>
    where
        F: FnOnce(CancelFlag) -> AnalyticsResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let cancel = CancelFlag::new();
        let _cancel_on_exit = CancelOnDrop(cancel.clone());
        let handle = tokio::task::spawn_blocking(move || work(cancel));

        match tokio::time::timeout(self.timeout, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(AnalyticsError::solver_error(join_error_message(join_err))),
            Err(_elapsed) => {
                log::debug!("solver cancelled after {:?}", self.timeout);
                Err(AnalyticsError::SolverTimeout {
                    timeout: self.timeout,
                })
            }
        }
    }
}

fn join_error_message(err: JoinError) -> String {
    if err.is_panic() {
        panic_message(&*err.into_panic())
    } else {
        "solver task was cancelled".to_string()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "solver panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_returns_result_unchanged() {
        let guard = ExecutionGuard::default();

        let value = guard.run(|_| Ok(0.1)).await.unwrap();
        assert_eq!(value, 0.1);

        let err = guard
            .run(|_| -> AnalyticsResult<f64> {
                Err(AnalyticsError::no_solution("none", vec!["d".into()]))
            })
            .await
            .unwrap_err();
        assert_eq!(err, AnalyticsError::no_solution("none", vec!["d".into()]));
    }

    #[tokio::test]
    async fn test_timeout() {
        let guard = ExecutionGuard::new(Duration::from_millis(20));

        let err = guard
            .run(|_| {
                std::thread::sleep(Duration::from_millis(300));
                Ok(1.0)
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AnalyticsError::SolverTimeout {
                timeout: Duration::from_millis(20)
            }
        );
    }

    #[tokio::test]
    async fn test_stuck_computation_does_not_block_next() {
        let guard = ExecutionGuard::new(Duration::from_millis(50));

        let stuck = guard.run(|_| {
            std::thread::sleep(Duration::from_millis(400));
            Ok(0.0)
        });
        assert!(stuck.await.is_err());

        let next = guard.run(|_| Ok(42)).await.unwrap();
        assert_eq!(next, 42);
    }

    #[tokio::test]
    async fn test_panic_becomes_solver_error() {
        let guard = ExecutionGuard::default();

        let err = guard
            .run(|_| -> AnalyticsResult<f64> { panic!("overflow in residual") })
            .await
            .unwrap_err();

        assert_eq!(err, AnalyticsError::solver_error("overflow in residual"));
    }

    #[tokio::test]
    async fn test_timeout_stops_abandoned_work() {
        let guard = ExecutionGuard::new(Duration::from_millis(20));
        let stopped = CancelFlag::new();
        let observed = stopped.clone();

        let err = guard
            .run(move |cancel| -> AnalyticsResult<f64> {
                let started = Instant::now();
                while !cancel.is_cancelled() && started.elapsed() < Duration::from_secs(10) {
                    std::thread::sleep(Duration::from_millis(1));
                }
                observed.cancel();
                Err(AnalyticsError::solver_error("cancelled"))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::SolverTimeout { .. }));

        let deadline = Instant::now() + Duration::from_secs(2);
        while !stopped.is_cancelled() && Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(stopped.is_cancelled(), "abandoned work kept running");
    }

    #[tokio::test]
    async fn test_flag_unset_while_waiting() {
        let guard = ExecutionGuard::default();

        let seen = guard.run(|cancel| Ok(cancel.is_cancelled())).await.unwrap();
        assert!(!seen);
    }

    #[test]
    fn test_cancel_flag_shared_between_clones() {
        let flag = CancelFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_cancelled());

        flag.cancel();
        assert!(clone.is_cancelled());
    }
}
