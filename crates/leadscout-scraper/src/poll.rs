//! Fixed-interval, budgeted polling primitive.
//!
//! Timeout and cancellation semantics for the wait loop live here, in one
//! place: the loop sleeps a fixed interval between attempts, stops at a
//! hard attempt budget, and is drop-cancellable at every await point: a
//! caller that drops the future aborts no later than the next attempt
//! boundary.

use std::future::Future;
use std::time::Duration;

/// What one status check concluded.
pub(crate) enum PollVerdict<T> {
    /// Terminal success; stop polling and hand back the value.
    Ready(T),
    /// Not finished yet (including tolerated check failures); keep polling.
    Pending,
}

/// How the whole poll loop ended.
#[derive(Debug)]
pub(crate) enum PollOutcome<T> {
    /// A check reported success within the budget.
    Ready { value: T, attempts: u32 },
    /// The attempt budget ran out without a terminal verdict.
    Exhausted { attempts: u32 },
}

/// Runs `check` up to `max_attempts` times, sleeping `interval` between
/// attempts (never after the last one).
///
/// The attempt number (1-based) is passed to each check for logging.
/// A `PollVerdict::Ready` stops the loop; `PollVerdict::Pending` continues.
///
/// # Errors
///
/// An `Err` from `check` aborts the loop immediately; that is how a
/// terminal engine-side failure short-circuits the wait.
pub(crate) async fn poll_until<T, E, F, Fut>(
    interval: Duration,
    max_attempts: u32,
    mut check: F,
) -> Result<PollOutcome<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PollVerdict<T>, E>>,
{
    for attempt in 1..=max_attempts {
        match check(attempt).await? {
            PollVerdict::Ready(value) => {
                return Ok(PollOutcome::Ready {
                    value,
                    attempts: attempt,
                })
            }
            PollVerdict::Pending => {}
        }
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }
    Ok(PollOutcome::Exhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom;

    #[tokio::test]
    async fn ready_on_first_attempt_checks_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let outcome = poll_until(Duration::ZERO, 24, |_| {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Boom>(PollVerdict::Ready(7))
            }
        })
        .await
        .unwrap();
        assert!(matches!(
            outcome,
            PollOutcome::Ready {
                value: 7,
                attempts: 1
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pending_until_last_attempt_still_succeeds() {
        // 23 pending verdicts followed by one ready: within a budget of 24.
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let outcome = poll_until(Duration::ZERO, 24, |attempt| {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                if attempt < 24 {
                    Ok::<_, Boom>(PollVerdict::Pending)
                } else {
                    Ok(PollVerdict::Ready("done"))
                }
            }
        })
        .await
        .unwrap();
        assert!(matches!(
            outcome,
            PollOutcome::Ready {
                value: "done",
                attempts: 24
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 24);
    }

    #[tokio::test]
    async fn exhausting_the_budget_reports_attempts() {
        let outcome = poll_until(Duration::ZERO, 24, |_| async {
            Ok::<PollVerdict<()>, Boom>(PollVerdict::Pending)
        })
        .await
        .unwrap();
        assert!(matches!(outcome, PollOutcome::Exhausted { attempts: 24 }));
    }

    #[tokio::test]
    async fn check_error_aborts_immediately() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = poll_until(Duration::ZERO, 24, |attempt| {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                if attempt == 3 {
                    Err(Boom)
                } else {
                    Ok(PollVerdict::<()>::Pending)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap_err(), Boom);
        assert_eq!(calls.load(Ordering::SeqCst), 3, "no attempts after the error");
    }

    #[tokio::test]
    async fn attempt_numbers_are_one_based_and_sequential() {
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let s = Arc::clone(&seen);
        let _ = poll_until(Duration::ZERO, 3, |attempt| {
            let s = Arc::clone(&s);
            async move {
                s.lock().unwrap().push(attempt);
                Ok::<PollVerdict<()>, Boom>(PollVerdict::Pending)
            }
        })
        .await;
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn aborting_the_loop_stops_checks_by_the_next_attempt_boundary() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let handle = tokio::spawn(poll_until(Duration::from_secs(5), 24, move |_| {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<PollVerdict<()>, Boom>(PollVerdict::Pending)
            }
        }));

        // Checks land at t=0, 5 and 10; at t=11 the loop is mid-sleep.
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        // Well past several more intervals: the counter must not move.
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 3, "checks ran after abort");
    }

    #[tokio::test(start_paused = true)]
    async fn sleeps_between_attempts_but_not_after_the_last() {
        // With paused time, total elapsed must be exactly (attempts - 1) intervals.
        let start = tokio::time::Instant::now();
        let _ = poll_until(Duration::from_secs(5), 3, |_| async {
            Ok::<PollVerdict<()>, Boom>(PollVerdict::Pending)
        })
        .await;
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }
}
