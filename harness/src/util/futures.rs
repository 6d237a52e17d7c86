use slog::{debug, Logger};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout as with_deadline};

use crate::env::ENV_VARS;

/// Timing parameters of [`try_query_with_timeout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    /// Hard ceiling for the whole poll, measured from the first attempt.
    pub timeout: Duration,
    /// Fixed delay between the end of a failed attempt and the next one.
    pub retry_interval: Duration,
}

impl PollSettings {
    pub fn new(timeout: Duration, retry_interval: Duration) -> Self {
        Self {
            timeout,
            retry_interval,
        }
    }

    /// `QN_QUERY_NODE_TIMEOUT_MS` and `QN_QUERY_NODE_RETRY_INTERVAL_MS`.
    pub fn from_env() -> Self {
        Self::new(
            ENV_VARS.query_node_timeout(),
            ENV_VARS.query_node_retry_interval(),
        )
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

#[derive(Debug, Error)]
pub enum ConvergenceError {
    /// The deadline fired. `last` is the error of the most recent attempt,
    /// either a failed query or a failed assertion.
    #[error("query did not converge within {timeout:?} ({attempts} attempts): {last:#}")]
    TimedOut {
        timeout: Duration,
        attempts: u64,

        #[source]
        last: anyhow::Error,
    },

    #[error("query did not complete a single attempt within {timeout:?}")]
    NoAttemptCompleted { timeout: Duration },
}

impl ConvergenceError {
    /// The error observed by the last completed attempt, if any.
    pub fn last_error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::TimedOut { last, .. } => Some(last),
            Self::NoAttemptCompleted { .. } => None,
        }
    }

    pub fn attempts(&self) -> u64 {
        match self {
            Self::TimedOut { attempts, .. } => *attempts,
            Self::NoAttemptCompleted { .. } => 0,
        }
    }
}

/// Repeatedly invoke `query` until `assert_valid` accepts its result.
///
/// A failed query and a rejected result are treated the same way: the error
/// is remembered and the query is invoked again after `retry_interval`.
/// Retries happen at a constant interval. Once `timeout` has elapsed since
/// the first invocation the poll is abandoned, even if an attempt is in
/// flight, and the last observed error is returned inside
/// [`ConvergenceError::TimedOut`].
///
/// Every call owns its deadline and retry loop, so any number of polls can
/// run concurrently.
pub async fn try_query_with_timeout<R, E, Q, Fut, V>(
    logger: &Logger,
    mut query: Q,
    assert_valid: V,
    timeout: Duration,
    retry_interval: Duration,
) -> Result<R, ConvergenceError>
where
    Q: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    E: Into<anyhow::Error>,
    V: Fn(&R) -> anyhow::Result<()>,
{
    let mut attempts: u64 = 0;
    let mut last_error: Option<anyhow::Error> = None;

    let converged = with_deadline(timeout, async {
        loop {
            let error = match query().await {
                Ok(result) => match assert_valid(&result) {
                    Ok(()) => return result,
                    Err(e) => e,
                },
                Err(e) => e.into(),
            };
            attempts += 1;

            debug!(
                logger,
                "Query node has not converged yet, retrying";
                "attempt" => attempts,
                "retry_in_ms" => retry_interval.as_millis() as u64,
                "error" => format!("{:#}", error),
            );

            last_error = Some(error);
            sleep(retry_interval).await;
        }
    })
    .await;

    match (converged, last_error) {
        (Ok(result), _) => Ok(result),
        (Err(_), Some(last)) => Err(ConvergenceError::TimedOut {
            timeout,
            attempts,
            last,
        }),
        (Err(_), None) => Err(ConvergenceError::NoAttemptCompleted { timeout }),
    }
}

/// [`try_query_with_timeout`] with the timing taken from `settings`.
pub async fn poll_until<R, E, Q, Fut, V>(
    logger: &Logger,
    settings: PollSettings,
    query: Q,
    assert_valid: V,
) -> Result<R, ConvergenceError>
where
    Q: FnMut() -> Fut,
    Fut: Future<Output = Result<R, E>>,
    E: Into<anyhow::Error>,
    V: Fn(&R) -> anyhow::Result<()>,
{
    try_query_with_timeout(
        logger,
        query,
        assert_valid,
        settings.timeout,
        settings.retry_interval,
    )
    .await
}
