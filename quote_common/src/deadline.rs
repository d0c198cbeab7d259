//! Deadline enforcement for the suspension points of the quote flow.
//!
//! Every outbound HTTP call and every store operation is wrapped in
//! [`with_deadline`]. When the deadline elapses the in-flight future is dropped,
//! which cancels it, and the caller receives `QuoteError::Timeout`.
use std::future::Future;
use std::time::Duration;

use log::warn;

use crate::error::QuoteError;
use crate::result::Result;

/// Run `fut` to completion unless `limit` elapses first.
///
/// `operation` names the work in the timeout message, e.g. `"provider fetch"`.
pub async fn with_deadline<T, F>(limit: Duration, operation: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!("{} exceeded its deadline of {:?}", operation, limit);
            Err(QuoteError::Timeout(format!(
                "{operation} exceeded {}ms",
                limit.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_through_fast_results() {
        let value = with_deadline(Duration::from_millis(50), "noop", async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn passes_through_inner_errors() {
        let result: Result<()> = with_deadline(Duration::from_millis(50), "noop", async {
            Err(QuoteError::Storage("disk full".into()))
        })
        .await;
        assert!(matches!(result, Err(QuoteError::Storage(_))));
    }

    #[tokio::test]
    async fn times_out_slow_work() {
        let result = with_deadline(Duration::from_millis(10), "slow op", async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(())
        })
        .await;
        match result {
            Err(QuoteError::Timeout(msg)) => assert_eq!(msg, "slow op exceeded 10ms"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
