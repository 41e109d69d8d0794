use std::error::Error as _;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::{LoopKind, LoopOutcome};
use crate::api::ApiError;
use crate::config::RetryPolicy;
use crate::shutdown::Shutdown;
use crate::view::{MessageLevel, ViewState};

/// Drives `cycle` every `interval` until shutdown or a terminal failure.
///
/// Transient failures back off per `policy`; a successful cycle resets the
/// failure count. Shutdown is checked before every request and interrupts
/// both an in-flight request and the sleep between cycles.
pub(crate) async fn supervise<F, Fut>(
    kind: LoopKind,
    interval: Duration,
    policy: RetryPolicy,
    view: &ViewState,
    mut shutdown: Shutdown,
    mut cycle: F,
) -> LoopOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    info!(%kind, "refresh loop started");
    let mut failures = 0u32;

    loop {
        let result = tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            result = cycle() => result,
        };

        let delay = match result {
            Ok(()) => {
                if failures > 0 {
                    info!(%kind, failures, "refresh loop recovered");
                }
                failures = 0;
                debug!(%kind, "refresh cycle complete");
                interval
            }
            Err(err) if err.is_transient() && failures < policy.max_retries => {
                failures += 1;
                let delay = policy.backoff(failures);
                warn!(
                    %kind,
                    attempt = failures,
                    max_retries = policy.max_retries,
                    ?delay,
                    error = %describe(&err),
                    "refresh failed, retrying"
                );
                delay
            }
            Err(err) => {
                let cause = describe(&err);
                error!(%kind, error = %cause, "refresh loop stopped");
                view.push_notice(
                    MessageLevel::Error,
                    format!("{kind} refresh stopped: {cause}"),
                );
                return LoopOutcome::Failed(err);
            }
        };

        tokio::select! {
            biased;
            _ = shutdown.wait() => break,
            _ = sleep(delay) => {}
        }
    }

    info!(%kind, "refresh loop cancelled");
    LoopOutcome::Cancelled
}

/// Error message followed by its source chain.
fn describe(err: &ApiError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
