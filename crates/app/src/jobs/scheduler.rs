use std::future::Future;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::warn;

use crate::jobs::JobError;

const FAILURE_BACKOFF: Duration = Duration::from_secs(30);

/// Drives one recurring poll. A failed tick logs and backs off instead of
/// tearing the loop down; the next tick retries.
pub async fn run_interval<F, Fut>(
    name: &'static str,
    period: Duration,
    mut poll: F,
) -> Result<(), JobError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), JobError>>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if let Err(err) = poll().await {
            warn!(error = %err, job = name, "poll failed");
            sleep(FAILURE_BACKOFF).await;
        }
    }
}
