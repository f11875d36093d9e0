pub mod scheduler;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use masthead_client::ApiError;

use crate::controllers::dashboard;
use crate::render::views;
use crate::session::{Session, ViewKey};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),
}

/// Refreshes the dashboard while it is the active view. The poll is gated
/// rather than stopped: navigating away makes ticks no-ops, navigating back
/// picks up again on the next tick.
pub async fn poll_dashboard(
    state: AppState,
    session: Arc<Mutex<Session>>,
    platform_shares: bool,
) -> Result<(), JobError> {
    let period = state.config.dashboard_poll_interval;
    scheduler::run_interval("dashboard_poll", period, move || {
        let state = state.clone();
        let session = session.clone();
        async move {
            if session.lock().await.active_view() != ViewKey::Dashboard {
                debug!("dashboard not active, skipping poll");
                return Ok(());
            }
            let model = dashboard::load(&state.client, platform_shares).await?;
            info!(total_views = model.overview.total_views, "dashboard refreshed");
            println!("{}", views::dashboard(&model));
            Ok(())
        }
    })
    .await
}
