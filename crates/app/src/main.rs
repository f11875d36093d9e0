mod cli;
mod config;
mod confirm;
mod controllers;
mod jobs;
mod render;
mod session;
mod state;

use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, View};
use crate::config::ConfigError;
use crate::confirm::{AdminAction, PendingAction, RefreshPlan};
use crate::controllers::ControllerError;
use crate::jobs::JobError;
use crate::session::{Session, ViewKey};
use crate::state::{AppState, StateError};
use masthead_client::ApiError;
use masthead_client::blocked_ips::IpAction;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid cli: {0}")]
    InvalidCli(String),
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("controller error: {0}")]
    Controller(#[from] ControllerError),
    #[error("job error: {0}")]
    Jobs(#[from] JobError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    config::load_dotenv()?;
    let config = config::AppConfig::from_env()?;
    let state = state::build_state(config)?;

    let mut session = Session::new();
    match state.client.auth_status().await {
        Ok(status) => match status.user {
            Some(user) => {
                info!(user = %user.name, is_admin = user.is_admin, "signed in");
                session.current_user = Some(user);
            }
            None => info!("browsing anonymously"),
        },
        Err(err) => warn!(error = %err, "auth status unavailable, assuming anonymous"),
    }

    session.navigate(view_key(cli.view));
    if cli.view == View::Post {
        session.current_post_slug = cli.slug.clone();
    }

    if let Some(action) = requested_action(&cli)? {
        let pending = PendingAction::request(action);
        if !cli.yes {
            println!("{} (re-run with --yes to proceed)", pending.prompt);
            return Ok(());
        }
        let plan = confirm::execute(&state.client, &mut session, pending.confirm()).await?;
        apply_refresh(&state, &mut session, plan).await?;
        return Ok(());
    }

    if let Some(id) = cli.analyze {
        let analysis = controllers::blocked_ips::analysis(&state.client, id).await?;
        println!("{}", render::views::ip_analysis(&analysis));
        return Ok(());
    }
    if let Some(parent_id) = cli.reply_to {
        let slug = require(cli.slug.as_deref(), "--reply-to requires --slug")?;
        let text = require(cli.text.as_deref(), "--reply-to requires --text")?;
        controllers::community::reply(&state.client, parent_id, slug, text).await?;
        let page = session.stored_page(ViewKey::Community);
        let model =
            controllers::community::load(&state.client, &mut session, None, page).await?;
        println!("{}", render::views::community(&model, &state.config.asset_prefix));
        return Ok(());
    }
    if let Some(id) = cli.edit_comment {
        let text = require(cli.text.as_deref(), "--edit-comment requires --text")?;
        controllers::community::edit(&state.client, id, text).await?;
        info!(comment = id, "comment updated");
        return Ok(());
    }
    if cli.comment {
        let slug = require(cli.slug.as_deref(), "--comment requires --slug")?;
        let text = require(cli.text.as_deref(), "--comment requires --text")?;
        controllers::post::submit(&state.client, slug, text, cli.parent).await?;
        let model = controllers::post::load(&state.client, &mut session, slug).await?;
        println!("{}", render::views::post_page(&model, &state.config.asset_prefix));
        return Ok(());
    }

    match cli.view {
        View::Dashboard => {
            let model = controllers::dashboard::load(&state.client, cli.platform_shares).await?;
            println!("{}", render::views::dashboard(&model));
            if cli.watch {
                let session = Arc::new(Mutex::new(session));
                let poll = tokio::spawn(jobs::poll_dashboard(
                    state.clone(),
                    session.clone(),
                    cli.platform_shares,
                ));
                tokio::select! {
                    _ = shutdown_signal() => {
                        info!("shutdown signal received");
                    }
                    res = poll => {
                        res??;
                    }
                }
            }
        }
        View::Content => match cli.slug.as_deref() {
            Some(slug) => {
                let model = controllers::content::load_detail(&state.client, slug).await?;
                println!("{}", render::views::post_detail(&model));
            }
            None => {
                let model =
                    controllers::content::load(&state.client, &mut session, cli.page).await?;
                println!("{}", render::views::content(&model, &state.config.asset_prefix));
            }
        },
        View::Community => {
            let model = controllers::community::load(
                &state.client,
                &mut session,
                cli.slug.as_deref(),
                cli.page,
            )
            .await?;
            println!("{}", render::views::community(&model, &state.config.asset_prefix));
        }
        View::Users => {
            let model = controllers::users::load(&state.client, &mut session, cli.page).await?;
            println!("{}", render::views::users(&model));
        }
        View::BlockedIps => {
            let model =
                controllers::blocked_ips::load(&state.client, &mut session, cli.page).await?;
            println!("{}", render::views::blocked_ips(&model));
        }
        View::IpLookup => {
            let ip = require(cli.ip.as_deref(), "ip-lookup requires --ip")?;
            let model = controllers::blocked_ips::lookup(&state.client, ip).await?;
            println!("{}", render::views::ip_lookup(&model));
        }
        View::Invoicing => {
            let model = controllers::invoicing::load(&state.client, &mut session, cli.page).await?;
            println!("{}", render::views::invoicing(&model));
        }
        View::Post => {
            let slug = require(cli.slug.as_deref(), "post requires --slug")?;
            let model = controllers::post::load(&state.client, &mut session, slug).await?;
            println!("{}", render::views::post_page(&model, &state.config.asset_prefix));
        }
        View::Search => {
            let query = require(cli.query.as_deref(), "search requires --query")?;
            let model = controllers::search::run(&state.client, query).await?;
            println!("{}", render::views::search(&model));
        }
    }

    Ok(())
}

fn require<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value.ok_or_else(|| AppError::InvalidCli(message.to_string()))
}

fn view_key(view: View) -> ViewKey {
    match view {
        View::Dashboard | View::IpLookup | View::Search => ViewKey::Dashboard,
        View::Content => ViewKey::Content,
        View::Community => ViewKey::Community,
        View::Users => ViewKey::Users,
        View::BlockedIps => ViewKey::BlockedIps,
        View::Invoicing => ViewKey::Invoicing,
        View::Post => ViewKey::PostDetailComments,
    }
}

/// At most one destructive action per invocation.
fn requested_action(cli: &Cli) -> Result<Option<AdminAction>, AppError> {
    let mut actions = Vec::new();
    if let Some(id) = cli.delete_comment {
        actions.push(AdminAction::DeleteComment { id });
    }
    if let Some(id) = cli.ban_user {
        actions.push(AdminAction::BanUser { id });
    }
    if let Some(id) = cli.unban_user {
        actions.push(AdminAction::UnbanUser { id });
    }
    if let Some(user_id) = cli.purge_user_comments {
        actions.push(AdminAction::DeleteAllUserComments { user_id });
    }
    if let Some(id) = cli.unblock_record {
        actions.push(AdminAction::UnblockIpRecord { id });
    }
    if cli.block_ip || cli.unblock_ip {
        if cli.block_ip && cli.unblock_ip {
            return Err(AppError::InvalidCli(
                "--block-ip and --unblock-ip are mutually exclusive".to_string(),
            ));
        }
        let ip = cli.ip.clone().ok_or_else(|| {
            AppError::InvalidCli("--block-ip/--unblock-ip require --ip".to_string())
        })?;
        let action = if cli.block_ip {
            IpAction::Block
        } else {
            IpAction::Unblock
        };
        actions.push(AdminAction::ManageIp { ip, action });
    }
    if actions.len() > 1 {
        return Err(AppError::InvalidCli(
            "at most one destructive action per invocation".to_string(),
        ));
    }
    Ok(actions.pop())
}

/// Reloads and renders whatever list a successful mutation invalidated.
async fn apply_refresh(
    state: &AppState,
    session: &mut Session,
    plan: RefreshPlan,
) -> Result<(), AppError> {
    match plan {
        RefreshPlan::Community { page } => {
            let model =
                controllers::community::load(&state.client, session, None, page).await?;
            println!("{}", render::views::community(&model, &state.config.asset_prefix));
        }
        RefreshPlan::PostComments { slug } => {
            let model = controllers::post::load(&state.client, session, &slug).await?;
            println!("{}", render::views::post_page(&model, &state.config.asset_prefix));
        }
        RefreshPlan::Users { page } => {
            let model = controllers::users::load(&state.client, session, page).await?;
            println!("{}", render::views::users(&model));
        }
        RefreshPlan::UserComments { user_id, page } => {
            let model =
                controllers::users::load_comments(&state.client, session, user_id, page).await?;
            println!("{}", render::views::user_comments(&model, &state.config.asset_prefix));
        }
        RefreshPlan::BlockedIps { page } => {
            let model = controllers::blocked_ips::load(&state.client, session, page).await?;
            println!("{}", render::views::blocked_ips(&model));
        }
        RefreshPlan::LookupAndBlockedIpsFirstPage { ip } => {
            let lookup = controllers::blocked_ips::lookup(&state.client, &ip).await?;
            println!("{}", render::views::ip_lookup(&lookup));
            let model = controllers::blocked_ips::load(&state.client, session, 1).await?;
            println!("{}", render::views::blocked_ips(&model));
        }
        RefreshPlan::None => {}
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install ctrl-c handler");
    }
}
