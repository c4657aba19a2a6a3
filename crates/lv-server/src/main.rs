use std::sync::Arc;

use anyhow::Context;

use lv_ledger::InMemoryVoteLedger;
use lv_menu::InMemoryDirectory;
use lv_server::auth::{Identity, StaticTokenAuth};
use lv_server::config::ServerConfig;
use lv_server::server::{init_tracing, LunchVoteServer};
use lv_server::state::AppState;
use lv_types::VoterId;

/// Stand-alone server with in-memory backends. A config file path may be
/// passed as the first argument; otherwise defaults apply.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            ServerConfig::from_toml_str(&raw)?
        }
        None => ServerConfig::default(),
    };

    let employee_token =
        std::env::var("LUNCHVOTE_EMPLOYEE_TOKEN").unwrap_or_else(|_| "demo-employee".into());
    let auth = StaticTokenAuth::new().with_token(&employee_token, Identity::employee(VoterId::new()));
    tracing::info!("employee demo token: {employee_token}");

    let state = AppState::new(
        config,
        Arc::new(InMemoryDirectory::new()),
        Arc::new(InMemoryVoteLedger::new()),
        Arc::new(auth),
    );

    LunchVoteServer::new(state).serve().await?;
    Ok(())
}
