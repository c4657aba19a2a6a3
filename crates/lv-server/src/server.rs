use std::sync::Arc;

use tokio::net::TcpListener;

use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// LunchVote HTTP server.
pub struct LunchVoteServer {
    state: Arc<AppState>,
}

impl LunchVoteServer {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let bind_addr = self.state.config.bind_addr;
        let app = build_router(self.state);
        let listener = TcpListener::bind(&bind_addr).await?;
        tracing::info!("LunchVote server listening on {bind_addr}");
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

/// Install the process-wide tracing subscriber. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt().with_target(false).init();
}
