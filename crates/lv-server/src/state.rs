use std::sync::Arc;

use lv_intake::VoteIntake;
use lv_ledger::VoteLedger;
use lv_menu::MenuDirectory;

use crate::auth::AuthProvider;
use crate::config::ServerConfig;

/// Shared per-process state handed to every handler.
pub struct AppState {
    pub config: ServerConfig,
    pub directory: Arc<dyn MenuDirectory>,
    pub ledger: Arc<dyn VoteLedger>,
    pub intake: VoteIntake,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        directory: Arc<dyn MenuDirectory>,
        ledger: Arc<dyn VoteLedger>,
        auth: Arc<dyn AuthProvider>,
    ) -> Arc<Self> {
        let intake = VoteIntake::new(directory.clone(), ledger.clone());
        Arc::new(Self {
            config,
            directory,
            ledger,
            intake,
            auth,
        })
    }
}
