use std::sync::Arc;

use lv_ledger::{VoteLedger, VoteRecord};
use lv_menu::MenuDirectory;
use lv_types::{CalendarDay, ClientVersion, VoterId};

use crate::error::IntakeError;
use crate::strategy::{strategy_for, IntakeContext};
use crate::submission::VoteSubmission;

/// The submission entry point: negotiate, decode, validate, persist.
///
/// One instance is shared across request workers; it owns nothing mutable
/// itself and leans on the ledger for all write-time guarantees.
pub struct VoteIntake {
    directory: Arc<dyn MenuDirectory>,
    ledger: Arc<dyn VoteLedger>,
}

impl VoteIntake {
    pub fn new(directory: Arc<dyn MenuDirectory>, ledger: Arc<dyn VoteLedger>) -> Self {
        Self { directory, ledger }
    }

    /// Process one submission for `voter`, cast on `today`.
    ///
    /// On success every record of the session is durably recorded; on any
    /// rejection none are. Returns the recorded session.
    pub fn submit(
        &self,
        voter: VoterId,
        version: ClientVersion,
        body: &serde_json::Value,
        today: CalendarDay,
    ) -> Result<Vec<VoteRecord>, IntakeError> {
        let strategy = strategy_for(version);
        let submission = VoteSubmission::decode(version, body)?;

        let context = IntakeContext {
            directory: self.directory.as_ref(),
            ledger: self.ledger.as_ref(),
            today,
        };

        let records = strategy
            .validate(voter, &submission, &context)
            .inspect_err(|error| {
                tracing::warn!(
                    voter = %voter.short_id(),
                    strategy = strategy.name(),
                    kind = error.kind(),
                    %error,
                    "vote submission rejected"
                );
            })?;

        self.ledger.append_session(&records).map_err(|error| {
            let error = IntakeError::from(error);
            tracing::warn!(
                voter = %voter.short_id(),
                strategy = strategy.name(),
                kind = error.kind(),
                %error,
                "vote session rejected at commit"
            );
            error
        })?;

        tracing::info!(
            voter = %voter.short_id(),
            strategy = strategy.name(),
            count = records.len(),
            "vote submitted"
        );
        Ok(records)
    }
}
