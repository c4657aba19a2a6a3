use std::collections::HashSet;

use lv_ledger::{VoteLedger, VoteRecord};
use lv_menu::{Menu, MenuDirectory};
use lv_types::{CalendarDay, ClientVersion, MenuId, Rank, VoterId};

use crate::error::IntakeError;
use crate::submission::{RankedPayload, VoteSubmission};

/// Everything a strategy needs to validate a submission: the menu
/// directory, the existing ledger state, and the explicit current day.
pub struct IntakeContext<'a> {
    pub directory: &'a dyn MenuDirectory,
    pub ledger: &'a dyn VoteLedger,
    pub today: CalendarDay,
}

/// One protocol generation's validation rules.
///
/// Strategies are stateless and object-safe; the version header picks one
/// per request. They turn a decoded submission into ledger-ready records
/// or a typed rejection — persistence is the caller's job.
pub trait SubmissionValidator: Send + Sync {
    /// Name of this strategy (for logs).
    fn name(&self) -> &str;

    /// Validate and normalize the submission into vote records.
    fn validate(
        &self,
        voter: VoterId,
        submission: &VoteSubmission,
        context: &IntakeContext<'_>,
    ) -> Result<Vec<VoteRecord>, IntakeError>;
}

/// Pick the strategy a client version negotiates.
pub fn strategy_for(version: ClientVersion) -> &'static dyn SubmissionValidator {
    if version.supports_ranked_voting() {
        &RankedStrategy
    } else {
        &LegacyStrategy
    }
}

fn fetch_menu(context: &IntakeContext<'_>, id: &MenuId) -> Result<Menu, IntakeError> {
    context
        .directory
        .get(id)?
        .ok_or_else(|| IntakeError::invalid_menu(format!("unknown menu {id}")))
}

fn reject_if_already_voted(
    context: &IntakeContext<'_>,
    voter: &VoterId,
) -> Result<(), IntakeError> {
    // Pre-check only; the ledger's commit-time constraint is the source
    // of truth under concurrency.
    if context.ledger.has_voted_on(voter, context.today)? {
        return Err(IntakeError::AlreadyVoted);
    }
    Ok(())
}

/// Pre-2.0 clients: a single menu reference, implicitly a first choice.
pub struct LegacyStrategy;

impl SubmissionValidator for LegacyStrategy {
    fn name(&self) -> &str {
        "legacy"
    }

    fn validate(
        &self,
        voter: VoterId,
        submission: &VoteSubmission,
        context: &IntakeContext<'_>,
    ) -> Result<Vec<VoteRecord>, IntakeError> {
        let payload = match submission {
            VoteSubmission::Legacy(payload) => payload,
            VoteSubmission::Ranked(_) => {
                return Err(IntakeError::malformed(
                    "legacy strategy received a ranked submission",
                ))
            }
        };

        let menu = fetch_menu(context, &payload.menu)?;
        reject_if_already_voted(context, &voter)?;

        Ok(vec![VoteRecord::cast(
            voter,
            menu.id,
            menu.date,
            Rank::First,
            context.today,
        )])
    }
}

/// 2.0+ clients: exactly three distinct menus carrying the point
/// permutation {1,2,3}.
pub struct RankedStrategy;

impl RankedStrategy {
    fn check_shape(payload: &RankedPayload) -> Result<(), IntakeError> {
        if payload.votes.len() != 3 {
            return Err(IntakeError::malformed(format!(
                "expected exactly 3 votes, got {}",
                payload.votes.len()
            )));
        }

        let distinct: HashSet<MenuId> = payload.votes.iter().map(|v| v.menu).collect();
        if distinct.len() != 3 {
            return Err(IntakeError::malformed("votes must reference 3 different menus"));
        }

        let mut points: Vec<i64> = payload.votes.iter().map(|v| v.points).collect();
        points.sort_unstable();
        if points != [1, 2, 3] {
            return Err(IntakeError::malformed(
                "votes must assign points 1, 2, and 3 exactly once",
            ));
        }

        Ok(())
    }
}

impl SubmissionValidator for RankedStrategy {
    fn name(&self) -> &str {
        "ranked"
    }

    fn validate(
        &self,
        voter: VoterId,
        submission: &VoteSubmission,
        context: &IntakeContext<'_>,
    ) -> Result<Vec<VoteRecord>, IntakeError> {
        let payload = match submission {
            VoteSubmission::Ranked(payload) => payload,
            VoteSubmission::Legacy(_) => {
                return Err(IntakeError::malformed(
                    "ranked strategy received a legacy submission",
                ))
            }
        };

        Self::check_shape(payload)?;

        let mut records = Vec::with_capacity(payload.votes.len());
        for entry in &payload.votes {
            let menu = fetch_menu(context, &entry.menu)?;
            // Shape check guarantees points are in {1,2,3}.
            let rank = Rank::from_points(entry.points)
                .map_err(|e| IntakeError::malformed(e.to_string()))?;
            records.push(VoteRecord::cast(
                voter,
                menu.id,
                menu.date,
                rank,
                context.today,
            ));
        }

        reject_if_already_voted(context, &voter)?;

        Ok(records)
    }
}
