use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lv_types::{CalendarDay, MenuId, Rank, VoteId, VoterId};

/// One immutable vote: a voter ranked one menu on one calendar day.
///
/// Records are created exclusively by the intake protocol and never mutated
/// or deleted. `menu_date` is the target menu's own date, captured at
/// creation so the ledger can enforce the same-day rule without reaching
/// back into the directory. `cast_on` is the calendar day the session is
/// scoped by; it is supplied by the caller (the request boundary resolves
/// it once), which keeps the engine free of ambient clock reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub id: VoteId,
    pub voter: VoterId,
    pub menu: MenuId,
    pub menu_date: CalendarDay,
    pub rank: Rank,
    pub cast_on: CalendarDay,
    pub created_at: DateTime<Utc>,
}

impl VoteRecord {
    /// Create a record for a vote cast on `cast_on`.
    pub fn cast(
        voter: VoterId,
        menu: MenuId,
        menu_date: CalendarDay,
        rank: Rank,
        cast_on: CalendarDay,
    ) -> Self {
        Self {
            id: VoteId::new(),
            voter,
            menu,
            menu_date,
            rank,
            cast_on,
            created_at: Utc::now(),
        }
    }

    /// Points this vote contributes to its menu's daily total (3, 2, or 1).
    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    /// Whether the target menu is dated the day the vote was cast.
    pub fn is_same_day(&self) -> bool {
        self.menu_date == self.cast_on
    }
}
