use std::collections::HashMap;

use serde::Serialize;

use lv_ledger::VoteLedger;
use lv_menu::{Menu, MenuDirectory};
use lv_types::{CalendarDay, MenuId};

use crate::error::RankingError;

/// How many menus a leaderboard shows.
///
/// Defaults to 3. An unspecified or unparsable client-supplied value also
/// resolves to the default rather than an error — a bad `limit` query is
/// not worth failing a results page over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limit(usize);

impl Limit {
    pub const DEFAULT: Self = Self(3);

    pub fn new(limit: usize) -> Self {
        Self(limit)
    }

    /// Resolve an optional query parameter, falling back to the default.
    pub fn parse_or_default(param: Option<&str>) -> Self {
        param
            .and_then(|s| s.trim().parse::<usize>().ok())
            .map(Self)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One leaderboard entry: a menu (with its restaurant and items) and the
/// points it collected today. Produced by aggregation, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub menu: Menu,
    pub total_points: u32,
}

/// The day's voting result.
///
/// `NoVotes` is an expected state (nobody has voted yet), distinct from a
/// populated board and from errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tally {
    NoVotes,
    Ranked(Vec<LeaderboardRow>),
}

impl Tally {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoVotes)
    }

    /// The rows of a populated board; empty for `NoVotes`.
    pub fn rows(&self) -> &[LeaderboardRow] {
        match self {
            Self::NoVotes => &[],
            Self::Ranked(rows) => rows,
        }
    }
}

/// Deterministic tally builder over the directory and ledger boundaries.
pub struct RankingAggregator;

impl RankingAggregator {
    /// Compute the top menus for `day`.
    ///
    /// Order: descending `total_points`, ties broken by ascending menu id
    /// (UUID v7, so equal totals land in roughly publication order).
    pub fn top_menus(
        directory: &dyn MenuDirectory,
        ledger: &dyn VoteLedger,
        day: CalendarDay,
        limit: Limit,
    ) -> Result<Tally, RankingError> {
        let menus = directory.published_on(day)?;
        let votes = ledger.votes_on(day)?;

        let eligible: HashMap<MenuId, &Menu> = menus.iter().map(|m| (m.id, m)).collect();

        let mut totals: HashMap<MenuId, u32> = HashMap::new();
        for vote in &votes {
            // Only votes whose menu is published today count; the join
            // drops anything else.
            if eligible.contains_key(&vote.menu) {
                *totals.entry(vote.menu).or_insert(0) += vote.points();
            }
        }

        let mut rows: Vec<LeaderboardRow> = menus
            .iter()
            .filter_map(|menu| {
                totals.get(&menu.id).map(|&total_points| LeaderboardRow {
                    menu: menu.clone(),
                    total_points,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then(a.menu.id.cmp(&b.menu.id))
        });
        rows.truncate(limit.get());

        tracing::debug!(%day, rows = rows.len(), votes = votes.len(), "tally computed");

        if rows.is_empty() {
            Ok(Tally::NoVotes)
        } else {
            Ok(Tally::Ranked(rows))
        }
    }
}
