//! Ranking aggregator for LunchVote.
//!
//! Computes the day's leaderboard from current ledger state: published
//! same-day menus joined against that day's votes, points summed per menu,
//! zero totals dropped, ordered by total (ties broken by menu id), and
//! truncated to a limit. The result distinguishes "no votes today" — a
//! normal state — from a populated board.
//!
//! Aggregation is read-only and idempotent; it never locks out writers,
//! and votes committed while a tally is running simply show up next call.

pub mod error;
pub mod tally;

pub use error::RankingError;
pub use tally::{LeaderboardRow, Limit, RankingAggregator, Tally};
