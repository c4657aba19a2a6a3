//! Vote intake protocol for LunchVote.
//!
//! A submission request carries a client version header, a voter identity,
//! and a raw JSON body. The version picks the validation strategy *before*
//! the body is interpreted: clients below 2.0 send a single-choice payload
//! (implicitly a first-choice vote), newer clients send exactly three
//! ranked `{menu, points}` entries. Both strategies validate against the
//! menu directory and the vote ledger, then persist the whole session
//! atomically — a ranked submission never leaves one or two of its three
//! records behind.

pub mod error;
pub mod intake;
pub mod strategy;
pub mod submission;

pub use error::IntakeError;
pub use intake::VoteIntake;
pub use strategy::{strategy_for, IntakeContext, LegacyStrategy, RankedStrategy, SubmissionValidator};
pub use submission::{LegacyPayload, RankedEntry, RankedPayload, VoteSubmission};
