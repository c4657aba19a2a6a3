//! Vote ledger for LunchVote.
//!
//! This crate is the heart of the voting engine. It provides:
//! - The immutable [`VoteRecord`] with its rank-to-points derivation
//! - The [`VoteLedger`] trait boundary consumed by intake and ranking
//! - [`InMemoryVoteLedger`] for tests, demos, and embedding
//!
//! The ledger enforces the write-time invariants the rest of the system
//! leans on: one voting session per voter per calendar day, and the
//! same-day rule (a vote may only target a menu dated the day the vote is
//! cast). A session's records are applied atomically: either every record
//! commits or none do.

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemoryVoteLedger;
pub use record::VoteRecord;
pub use traits::VoteLedger;
