//! Foundation types for LunchVote.
//!
//! This crate provides the identity, calendar, and protocol types used
//! throughout the voting engine. Every other LunchVote crate depends on
//! `lv-types`.
//!
//! # Key Types
//!
//! - [`MenuId`], [`VoteId`], [`VoterId`], [`RestaurantId`] — Time-ordered UUID v7 identifiers
//! - [`CalendarDay`] — The calendar date a menu belongs to and votes are scoped by
//! - [`Rank`] — A voter's stated preference (1st/2nd/3rd) and its point value
//! - [`ClientVersion`] — Negotiated client capability signal from the request header

pub mod day;
pub mod error;
pub mod id;
pub mod rank;
pub mod version;

pub use day::CalendarDay;
pub use error::TypeError;
pub use id::{MenuId, RestaurantId, VoteId, VoterId};
pub use rank::Rank;
pub use version::ClientVersion;
