use lv_types::{CalendarDay, VoterId};

use crate::error::LedgerError;
use crate::record::VoteRecord;

/// Storage boundary for vote records.
///
/// All implementations must satisfy these invariants:
/// - Records are immutable once appended; there is no update or delete.
/// - `append_session` is atomic: either every record in the batch is
///   durably recorded or none are.
/// - Session uniqueness on (voter, cast day) is enforced at commit time,
///   not just by caller-side pre-checks, so concurrent submissions from
///   the same voter cannot both succeed.
/// - The same-day rule (`menu_date == cast_on`) is checked per record at
///   the point of creation; one violation rejects the whole batch.
pub trait VoteLedger: Send + Sync {
    /// Whether the voter already has any vote recorded for the given day.
    ///
    /// Callers use this as a fast pre-check; the commit-time constraint in
    /// `append_session` remains the source of truth.
    fn has_voted_on(&self, voter: &VoterId, day: CalendarDay) -> Result<bool, LedgerError>;

    /// Atomically append one voting session (one or three records).
    fn append_session(&self, records: &[VoteRecord]) -> Result<(), LedgerError>;

    /// Snapshot of all votes cast on the given day.
    ///
    /// The sequence is finite and owned by the caller; each call takes a
    /// fresh snapshot, so votes committed afterwards are not reflected.
    fn votes_on(&self, day: CalendarDay) -> Result<Vec<VoteRecord>, LedgerError>;
}
