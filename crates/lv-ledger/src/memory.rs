use std::collections::HashSet;
use std::sync::RwLock;

use lv_types::{CalendarDay, VoterId};

use crate::error::LedgerError;
use crate::record::VoteRecord;
use crate::traits::VoteLedger;

/// In-memory vote ledger for tests, local demos, and embedding.
///
/// A single write lock serializes session appends, so the classic
/// check-then-act race between two submissions from the same voter resolves
/// at commit time: the second writer finds the (voter, day) session key
/// taken and fails with [`LedgerError::AlreadyVoted`].
pub struct InMemoryVoteLedger {
    inner: RwLock<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    votes: Vec<VoteRecord>,
    // Commit-time uniqueness constraint on (voter, cast day).
    sessions: HashSet<(VoterId, CalendarDay)>,
}

impl InMemoryVoteLedger {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Total number of records across all days.
    pub fn len(&self) -> usize {
        self.inner.read().map(|state| state.votes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate_session(
        state: &LedgerState,
        records: &[VoteRecord],
    ) -> Result<(VoterId, CalendarDay), LedgerError> {
        let first = records.first().ok_or(LedgerError::EmptySession)?;
        let voter = first.voter;
        let day = first.cast_on;

        if records
            .iter()
            .any(|r| r.voter != voter || r.cast_on != day)
        {
            return Err(LedgerError::MixedSession);
        }

        // Same-day rule, per record. One violation rejects the batch.
        for record in records {
            if !record.is_same_day() {
                return Err(LedgerError::WrongDayMenu {
                    menu: record.menu,
                    menu_date: record.menu_date,
                    cast_on: record.cast_on,
                });
            }
        }

        if state.sessions.contains(&(voter, day)) {
            return Err(LedgerError::AlreadyVoted { voter, day });
        }

        Ok((voter, day))
    }
}

impl Default for InMemoryVoteLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteLedger for InMemoryVoteLedger {
    fn has_voted_on(&self, voter: &VoterId, day: CalendarDay) -> Result<bool, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;
        Ok(state.sessions.contains(&(*voter, day)))
    }

    fn append_session(&self, records: &[VoteRecord]) -> Result<(), LedgerError> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| LedgerError::Storage("ledger write lock poisoned".into()))?;

        // Validate everything before touching state: the batch commits
        // whole or not at all.
        let (voter, day) = Self::validate_session(&state, records)?;

        state.votes.extend_from_slice(records);
        state.sessions.insert((voter, day));
        tracing::info!(
            voter = %voter.short_id(),
            %day,
            count = records.len(),
            "vote session recorded"
        );
        Ok(())
    }

    fn votes_on(&self, day: CalendarDay) -> Result<Vec<VoteRecord>, LedgerError> {
        let state = self
            .inner
            .read()
            .map_err(|_| LedgerError::Storage("ledger read lock poisoned".into()))?;
        Ok(state
            .votes
            .iter()
            .filter(|record| record.cast_on == day)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use lv_types::{MenuId, Rank};

    use super::*;

    fn day() -> CalendarDay {
        CalendarDay::from_ymd(2024, 6, 14).unwrap()
    }

    fn record(voter: VoterId, rank: Rank) -> VoteRecord {
        VoteRecord::cast(voter, MenuId::new(), day(), rank, day())
    }

    fn ranked_session(voter: VoterId) -> Vec<VoteRecord> {
        vec![
            record(voter, Rank::First),
            record(voter, Rank::Second),
            record(voter, Rank::Third),
        ]
    }

    #[test]
    fn append_and_read_back() {
        let ledger = InMemoryVoteLedger::new();
        let voter = VoterId::new();

        ledger.append_session(&ranked_session(voter)).unwrap();

        let votes = ledger.votes_on(day()).unwrap();
        assert_eq!(votes.len(), 3);
        assert!(ledger.votes_on(day().succ()).unwrap().is_empty());
        assert!(ledger.has_voted_on(&voter, day()).unwrap());
        assert!(!ledger.has_voted_on(&voter, day().succ()).unwrap());
    }

    #[test]
    fn second_session_same_day_is_rejected() {
        let ledger = InMemoryVoteLedger::new();
        let voter = VoterId::new();

        ledger
            .append_session(&[record(voter, Rank::First)])
            .unwrap();
        let error = ledger
            .append_session(&[record(voter, Rank::First)])
            .unwrap_err();

        assert_eq!(error, LedgerError::AlreadyVoted { voter, day: day() });
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn next_day_is_a_fresh_session() {
        let ledger = InMemoryVoteLedger::new();
        let voter = VoterId::new();

        ledger
            .append_session(&[record(voter, Rank::First)])
            .unwrap();

        let tomorrow = day().succ();
        let next = VoteRecord::cast(voter, MenuId::new(), tomorrow, Rank::First, tomorrow);
        ledger.append_session(&[next]).unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn wrong_day_menu_rejects_whole_batch() {
        let ledger = InMemoryVoteLedger::new();
        let voter = VoterId::new();

        let stale_menu = MenuId::new();
        let mut session = ranked_session(voter);
        session[1] = VoteRecord::cast(voter, stale_menu, day().succ(), Rank::Second, day());

        let error = ledger.append_session(&session).unwrap_err();
        assert_eq!(
            error,
            LedgerError::WrongDayMenu {
                menu: stale_menu,
                menu_date: day().succ(),
                cast_on: day(),
            }
        );

        // Nothing committed, and the voter can still vote today.
        assert!(ledger.is_empty());
        assert!(!ledger.has_voted_on(&voter, day()).unwrap());
    }

    #[test]
    fn empty_and_mixed_sessions_are_rejected() {
        let ledger = InMemoryVoteLedger::new();

        assert_eq!(
            ledger.append_session(&[]).unwrap_err(),
            LedgerError::EmptySession
        );

        let mixed = vec![
            record(VoterId::new(), Rank::First),
            record(VoterId::new(), Rank::Second),
        ];
        assert_eq!(
            ledger.append_session(&mixed).unwrap_err(),
            LedgerError::MixedSession
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn concurrent_submissions_one_wins() {
        let ledger = Arc::new(InMemoryVoteLedger::new());
        let voter = VoterId::new();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                let barrier = Arc::clone(&barrier);
                let session = ranked_session(voter);
                thread::spawn(move || {
                    barrier.wait();
                    ledger.append_session(&session)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let wins = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(LedgerError::AlreadyVoted { .. })))
            .count();

        assert_eq!(wins, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn votes_on_returns_snapshot() {
        let ledger = InMemoryVoteLedger::new();
        let voter = VoterId::new();
        ledger
            .append_session(&[record(voter, Rank::First)])
            .unwrap();

        let snapshot = ledger.votes_on(day()).unwrap();
        ledger
            .append_session(&ranked_session(VoterId::new()))
            .unwrap();

        // The earlier snapshot is unaffected by later commits.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.votes_on(day()).unwrap().len(), 4);
    }
}
