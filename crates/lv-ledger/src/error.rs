use lv_types::{CalendarDay, MenuId, VoterId};

/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("voter {voter} already has a vote recorded for {day}")]
    AlreadyVoted { voter: VoterId, day: CalendarDay },

    #[error("menu {menu} is dated {menu_date}; votes cast on {cast_on} may only target same-day menus")]
    WrongDayMenu {
        menu: MenuId,
        menu_date: CalendarDay,
        cast_on: CalendarDay,
    },

    #[error("vote session is empty")]
    EmptySession,

    #[error("vote session mixes voters or cast days")]
    MixedSession,

    #[error("ledger storage error: {0}")]
    Storage(String),
}
