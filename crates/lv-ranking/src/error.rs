use thiserror::Error;

/// Errors produced while computing a tally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    #[error("directory error: {0}")]
    Directory(#[from] lv_menu::DirectoryError),

    #[error("ledger error: {0}")]
    Ledger(#[from] lv_ledger::LedgerError),
}
