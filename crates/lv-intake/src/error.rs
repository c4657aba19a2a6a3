use lv_ledger::LedgerError;
use lv_menu::DirectoryError;
use thiserror::Error;

/// Rejection taxonomy for vote submissions.
///
/// Every variant carries a stable machine-readable kind so that both
/// client generations can branch on it without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The voter already has a voting session recorded for today.
    #[error("you have already voted today")]
    AlreadyVoted,

    /// A referenced menu does not exist or is not dated today.
    #[error("invalid menu reference: {reason}")]
    InvalidMenuReference { reason: String },

    /// The submission body violates the protocol shape or point rules.
    #[error("malformed submission: {reason}")]
    MalformedSubmission { reason: String },

    /// The ledger could not durably record the session.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl IntakeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSubmission {
            reason: reason.into(),
        }
    }

    pub fn invalid_menu(reason: impl Into<String>) -> Self {
        Self::InvalidMenuReference {
            reason: reason.into(),
        }
    }

    /// Stable error kind for clients to branch on.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyVoted => "already_voted",
            Self::InvalidMenuReference { .. } => "invalid_menu",
            Self::MalformedSubmission { .. } => "malformed_submission",
            Self::Persistence(_) => "persistence",
        }
    }

    /// Only infrastructure failures are worth retrying; a retry after
    /// `already_voted` would be incorrect.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<LedgerError> for IntakeError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::AlreadyVoted { .. } => Self::AlreadyVoted,
            LedgerError::WrongDayMenu {
                menu, menu_date, ..
            } => Self::invalid_menu(format!("menu {menu} is dated {menu_date}, not today")),
            LedgerError::EmptySession | LedgerError::MixedSession => {
                Self::malformed(error.to_string())
            }
            LedgerError::Storage(reason) => Self::Persistence(reason),
        }
    }
}

impl From<DirectoryError> for IntakeError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::MenuNotFound(id) => Self::invalid_menu(format!("unknown menu {id}")),
            DirectoryError::Storage(reason) => Self::Persistence(reason),
            DirectoryError::DuplicateMenu { .. } => Self::Persistence(error.to_string()),
        }
    }
}
