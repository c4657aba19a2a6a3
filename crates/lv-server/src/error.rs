use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use lv_intake::IntakeError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("intake error: {0}")]
    Intake(#[from] IntakeError),

    #[error("ranking error: {0}")]
    Ranking(#[from] lv_ranking::RankingError),

    #[error("directory error: {0}")]
    Directory(#[from] lv_menu::DirectoryError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Machine-readable kind both client generations branch on.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthFailed(_) => "auth_failed",
            Self::Forbidden(_) => "forbidden",
            Self::Intake(e) => e.kind(),
            Self::Ranking(_) | Self::Directory(_) | Self::Io(_) | Self::Internal(_) => "internal",
            Self::Config(_) => "config",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::AuthFailed(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Intake(IntakeError::AlreadyVoted) => StatusCode::CONFLICT,
            Self::Intake(IntakeError::MalformedSubmission { .. })
            | Self::Intake(IntakeError::InvalidMenuReference { .. }) => StatusCode::BAD_REQUEST,
            Self::Intake(IntakeError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Ranking(_)
            | Self::Directory(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
            "error_kind": self.kind(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_voted_is_a_conflict() {
        let error = ServerError::from(IntakeError::AlreadyVoted);
        assert_eq!(error.status(), StatusCode::CONFLICT);
        assert_eq!(error.kind(), "already_voted");
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        assert_eq!(
            ServerError::from(IntakeError::malformed("count")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(IntakeError::invalid_menu("gone")).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn persistence_is_a_server_error() {
        let error = ServerError::from(IntakeError::Persistence("disk".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.kind(), "persistence");
    }
}
