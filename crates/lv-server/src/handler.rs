use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use lv_ranking::{Limit, RankingAggregator, Tally};
use lv_types::{CalendarDay, ClientVersion};

use crate::auth::{Credentials, Identity};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Header carrying the client capability signal.
pub const APP_VERSION_HEADER: &str = "x-app-version";

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    pub limit: Option<String>,
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": "lv-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Submit a vote for today's menus.
pub async fn submit_vote_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> ServerResult<Response> {
    let identity = authenticate(&state, &headers).await?;
    require_employee(&identity)?;

    let version = client_version(&headers)?;
    let today = CalendarDay::today_utc();
    state.intake.submit(identity.id, version, &body, today)?;

    Ok(success(
        StatusCode::CREATED,
        "Vote submitted successfully",
        Value::Null,
    ))
}

/// Today's leaderboard.
pub async fn vote_results_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ResultsQuery>,
) -> ServerResult<Response> {
    let identity = authenticate(&state, &headers).await?;
    require_employee(&identity)?;

    let limit = query
        .limit
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .map(Limit::new)
        .unwrap_or(Limit::new(state.config.default_results_limit));

    let today = CalendarDay::today_utc();
    let tally = RankingAggregator::top_menus(
        state.directory.as_ref(),
        state.ledger.as_ref(),
        today,
        limit,
    )?;

    match tally {
        Tally::NoVotes => Ok(success(
            StatusCode::NOT_FOUND,
            "No voting results available for today.",
            Value::Null,
        )),
        Tally::Ranked(rows) => Ok(success(
            StatusCode::OK,
            "Voting results fetched successfully",
            serde_json::to_value(rows).map_err(|e| ServerError::Internal(e.to_string()))?,
        )),
    }
}

/// Menus published for today.
pub async fn menus_today_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    authenticate(&state, &headers).await?;

    let today = CalendarDay::today_utc();
    let menus = state.directory.published_on(today)?;
    Ok(success(
        StatusCode::OK,
        "Menus fetched successfully",
        serde_json::to_value(menus).map_err(|e| ServerError::Internal(e.to_string()))?,
    ))
}

async fn authenticate(state: &AppState, headers: &HeaderMap) -> ServerResult<Identity> {
    let credentials = match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) => match value.strip_prefix("Bearer ") {
            Some(token) => Credentials::Bearer(token.to_string()),
            None => {
                return Err(ServerError::AuthFailed(
                    "expected a bearer token".into(),
                ))
            }
        },
        None => Credentials::Anonymous,
    };
    state.auth.authenticate(&credentials).await
}

fn require_employee(identity: &Identity) -> ServerResult<()> {
    if !identity.is_employee() {
        return Err(ServerError::Forbidden(
            "only employees may vote or view results".into(),
        ));
    }
    Ok(())
}

fn client_version(headers: &HeaderMap) -> ServerResult<ClientVersion> {
    let raw = headers
        .get(APP_VERSION_HEADER)
        .and_then(|value| value.to_str().ok());
    ClientVersion::from_header(raw)
        .map_err(|e| ServerError::Intake(lv_intake::IntakeError::malformed(e.to_string())))
}

fn success(status: StatusCode, message: &str, data: Value) -> Response {
    let body = Json(json!({
        "success": true,
        "message": message,
        "data": data,
    }));
    (status, body).into_response()
}
