//! HTTP facade for LunchVote.
//!
//! Exposes vote submission and daily results over HTTP. The submit
//! endpoint negotiates the intake strategy from the `X-App-Version`
//! header, so legacy single-choice clients and ranked three-choice
//! clients share one URL. Wiring (auth provider, directory, ledger) is
//! injected through [`state::AppState`].

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AuthProvider, Credentials, Identity, Role, StaticTokenAuth};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{init_tracing, LunchVoteServer};
pub use state::AppState;
