//! # lookup-api
//!
//! REST API server built with Axum framework.
//!
//! Every lookup entity kind is served by the same generic handlers; a kind is
//! wired in by mounting [`routes::lookup_routes`] with its service and the
//! request key that carries its value.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::{AppState, LookupEndpoint};
