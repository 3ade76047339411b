#![allow(dead_code)]

use alias_directory::api::handlers::health_handler;
use alias_directory::api::routes::directory_routes;
use alias_directory::application::gate::WriterPreferenceGate;
use alias_directory::infrastructure::memory::BTreeMapStore;
use alias_directory::state::AppState;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

/// State over a directory pre-populated with `aliases`, each targeting
/// `https://example.com/{alias}`.
pub fn create_test_state(aliases: &[&str]) -> AppState {
    let store: BTreeMapStore = aliases
        .iter()
        .map(|alias| (*alias, target_for(alias)))
        .collect();

    AppState::new(Arc::new(WriterPreferenceGate::new(store)))
}

pub fn target_for(alias: &str) -> String {
    format!("https://example.com/{alias}")
}

/// Router with every endpoint, without the path normalization wrapper.
pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .merge(directory_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server(aliases: &[&str]) -> TestServer {
    TestServer::new(create_test_router(create_test_state(aliases))).unwrap()
}
