//! Seed API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    pub message: String,
    /// Records now in the store
    pub count: u64,
}

/// GET /api/initialize-database - Replace all records with the seed document
pub async fn initialize_database(
    State(state): State<ServerState>,
) -> AppResult<Json<InitializeResponse>> {
    let count = state.seed_loader.load(state.store()).await?;
    Ok(Json(InitializeResponse {
        message: "Database initialized successfully".to_string(),
        count,
    }))
}
