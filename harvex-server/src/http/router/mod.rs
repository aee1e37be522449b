use axum::extract::State;
use axum::Json;

use crate::http::state::{AppState, UiConfig};

pub mod explore;
pub mod registry;

pub async fn ui_config(State(state): State<AppState>) -> Json<UiConfig> {
    Json(Clone::clone(&state.ui_config))
}
