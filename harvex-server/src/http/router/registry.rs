use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use harvex_types::records::Record;
use harvex_types::registry::{Instance, MetadataFormat, Template};

use crate::actions;
use crate::actions::{ListActivatedInstancesParams, StoreInstanceParams};
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreInstanceRequest {
    pub instance: Instance,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub metadata_formats: Vec<MetadataFormat>,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Registers an instance together with the resources harvested from it.
pub async fn store_instance(
    State(state): State<AppState>,
    Json(request): Json<StoreInstanceRequest>,
) -> Response {
    match actions::store_instance(StoreInstanceParams {
        resources_manager: Arc::clone(&state.resources_manager),
        instance: request.instance,
        metadata_formats: request.metadata_formats,
        templates: request.templates,
        records: request.records,
    }).await {
        Ok(instance_id) => Json(instance_id).into_response(),
        Err(cause) => (StatusCode::INTERNAL_SERVER_ERROR, cause.to_string()).into_response(),
    }
}

pub async fn list_instances(State(state): State<AppState>) -> Response {
    match actions::list_activated_instances(ListActivatedInstancesParams {
        resources_manager: Arc::clone(&state.resources_manager),
    }).await {
        Ok(instances) => Json(instances).into_response(),
        Err(cause) => (StatusCode::INTERNAL_SERVER_ERROR, cause.to_string()).into_response(),
    }
}
