use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use harvex_types::explore::QueryId;
use harvex_types::records::RecordId;
use harvex_types::registry::{InstanceId, TemplateId};

use crate::actions;
use crate::actions::{
    CreateExploreQueryParams,
    ExecuteQueryParams,
    GetExploreQueryParams,
    GetResultParams,
    ListDataSourcesParams,
    UpdateQueryDataSourcesParams,
};
use crate::http::fragment;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DataSourceListParams {
    pub id_query: Option<String>,
}

/// Returns the data source selection for a query as an HTML fragment.
pub async fn get_data_source_list(
    State(state): State<AppState>,
    Query(params): Query<DataSourceListParams>,
) -> Response {
    let Some(id_query) = params.id_query else {
        return data_source_list_error(None);
    };
    let query_id = match QueryId::try_from(id_query.as_str()) {
        Ok(query_id) => query_id,
        Err(cause) => return data_source_list_error(Some(cause.to_string())),
    };

    match actions::list_data_sources(ListDataSourcesParams {
        resources_manager: Arc::clone(&state.resources_manager),
        query_id,
    }).await {
        Ok(rows) => Html(fragment::render_data_source_list(&rows)).into_response(),
        Err(cause) => data_source_list_error(Some(cause.to_string())),
    }
}

fn data_source_list_error(detail: Option<String>) -> Response {
    let message = match detail {
        Some(detail) => format!("Error during loading data sources from oaipmh search: {detail}"),
        None => String::from("Error during loading data sources from oaipmh search."),
    };
    (StatusCode::BAD_REQUEST, message).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DataSourceUpdateParams {
    pub id_query: Option<String>,
    pub id_instance: Option<String>,
    pub to_be_added: Option<String>,
}

/// Adds or removes one instance of the query's data source selection.
pub async fn update_data_source_list(
    State(state): State<AppState>,
    Query(params): Query<DataSourceUpdateParams>,
) -> Response {
    let Some(id_query) = params.id_query else {
        return data_source_update_error(None);
    };
    let query_id = match QueryId::try_from(id_query.as_str()) {
        Ok(query_id) => query_id,
        Err(cause) => return data_source_update_error(Some(cause.to_string())),
    };
    let instance_id = match params.id_instance.as_deref().map(InstanceId::try_from) {
        Some(Ok(instance_id)) => instance_id,
        Some(Err(cause)) => return data_source_update_error(Some(cause.to_string())),
        None => return data_source_update_error(Some(String::from("No instance id given."))),
    };
    let to_be_added = match params.to_be_added.as_deref() {
        Some("true") => true,
        Some("false") | None => false,
        Some(other) => return data_source_update_error(Some(format!("Illegal value for to_be_added: {other}"))),
    };

    match actions::update_query_data_sources(UpdateQueryDataSourcesParams {
        resources_manager: Arc::clone(&state.resources_manager),
        query_id,
        instance_id,
        to_be_added,
        execute_query_url: Clone::clone(&state.execute_query_url),
    }).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(cause) => data_source_update_error(Some(cause.to_string())),
    }
}

fn data_source_update_error(detail: Option<String>) -> Response {
    let message = match detail {
        Some(detail) => format!("Error during data source selection: {detail}"),
        None => String::from("Error during data source selection."),
    };
    (StatusCode::BAD_REQUEST, message).into_response()
}

pub async fn create_query(State(state): State<AppState>) -> Response {
    match actions::create_explore_query(CreateExploreQueryParams {
        resources_manager: Arc::clone(&state.resources_manager),
    }).await {
        Ok(query) => Json(query).into_response(),
        Err(cause) => (StatusCode::INTERNAL_SERVER_ERROR, cause.to_string()).into_response(),
    }
}

pub async fn get_query(
    State(state): State<AppState>,
    Path(query_id): Path<String>,
) -> Response {
    let query_id = match QueryId::try_from(query_id.as_str()) {
        Ok(query_id) => query_id,
        Err(cause) => return (StatusCode::BAD_REQUEST, cause.to_string()).into_response(),
    };

    match actions::get_explore_query(GetExploreQueryParams {
        resources_manager: Arc::clone(&state.resources_manager),
        query_id,
    }).await {
        Ok(query) => Json(query).into_response(),
        Err(cause) => (StatusCode::NOT_FOUND, cause.to_string()).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ExecuteQueryForm {
    pub query: Option<String>,
    pub options: Option<String>,
    pub templates: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryOptionsPayload {
    instance_id: InstanceId,
}

#[derive(Debug, Deserialize)]
struct TemplateRef {
    id: TemplateId,
}

/// Runs a filter document against the records of one instance.
pub async fn execute_query(
    State(state): State<AppState>,
    Form(form): Form<ExecuteQueryForm>,
) -> Response {
    let Some(query) = form.query else {
        return (StatusCode::BAD_REQUEST, "Query should be passed in parameter").into_response();
    };
    let Some(options) = form.options else {
        return (StatusCode::BAD_REQUEST, "Missing instance information.").into_response();
    };
    let instance_id = match serde_json::from_str::<QueryOptionsPayload>(&options) {
        Ok(options) => options.instance_id,
        Err(cause) => return execute_query_error(cause.to_string()),
    };
    let template_ids = match form.templates.as_deref() {
        Some(templates) => match serde_json::from_str::<Vec<TemplateRef>>(templates) {
            Ok(templates) if templates.is_empty() => None,
            Ok(templates) => Some(templates.into_iter().map(|template| template.id).collect::<Vec<_>>()),
            Err(cause) => return execute_query_error(cause.to_string()),
        },
        None => None,
    };

    match actions::execute_query(ExecuteQueryParams {
        resources_manager: Arc::clone(&state.resources_manager),
        query,
        instance_id,
        template_ids,
    }).await {
        Ok(results) => Json(results).into_response(),
        Err(cause) => execute_query_error(cause.to_string()),
    }
}

fn execute_query_error(detail: String) -> Response {
    let message = format!("An error occurred when attempting to execute the query: {detail}");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": message }))).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ResultParams {
    pub id: Option<String>,
}

/// Returns the stored content of a single record.
pub async fn get_result(
    State(state): State<AppState>,
    Query(params): Query<ResultParams>,
) -> Response {
    let Some(id) = params.id else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Data id is missing" }))).into_response();
    };
    let record_id = match RecordId::try_from(id.as_str()) {
        Ok(record_id) => record_id,
        Err(cause) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": cause.to_string() }))).into_response();
        }
    };

    match actions::get_result(GetResultParams {
        resources_manager: Arc::clone(&state.resources_manager),
        record_id,
    }).await {
        Ok(result) => Json(result).into_response(),
        Err(cause) => (StatusCode::NOT_FOUND, Json(json!({ "message": cause.to_string() }))).into_response(),
    }
}
