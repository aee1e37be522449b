use gloo_net::http;
use serde_json::json;
use url::Url;

use harvex_types::explore::{ExploreQuery, QueryResult, ResultContent};
use harvex_types::registry::InstanceId;

#[derive(thiserror::Error, Debug, Clone)]
pub enum ApiError {

    #[error("{message}")]
    HttpError {
        message: String,
    },

    #[error("{message}")]
    JsonParseError {
        message: String,
    },
}

/// Creates a fresh stored query for an exploration session.
pub async fn create_explore_query(server_url: &Url) -> Result<ExploreQuery, ApiError> {

    log::debug!("Creating an explore query.");

    let url = server_url.join("api/explore/queries")
        .map_err(|cause| ApiError::HttpError {
            message: format!("Failed to build the query creation URL due to: {}", cause),
        })?;

    http::Request::post(url.as_str())
        .send().await
        .map_err(|cause| ApiError::HttpError {
            message: format!("Failed to create an explore query due to: {}", cause),
        })?
        .json::<ExploreQuery>().await
        .map_err(|cause| ApiError::JsonParseError {
            message: format!("Failed to parse the created explore query due to: {}", cause),
        })
}

/// Runs the keyword filter against every given instance and merges the
/// answers, in the order the instances were given. An empty keyword matches
/// every record of an instance.
pub async fn execute_query(server_url: &Url, keyword: &str, instances: &[InstanceId]) -> Result<Vec<QueryResult>, ApiError> {

    log::debug!("Executing a query against {} instances.", instances.len());

    let url = server_url.join("api/explore/execute-query")
        .map_err(|cause| ApiError::HttpError {
            message: format!("Failed to build the execute-query URL due to: {}", cause),
        })?;

    let keyword = keyword.trim();
    let query = if keyword.is_empty() {
        String::from("{}")
    } else {
        json!({ "dc.subject": keyword }).to_string()
    };

    let mut merged = Vec::new();
    for instance_id in instances {
        let options = json!({ "instance_id": instance_id }).to_string();
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", &query)
            .append_pair("options", &options)
            .finish();

        let response = http::Request::post(url.as_str())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|cause| ApiError::HttpError {
                message: format!("Failed to build the execute-query request due to: {}", cause),
            })?
            .send().await
            .map_err(|cause| ApiError::HttpError {
                message: format!("Failed to execute the query due to: {}", cause),
            })?;

        if !response.ok() {
            return Err(ApiError::HttpError { message: failure_message(response).await });
        }

        let results = response.json::<Vec<QueryResult>>().await
            .map_err(|cause| ApiError::JsonParseError {
                message: format!("Failed to parse the query results due to: {}", cause),
            })?;
        merged.extend(results);
    }

    Ok(merged)
}

/// Fetches the stored content of a single record.
pub async fn get_result(server_url: &Url, record_id: &str) -> Result<ResultContent, ApiError> {

    let mut url = server_url.join("api/explore/result")
        .map_err(|cause| ApiError::HttpError {
            message: format!("Failed to build the result URL due to: {}", cause),
        })?;
    url.query_pairs_mut().append_pair("id", record_id);

    let response = http::Request::get(url.as_str())
        .send().await
        .map_err(|cause| ApiError::HttpError {
            message: format!("Failed to fetch the record due to: {}", cause),
        })?;

    if !response.ok() {
        return Err(ApiError::HttpError { message: failure_message(response).await });
    }

    response.json::<ResultContent>().await
        .map_err(|cause| ApiError::JsonParseError {
            message: format!("Failed to parse the record due to: {}", cause),
        })
}

/// Error answers carry a JSON object with a `message` field where available,
/// plain text otherwise.
async fn failure_message(response: http::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body).ok()
        .and_then(|value| value.get("message").and_then(|message| message.as_str()).map(String::from))
        .unwrap_or(body)
}
