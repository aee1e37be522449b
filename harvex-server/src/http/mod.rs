use std::path::PathBuf;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::http::state::AppState;

pub mod fragment;
pub mod router;
pub mod state;

/// Builds the HTTP service. When a UI directory is given, unmatched paths
/// fall back to the bundled single-page app.
pub fn create_router(app_state: AppState, ui_directory: Option<PathBuf>) -> Router {

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/explore/queries", post(router::explore::create_query))
        .route("/api/explore/queries/:query_id", get(router::explore::get_query))
        .route("/api/explore/data-sources", get(router::explore::get_data_source_list))
        .route("/api/explore/data-sources/update", get(router::explore::update_data_source_list))
        .route("/api/explore/execute-query", post(router::explore::execute_query))
        .route("/api/explore/result", get(router::explore::get_result))
        .route("/api/registry/instances", put(router::registry::store_instance).get(router::registry::list_instances))
        .route("/api/ui/config", get(router::ui_config))
        .layer(cors);

    let router = match ui_directory {
        Some(ui_directory) => {
            let index_html = ui_directory.join("index.html");
            router.fallback_service(
                ServeDir::new(&ui_directory)
                    .fallback(ServeFile::new(index_html))
            )
        }
        None => router,
    };

    router.with_state(app_state)
}
