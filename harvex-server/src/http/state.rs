use serde::Serialize;
use url::Url;

use crate::resources::manager::ResourcesManagerRef;

#[derive(Clone)]
pub struct AppState {
    pub resources_manager: ResourcesManagerRef,
    pub ui_config: UiConfig,
    pub execute_query_url: Url,
}

/// Configuration handed to the browser UI on startup.
#[derive(Clone, Debug, Serialize)]
pub struct UiConfig {
    pub server_url: Url,
}
