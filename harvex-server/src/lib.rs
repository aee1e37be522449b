use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use url::Url;

use harvex_util::project;
use harvex_util::settings::LoadedConfig;

use crate::http::state::{AppState, UiConfig};
use crate::resources::manager::ResourcesManager;

pub mod actions;
pub mod http;
mod query;
pub mod resources;
mod seed;
pub mod settings;

pub async fn create(settings: LoadedConfig) -> Result<()> {
    info!("Started with configuration: {settings:?}");

    let address: SocketAddr = {
        let host = settings.config.get_string("network.bind.host")?;
        let port = settings.config.get_int("network.bind.port")?;
        SocketAddr::from_str(&format!("{host}:{port}"))?
    };

    let server_url = Url::parse(&settings.config.get_string("network.remote.url")?)
        .context("Configured value for 'network.remote.url' should be a valid URL.")?;
    let execute_query_url = server_url.join("api/explore/execute-query")?;

    let ui_directory = project::make_path_absolute(settings.config.get_string("serve.ui.directory")?)?;

    let resources_manager = ResourcesManager::new();

    if settings.config.get_bool("seed.demo").unwrap_or(false) {
        seed::demo_data(Arc::clone(&resources_manager)).await?;
    }

    let app_state = AppState {
        resources_manager,
        ui_config: UiConfig { server_url },
        execute_query_url,
    };

    let router = http::create_router(app_state, Some(ui_directory));

    info!("Server listening at {address}...");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
