use gloo_net::http;
use leptos::*;
use log::info;
use serde::Deserialize;
use url::Url;

use crate::routing::Routes;

/// Configuration the server hands out on startup.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_url: Url,
}

#[derive(Clone, Debug)]
pub struct AppGlobals {
    pub config: AppConfig,
}

#[derive(thiserror::Error, Clone, Debug)]
#[error("{message}")]
pub struct AppGlobalsError {
    pub message: String,
}

pub fn use_app_globals() -> Resource<(), Result<AppGlobals, AppGlobalsError>> {
    use_context::<Resource<(), Result<AppGlobals, AppGlobalsError>>>()
        .expect("The AppGlobals should be provided in the context.")
}

#[component]
pub fn App() -> impl IntoView {

    let globals: Resource<(), Result<AppGlobals, AppGlobalsError>> = create_local_resource(|| {}, |_| async move {
        let config = http::Request::get("/api/ui/config")
            .send().await
            .map_err(|_| AppGlobalsError { message: String::from("Could not fetch configuration!") })?
            .json::<AppConfig>().await
            .map_err(|_| AppGlobalsError { message: String::from("Could not parse configuration!") })?;

        info!("Configuration: {config:?}");

        Ok(AppGlobals { config })
    });

    provide_context(globals);

    view! {
        <div class="container">
            <Routes />
        </div>
    }
}

pub trait ExpectGlobals {
    fn expect_config(&self) -> AppConfig;
}

impl ExpectGlobals for Resource<(), Result<AppGlobals, AppGlobalsError>> {

    fn expect_config(&self) -> AppConfig {
        self.get()
            .expect("AppGlobals should be loaded to get the config")
            .expect("AppGlobals should be loaded successfully to get the config")
            .config
    }
}
