use std::time::Duration;

use anyhow::{anyhow, ensure};
use tokio::time::sleep;
use url::Url;

use harvex_types::explore::ExploreQuery;
use harvex_util::settings::LoadedConfig;

/// Boots a server on a free port and waits until it accepts requests.
pub async fn spawn_server() -> anyhow::Result<Url> {
    let port = select_free_port();
    let server_config = load_server_config(port)?;

    tokio::spawn(async {
        harvex_server::create(server_config).await
            .expect("Server crashed")
    });

    let server_url = Url::parse(&format!("http://localhost:{port}/"))?;
    await_started(&server_url).await?;

    Ok(server_url)
}

fn load_server_config(port: u16) -> anyhow::Result<LoadedConfig> {
    let overrides = config::Config::builder()
        .set_override("network.bind.host", "127.0.0.1")?
        .set_override("network.bind.port", port)?
        .set_override("network.remote.url", format!("http://localhost:{port}/"))?
        // Tests seed their own instances over the registry API.
        .set_override("seed.demo", false)?
        .build()?;

    Ok(harvex_server::settings::load_with_overrides(overrides)?)
}

pub async fn create_query(server_url: &Url) -> anyhow::Result<ExploreQuery> {
    let url = server_url.join("api/explore/queries")?;

    let response = reqwest::Client::new().post(url).send().await?;
    ensure!(response.status().is_success(), "Creating the query failed with status {}.", response.status());

    Ok(response.json::<ExploreQuery>().await?)
}

async fn await_started(server_url: &Url) -> anyhow::Result<()> {
    let config_url = server_url.join("api/ui/config")?;

    for _ in 0..50 {
        if reqwest::get(Clone::clone(&config_url)).await.is_ok() {
            return Ok(());
        }
        sleep(Duration::from_millis(100)).await;
    }

    Err(anyhow!("Server did not come up at {server_url}."))
}

fn select_free_port() -> u16 {
    let socket = std::net::TcpListener::bind("localhost:0").unwrap(); // Port 0 requests a free port from the operating system
    socket.local_addr().unwrap().port()
    // The socket is dropped here, which releases the port for the server.
}
