use harvex_util::logging;

const BANNER: &str = r"
  _    _
 | |  | |
 | |__| | __ _ _ ____   _______  __
 |  __  |/ _` | '__\ \ / / _ \ \/ /
 | |  | | (_| | |   \ V /  __/>  <
 |_|  |_|\__,_|_|    \_/ \___/_/\_\

       - Explore the Harvest -";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("{BANNER}");
    println!("  Version: {}\n", env!("CARGO_PKG_VERSION"));

    logging::initialize()?;

    let settings = harvex_server::settings::load_with_overrides(config::Config::default())?;

    harvex_server::create(settings).await
}
