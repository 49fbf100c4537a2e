use std::path::PathBuf;
use weatherpro::{web, DashboardConfig, DashboardError, WeatherClient};

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load(config_path)?;
    log::debug!("Loaded {:?}", config);

    let client = WeatherClient::from_config(&config)?;
    let addr = config.socket_addr()?;
    web::run(addr, client, &config.default_city).await
}
