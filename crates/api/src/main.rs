use anyhow::Context;

use showroom_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    showroom_observability::init(config.log_format);

    showroom_api::server::serve(&config).await
}
