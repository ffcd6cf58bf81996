mod config;
mod handlers;
mod httpbin;
mod routes;
mod state;

use std::sync::Arc;

use config::Config;
use httpbin::HttpbinClient;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("rust-httpbin-proxy starting");

    let config = Config::from_env()?;
    config.log_startup();

    let httpbin_client = HttpbinClient::from_config(&config)?;

    let addr = format!("{}:{}", config.service_host, config.service_port);

    let state = AppState {
        httpbin_client,
        config: Arc::new(config),
    };

    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
