//! # Backend Service
//!
//! Thin entry point: load `.env`, read configuration, start the server.

use backend::{start_server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    start_server(config).await
}
