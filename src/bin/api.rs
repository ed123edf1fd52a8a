use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info};
use user_api::api::handler;
use user_api::core::config::AppConfig;
use user_api::store::MySqlUserStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    user_api::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(config = ?config, "Loaded configuration");

    // One connection for the lifetime of the process; nothing is served
    // if it cannot be opened.
    let store = match MySqlUserStore::connect(&config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Could not connect to MySQL instance: {}", e);
            std::process::exit(1);
        }
    };
    info!("Connection to RDS MySQL instance succeeded");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let store = Arc::clone(&store);
        async move { handler(store.as_ref(), event).await }
    }))
    .await
}
