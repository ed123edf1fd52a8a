//! User API - an API Gateway Lambda that records user credentials in MySQL
//! and lists every stored user.
//!
//! Each invocation optionally inserts a row from a POST body, then returns
//! the full `User` table as a JSON array.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind API Gateway for serverless execution
//! - RDS MySQL through `sqlx`, one connection per process
//! - SSM Parameter Store for the database password when not set directly
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use user_api::core::config::AppConfig;
//! use user_api::store::MySqlUserStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_runtime::Error> {
//!     // Set up structured logging
//!     user_api::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let store = Arc::new(MySqlUserStore::connect(&config).await?);
//!
//!     lambda_runtime::run(lambda_runtime::service_fn(move |event: lambda_runtime::LambdaEvent<serde_json::Value>| {
//!         let store = Arc::clone(&store);
//!         async move { user_api::api::handler(store.as_ref(), event).await }
//!     }))
//!     .await
//! }
//! ```
pub mod api;
pub mod core;
pub mod errors;
pub mod store;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level comes from `RUST_LOG` and
/// defaults to `info`. Calling it again after a subscriber is installed is a
/// no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// user_api::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
