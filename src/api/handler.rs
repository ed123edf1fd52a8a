//! Lambda handler: optional insert on POST, then list every user.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

use super::{helpers, parsing};
use crate::errors::UserApiError;
use crate::store::UserStore;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Any parse or database failure is returned as an invocation error rather
/// than an HTTP error response.
#[tracing::instrument(level = "info", skip(store, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(store: &S, event: LambdaEvent<Value>) -> Result<Value, Error>
where
    S: UserStore + ?Sized,
{
    debug!(payload = ?event.payload, "API Lambda received event");

    handle_request(store, &event.payload).await.map_err(|e| {
        error!("Request failed: {}", e);
        Error::from(e)
    })
}

/// Applies the request to `store` and builds the 200 response.
///
/// A POST inserts its credentials when both are non-blank after trimming.
/// Every method, POST included, then returns all rows.
///
/// # Errors
///
/// Returns an error for a missing method, a malformed POST body, or a
/// failing store call.
pub async fn handle_request<S>(store: &S, payload: &Value) -> Result<Value, UserApiError>
where
    S: UserStore + ?Sized,
{
    let method = parsing::http_method(payload)?;
    info!(method = ?method, "Handling request");

    if method == Some("POST") {
        let body = parsing::extract_body(payload)?;
        let new_user = parsing::parse_credentials(&body)?;

        if new_user.is_complete() {
            store.insert_user(&new_user).await?;
            info!(email = %new_user.email, "Inserted user");
        } else {
            info!("Blank email or password, skipping insert");
        }
    }

    let users = store.list_users().await?;
    info!(count = users.len(), "Returning users");
    helpers::ok_json(&users)
}
