//! Response builders for the API Gateway proxy format.

use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::UserApiError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Returns a 200 OK response whose body is `payload` serialized as JSON.
///
/// # Errors
///
/// Returns an error if `payload` cannot be serialized.
pub fn ok_json<T: Serialize + ?Sized>(payload: &T) -> Result<Value, UserApiError> {
    let body = serde_json::to_string(payload)?;
    Ok(json!({
        "statusCode": 200,
        "headers": { "Content-Type": CONTENT_TYPE_JSON },
        "body": body
    }))
}
