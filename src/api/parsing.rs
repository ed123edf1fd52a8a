use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::NewUser;
use crate::errors::UserApiError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

/// Reads the HTTP method from a REST API (`httpMethod`) or HTTP API
/// (`requestContext.http.method`) event. A method that is present but not a
/// string yields `None`, which callers treat as "not POST".
///
/// # Errors
///
/// Returns `MissingField` when neither location exists.
pub fn http_method(payload: &Value) -> Result<Option<&str>, UserApiError> {
    let method = v_path(payload, &["httpMethod"])
        .or_else(|| v_path(payload, &["requestContext", "http", "method"]))
        .ok_or_else(|| UserApiError::MissingField("httpMethod".to_string()))?;
    Ok(method.as_str())
}

/// Returns the request body, base64-decoding it when `isBase64Encoded` is set.
///
/// # Errors
///
/// Returns `MissingField` for an absent or null body, `InvalidField` for a
/// non-string body, and `ParseError` when decoding fails.
pub fn extract_body(payload: &Value) -> Result<Cow<'_, str>, UserApiError> {
    let body = match payload.get("body") {
        None | Some(Value::Null) => {
            return Err(UserApiError::MissingField("body".to_string()));
        }
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(UserApiError::InvalidField("body".to_string())),
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if encoded {
        let bytes = STANDARD.decode(body)?;
        Ok(Cow::Owned(String::from_utf8(bytes)?))
    } else {
        Ok(Cow::Borrowed(body))
    }
}

/// Decodes `{"email": ..., "password": ...}`. Other keys are ignored.
///
/// # Errors
///
/// Returns `ParseError` for invalid JSON, `MissingField` for an absent key,
/// and `InvalidField` when a value is not a string.
pub fn parse_credentials(body: &str) -> Result<NewUser, UserApiError> {
    let json: Value = serde_json::from_str(body)?;

    let field = |name: &str| -> Result<String, UserApiError> {
        match json.get(name) {
            None => Err(UserApiError::MissingField(name.to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(UserApiError::InvalidField(name.to_string())),
        }
    };

    Ok(NewUser {
        email: field("email")?,
        password: field("password")?,
    })
}
