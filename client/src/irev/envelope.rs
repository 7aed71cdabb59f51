//! Response envelope handling.
//!
//! Every upstream reply is `{ "success": bool, "data": ... }`. A reply goes
//! through [`unwrap_envelope`], then optionally
//! [`flatten_polling_unit_wards`], then [`decode`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiFailure, RawResponse};

/// Check status, parse the body and return the envelope's `data`.
pub(crate) fn unwrap_envelope(response: &RawResponse) -> Result<Value, ApiFailure> {
    if !response.status.is_success() {
        return Err(ApiFailure::Status);
    }

    let envelope: Value =
        serde_json::from_str(&response.body).map_err(|_| ApiFailure::InvalidJson)?;

    if !is_truthy(envelope.get("success")) {
        return Err(ApiFailure::Unsuccessful);
    }

    Ok(match envelope {
        Value::Object(mut fields) => fields.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    })
}

/// Loose truthiness, matching how upstream's own web client reads `success`.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Replace a nested ward object in `polling_unit.ward` with its `_id`.
///
/// Accepts a single polling-unit result or an array of them. Wards that are
/// already identifiers, and objects without an `_id`, are left as they are.
pub(crate) fn flatten_polling_unit_wards(data: &mut Value) {
    match data {
        Value::Array(items) => items.iter_mut().for_each(flatten_one),
        result @ Value::Object(_) => flatten_one(result),
        _ => {}
    }
}

fn flatten_one(result: &mut Value) {
    let Some(ward) = result
        .get_mut("polling_unit")
        .and_then(|pu| pu.get_mut("ward"))
    else {
        return;
    };

    if let Some(id) = ward.get("_id").cloned() {
        *ward = id;
    }
}

/// Type the unwrapped `data` payload.
pub(crate) fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiFailure> {
    serde_json::from_value(data).map_err(|err| {
        tracing::warn!(error = %err, "IReV payload did not match the expected shape");
        ApiFailure::UnexpectedShape
    })
}
