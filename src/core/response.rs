use serde_json::Value;

use crate::utils::error::{Error, Result, SUCCESS_CODES};

/// What the transport hands back: status line, raw body, and whether the
/// request completed at all.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    pub timed_out: bool,
}

/// Turn a raw transport response into the decoded envelope or a classified
/// error.
///
/// Every response wraps its payload in `{meta: {code, message?}, data}`.
/// A request that never completed fails with `Timeout` before any parsing;
/// a body that is not JSON, or an envelope without `meta.code`, is a
/// `MalformedResponse` (never assumed successful); any non-success code
/// classifies through the meta-code table.
pub fn decode(url: &str, response: RawResponse) -> Result<Value> {
    if response.timed_out {
        return Err(Error::Timeout {
            url: url.to_string(),
        });
    }

    let parsed: Value = serde_json::from_str(&response.body)
        .map_err(|e| Error::MalformedResponse(format!("invalid JSON body from {url}: {e}")))?;

    let code = parsed
        .get("meta")
        .and_then(|meta| meta.get("code"))
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            Error::MalformedResponse(format!("response from {url} is missing meta.code"))
        })?;

    if SUCCESS_CODES.contains(&code) {
        return Ok(parsed);
    }

    let message = parsed
        .get("meta")
        .and_then(|meta| meta.get("message"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Err(Error::for_meta_code(code, message))
}

/// Unwrap one nested field of the envelope's `data` object. Call sites name
/// the field they expect (`tracking`, `trackings`, `couriers`); its absence
/// in a successful response is a data defect.
pub fn unwrap_data(mut payload: Value, key: &str) -> Result<Value> {
    payload
        .get_mut("data")
        .and_then(|data| data.get_mut(key))
        .map(Value::take)
        .ok_or_else(|| Error::MalformedResponse(format!("response is missing data.{key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.aftership.com/v4/trackings";

    fn ok_response(body: &str) -> RawResponse {
        RawResponse {
            status: 200,
            body: body.to_string(),
            timed_out: false,
        }
    }

    #[test]
    fn test_success_envelope_returns_payload() {
        let body = r#"{"meta":{"code":200},"data":{"tracking":{"slug":"ups"}}}"#;
        let payload = decode(URL, ok_response(body)).unwrap();
        let tracking = unwrap_data(payload, "tracking").unwrap();
        assert_eq!(tracking, json!({"slug": "ups"}));
    }

    #[test]
    fn test_created_envelope_is_also_success() {
        let body = r#"{"meta":{"code":201},"data":{"tracking":{}}}"#;
        assert!(decode(URL, ok_response(body)).is_ok());
    }

    #[test]
    fn test_timeout_fails_before_parsing() {
        let response = RawResponse {
            status: 0,
            body: "this never gets parsed".to_string(),
            timed_out: true,
        };
        let err = decode(URL, response).unwrap_err();
        match err {
            Error::Timeout { url } => assert_eq!(url, URL),
            other => panic!("expected Timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_envelope() {
        let body = r#"{"meta":{"code":404},"data":{}}"#;
        let err = decode(URL, ok_response(body)).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_tracking_already_exists_envelope() {
        let body = r#"{"meta":{"code":4003}}"#;
        let err = decode(URL, ok_response(body)).unwrap_err();
        assert!(matches!(err, Error::TrackingAlreadyExists(_)));
    }

    #[test]
    fn test_error_carries_meta_message() {
        let body = r#"{"meta":{"code":401,"message":"Invalid API key."}}"#;
        let err = decode(URL, ok_response(body)).unwrap_err();
        match err {
            Error::Unauthorized(message) => assert_eq!(message, "Invalid API key."),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = decode(URL, ok_response("<html>502 Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_meta_code_is_malformed_not_success() {
        let body = r#"{"data":{"tracking":{}}}"#;
        let err = decode(URL, ok_response(body)).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_unwrap_data_missing_key_is_malformed() {
        let payload = json!({"meta": {"code": 200}, "data": {}});
        let err = unwrap_data(payload, "tracking").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }
}
