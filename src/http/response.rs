//! Uniform response envelope.
//!
//! Every endpoint answers with the same three-field JSON shape:
//!
//! ```text
//! { "code": 0, "msg": "success", "data": { ... } }
//! ```
//!
//! `code == 0` means success; any other value is a failure category.
//! `data` is always an object, never `null` or absent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload carried in [`Envelope::data`].
pub type Data = Map<String, Value>;

/// Code for a successful operation.
pub const CODE_SUCCESS: i64 = 0;

/// Default failure code.
pub const CODE_ERROR: i64 = 1;

/// Response wrapper returned by every handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    pub msg: String,
    #[serde(default)]
    pub data: Data,
}

impl Envelope {
    /// Successful envelope carrying `data`.
    pub fn success(data: Data) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: "success".to_string(),
            data,
        }
    }

    /// Successful envelope with an empty `data` object.
    pub fn ok() -> Self {
        Self::success(Data::new())
    }

    /// Failure envelope with the given message and code.
    pub fn error(msg: impl Into<String>, code: i64) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: Data::new(),
        }
    }

    /// Failure envelope with the default code.
    pub fn fail(msg: impl Into<String>) -> Self {
        Self::error(msg, CODE_ERROR)
    }

    /// `{"code": 1, "msg": "error", "data": {}}`.
    pub fn default_error() -> Self {
        Self::fail("error")
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// Pair the envelope with a non-200 HTTP status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Data {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_success_echoes_data() {
        let payload = data(json!({"reply": "hi", "tokens": [1, 2, 3], "nested": {"a": null}}));
        let env = Envelope::success(payload.clone());

        assert_eq!(env.code, 0);
        assert_eq!(env.msg, "success");
        assert_eq!(env.data, payload);
        assert!(env.is_success());
    }

    #[test]
    fn test_ok_has_empty_data() {
        let env = Envelope::ok();
        assert_eq!(env.code, 0);
        assert!(env.data.is_empty());
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({"code": 0, "msg": "success", "data": {}})
        );
    }

    #[test]
    fn test_error_carries_msg_and_code() {
        let env = Envelope::error("model unavailable", 7);
        assert_eq!(env.code, 7);
        assert_eq!(env.msg, "model unavailable");
        assert!(env.data.is_empty());
        assert!(!env.is_success());
    }

    #[test]
    fn test_error_defaults() {
        assert_eq!(
            Envelope::default_error(),
            Envelope {
                code: 1,
                msg: "error".into(),
                data: Data::new(),
            }
        );
        assert_eq!(Envelope::fail("bad input").code, CODE_ERROR);
    }

    #[test]
    fn test_defaults_are_not_shared() {
        let mut first = Envelope::ok();
        first.data.insert("leak".into(), json!(true));

        let second = Envelope::ok();
        assert!(second.data.is_empty());

        let mut err = Envelope::default_error();
        err.data.insert("leak".into(), json!(1));
        assert!(Envelope::default_error().data.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let env = Envelope::success(data(json!({"reply": "你好", "n": 3.5, "list": ["a"]})));
        let text = serde_json::to_string(&env).unwrap();
        let back: Envelope = serde_json::from_str(&text).unwrap();
        assert_eq!(back, env);

        let err = Envelope::error("boom", -2);
        let back: Envelope = serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_missing_data_deserializes_to_empty() {
        let env: Envelope = serde_json::from_str(r#"{"code":1,"msg":"error"}"#).unwrap();
        assert!(env.data.is_empty());
    }

    #[test]
    fn test_null_data_is_rejected() {
        let result = serde_json::from_str::<Envelope>(r#"{"code":0,"msg":"success","data":null}"#);
        assert!(result.is_err());
    }
}
