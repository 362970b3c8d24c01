//! # Response Envelope
//!
//! Every API response is wrapped as
//! `{"success": bool, "message": string, "data": <object|array|null>}`.
//! [`decode_envelope`] turns a raw response into a typed [`Envelope`] or a
//! classified [`ApiError`].
//!
//! ```text
//! RawResponse ─► status check ─► JSON parse ─► shape dispatch ─► Model::from_value
//!      │               │              │               │                 │
//!      │        NonSuccessStatus  MalformedBody  ShapeMismatch     DecodeFailed
//!      ▼
//!  Envelope<M>
//! ```

use crate::error::{ApiError, ApiResult};
use crate::model::Model;
use crate::transport::RawResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Payload shape an endpoint returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `data` is one JSON object
    Single,
    /// `data` is a JSON array of objects
    List,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Single => "single",
            Shape::List => "list",
        }
    }

    fn of(value: &Value) -> Self {
        if value.is_array() {
            Shape::List
        } else {
            Shape::Single
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded `data` of an envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload<M> {
    Single(M),
    /// Items in the order the API sent them
    List(Vec<M>),
}

impl<M> Payload<M> {
    pub fn shape(&self) -> Shape {
        match self {
            Payload::Single(_) => Shape::Single,
            Payload::List(_) => Shape::List,
        }
    }

    pub fn as_single(&self) -> Option<&M> {
        match self {
            Payload::Single(item) => Some(item),
            Payload::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[M]> {
        match self {
            Payload::Single(_) => None,
            Payload::List(items) => Some(items),
        }
    }

    pub fn into_single(self) -> Option<M> {
        match self {
            Payload::Single(item) => Some(item),
            Payload::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<M>> {
        match self {
            Payload::Single(_) => None,
            Payload::List(items) => Some(items),
        }
    }
}

/// A successfully decoded API response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<M> {
    pub success: bool,
    pub message: String,
    pub data: Payload<M>,
}

/// Wire form of the envelope before `data` is decoded
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
}

/// Decode a raw response into an envelope of `M` with the requested shape.
///
/// The status is checked before the body is touched. List payloads are
/// all-or-nothing: the first item that fails to decode fails the call.
pub fn decode_envelope<M: Model>(response: &RawResponse, shape: Shape) -> ApiResult<Envelope<M>> {
    debug!(
        model = M::NAME,
        %shape,
        status = response.status,
        "decoding response envelope"
    );

    if !response.is_success() {
        warn!(status = response.status, "API returned non-success status");
        return Err(ApiError::NonSuccessStatus {
            status: response.status,
            body: response.body.clone(),
        });
    }

    let parsed: Value = serde_json::from_str(&response.body).map_err(|e| {
        warn!(error = %e, "response body is not valid JSON");
        ApiError::MalformedBody(e.to_string())
    })?;
    if !parsed.is_object() {
        warn!("response body is not a JSON object");
        return Err(ApiError::MalformedBody(
            "envelope is not a JSON object".to_string(),
        ));
    }
    let raw: RawEnvelope = serde_json::from_value(parsed).map_err(|e| {
        warn!(error = %e, "response body is not a valid envelope");
        ApiError::MalformedBody(e.to_string())
    })?;

    let got = Shape::of(&raw.data);
    if got != shape {
        warn!(model = M::NAME, expected = %shape, %got, "envelope data has the wrong shape");
        return Err(ApiError::ShapeMismatch {
            expected: shape,
            got,
        });
    }

    let data = match raw.data {
        Value::Array(items) => {
            let decoded = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    M::from_value(item).map_err(|e| {
                        warn!(model = M::NAME, index, error = %e, "list item failed to decode");
                        ApiError::from(e)
                    })
                })
                .collect::<ApiResult<Vec<M>>>()?;
            Payload::List(decoded)
        }
        single => Payload::Single(M::from_value(&single).map_err(|e| {
            warn!(model = M::NAME, error = %e, "payload failed to decode");
            ApiError::from(e)
        })?),
    };

    let count = match &data {
        Payload::Single(_) => 1,
        Payload::List(items) => items.len(),
    };
    debug!(model = M::NAME, items = count, "decoded response envelope");

    Ok(Envelope {
        success: raw.success.unwrap_or(false),
        message: raw.message.unwrap_or_default(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::model::{required_str, JsonObject};

    #[derive(Debug, PartialEq)]
    struct Tag {
        id: String,
    }

    impl Model for Tag {
        const NAME: &'static str = "Tag";

        fn from_json(object: &JsonObject) -> Result<Self, DecodeError> {
            Ok(Self {
                id: required_str(object, Self::NAME, "id")?,
            })
        }
    }

    fn ok(body: &str) -> RawResponse {
        RawResponse::new(200, body)
    }

    #[test]
    fn test_single_object() {
        let env = decode_envelope::<Tag>(
            &ok(r#"{"success":true,"message":"ok","data":{"id":"a"}}"#),
            Shape::Single,
        )
        .unwrap();

        assert!(env.success);
        assert_eq!(env.message, "ok");
        assert_eq!(env.data, Payload::Single(Tag { id: "a".into() }));
    }

    #[test]
    fn test_list_preserves_order() {
        let env = decode_envelope::<Tag>(
            &ok(r#"{"success":true,"message":"","data":[{"id":"c"},{"id":"a"},{"id":"b"}]}"#),
            Shape::List,
        )
        .unwrap();

        let ids: Vec<_> = env
            .data
            .as_list()
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_empty_list() {
        let env =
            decode_envelope::<Tag>(&ok(r#"{"success":true,"message":"","data":[]}"#), Shape::List)
                .unwrap();
        assert_eq!(env.data, Payload::List(vec![]));
    }

    #[test]
    fn test_list_is_all_or_nothing() {
        let err = decode_envelope::<Tag>(
            &ok(r#"{"success":true,"message":"","data":[{"id":"a"},{"name":"b"},{"id":"c"}]}"#),
            Shape::List,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ApiError::DecodeFailed(DecodeError::MissingField {
                model: "Tag",
                field: "id"
            })
        ));
    }

    #[test]
    fn test_shape_mismatch_both_ways() {
        let err = decode_envelope::<Tag>(
            &ok(r#"{"success":true,"message":"","data":[{"id":"a"}]}"#),
            Shape::Single,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::ShapeMismatch {
                expected: Shape::Single,
                got: Shape::List
            }
        ));

        let err = decode_envelope::<Tag>(
            &ok(r#"{"success":true,"message":"","data":{"id":"a"}}"#),
            Shape::List,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ApiError::ShapeMismatch {
                expected: Shape::List,
                got: Shape::Single
            }
        ));
    }

    #[test]
    fn test_non_success_skips_parsing() {
        let err = decode_envelope::<Tag>(&RawResponse::new(500, "<html>oops"), Shape::Single)
            .unwrap_err();

        match err {
            ApiError::NonSuccessStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "<html>oops");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_body() {
        for body in ["not json", "", "[]", r#"[{"id":"a"}]"#, r#"{"success":"yes"}"#] {
            let err = decode_envelope::<Tag>(&ok(body), Shape::Single).unwrap_err();
            assert!(matches!(err, ApiError::MalformedBody(_)), "body {body:?}");
        }
    }

    #[test]
    fn test_null_or_missing_data_as_single() {
        for body in [
            r#"{"success":false,"message":"nope","data":null}"#,
            r#"{"success":false,"message":"nope"}"#,
        ] {
            let err = decode_envelope::<Tag>(&ok(body), Shape::Single).unwrap_err();
            assert!(matches!(
                err,
                ApiError::DecodeFailed(DecodeError::NotAnObject { model: "Tag" })
            ));
        }
    }

    #[test]
    fn test_lenient_envelope_keys() {
        let env = decode_envelope::<Tag>(&ok(r#"{"data":{"id":"a"}}"#), Shape::Single).unwrap();
        assert!(!env.success);
        assert_eq!(env.message, "");
    }

    #[test]
    fn test_payload_accessors() {
        let single = Payload::Single(1);
        assert_eq!(single.shape(), Shape::Single);
        assert_eq!(single.as_single(), Some(&1));
        assert_eq!(single.clone().into_list(), None);

        let list = Payload::List(vec![1, 2]);
        assert_eq!(list.shape(), Shape::List);
        assert_eq!(list.as_list(), Some(&[1, 2][..]));
        assert_eq!(list.into_single(), None);
    }
}
