//! Request extractor gated by a [`ValidationChain`].

use crate::errors::AppError;
use crate::validation::ValidationChain;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Path parameters and JSON body that passed every rule of `C`.
///
/// Body decoding:
/// - empty body is read as `{}`
/// - invalid JSON is rejected with 400 `{ "error": "Invalid JSON body" }`
/// - a non-object body is kept but exposes no fields to the rules
///
/// Any failing rule rejects the request with 400 and the full error list,
/// so the handler only runs for requests that satisfy the chain.
///
/// # Example
/// ```ignore
/// async fn get_product(request: Validated<ProductIdRules>) -> Result<Json<Value>, AppError> {
///     let id = request.param("id").unwrap_or_default();
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct Validated<C> {
    params: Map<String, Value>,
    body: Value,
    _chain: PhantomData<fn() -> C>,
}

impl<C> Validated<C> {
    /// Raw path parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(Value::as_str)
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Deserialize the validated body
    pub fn into_body<T: DeserializeOwned>(self) -> Result<T, AppError> {
        serde_json::from_value(self.body).map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// Decode a request body, treating an empty body as `{}`
pub fn parse_body(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
}

impl<C, S> FromRequest<S> for Validated<C>
where
    C: ValidationChain,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params: Map<String, Value> =
            match Option::<Path<HashMap<String, String>>>::from_request_parts(&mut parts, state)
                .await
            {
                Ok(Some(Path(params))) => params
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect(),
                Ok(None) => Map::new(),
                // Undecodable params are left for the rules to report as missing
                Err(rejection) => {
                    tracing::debug!(%rejection, "Path parameters could not be decoded");
                    Map::new()
                }
            };

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(IntoResponse::into_response)?;

        let body = parse_body(&bytes).map_err(|e| AppError::from(e).into_response())?;

        let errors = C::validate(&params, &body);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors).into_response());
        }

        Ok(Self {
            params,
            body,
            _chain: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldRule, rules};
    use axum::{Json, Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    struct ItemRules;

    impl ValidationChain for ItemRules {
        const RULES: &'static [FieldRule] = &[
            FieldRule::param("id", rules::is_int, "Invalid ID"),
            FieldRule::body("name", rules::is_non_empty_string, "Name is required"),
        ];
    }

    async fn echo(request: Validated<ItemRules>) -> Json<Value> {
        Json(json!({
            "id": request.param("id"),
            "body": request.body(),
        }))
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", post(echo))
    }

    async fn send(uri: &str, body: &'static str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_parse_body_empty_is_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b"  \n").unwrap(), json!({}));
        assert!(parse_body(b"{\"name\":").is_err());
    }

    #[tokio::test]
    async fn test_valid_request_reaches_handler() {
        let (status, body) = send("/items/12", r#"{"name":"Desk"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": "12", "body": {"name": "Desk"}}));
    }

    #[tokio::test]
    async fn test_all_rule_failures_reported() {
        let (status, body) = send("/items/abc", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["msg"], "Invalid ID");
        assert_eq!(errors[0]["location"], "params");
        assert_eq!(errors[0]["value"], "abc");
        assert_eq!(errors[1]["msg"], "Name is required");
        assert!(errors[1].get("value").is_none());
    }

    #[tokio::test]
    async fn test_undecodable_param_reported_as_rule_failure() {
        let (status, body) = send("/items/%FF", r#"{"name":"Desk"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"errors": [{
                "type": "field",
                "msg": "Invalid ID",
                "path": "id",
                "location": "params"
            }]})
        );
    }

    #[tokio::test]
    async fn test_invalid_json_rejected() {
        let (status, body) = send("/items/1", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid JSON body"}));
    }

    #[tokio::test]
    async fn test_into_body_deserializes() {
        #[derive(serde::Deserialize)]
        struct Item {
            name: String,
        }

        let validated: Validated<ItemRules> = Validated {
            params: Map::new(),
            body: json!({"name": "Lamp"}),
            _chain: PhantomData,
        };
        let item: Item = validated.into_body().unwrap();
        assert_eq!(item.name, "Lamp");
    }
}
