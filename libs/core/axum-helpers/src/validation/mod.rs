//! Declarative request validation.
//!
//! A route declares an ordered list of [`FieldRule`]s through a
//! [`ValidationChain`]. Every rule is evaluated, failures are collected in
//! rule order, and the [`Validated`](crate::extractors::Validated) extractor
//! rejects the request with a 400 `{ "errors": [...] }` envelope when any
//! rule fails.
//!
//! ```ignore
//! use axum_helpers::validation::{FieldRule, ValidationChain, rules};
//!
//! pub struct ProductIdRules;
//!
//! impl ValidationChain for ProductIdRules {
//!     const RULES: &'static [FieldRule] = &[FieldRule::param("id", rules::is_int, "Invalid ID")];
//! }
//! ```

pub mod rules;

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Where a validated field is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameter
    Params,
    /// JSON request body
    Body,
}

/// One failed rule, as reported to the client
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Always `"field"`
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub kind: String,

    /// Offending value; omitted when the field was missing
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,

    /// Rule message
    #[schema(example = "Invalid ID")]
    pub msg: String,

    /// Field name
    #[schema(example = "id")]
    pub path: String,

    pub location: Location,
}

impl FieldError {
    pub fn new(
        location: Location,
        path: impl Into<String>,
        value: Option<Value>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// Predicate over a field value; `None` means the field is absent
pub type Check = fn(Option<&Value>) -> bool;

/// A single `(location, field, predicate, message)` constraint
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub location: Location,
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Params,
            field,
            check,
            message,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            location: Location::Body,
            field,
            check,
            message,
        }
    }

    /// Evaluate against the request's params and body
    pub fn evaluate(&self, params: &Map<String, Value>, body: &Value) -> Option<FieldError> {
        let value = match self.location {
            Location::Params => params.get(self.field),
            Location::Body => body.as_object().and_then(|fields| fields.get(self.field)),
        };

        if (self.check)(value) {
            None
        } else {
            Some(FieldError::new(
                self.location,
                self.field,
                value.cloned(),
                self.message,
            ))
        }
    }
}

/// Ordered rule list bound to a route
pub trait ValidationChain {
    const RULES: &'static [FieldRule];

    /// Evaluate every rule, collecting failures in rule order
    fn validate(params: &Map<String, Value>, body: &Value) -> Vec<FieldError> {
        Self::RULES
            .iter()
            .filter_map(|rule| rule.evaluate(params, body))
            .collect()
    }
}

/// Chain with no rules
pub struct NoRules;

impl ValidationChain for NoRules {
    const RULES: &'static [FieldRule] = &[];
}
