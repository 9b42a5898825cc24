use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as returned by the API; storage timestamps are not exposed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i32,

    #[schema(example = "Curved Monitor 24\"")]
    pub name: String,

    /// Always greater than zero
    #[schema(example = 300.0)]
    pub price: f64,

    pub availability: bool,
}

/// DTO for creating a product
///
/// `price` accepts a JSON number or a numeric string. `availability`
/// defaults to `true` when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Curved Monitor 24\"")]
    pub name: String,

    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    #[schema(example = 300.0)]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient::optional_boolean")]
    pub availability: Option<bool>,
}

/// DTO for a full update: every field is replaced
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(deserialize_with = "lenient::number")]
    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than 0"))]
    pub price: f64,

    #[serde(deserialize_with = "lenient::boolean")]
    pub availability: bool,
}

/// `{ "data": product }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// `{ "data": [product, ...] }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// `{ "data": "Product with ID 3 deleted successfully" }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Product with ID 3 deleted successfully")]
    pub data: String,
}

impl MessageResponse {
    pub fn deleted(id: i32) -> Self {
        Self {
            data: format!("Product with ID {} deleted successfully", id),
        }
    }
}

/// Deserializers matching the loose forms accepted by the validation rules
mod lenient {
    use axum_helpers::validation::rules::{as_bool, as_number};
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        as_number(Some(&value)).ok_or_else(|| D::Error::custom("price must be a number"))
    }

    pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        as_bool(Some(&value)).ok_or_else(|| D::Error::custom("availability must be a boolean"))
    }

    pub fn optional_boolean<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        as_bool(Some(&value))
            .map(Some)
            .ok_or_else(|| D::Error::custom("availability must be a boolean"))
    }
}
