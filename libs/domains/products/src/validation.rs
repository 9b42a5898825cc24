//! Validation chains for the product routes.

use axum_helpers::validation::{FieldRule, ValidationChain, rules};

const ID: FieldRule = FieldRule::param("id", rules::is_int, "Invalid ID");
const NAME: FieldRule = FieldRule::body("name", rules::is_non_empty_string, "Name is required");
const PRICE_NUMERIC: FieldRule = FieldRule::body("price", rules::is_numeric, "Price must be a number");
const PRICE_POSITIVE: FieldRule =
    FieldRule::body("price", rules::is_positive, "Price must be greater than 0");
const PRICE_PRESENT: FieldRule = FieldRule::body("price", rules::is_present, "Price is required");
const AVAILABILITY: FieldRule =
    FieldRule::body("availability", rules::is_boolean, "Invalid availability value");
const OPTIONAL_AVAILABILITY: FieldRule = FieldRule::body(
    "availability",
    rules::is_optional_boolean,
    "Invalid availability value",
);

/// GET, PATCH and DELETE on `/{id}`
pub struct ProductIdRules;

impl ValidationChain for ProductIdRules {
    const RULES: &'static [FieldRule] = &[ID];
}

/// POST `/`
pub struct CreateProductRules;

impl ValidationChain for CreateProductRules {
    const RULES: &'static [FieldRule] = &[
        NAME,
        PRICE_NUMERIC,
        PRICE_POSITIVE,
        PRICE_PRESENT,
        OPTIONAL_AVAILABILITY,
    ];
}

/// PUT `/{id}`
pub struct UpdateProductRules;

impl ValidationChain for UpdateProductRules {
    const RULES: &'static [FieldRule] = &[
        ID,
        NAME,
        PRICE_NUMERIC,
        PRICE_POSITIVE,
        PRICE_PRESENT,
        AVAILABILITY,
    ];
}
