//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, FieldErrorsResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "error": "Internal server error" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - one or more field rules failed",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "abc",
            "msg": "Invalid ID",
            "path": "id",
            "location": "params"
        }]
    })
)]
pub struct ValidationErrorResponse(pub FieldErrorsResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Product not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);
