use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, Validated,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, ValidationErrorResponse},
    validation::ValidationChain,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductError;
use crate::models::{
    CreateProduct, MessageResponse, Product, ProductListResponse, ProductResponse, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{CreateProductRules, ProductIdRules, UpdateProductRules};

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            ProductResponse,
            ProductListResponse,
            MessageResponse
        ),
        responses(NotFoundResponse, ValidationErrorResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<ProductService<R>>;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Ids that pass validation but overflow the storage key cannot name a row
fn product_id<C: ValidationChain>(request: &Validated<C>) -> Result<i32, ProductError> {
    request
        .param("id")
        .and_then(|id| id.parse::<i32>().ok())
        .ok_or(ProductError::NotFound)
}

/// List all products, most expensive first
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<SharedService<R>>,
) -> Result<Json<ProductListResponse>, AppError> {
    let products = service.list_products().await?;
    Ok(Json(ProductListResponse { data: products }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    request: Validated<CreateProductRules>,
) -> Result<impl IntoResponse, AppError> {
    let input: CreateProduct = request.into_body()?;
    let product = service.create_product(input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse { data: product })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    request: Validated<ProductIdRules>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = product_id(&request)?;
    let product = service.get_product(id).await?;

    Ok(Json(ProductResponse { data: product }))
}

/// Replace name, price and availability of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    request: Validated<UpdateProductRules>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = product_id(&request)?;
    let input: UpdateProduct = request.into_body()?;
    let product = service.update_product(id, input).await?;

    Ok(Json(ProductResponse { data: product }))
}

/// Flip the availability of a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = ProductResponse),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    request: Validated<ProductIdRules>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = product_id(&request)?;
    let product = service.toggle_availability(id).await?;

    Ok(Json(ProductResponse { data: product }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<SharedService<R>>,
    request: Validated<ProductIdRules>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = product_id(&request)?;
    service.delete_product(id).await?;

    Ok(Json(MessageResponse::deleted(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_non_integer_id_rejected_before_storage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_toggle_availability().never();
        mock_repo.expect_delete_by_id().never();

        let app = router(ProductService::new(mock_repo));

        for method in ["GET", "PATCH", "DELETE"] {
            let (status, body) = send(app.clone(), method, "/abc").await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
            assert_eq!(body["errors"][0]["msg"], "Invalid ID");
            assert_eq!(body["errors"][0]["location"], "params");
        }
    }

    #[tokio::test]
    async fn test_out_of_range_id_is_not_found_without_storage() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().never();

        let app = router(ProductService::new(mock_repo));
        let (status, body) = send(app, "GET", "/99999999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Product not found"}));
    }

    #[tokio::test]
    async fn test_storage_failure_is_generic_500() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| {
            Err(ProductError::Database(sea_orm::DbErr::Custom(
                "relation \"products\" does not exist".into(),
            )))
        });

        let app = router(ProductService::new(mock_repo));
        let (status, body) = send(app, "GET", "/1").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }
}
