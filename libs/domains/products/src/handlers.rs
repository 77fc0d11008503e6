//! HTTP handlers for Products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, DuplicateIdentifierResponse, NotFoundResponse,
    },
    ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{
    MessageResponse, Product, ProductEnvelope, ProductList, ProductPatch, PRODUCT_ADDED,
    PRODUCT_REMOVED, PRODUCT_UPDATED,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        verify_identifier,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductPatch, ProductList, ProductEnvelope, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            DuplicateIdentifierResponse
        )
    ),
    tags(
        (name = "Products", description = "Financial product catalog")
    )
)]
pub struct ApiDoc;

/// Create the products router; mount it under `/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/verification/{id}", get(verify_identifier))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List every product
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products in insertion order", body = ProductList)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductList>> {
    let data = service.list_products().await?;
    Ok(Json(ProductList { data }))
}

/// Add a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product added", body = ProductEnvelope),
        (status = 400, response = DuplicateIdentifierResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<Product>,
) -> ProductResult<impl IntoResponse> {
    let data = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope {
            message: PRODUCT_ADDED.to_string(),
            data,
        }),
    ))
}

/// Check whether an identifier is already in use
#[utoipa::path(
    get,
    path = "/verification/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Candidate product identifier")
    ),
    responses(
        (status = 200, description = "`true` when the identifier exists", body = bool)
    )
)]
async fn verify_identifier<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<bool>> {
    let exists = service.verify_identifier(&id).await?;
    Ok(Json(exists))
}

/// Get one product
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Update a product; absent fields keep their stored value
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelope),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<ProductPatch>,
) -> ProductResult<Json<ProductEnvelope>> {
    let data = service.update_product(&id, patch).await?;
    Ok(Json(ProductEnvelope {
        message: PRODUCT_UPDATED.to_string(),
        data,
    }))
}

/// Remove a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product removed", body = MessageResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<MessageResponse>> {
    service.delete_product(&id).await?;
    Ok(Json(MessageResponse {
        message: PRODUCT_REMOVED.to_string(),
    }))
}
