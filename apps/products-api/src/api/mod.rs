//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes nested under the configured base path
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Full application: documented API routes plus health probes at the root
pub fn app(state: AppState) -> std::io::Result<Router> {
    let router = axum_helpers::create_router::<crate::openapi::ApiDoc>(
        routes(&state),
        &state.config.server.base_path,
    )?;

    Ok(router
        .merge(axum_helpers::health_router(state.config.app))
        .merge(health::router(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(base_path: &str) -> AppState {
        AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default().with_base_path(base_path),
            environment: Environment::Development,
            seed_products: true,
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_products_are_served_under_base_path() {
        let app = app(test_state("/bp")).unwrap();

        let response = app.clone().oneshot(get("/bp/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"][0]["id"], "uno");

        let response = app.oneshot(get("/products")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_empty_base_path_mounts_at_root() {
        let app = app(test_state("/")).unwrap();

        let response = app.oneshot(get("/products/verification/uno")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!(true));
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = app(test_state("/bp")).unwrap();

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["store"], "connected");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_json_fallback() {
        let app = app(test_state("/bp")).unwrap();

        let response = app.oneshot(get("/bp/nothing-here")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
