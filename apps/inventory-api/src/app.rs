use axum::Router;
use axum_helpers::server::{create_router, health_router};
use domain_items::{ItemService, ItemStore, handlers};
use std::io;

use crate::config::Config;
use crate::openapi::ApiDoc;

/// Composes the item routes, `/health`, docs and middleware.
///
/// The store is injected so tests can start from a seeded or empty one.
pub fn build<S: ItemStore + 'static>(config: &Config, store: S) -> io::Result<Router> {
    let service = ItemService::new(store);

    let api_routes = Router::new()
        .nest("/items", handlers::router(service))
        .merge(health_router(config.app));

    create_router::<ApiDoc>(api_routes, &config.cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::{AppInfo, Environment, cors::CorsConfig, server::ServerConfig};
    use domain_items::{InMemoryItemStore, Item};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            app: AppInfo {
                name: "inventory_api",
                version: "0.1.0",
            },
            server: ServerConfig::default(),
            cors: CorsConfig::default(),
            environment: Environment::Development,
        }
    }

    async fn seeded_app() -> Router {
        let store = InMemoryItemStore::new();
        store.insert(Item::new("pickles", 2.45)).await.unwrap();
        build(&test_config(), store).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_items_mounted_under_items() {
        let app = seeded_app().await;

        let response = app
            .oneshot(Request::get("/items").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"name": "pickles", "price": 2.45}])
        );
    }

    #[tokio::test]
    async fn test_health_reports_app_name() {
        let app = seeded_app().await;

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "inventory_api");
    }

    #[tokio::test]
    async fn test_openapi_documents_item_paths() {
        let app = seeded_app().await;

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["info"]["title"], "Inventory API");
        assert!(body["paths"]["/items"]["get"].is_object());
        assert!(body["paths"]["/items/{name}"]["patch"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = seeded_app().await;

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_responses_carry_security_headers() {
        let app = seeded_app().await;

        let response = app
            .oneshot(Request::get("/items/pickles").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-content-type-options"));
    }
}
