//! API routes module
//!
//! This module defines all HTTP API routes for the Items API.

pub mod health;
pub mod items;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

/// Service entry point pointing at the interactive documentation
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service name and documentation links", body = Object)
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Items API",
        "docs": "/docs",
        "redoc": "/redoc",
    }))
}

/// Create all API routes
/// Note: documentation, `/health` and middleware are added in `main`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/items", items::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::{app_info, server::ServerConfig, tracing::LogConfig};
    use database::sqlite::SqliteConfig;
    use http_body_util::BodyExt;
    use test_utils::TestDatabase;
    use tower::ServiceExt;

    async fn test_state() -> AppState {
        let db = TestDatabase::new().await;
        domain_items::schema::create_tables(&db.connection)
            .await
            .unwrap();

        AppState {
            config: Config {
                app: app_info!(),
                database: SqliteConfig::in_memory(),
                server: ServerConfig::default(),
                logging: LogConfig { file: None },
                environment: Environment::Development,
            },
            db: db.connection(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_links_docs() {
        let app = routes(&test_state().await);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Items API", "docs": "/docs", "redoc": "/redoc"})
        );
    }

    #[tokio::test]
    async fn test_ready_reports_database() {
        let app = routes(&test_state().await);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_ready_fails_after_pool_closed() {
        let state = test_state().await;
        let app = routes(&state);
        state.db.clone().close().await.unwrap();

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_items_are_mounted() {
        let app = routes(&test_state().await);

        let created = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name": "Sample Item"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let fetched = app
            .oneshot(Request::builder().uri("/items/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(body_json(fetched).await["name"], "Sample Item");
    }
}
