use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Creates a configured Axum router with common middleware and documentation.
///
/// Sets up:
/// - Swagger UI at `/docs`, ReDoc at `/redoc`, the spec at `/openapi.json`
/// - API routes merged at the root
/// - Tracing, security headers, CORS and response compression
/// - JSON 404 fallback
///
/// Health endpoints (`/health`, `/ready`) are added by the app using
/// [`health_router`](super::health_router) and its own ready handler.
///
/// CORS origins come from `CORS_ALLOWED_ORIGIN` (comma-separated), with
/// `http://localhost:3000,http://127.0.0.1:3000` as the default.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set but empty or invalid.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .nest("/items", domain_items::handlers::router(state));
///
/// let router = create_router::<ApiDoc>(api_routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors_layer = cors_layer_from_env()?;
    Ok(create_router_with_cors::<T>(apis, cors_layer))
}

/// Same as [`create_router`] with an explicit CORS layer.
pub fn create_router_with_cors<T>(apis: Router, cors_layer: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        // gzip, br, deflate, zstd depending on Accept-Encoding
        .layer(CompressionLayer::new())
}

/// Server with graceful shutdown and a bounded cleanup phase.
///
/// On SIGINT/SIGTERM the server stops accepting connections and drains
/// in-flight requests. Only after the last connection closes does `cleanup`
/// (e.g. closing the database pool) run, for at most `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     close_database(db, "items").await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_with_shutdown(
        listener,
        router,
        shutdown_signal(),
        shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves `router` until `signal` completes, then runs `cleanup`.
///
/// `cleanup` also runs when the server fails, so resources are released on
/// every exit path.
pub async fn serve_with_shutdown<S, F>(
    listener: tokio::net::TcpListener,
    router: Router,
    signal: S,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(signal)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!(
        "Connections drained, starting cleanup (timeout: {:?})",
        shutdown_timeout
    );
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => {
            tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
        }
    }

    serve_result
}
