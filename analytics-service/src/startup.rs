//! Application startup and lifecycle management.

use axum::{
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::{AppError, ErrorResponse};
use service_core::middleware::{http_trace_layer, metrics_middleware, request_id_middleware};
use service_core::shutdown::shutdown_signal;
use service_core::store::RecordStore;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AnalyticsConfig;
use crate::dtos::{CreateSaleRequest, HealthResponse, ProductReport, ProductTotals, SalesStats};
use crate::handlers;
use crate::models::Sale;
use crate::services::seed_sales;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Analytics Service API",
        description = "Sales statistics and per-product reports for the flower shop"
    ),
    paths(
        handlers::sales::get_sales_stats,
        handlers::sales::record_sale,
        handlers::products::get_product_report,
        handlers::health::health_check,
    ),
    components(schemas(
        Sale,
        CreateSaleRequest,
        SalesStats,
        ProductTotals,
        ProductReport,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Analytics", description = "Sales recording and reporting"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sales: RecordStore<Sale>,
}

/// Assemble the HTTP surface over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(
            "/analytics/sales",
            get(handlers::get_sales_stats).post(handlers::record_sale),
        )
        .route("/analytics/products", get(handlers::get_product_report))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AnalyticsConfig) -> Result<Self, AppError> {
        let sales = RecordStore::new();
        if config.seed_fixtures {
            seed_sales(&sales)?;
        }

        let state = AppState { sales };

        // Port 0 binds a random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Analytics service: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the sales store.
    pub fn sales(&self) -> RecordStore<Sale> {
        self.state.sales.clone()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
