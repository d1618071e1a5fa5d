//! Mortgage calculator HTTP server.
//!
//! Exposes the calculation service over two endpoints:
//! - `POST /execute` calculates (or fetches from cache) the aggregates for a
//!   loan request
//! - `GET /cache` lists every cached calculation in ascending id order

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::models::{CachedLoan, CalculationResult, LoanRequest, ServerConfig};
use crate::domain::ports::LoanCache;
use crate::services::MortgageService;

/// Response body for a successful calculation.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanResponse {
    pub result: CalculationResult,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Mortgage calculator HTTP server.
pub struct MortgageHttpServer<C: LoanCache + 'static> {
    config: ServerConfig,
    service: MortgageService<C>,
}

impl<C: LoanCache + 'static> MortgageHttpServer<C> {
    pub fn new(service: MortgageService<C>, config: ServerConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn router(self) -> Router {
        let app = Router::new()
            .route("/execute", post(execute::<C>).fallback(only_post))
            .route("/cache", get(list_cached::<C>).fallback(only_get))
            .route("/health", get(health_check))
            .with_state(self.service);

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
            )
            .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Mortgage calculator listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn only_post() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, "Only POST method is allowed")
}

async fn only_get() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, "Only GET method is allowed")
}

/// The body is parsed as JSON whatever its Content-Type.
async fn execute<C: LoanCache + 'static>(
    State(service): State<MortgageService<C>>,
    body: Bytes,
) -> Result<Json<LoanResponse>, ApiError> {
    let request: LoanRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "Invalid JSON format");
        api_error(StatusCode::BAD_REQUEST, "Invalid JSON format")
    })?;

    let entry = service.compute_or_fetch(&request).map_err(|err| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("Calculation error: {err}"),
        )
    })?;

    tracing::info!(id = entry.id, "Calculation succeeded");
    Ok(Json(LoanResponse {
        result: entry.result,
    }))
}

async fn list_cached<C: LoanCache + 'static>(
    State(service): State<MortgageService<C>>,
) -> Result<Json<Vec<CachedLoan>>, ApiError> {
    let loans = service.list_all();
    if loans.is_empty() {
        return Err(api_error(StatusCode::NOT_FOUND, "empty cache"));
    }
    Ok(Json(loans))
}
