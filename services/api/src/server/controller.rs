use super::open_api;
use crate::modules::{customer, reservation, vehicle};
use axum::{body::Body, routing::get, Router};
use http::{header, Method, Request, StatusCode};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP
/// request and thus its fields should contain types that are cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates the main axum router/controller to be served over http
pub fn new(db: DatabaseConnection) -> Router {
    let state = AppState { db };

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(Any)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .nest("/vehicles", vehicle::routes::create_router())
        .nest(
            "/customers/individuals",
            customer::routes::create_individual_router(),
        )
        .nest(
            "/customers/companies",
            customer::routes::create_company_router(),
        )
        .nest("/reservations", reservation::routes::create_router())
        .layer(tracing_layer)
        .layer(cors)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
