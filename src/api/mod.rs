use crate::provider::IdentityProvider;
use anyhow::Result;
use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug_span, info, Span};
use ulid::Ulid;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod handlers;

#[allow(unused_imports)]
use handlers::{auth, auth::__path_auth, health, health::__path_health};

#[derive(OpenApi)]
#[openapi(
    paths(auth, health),
    components(schemas(auth::AuthRequest, health::Health)),
    tags(
        (name = "pordego", description = "User pool gateway API"),
    )
)]
struct ApiDoc;

/// Build the application router.
///
/// The provider handle is injected as an extension so handlers stay decoupled
/// from the concrete client, tests swap in a scripted provider here.
#[must_use]
pub fn router(provider: Arc<dyn IdentityProvider>) -> Router {
    let cors = CorsLayer::new()
        // allow `GET` and `POST` when accessing the resource
        .allow_methods([Method::GET, Method::POST])
        // allow requests from any origin
        .allow_origin(Any);

    Router::new()
        .route("/auth", post(auth::auth))
        .route("/health", get(health::health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(provider)),
        )
}

/// Serve the API.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn serve(port: u16, provider: Arc<dyn IdentityProvider>) -> Result<()> {
    let app = router(provider);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{port}");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// span
fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, request_id)
}
