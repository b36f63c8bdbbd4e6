use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::repository::ProjectStore;
use crate::handlers::{health, projects};
use crate::middleware::api_key_middleware;

/// Shared handler state. Cheap to clone; everything behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            api_key: api_key.into(),
        }
    }
}

/// Build the full application router
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/health", get(health::health))
        // Protected by the API key gate
        .merge(project_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }

    router
}

fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(projects::project_list).post(projects::project_create),
        )
        .route(
            "/projects/:id",
            get(projects::project_get).delete(projects::project_delete),
        )
        .route_layer(middleware::from_fn_with_state(state, api_key_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
}
