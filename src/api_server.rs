// Axum server for the page viewer
//
// Serves the page itself, the panel fragment for a selection, the raw
// `<id>.json` resources and the menu initialization data.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use axum_htmx::HxRequest;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::catalog::PageCatalog;
use crate::config::ViewerConfig;
use crate::loader::FsLoader;
use crate::selection::{self, Selection, SelectionError};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ViewerConfig>,
    pub catalog: Arc<PageCatalog>,
    pub loader: Arc<FsLoader>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> anyhow::Result<Self> {
        let catalog = match &config.menu_data {
            Some(path) => {
                tracing::info!("Loading menu data from {}", path.display());
                PageCatalog::from_menu_file(path)?
            }
            None => {
                tracing::info!("Scanning {} for pages", config.json_dir.display());
                PageCatalog::scan_dir(&config.json_dir)?
            }
        };
        tracing::info!("Catalog has {} pages", catalog.len());

        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: ViewerConfig, catalog: PageCatalog) -> Self {
        let loader = FsLoader::new(config.json_dir.clone());
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            loader: Arc::new(loader),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let resources = ServeDir::new(&state.config.json_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Page + panel fragment (HTML)
        .route("/", get(pages::index_page))
        .route("/fragment", get(get_fragment))

        // Menu initialization data (JSON)
        .route("/api/menu", get(get_menu))

        // Raw page resources: /json/<id>.json
        .nest_service("/json", resources)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_menu(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.to_menu_data())
}

#[derive(serde::Deserialize, Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Panel fragment for a selection
///
/// GET /fragment?page=1r
///
/// - 200: rendered `<span class="innerbody">` fragment
/// - 204: no selection / placeholder (htmx does not swap)
/// - 4xx/5xx: load or parse failure (htmx leaves the panel unchanged)
///
/// Non-htmx requests are redirected to the full page with the selection.
async fn get_fragment(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<PageQuery>,
) -> Result<Response, AppError> {
    let name = match Selection::from_value(params.page.as_deref()) {
        Selection::Page(name) => name,
        Selection::None | Selection::Placeholder => {
            tracing::debug!("Fragment request without a page: {:?}", params.page);
            return Ok(StatusCode::NO_CONTENT.into_response());
        }
    };

    if !is_htmx {
        let target = format!("/?page={}", urlencoding::encode(name));
        return Ok(Redirect::to(&target).into_response());
    }

    let fragment = selection::load_fragment(state.loader.as_ref(), name, state.config.trust).await?;
    let html = fragment.render().map_err(SelectionError::from)?;

    Ok(Html(html).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Selection(SelectionError),
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        AppError::Selection(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Selection(e) => {
                let status = StatusCode::from_u16(e.status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, e.to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        } else {
            tracing::warn!("{}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
