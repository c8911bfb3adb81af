// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};

use crate::api_server::{AppState, PageQuery};
use crate::config::StalePolicy;
use crate::menu::{SelectControl, PLACEHOLDER, SELECT_ID};
use crate::selection::{self, Selection, SelectionError};
use crate::tooltip::TooltipConfig;
use crate::view::PANEL_CLASS;

// ============================================================================
// Viewer Page
// ============================================================================

pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub select_id: &'static str,
    pub placeholder: &'static str,
    pub options: Vec<OptionView>,
    pub panel_class: &'static str,
    pub panel_html: String,
    pub tooltip: TooltipConfig,
    pub sync_strategy: &'static str,
}

/// `hx-sync` value for the select. htmx never runs two requests from one
/// element at once, so the page cannot show a superseded response either way.
pub fn sync_strategy(policy: StalePolicy) -> &'static str {
    match policy {
        StalePolicy::LastWriteWins => "this:queue last",
        StalePolicy::LatestSelectionWins => "this:replace",
    }
}

impl IndexTemplate {
    pub fn new(menu: &SelectControl, panel_html: String, stale_policy: StalePolicy) -> Self {
        let options = menu
            .page_options()
            .iter()
            .map(|option| OptionView {
                value: option.value.clone(),
                label: option.label.clone(),
                selected: menu.is_selected(&option.value),
            })
            .collect();

        Self {
            title: "Page Viewer".to_string(),
            select_id: SELECT_ID,
            placeholder: PLACEHOLDER,
            options,
            panel_class: PANEL_CLASS,
            panel_html,
            tooltip: TooltipConfig::default(),
            sync_strategy: sync_strategy(stale_policy),
        }
    }
}

/// GET / and GET /?page=<id> (panel prefilled for non-htmx clients)
pub async fn index_page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> impl IntoResponse {
    let mut menu = SelectControl::from_catalog(&state.catalog);
    let mut panel_html = String::new();

    if let Some(name) = Selection::from_value(params.page.as_deref()).page() {
        menu.select(Some(name));
        let rendered = selection::load_fragment(state.loader.as_ref(), name, state.config.trust)
            .await
            .and_then(|fragment| fragment.render().map_err(SelectionError::from));
        match rendered {
            Ok(html) => panel_html = html,
            Err(e) => tracing::warn!("Leaving panel empty for {}: {}", name, e),
        }
    }

    let template = IndexTemplate::new(&menu, panel_html, state.config.stale_policy);
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}
