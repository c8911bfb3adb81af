//! Page View
//!
//! Browser-side state of the viewer: the populated select control, the
//! `.panel-body` content region and the tooltip binder. A selection change
//! runs in three steps so interleaved completions can be reproduced:
//!
//! 1. `begin_change` records the selection and hands out a `PendingLoad`
//! 2. `fetch` performs the load (no cancellation, no timeout)
//! 3. `complete` applies the result to the region
//!
//! Failed loads leave the region untouched and are only logged. Under
//! `StalePolicy::LastWriteWins` a slow, superseded load still overwrites the
//! region when it lands; `LatestSelectionWins` drops it instead.

use crate::catalog::PageCatalog;
use crate::config::{StalePolicy, ViewerConfig};
use crate::fragment::{ContentFragment, TrustPolicy};
use crate::loader::ResourceLoader;
use crate::menu::SelectControl;
use crate::selection::{self, Selection, SelectionError};
use crate::tooltip::{TooltipBinder, TooltipConfig};

pub const PANEL_CLASS: &str = "panel-body";

/// The `.panel-body` region; its content is replaced wholesale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRegion {
    html: String,
}

impl ContentRegion {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    fn replace(&mut self, html: String) {
        self.html = html;
    }
}

/// A load issued for one selection, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub seq: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// No selection or placeholder: nothing requested
    Ignored,
    /// Region replaced and tooltips re-initialized
    Updated,
    /// Completion for an older selection, dropped
    Superseded,
    /// Load, parse or render failed; region left as it was
    Failed(u16),
}

pub struct PageView<L, T> {
    menu: SelectControl,
    region: ContentRegion,
    loader: L,
    tooltips: T,
    tooltip_config: TooltipConfig,
    trust: TrustPolicy,
    stale_policy: StalePolicy,
    next_seq: u64,
    latest_seq: Option<u64>,
}

impl<L, T> PageView<L, T>
where
    L: ResourceLoader,
    T: TooltipBinder,
{
    pub fn new(catalog: &PageCatalog, loader: L, tooltips: T, config: &ViewerConfig) -> Self {
        Self {
            menu: SelectControl::from_catalog(catalog),
            region: ContentRegion::default(),
            loader,
            tooltips,
            tooltip_config: TooltipConfig::default(),
            trust: config.trust,
            stale_policy: config.stale_policy,
            next_seq: 0,
            latest_seq: None,
        }
    }

    /// Start with existing panel content (what the page markup shipped with)
    pub fn with_region(mut self, region: ContentRegion) -> Self {
        self.region = region;
        self
    }

    pub fn menu(&self) -> &SelectControl {
        &self.menu
    }

    pub fn region(&self) -> &ContentRegion {
        &self.region
    }

    pub fn tooltips(&self) -> &T {
        &self.tooltips
    }

    /// Record the new select value; returns the load to issue, if any
    pub fn begin_change(&mut self, value: Option<&str>) -> Option<PendingLoad> {
        self.menu.select(value);

        let name = match Selection::from_value(value) {
            Selection::Page(name) => name,
            Selection::None | Selection::Placeholder => {
                tracing::debug!("Ignoring selection {:?}", value);
                return None;
            }
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);

        tracing::debug!("Selection {} -> load #{}", name, seq);
        Some(PendingLoad {
            seq,
            name: name.to_string(),
        })
    }

    pub async fn fetch(&self, pending: &PendingLoad) -> Result<ContentFragment, SelectionError> {
        selection::load_fragment(&self.loader, &pending.name, self.trust).await
    }

    /// Apply a finished load to the region
    pub fn complete(
        &mut self,
        pending: PendingLoad,
        result: Result<ContentFragment, SelectionError>,
    ) -> ChangeOutcome {
        if self.stale_policy == StalePolicy::LatestSelectionWins
            && self.latest_seq != Some(pending.seq)
        {
            tracing::debug!("Dropping stale load #{} for {}", pending.seq, pending.name);
            return ChangeOutcome::Superseded;
        }

        let html = match result.and_then(|fragment| fragment.render().map_err(SelectionError::from)) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Load #{} for {} failed: {}", pending.seq, pending.name, e);
                return ChangeOutcome::Failed(e.status());
            }
        };

        self.region.replace(html);
        self.tooltips.rebind(&self.tooltip_config);
        ChangeOutcome::Updated
    }

    /// Full selection-change handler: begin, fetch and apply in one go
    pub async fn on_change(&mut self, value: Option<&str>) -> ChangeOutcome {
        let Some(pending) = self.begin_change(value) else {
            return ChangeOutcome::Ignored;
        };
        let result = self.fetch(&pending).await;
        self.complete(pending, result)
    }
}
