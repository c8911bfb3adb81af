//! Page Viewer
//!
//! Populates a page selector from a catalog of page identifiers, loads the
//! matching `<id>.json` document on selection and injects its `html_abbrev`
//! fragment into the content panel.
//!
//! Layout:
//! - `catalog/`: page catalog + menu initialization data
//! - `menu/`: select control population
//! - `loader/`: resource path construction and async loading
//! - `document/` + `fragment/`: JSON document parsing and fragment rendering
//! - `selection/` + `view/`: the selection-change handler and panel state
//! - `testing/`: in-memory loader and recording tooltip binder for tests
//! - `api_server/` + `web/`: Axum server producing the page (feature `api`)

pub mod catalog;
pub mod config;
pub mod document;
pub mod fragment;
pub mod loader;
pub mod menu;
pub mod selection;
pub mod testing;
pub mod tooltip;
pub mod view;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use catalog::{CatalogError, MenuData, PageCatalog};
pub use config::{StalePolicy, ViewerConfig};
pub use document::{DocumentError, PageDocument};
pub use fragment::{ContentFragment, TrustPolicy};
pub use loader::{FsLoader, LoadError, ResourceLoader};
pub use menu::{MenuOption, SelectControl, PLACEHOLDER};
pub use selection::{Selection, SelectionError};
pub use tooltip::{TooltipBinder, TooltipConfig};
pub use view::{ChangeOutcome, ContentRegion, PageView, PendingLoad};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
