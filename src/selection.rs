//! Selection-change handling shared by the panel view and the server
//!
//! A change carries the new select value. `None` and the placeholder are
//! ignored; any other value, including the empty string, names a page to load.

use crate::document::{DocumentError, PageDocument};
use crate::fragment::{ContentFragment, TrustPolicy};
use crate::loader::{LoadError, ResourceLoader};
use crate::menu::PLACEHOLDER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    None,
    Placeholder,
    Page(&'a str),
}

impl<'a> Selection<'a> {
    pub fn from_value(value: Option<&'a str>) -> Self {
        match value {
            None => Selection::None,
            Some(PLACEHOLDER) => Selection::Placeholder,
            Some(page) => Selection::Page(page),
        }
    }

    pub fn page(&self) -> Option<&'a str> {
        match *self {
            Selection::Page(page) => Some(page),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] DocumentError),
    #[error("failed to render fragment: {0}")]
    Render(#[from] askama::Error),
}

impl SelectionError {
    pub fn status(&self) -> u16 {
        match self {
            SelectionError::Load(e) => e.status(),
            SelectionError::Parse(_) => 422,
            SelectionError::Render(_) => 500,
        }
    }
}

/// Load the named page and wrap its `html_abbrev` as a panel fragment
pub async fn load_fragment<L>(
    loader: &L,
    name: &str,
    trust: TrustPolicy,
) -> Result<ContentFragment, SelectionError>
where
    L: ResourceLoader,
{
    let raw = loader.load(name).await?;
    let document = PageDocument::parse(&raw)?;
    if !document.has_abbrev() {
        tracing::warn!("Page {} has no string html_abbrev field", name);
    }
    Ok(ContentFragment::new(document.abbrev_html(), trust))
}
