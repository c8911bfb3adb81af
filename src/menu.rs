//! Page select control (`#pageselect-menu`)

use serde::Serialize;

use crate::catalog::PageCatalog;

pub const SELECT_ID: &str = "pageselect-menu";

/// Value and label of the leading option; selecting it does nothing
pub const PLACEHOLDER: &str = "title";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectControl {
    pub id: &'static str,
    options: Vec<MenuOption>,
    selected: Option<String>,
}

impl Default for SelectControl {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectControl {
    /// Control holding only the placeholder option
    pub fn new() -> Self {
        Self {
            id: SELECT_ID,
            options: vec![MenuOption {
                value: PLACEHOLDER.to_string(),
                label: PLACEHOLDER.to_string(),
            }],
            selected: None,
        }
    }

    /// Control populated from the catalog
    pub fn from_catalog(catalog: &PageCatalog) -> Self {
        let mut control = Self::new();
        control.populate(catalog);
        control
    }

    /// Append one option per catalog entry, in catalog order
    pub fn populate(&mut self, catalog: &PageCatalog) {
        self.options.extend(catalog.pages().iter().map(|page| MenuOption {
            value: page.clone(),
            label: page.clone(),
        }));
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Options after the placeholder
    pub fn page_options(&self) -> &[MenuOption] {
        &self.options[1..]
    }

    pub fn select(&mut self, value: Option<&str>) {
        self.selected = value.map(str::to_string);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuData;

    fn catalog(pages: &[&str]) -> PageCatalog {
        PageCatalog::from_menu_data(MenuData {
            json: pages.iter().map(|p| p.to_string()).collect(),
        })
    }

    #[test]
    fn test_populate_one_option_per_entry_in_order() {
        let pages = ["3r", "1v", "1v", "ms Z"];
        let control = SelectControl::from_catalog(&catalog(&pages));

        assert_eq!(control.options().len(), pages.len() + 1);
        assert_eq!(control.options()[0].value, PLACEHOLDER);
        for (option, page) in control.page_options().iter().zip(pages.iter()) {
            assert_eq!(option.value, *page);
            assert_eq!(option.label, *page);
        }
    }

    #[test]
    fn test_empty_catalog() {
        let control = SelectControl::from_catalog(&catalog(&[]));
        assert_eq!(control.options().len(), 1);
        assert!(control.page_options().is_empty());
    }

    #[test]
    fn test_selection_tracking() {
        let mut control = SelectControl::from_catalog(&catalog(&["1r"]));
        assert_eq!(control.selected(), None);
        control.select(Some("1r"));
        assert!(control.is_selected("1r"));
        control.select(None);
        assert_eq!(control.selected(), None);
    }
}
