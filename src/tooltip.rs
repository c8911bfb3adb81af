//! Tooltip activation on `.hoverover` elements

pub const HOVER_SELECTOR: &str = ".hoverover";
pub const TOOLTIP_THEME: &str = "tooltipster-light";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipConfig {
    pub selector: &'static str,
    pub theme: &'static str,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            selector: HOVER_SELECTOR,
            theme: TOOLTIP_THEME,
        }
    }
}

/// Re-initializes tooltips after the panel content changes
pub trait TooltipBinder {
    fn rebind(&mut self, config: &TooltipConfig);
}
