//! Test doubles for driving `PageView` without a network or a browser
//!
//! - `MemoryLoader`: canned responses keyed by page name, with any status
//! - `TooltipLog`: records every tooltip re-initialization

use std::collections::HashMap;

use crate::loader::{resource_path, LoadError, ResourceLoader};
use crate::tooltip::{TooltipBinder, TooltipConfig};

#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    responses: HashMap<String, (u16, String)>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, name: &str, body: &str) -> Self {
        self.with_response(name, 200, body)
    }

    pub fn with_response(mut self, name: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(name.to_string(), (status, body.to_string()));
        self
    }
}

impl ResourceLoader for MemoryLoader {
    async fn load(&self, name: &str) -> Result<String, LoadError> {
        let path = resource_path(name);
        match self.responses.get(name) {
            Some((200, body)) => Ok(body.clone()),
            Some((status, _)) => Err(LoadError::Status {
                path,
                status: *status,
            }),
            None => Err(LoadError::NotFound(path)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TooltipLog {
    pub calls: Vec<TooltipConfig>,
}

impl TooltipBinder for TooltipLog {
    fn rebind(&mut self, config: &TooltipConfig) {
        tracing::debug!("Rebinding tooltips on {} ({})", config.selector, config.theme);
        self.calls.push(config.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_loader_statuses() {
        let loader = MemoryLoader::new()
            .with_page("ok", "{}")
            .with_response("gone", 404, "Not Found")
            .with_response("oops", 500, "");

        assert_eq!(loader.load("ok").await.unwrap(), "{}");
        assert_eq!(loader.load("gone").await.unwrap_err().status(), 404);
        assert_eq!(loader.load("oops").await.unwrap_err().status(), 500);
        assert!(matches!(
            loader.load("unknown").await.unwrap_err(),
            LoadError::NotFound(_)
        ));
    }

    #[test]
    fn test_tooltip_log_records_rebinds() {
        let mut log = TooltipLog::default();
        log.rebind(&TooltipConfig::default());
        assert_eq!(log.calls.len(), 1);
        assert_eq!(log.calls[0].selector, ".hoverover");
    }
}
