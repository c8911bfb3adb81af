//! Viewer configuration, read from environment variables
//!
//! - `JSON_DIR`: directory holding `<id>.json` resources (default `./json`)
//! - `MENU_DATA`: optional `{"json": [...]}` file; unset means scan `JSON_DIR`
//! - `PORT`: server port (default 3000)
//! - `CONTENT_TRUST`: `trusted` | `escaped` (default `trusted`)
//! - `STALE_POLICY`: `last-write-wins` | `latest-selection-wins`

use std::path::PathBuf;
use std::str::FromStr;

use crate::fragment::TrustPolicy;

/// How completions of superseded selections are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Every completion overwrites the panel, in arrival order. Only
    /// `PageView` can interleave completions; the served page still queues
    /// requests per element (`hx-sync="this:queue last"`).
    #[default]
    LastWriteWins,
    /// Only the completion for the most recent selection is applied; the
    /// served page aborts the in-flight request (`hx-sync="this:replace"`)
    LatestSelectionWins,
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-write-wins" => Ok(StalePolicy::LastWriteWins),
            "latest-selection-wins" => Ok(StalePolicy::LatestSelectionWins),
            other => Err(format!("unknown stale policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub json_dir: PathBuf,
    pub menu_data: Option<PathBuf>,
    pub port: u16,
    pub trust: TrustPolicy,
    pub stale_policy: StalePolicy,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            json_dir: PathBuf::from("./json"),
            menu_data: None,
            port: 3000,
            trust: TrustPolicy::default(),
            stale_policy: StalePolicy::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let json_dir = lookup("JSON_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.json_dir);

        let menu_data = lookup("MENU_DATA")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let trust = parse_or_default(lookup("CONTENT_TRUST"), "CONTENT_TRUST", defaults.trust);
        let stale_policy =
            parse_or_default(lookup("STALE_POLICY"), "STALE_POLICY", defaults.stale_policy);

        Self {
            json_dir,
            menu_data,
            port,
            trust,
            stale_policy,
        }
    }
}

fn parse_or_default<T>(raw: Option<String>, key: &str, default: T) -> T
where
    T: FromStr<Err = String>,
{
    match raw.map(|v| v.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!("Ignoring {}: {}", key, e);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::from_lookup(|_| None);
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.json_dir, PathBuf::from("./json"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.trust, TrustPolicy::Trusted);
        assert_eq!(config.stale_policy, StalePolicy::LastWriteWins);
    }

    #[test]
    fn test_overrides() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("JSON_DIR", "/srv/pages/json"),
            ("MENU_DATA", "/srv/pages/menu.json"),
            ("PORT", "8080"),
            ("CONTENT_TRUST", "Escaped"),
            ("STALE_POLICY", "latest-selection-wins"),
        ]));
        assert_eq!(config.json_dir, PathBuf::from("/srv/pages/json"));
        assert_eq!(config.menu_data, Some(PathBuf::from("/srv/pages/menu.json")));
        assert_eq!(config.port, 8080);
        assert_eq!(config.trust, TrustPolicy::Escaped);
        assert_eq!(config.stale_policy, StalePolicy::LatestSelectionWins);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("CONTENT_TRUST", "sometimes"),
            ("STALE_POLICY", "first-wins"),
            ("MENU_DATA", "  "),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.trust, TrustPolicy::Trusted);
        assert_eq!(config.stale_policy, StalePolicy::LastWriteWins);
        assert_eq!(config.menu_data, None);
    }
}
