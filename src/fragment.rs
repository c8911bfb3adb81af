//! Content fragment rendered into the panel body
//!
//! The fragment is a typed element (tag, class, binding attribute, inner
//! content) rendered through Askama rather than concatenated by hand.

use askama::Template;
use std::str::FromStr;

pub const FRAGMENT_TAG: &str = "span";
pub const FRAGMENT_CLASS: &str = "innerbody";
pub const FRAGMENT_BINDING: &str = "html: $data.body";

/// Whether fragment content is embedded as markup or escaped as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrustPolicy {
    /// Embed `html_abbrev` verbatim (local, trusted resources)
    #[default]
    Trusted,
    /// HTML-escape `html_abbrev` before embedding
    Escaped,
}

impl FromStr for TrustPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trusted" => Ok(TrustPolicy::Trusted),
            "escaped" => Ok(TrustPolicy::Escaped),
            other => Err(format!("unknown trust policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFragment {
    pub tag: &'static str,
    pub class: &'static str,
    pub binding: &'static str,
    pub inner: String,
    pub trust: TrustPolicy,
}

#[derive(Template)]
#[template(
    source = r#"<{{ tag }} class="{{ class }}" data-bind="{{ binding }}">{% if trusted %}{{ inner|safe }}{% else %}{{ inner }}{% endif %}</{{ tag }}>"#,
    ext = "html"
)]
struct FragmentTemplate<'a> {
    tag: &'a str,
    class: &'a str,
    binding: &'a str,
    inner: &'a str,
    trusted: bool,
}

impl ContentFragment {
    pub fn new(inner: impl Into<String>, trust: TrustPolicy) -> Self {
        Self {
            tag: FRAGMENT_TAG,
            class: FRAGMENT_CLASS,
            binding: FRAGMENT_BINDING,
            inner: inner.into(),
            trust,
        }
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        FragmentTemplate {
            tag: self.tag,
            class: self.class,
            binding: self.binding,
            inner: &self.inner,
            trusted: self.trust == TrustPolicy::Trusted,
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_fragment_embeds_markup() {
        let html = ContentFragment::new("<b>hi</b>", TrustPolicy::Trusted)
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<span class="innerbody" data-bind="html: $data.body"><b>hi</b></span>"#
        );
    }

    #[test]
    fn test_escaped_fragment() {
        let html = ContentFragment::new("<script>alert(1)</script>", TrustPolicy::Escaped)
            .render()
            .unwrap();
        assert!(html.starts_with(r#"<span class="innerbody""#));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_inner() {
        let html = ContentFragment::new("", TrustPolicy::Trusted).render().unwrap();
        assert_eq!(html, r#"<span class="innerbody" data-bind="html: $data.body"></span>"#);
    }

    #[test]
    fn test_trust_policy_parse() {
        assert_eq!("trusted".parse::<TrustPolicy>(), Ok(TrustPolicy::Trusted));
        assert_eq!(" ESCAPED ".parse::<TrustPolicy>(), Ok(TrustPolicy::Escaped));
        assert!("raw".parse::<TrustPolicy>().is_err());
    }
}
