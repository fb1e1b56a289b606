//! Origin allow-list

use serde::Deserialize;
use url::Url;

/// Configured allowed origin(s)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AllowedOrigin {
    One(String),
    Many(Vec<String>),
}

/// Resolve the origins messages may come from and go to
///
/// An explicit, non-empty setting wins. Otherwise the origin of `widget_url`
/// is used, or the wildcard when the URL cannot be parsed.
pub fn resolve_allowed_origins(explicit: Option<&AllowedOrigin>, widget_url: &str) -> Vec<String> {
    match explicit {
        Some(AllowedOrigin::One(origin)) if !origin.is_empty() => return vec![origin.clone()],
        Some(AllowedOrigin::Many(origins)) if !origins.is_empty() => return origins.clone(),
        _ => {}
    }
    match Url::parse(widget_url) {
        Ok(url) => vec![url.origin().ascii_serialization()],
        Err(_) => vec!["*".to_string()],
    }
}

/// Check an origin against the allow-list
pub fn is_origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|a| a == "*" || a == origin)
}

/// Target origin for outbound messages
pub fn target_origin(allowed: &[String]) -> &str {
    allowed
        .first()
        .map(String::as_str)
        .filter(|o| !o.is_empty())
        .unwrap_or("*")
}
