//! Inline style helpers

use std::collections::BTreeMap;

use berth_dom::Dom;

/// Static CSS rule table
pub type Rules = &'static [(&'static str, &'static str)];

/// User-supplied CSS declarations, keyed by property name
pub type StyleMap = BTreeMap<String, String>;

/// Apply a static rule table
pub fn apply_rules<D: Dom>(dom: &D, node: &D::Node, rules: Rules) {
    for (property, value) in rules {
        dom.set_style(node, property, value);
    }
}

/// Apply user declarations, accepting camelCase or kebab-case names
pub fn apply_map<D: Dom>(dom: &D, node: &D::Node, styles: &StyleMap) {
    for (property, value) in styles {
        dom.set_style(node, &property_name(property), value);
    }
}

/// Normalize a property name to its CSS (kebab-case) form
///
/// `borderRadius` becomes `border-radius`; custom properties and names that
/// are already kebab-case pass through.
pub fn property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Format a pixel length
#[inline]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name() {
        assert_eq!(property_name("borderRadius"), "border-radius");
        assert_eq!(property_name("z-index"), "z-index");
        assert_eq!(property_name("zIndex"), "z-index");
        assert_eq!(property_name("--accentColor"), "--accentColor");
    }

    #[test]
    fn test_px() {
        assert_eq!(px(20.0), "20px");
        assert_eq!(px(12.5), "12.5px");
    }
}
