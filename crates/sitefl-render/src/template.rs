//! HTML template splicing.
//!
//! A template is any HTML page with a content anchor, an opening tag
//! carrying `id="content"`. The compiled fragment goes right after that
//! tag. A stylesheet path goes into the first `href="` slot
//! before the anchor, normally a `<link rel="stylesheet" href="">`.

use regex::Regex;
use sitefl_core::{Result, SiteflError};
use std::sync::LazyLock;

/// Regex for the tag the fragment is inserted after.
static CONTENT_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id\s*=\s*["']content["'][^>]*>"#).unwrap());

/// Regex for the opening of an href attribute value.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href\s*=\s*""#).unwrap());

/// Opening of the `-w` wrapper.
pub const UNIT_OPEN: &str = "<div id='unit'>\n";

/// Closing of the `-w` wrapper.
pub const UNIT_CLOSE: &str = "\n</div>";

/// Wrap a fragment in the unit div.
pub fn wrap_unit(fragment: &str) -> String {
    format!("{}{}{}", UNIT_OPEN, fragment, UNIT_CLOSE)
}

/// A standalone stylesheet link, used when there is no template.
pub fn stylesheet_link(href: &str) -> String {
    format!("<link rel=\"stylesheet\" href=\"{}\">\n", href)
}

/// Split a template into the part up to and including the content anchor
/// and the part after it.
///
/// # Example
///
/// ```
/// use sitefl_render::split_template;
///
/// let (head, tail) = split_template("<main id=\"content\"></main>").unwrap();
/// assert_eq!(head, "<main id=\"content\">");
/// assert_eq!(tail, "</main>");
/// ```
pub fn split_template(template: &str) -> Result<(&str, &str)> {
    let anchor = CONTENT_ANCHOR_RE.find(template).ok_or_else(|| {
        SiteflError::Template("no element with id=\"content\" to insert the page into".into())
    })?;
    Ok(template.split_at(anchor.end()))
}

/// Insert `href` at the first `href="` in `head`.
pub fn inject_stylesheet(head: &str, href: &str) -> Result<String> {
    let slot = HREF_RE.find(head).ok_or_else(|| {
        SiteflError::Template("no href=\"\" slot before the content anchor for the stylesheet".into())
    })?;
    let (before, after) = head.split_at(slot.end());
    Ok(format!("{}{}{}", before, href, after))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit("<hr>"), "<div id='unit'>\n<hr>\n</div>");
    }

    #[test]
    fn test_split_template() {
        let template = "<html><body><div class=\"x\" id=\"content\">\n</div></body></html>";
        let (head, tail) = split_template(template).unwrap();
        assert_eq!(head, "<html><body><div class=\"x\" id=\"content\">");
        assert_eq!(tail, "\n</div></body></html>");
    }

    #[test]
    fn test_split_template_single_quotes() {
        let (head, tail) = split_template("<div id='content' class='c'>|</div>").unwrap();
        assert_eq!(head, "<div id='content' class='c'>");
        assert_eq!(tail, "|</div>");
    }

    #[test]
    fn test_split_template_uses_first_anchor() {
        let (head, _) = split_template("<a id=\"content\"><b id=\"content\">").unwrap();
        assert_eq!(head, "<a id=\"content\">");
    }

    #[test]
    fn test_split_template_without_anchor() {
        let err = split_template("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, SiteflError::Template(_)));
    }

    #[test]
    fn test_inject_stylesheet() {
        let head = "<head><link rel=\"stylesheet\" href=\"\"></head>";
        assert_eq!(
            inject_stylesheet(head, "site.css").unwrap(),
            "<head><link rel=\"stylesheet\" href=\"site.css\"></head>"
        );
    }

    #[test]
    fn test_inject_stylesheet_without_slot() {
        assert!(inject_stylesheet("<head></head>", "a.css").is_err());
    }

    #[test]
    fn test_stylesheet_link() {
        assert_eq!(
            stylesheet_link("a.css"),
            "<link rel=\"stylesheet\" href=\"a.css\">\n"
        );
    }
}
