//! Sitefl Render
//!
//! This crate turns a compiled HTML fragment into the final page:
//!
//! - **Wrapper** - optionally surround the fragment with `<div id='unit'>`
//! - **Template** - splice the fragment into an HTML page after its
//!   `id="content"` element
//! - **Stylesheet** - fill the template's `href=""` slot, or prepend a
//!   `<link>` when there is no template
//!
//! # Example
//!
//! ```
//! use sitefl_render::Page;
//!
//! let html = Page::new("<hr>").wrap(true).render().unwrap();
//! assert_eq!(html, "<div id='unit'>\n<hr>\n</div>");
//! ```

pub mod template;

pub use template::{inject_stylesheet, split_template, stylesheet_link, wrap_unit};

use log::debug;
use sitefl_core::Result;
use std::io::Write;

/// A compiled fragment plus the page settings applied around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    fragment: String,
    wrap: bool,
    template: Option<String>,
    stylesheet: Option<String>,
}

impl Page {
    /// Create a page holding only `fragment`.
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            ..Self::default()
        }
    }

    /// Wrap the fragment in the unit div.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Splice the fragment into `template`.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Link the stylesheet at `href`.
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Assemble the page.
    ///
    /// # Errors
    ///
    /// Returns [`sitefl_core::SiteflError::Template`] when the template has
    /// no content anchor, or a stylesheet is set and the template has no
    /// `href="` slot before the anchor.
    pub fn render(&self) -> Result<String> {
        let body = if self.wrap {
            wrap_unit(&self.fragment)
        } else {
            self.fragment.clone()
        };

        let page = match (&self.template, &self.stylesheet) {
            (Some(template), stylesheet) => {
                let (head, tail) = split_template(template)?;
                let head = match stylesheet {
                    Some(href) => inject_stylesheet(head, href)?,
                    None => head.to_string(),
                };
                debug!("Spliced {} bytes into template", body.len());
                format!("{}{}{}", head, body, tail)
            }
            (None, Some(href)) => format!("{}{}", stylesheet_link(href), body),
            (None, None) => body,
        };

        Ok(page)
    }

    /// Assemble the page and write it to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.render()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
