//! Links (`@[alt](url)`) and images (`![alt::w::h](url)`).

use log::trace;
use sitefl_core::{Construct, Result, SiteflError};

use crate::compiler::Compiler;
use crate::cursor::Cursor;

const SIZE_DELIMITER: &[u8] = b"::";

impl<'a> Compiler<'a> {
    pub(crate) fn link(&mut self) -> Result<()> {
        self.cursor.advance();
        if !self.cursor.peek_is(0, b'[') {
            trace!("link trigger without '[' at {}, dropped", self.cursor.offset());
            return Ok(());
        }
        self.cursor.advance();

        let alt = self.cursor.take_until(|b| b == b']');
        self.cursor.advance();
        self.open_url(Construct::Link)?;
        let url = self.scan_url();

        self.emit("<a href=\"");
        self.emit_bytes(url);
        self.emit("\">");
        self.emit_bytes(if alt.is_empty() { url } else { alt });
        self.emit("</a>");
        Ok(())
    }

    pub(crate) fn image(&mut self) -> Result<()> {
        self.cursor.advance();
        if !self.cursor.peek_is(0, b'[') {
            trace!("image trigger without '[' at {}, dropped", self.cursor.offset());
            return Ok(());
        }
        self.cursor.advance();

        let alt = alt_segment(&mut self.cursor);
        let mut width: &[u8] = b"";
        let mut height: &[u8] = b"";
        if self.cursor.at(SIZE_DELIMITER) {
            self.cursor.advance_by(SIZE_DELIMITER.len());
            width = alt_segment(&mut self.cursor);
            if self.cursor.at(SIZE_DELIMITER) {
                self.cursor.advance_by(SIZE_DELIMITER.len());
                height = self.cursor.take_until(|b| b == b']');
            }
        }
        self.cursor.advance();
        self.open_url(Construct::Image)?;
        let url = self.scan_url();

        self.emit("<img src=\"");
        self.emit_bytes(url);
        self.emit("\" alt=\"");
        self.emit_bytes(if alt.is_empty() { url } else { alt });
        self.emit("\"");
        if !width.is_empty() {
            self.emit(" width=\"");
            self.emit_bytes(width);
            self.emit("\"");
        }
        if !height.is_empty() {
            self.emit(" height=\"");
            self.emit_bytes(height);
            self.emit("\"");
        }
        self.emit(">");
        Ok(())
    }

    /// Consume the `(` that must follow the alt text.
    fn open_url(&mut self, construct: Construct) -> Result<()> {
        if self.cursor.peek_is(0, b'(') {
            self.cursor.advance();
            return Ok(());
        }
        Err(SiteflError::Malformed {
            construct,
            found: self.cursor.current_char(),
            position: self.cursor.position(),
        })
    }

    /// Read a URL up to the `)` that closes the depth it started at.
    fn scan_url(&mut self) -> &'a [u8] {
        let start = self.cursor.offset();
        let mut depth = 0usize;
        while let Some(byte) = self.cursor.current() {
            match byte {
                b')' if depth == 0 => {
                    let url = self.cursor.slice(start, self.cursor.offset());
                    self.cursor.advance();
                    return url;
                }
                b')' => depth -= 1,
                b'(' => depth += 1,
                _ => {}
            }
            self.cursor.advance();
        }
        self.cursor.slice(start, self.cursor.offset())
    }
}

/// Bytes up to `]` or the `::` size delimiter, whichever comes first.
fn alt_segment<'a>(cursor: &mut Cursor<'a>) -> &'a [u8] {
    let start = cursor.offset();
    while let Some(byte) = cursor.current() {
        if byte == b']' || cursor.at(SIZE_DELIMITER) {
            break;
        }
        cursor.advance();
    }
    cursor.slice(start, cursor.offset())
}

#[cfg(test)]
mod tests {
    use crate::{compile_with, CompileOptions, MemoryReader};
    use sitefl_core::{Construct, SiteflError};

    fn html(input: &str) -> String {
        compile_with(input, &CompileOptions::default(), &MemoryReader::new())
            .unwrap()
            .html
    }

    fn error(input: &str) -> SiteflError {
        compile_with(input, &CompileOptions::default(), &MemoryReader::new()).unwrap_err()
    }

    #[test]
    fn test_link() {
        assert_eq!(
            html("@[Go](https://go.dev)"),
            "<a href=\"https://go.dev\">Go</a>"
        );
    }

    #[test]
    fn test_link_empty_alt_uses_url() {
        assert_eq!(
            html("@[](https://go.dev)"),
            "<a href=\"https://go.dev\">https://go.dev</a>"
        );
    }

    #[test]
    fn test_link_balanced_parens() {
        assert_eq!(
            html("see @[wiki](https://en.wikipedia.org/wiki/Rust_(language)) now"),
            "see <a href=\"https://en.wikipedia.org/wiki/Rust_(language)\">wiki</a> now"
        );
        assert_eq!(html("@[x](a(b(c))d)e"), "<a href=\"a(b(c))d\">x</a>e");
    }

    #[test]
    fn test_link_alt_is_raw() {
        assert_eq!(html("@[*a*](u)"), "<a href=\"u\">*a*</a>");
    }

    #[test]
    fn test_link_without_bracket_drops_trigger() {
        assert_eq!(html("@text"), "text");
        assert_eq!(html("mail me @ home"), "mail me  home");
        assert_eq!(html("@"), "");
    }

    #[test]
    fn test_link_unterminated_url_flushes() {
        assert_eq!(html("@[x](http://a"), "<a href=\"http://a\">x</a>");
    }

    #[test]
    fn test_link_missing_paren_is_fatal() {
        match error("line one\n@[x]y") {
            SiteflError::Malformed {
                construct,
                found,
                position,
            } => {
                assert_eq!(construct, Construct::Link);
                assert_eq!(found, Some('y'));
                assert_eq!((position.line, position.column), (1, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_link_missing_paren_at_end_of_input() {
        match error("@[never closed") {
            SiteflError::Malformed { found, .. } => assert_eq!(found, None),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_image() {
        assert_eq!(
            html("![alt](img.png)"),
            "<img src=\"img.png\" alt=\"alt\">"
        );
    }

    #[test]
    fn test_image_with_size() {
        assert_eq!(
            html("![alt::100::200](img.png)"),
            "<img src=\"img.png\" alt=\"alt\" width=\"100\" height=\"200\">"
        );
    }

    #[test]
    fn test_image_partial_size() {
        assert_eq!(
            html("![a::50::](i.png)"),
            "<img src=\"i.png\" alt=\"a\" width=\"50\">"
        );
        assert_eq!(
            html("![a::::80](i.png)"),
            "<img src=\"i.png\" alt=\"a\" height=\"80\">"
        );
        assert_eq!(
            html("![a::50](i.png)"),
            "<img src=\"i.png\" alt=\"a\" width=\"50\">"
        );
    }

    #[test]
    fn test_image_empty_alt_uses_url() {
        assert_eq!(
            html("![::10::20](pic.jpg)"),
            "<img src=\"pic.jpg\" alt=\"pic.jpg\" width=\"10\" height=\"20\">"
        );
    }

    #[test]
    fn test_image_single_colon_stays_in_alt() {
        assert_eq!(
            html("![a:b](c)"),
            "<img src=\"c\" alt=\"a:b\">"
        );
    }

    #[test]
    fn test_image_without_bracket_drops_trigger() {
        assert_eq!(html("Hello!"), "Hello");
        assert_eq!(html("!x"), "x");
    }

    #[test]
    fn test_image_missing_paren_is_fatal() {
        match error("![alt] (img.png)") {
            SiteflError::Malformed {
                construct, found, ..
            } => {
                assert_eq!(construct, Construct::Image);
                assert_eq!(found, Some(' '));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_after_image_is_kept() {
        assert_eq!(
            html("![a](b)\nnext"),
            "<img src=\"b\" alt=\"a\">\nnext"
        );
    }
}
