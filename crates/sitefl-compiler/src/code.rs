//! Line-numbered code blocks.
//!
//! `` `code` `` numbers its lines inline; `` `::path` `` pulls the lines
//! from an [`IncludeReader`]. Both render inside `<pre>`, each line
//! prefixed with a right-aligned three-column number and a bar.

use std::io::{self, BufRead};

use log::{trace, warn};
use sitefl_core::{Span, Warning};

use crate::compiler::{Compiler, CODE, ESCAPE};
use crate::include::IncludeReader;

const INCLUDE_PREFIX: &[u8] = b"::";

/// The `"  7| "` prefix for line `number`.
pub fn line_prefix(number: usize) -> String {
    format!("{:>3}| ", number)
}

impl Compiler<'_> {
    pub(crate) fn code_block(&mut self) {
        self.cursor.advance();
        self.emit("<pre>");
        if self.cursor.at(INCLUDE_PREFIX) {
            self.cursor.advance_by(INCLUDE_PREFIX.len());
            self.included_code();
        } else {
            self.inline_code();
        }
        self.emit("</pre>");
    }

    fn inline_code(&mut self) {
        let mut line = 1;
        if self.cursor.peek_is(0, b'\n') {
            line = 0;
        } else {
            self.emit(&line_prefix(line));
        }

        while let Some(byte) = self.cursor.current() {
            match byte {
                CODE => {
                    self.cursor.advance();
                    return;
                }
                // A newline right before the closing backtick is dropped.
                b'\n' if self.cursor.peek_is(1, CODE) => {
                    self.cursor.advance_by(2);
                    return;
                }
                b'\n' => {
                    line += 1;
                    self.emit("\n");
                    self.emit(&line_prefix(line));
                    self.cursor.advance();
                }
                ESCAPE if self.cursor.peek_is(1, CODE) => {
                    self.out.push(CODE);
                    self.cursor.advance_by(2);
                }
                _ => {
                    self.out.push(byte);
                    self.cursor.advance();
                }
            }
        }
    }

    fn included_code(&mut self) {
        let start = self.cursor.offset();
        let path = String::from_utf8_lossy(self.cursor.take_until(|b| b == CODE)).into_owned();
        let span = Span::new(
            self.cursor.position_at(start),
            self.cursor.position(),
        );
        self.cursor.advance();

        match read_numbered(self.reader, &path) {
            Ok(body) => {
                trace!("included {} bytes from '{}'", body.len(), path);
                self.emit(&body);
            }
            Err(err) => {
                warn!("unable to open file '{}': {}", path, err);
                self.warnings.push(Warning::ResourceUnavailable {
                    path,
                    span,
                    reason: err.to_string(),
                });
            }
        }
    }
}

/// Read every line of `path` with its number prefix.
///
/// Nothing is returned unless the whole file could be read.
fn read_numbered(reader: &dyn IncludeReader, path: &str) -> io::Result<String> {
    let mut body = String::new();
    for (index, line) in reader.open(path)?.lines().enumerate() {
        body.push_str(&line_prefix(index + 1));
        body.push_str(&line?);
        body.push('\n');
    }
    Ok(body)
}
