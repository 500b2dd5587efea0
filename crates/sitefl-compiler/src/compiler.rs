//! The dispatch loop.
//!
//! [`Compiler`] owns everything one compilation needs: the cursor, the
//! open-state stack, the output buffer and the collected warnings. It is
//! built per call and consumed by [`Compiler::run`].

use log::{debug, trace};
use sitefl_core::{CompileState, Marker, OpenState, Result, Warning, MAX_HEADING_LEVEL};

use crate::cursor::Cursor;
use crate::include::IncludeReader;
use crate::{CompileOptions, Compiled};

pub(crate) const ESCAPE: u8 = Marker::Escape.trigger();
pub(crate) const ESCAPE_END: u8 = Marker::EscapeEnd.trigger();
pub(crate) const RULE: u8 = Marker::Rule.trigger();
pub(crate) const LINE_BREAK: u8 = Marker::LineBreak.trigger();
pub(crate) const CODE: u8 = Marker::Code.trigger();
pub(crate) const HEADING: u8 = Marker::Heading.trigger();

/// Single-use compilation context.
pub(crate) struct Compiler<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) state: CompileState,
    pub(crate) out: Vec<u8>,
    pub(crate) options: CompileOptions,
    pub(crate) reader: &'a dyn IncludeReader,
    pub(crate) warnings: Vec<Warning>,
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(input: &'a str, options: CompileOptions, reader: &'a dyn IncludeReader) -> Self {
        Self {
            cursor: Cursor::new(input.as_bytes()),
            state: CompileState::new(),
            out: Vec::with_capacity(input.len() + input.len() / 4),
            options,
            reader,
            warnings: Vec::new(),
        }
    }

    /// Scan the whole input and return the compiled fragment.
    pub(crate) fn run(mut self) -> Result<Compiled> {
        debug!("Compiling {} bytes (preserve_newlines={})", self.cursor.rest().len(), self.options.preserve_newlines);

        while let Some(byte) = self.cursor.current() {
            match Marker::from_trigger(byte) {
                Some(marker) => self.dispatch(marker)?,
                None if byte == b'\n' => self.newline(),
                None => self.copy_byte(),
            }
        }

        if !self.state.is_empty() {
            debug!("End of input with open states: {:?}", self.state.open_states());
        }

        let html = String::from_utf8(self.out)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        debug!("Compiled {} bytes of HTML, {} warning(s)", html.len(), self.warnings.len());

        Ok(Compiled {
            html,
            warnings: self.warnings,
        })
    }

    fn dispatch(&mut self, marker: Marker) -> Result<()> {
        trace!("{} at {}", marker, self.cursor.offset());
        match marker {
            Marker::Escape => self.escape(),
            Marker::EscapeBegin => self.escape_block(),
            Marker::EscapeEnd => self.copy_byte(),
            Marker::Bold => self.toggle(OpenState::Bold),
            Marker::Italic => self.toggle(OpenState::Italic),
            Marker::Underline => self.toggle(OpenState::Underline),
            Marker::Rule => self.rule(),
            Marker::LineBreak => self.line_break(),
            Marker::Heading => self.heading(),
            Marker::ListItem => self.list_item(),
            Marker::Code => self.code_block(),
            Marker::Link => self.link()?,
            Marker::Image => self.image()?,
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn emit(&mut self, html: &str) {
        self.out.extend_from_slice(html.as_bytes());
    }

    #[inline]
    pub(crate) fn emit_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    fn copy_byte(&mut self) {
        if let Some(byte) = self.cursor.bump() {
            self.out.push(byte);
        }
    }

    /// `\x` copies `x` untouched.
    fn escape(&mut self) {
        self.cursor.advance();
        self.copy_byte();
    }

    /// `{...}` copies its body untouched; `\` inside still escapes one byte.
    fn escape_block(&mut self) {
        self.cursor.advance();
        while let Some(byte) = self.cursor.current() {
            match byte {
                ESCAPE_END => {
                    self.cursor.advance();
                    return;
                }
                ESCAPE => self.escape(),
                _ => self.copy_byte(),
            }
        }
    }

    fn toggle(&mut self, state: OpenState) {
        let tag = self.state.toggle(state);
        self.emit(&tag);
        self.cursor.advance();
    }

    /// `---` is a rule only outside every open span.
    fn rule(&mut self) {
        if self.state.is_empty() && self.cursor.count_run(RULE, 3) == 3 {
            self.emit("<hr>");
            self.cursor.advance_by(3);
        } else {
            self.copy_byte();
        }
    }

    fn line_break(&mut self) {
        if self.cursor.peek_is(1, LINE_BREAK) {
            self.emit("<br>");
            self.cursor.advance_by(2);
        } else {
            self.copy_byte();
        }
    }

    /// Up to six `#` set the level; a seventh starts over as a new heading.
    fn heading(&mut self) {
        let level = self.cursor.count_run(HEADING, MAX_HEADING_LEVEL as usize);
        self.cursor.advance_by(level);
        let state = OpenState::Heading(level as u8);
        self.state.push(state);
        self.emit(&state.open_tag());
    }

    fn newline(&mut self) {
        if let Some(level) = self.state.close_heading() {
            self.emit(&OpenState::Heading(level).close_tag());
        } else if self.options.preserve_newlines {
            self.emit("<br>");
        } else {
            self.out.push(b'\n');
        }
        self.cursor.advance();
    }

    /// `+text` up to the newline, which is left for the main loop.
    fn list_item(&mut self) {
        self.cursor.advance();
        let text = self.cursor.take_until(|b| b == b'\n');
        self.emit("<li>");
        self.emit_bytes(text);
        self.emit("</li>");
    }
}
