//! Sitefl Compiler
//!
//! A single-pass compiler from the sitefl markup language to an HTML
//! fragment. The input is scanned byte by byte; inline spans are tracked
//! on an explicit open-state stack and everything that is not markup is
//! copied through untouched.
//!
//! # Markup
//!
//! | Source | HTML |
//! |---|---|
//! | `*bold*` `/italic/` `_underline_` | `<strong>` `<em>` `<u>` |
//! | `# Title` (up to `######`) | `<h1>`…`<h6>`, closed at the newline |
//! | `---` | `<hr>` |
//! | `;;` | `<br>` |
//! | `@[alt](url)` | `<a href="url">alt</a>` |
//! | `![alt::w::h](url)` | `<img src="url" alt="alt" width="w" height="h">` |
//! | `` `code` `` / `` `::file` `` | `<pre>` with numbered lines |
//! | `+item` | `<li>item</li>` |
//! | `\x`, `{...}` | escapes |
//!
//! # Example
//!
//! ```
//! use sitefl_compiler::{compile, CompileOptions};
//!
//! let compiled = compile("*Hello* /world/", &CompileOptions::default()).unwrap();
//! assert_eq!(compiled.html, "<strong>Hello</strong> <em>world</em>");
//! ```

mod code;
mod compiler;
pub mod cursor;
pub mod include;
mod link;

pub use code::line_prefix;
pub use cursor::Cursor;
pub use include::{FsReader, IncludeReader, MemoryReader};

use serde::{Deserialize, Serialize};
use sitefl_core::{Result, Warning};

use crate::compiler::Compiler;

/// Options for a single compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Emit `<br>` for every newline that does not close a heading.
    pub preserve_newlines: bool,
}

/// The result of a successful compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compiled {
    /// The HTML fragment
    pub html: String,
    /// Non-fatal problems, such as include files that could not be read
    pub warnings: Vec<Warning>,
}

impl Compiled {
    /// Check whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Compile `source`, reading `` `::path` `` includes from the filesystem.
///
/// # Errors
///
/// Returns [`sitefl_core::SiteflError::Malformed`] when a link or image has
/// bracketed alt text that is not followed by `(`.
pub fn compile(source: &str, options: &CompileOptions) -> Result<Compiled> {
    compile_with(source, options, &FsReader::new())
}

/// Compile `source` with an explicit include reader.
///
/// # Example
///
/// ```
/// use sitefl_compiler::{compile_with, CompileOptions, MemoryReader};
///
/// let reader = MemoryReader::new().with_file("a.txt", "first\nsecond\n");
/// let compiled = compile_with("`::a.txt`", &CompileOptions::default(), &reader).unwrap();
/// assert_eq!(compiled.html, "<pre>  1| first\n  2| second\n</pre>");
/// ```
pub fn compile_with(
    source: &str,
    options: &CompileOptions,
    reader: &dyn IncludeReader,
) -> Result<Compiled> {
    Compiler::new(source, *options, reader).run()
}
