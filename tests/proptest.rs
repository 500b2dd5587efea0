//! Property-based tests for sitefl.
//!
//! These tests use proptest to generate random inputs and verify
//! that the compiler handles them gracefully.

use proptest::prelude::*;

use sitefl_compiler::{compile_with, line_prefix, CompileOptions, MemoryReader};
use sitefl_core::{Marker, SiteflError};

fn html(input: &str, options: &CompileOptions) -> String {
    compile_with(input, options, &MemoryReader::new())
        .unwrap()
        .html
}

/// Generate a random markup-like string.
fn markup_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\t]*").unwrap()
}

/// Generate text that contains no markup triggers.
fn plain_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 ,.?:'\n]{0,200}").unwrap()
}

/// Generate a single line of code with no backticks or backslashes.
fn code_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-zA-Z0-9 (){};=*_#@!+-]{1,40}").unwrap()
}

/// Generate any trigger byte as a string.
fn trigger() -> impl Strategy<Value = char> {
    prop::sample::select(Marker::ALL.to_vec()).prop_map(|m| m.trigger() as char)
}

// =============================================================================
// Robustness
// =============================================================================

proptest! {
    /// The compiler should never panic, and only links and images can fail.
    #[test]
    fn compiler_never_panics(input in markup_string()) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            compile_with(&input, &CompileOptions::default(), &MemoryReader::new())
        }));
        prop_assert!(result.is_ok(), "Compiler panicked on input");

        if let Ok(Err(err)) = result {
            let is_malformed = matches!(err, SiteflError::Malformed { .. });
            prop_assert!(is_malformed, "unexpected error: {}", err);
        }
    }

    /// Input without `@` or `!` always compiles.
    #[test]
    fn compiler_succeeds_without_links(input in r"[\x20-\x7E\n]*") {
        let input = input.replace(['@', '!'], "");
        prop_assert!(compile_with(&input, &CompileOptions::default(), &MemoryReader::new()).is_ok());
    }
}

// =============================================================================
// Semantics
// =============================================================================

proptest! {
    /// Text without triggers passes through unchanged.
    #[test]
    fn plain_text_is_identity(text in plain_text()) {
        prop_assert_eq!(html(&text, &CompileOptions::default()), text);
    }

    /// With preserved newlines every newline becomes `<br>`.
    #[test]
    fn preserved_newlines_become_breaks(text in plain_text()) {
        let options = CompileOptions { preserve_newlines: true };
        prop_assert_eq!(html(&text, &options), text.replace('\n', "<br>"));
    }

    /// Toggling a state twice yields an empty element.
    #[test]
    fn double_toggle_is_empty_pair(text in plain_text(), which in 0..3usize) {
        let (marker, tag) = [("*", "strong"), ("/", "em"), ("_", "u")][which];
        let input = format!("{}{}{}", marker, marker, text);
        prop_assert_eq!(
            html(&input, &CompileOptions::default()),
            format!("<{}></{}>{}", tag, tag, text)
        );
    }

    /// A backslash makes any trigger literal.
    #[test]
    fn escaped_trigger_is_literal(c in trigger(), text in plain_text()) {
        let input = format!("{}\\{}", text, c);
        prop_assert_eq!(html(&input, &CompileOptions::default()), format!("{}{}", text, c));
    }

    /// Escape blocks copy everything except `}` and `\` untouched.
    #[test]
    fn escape_block_is_verbatim(inner in r"[a-zA-Z0-9 *_/#@!+;`\-\n\[\]()]*") {
        let input = format!("{{{}}}", inner);
        prop_assert_eq!(html(&input, &CompileOptions::default()), inner);
    }

    /// Headings wrap the rest of their line at the counted level.
    #[test]
    fn heading_wraps_line(level in 1..=6usize, text in r"[a-zA-Z0-9 ]{0,40}") {
        let input = format!("{}{}\nafter", "#".repeat(level), text);
        prop_assert_eq!(
            html(&input, &CompileOptions::default()),
            format!("<h{}>{}</h{}>after", level, text, level)
        );
    }

    /// Inline code numbers each line starting at one.
    #[test]
    fn code_lines_are_numbered(lines in prop::collection::vec(code_line(), 1..8)) {
        let input = format!("`{}`", lines.join("\n"));
        let numbered: Vec<String> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}{}", line_prefix(i + 1), line))
            .collect();
        prop_assert_eq!(
            html(&input, &CompileOptions::default()),
            format!("<pre>{}</pre>", numbered.join("\n"))
        );
    }
}
