//! Command-line interface for sitefl.

use clap::Parser;
use sitefl_config::Config;
use std::path::PathBuf;

/// Source name that reads from stdin.
pub const STDIN_NAME: &str = "in";

/// Destination name that writes to stdout.
pub const STDOUT_NAME: &str = "out";

/// sitefl - compile sitefl markup into HTML.
///
/// Reads SOURCE (a file, or `in` for stdin), compiles it, and writes the
/// result to DEST (a file, or `out` for stdout).
#[derive(Parser, Debug)]
#[command(
    name = "sitefl",
    author = "Sitefl Contributors",
    version,
    about = "Compile sitefl markup into HTML",
    after_help = "Examples:\n  \
                  sitefl notes.sfl notes.html\n  \
                  sitefl -n -w notes.sfl out\n  \
                  sitefl -t template.html -s style.css page.sfl page.html\n  \
                  grep -o \"something.*\" log.txt | sitefl in out"
)]
pub struct Cli {
    /// Source file, or `in` to read stdin
    #[arg(value_name = "SOURCE", required_unless_present = "show_paths")]
    pub source: Option<String>,

    /// Destination file, or `out` to write stdout
    #[arg(value_name = "DEST", required_unless_present = "show_paths")]
    pub destination: Option<String>,

    /// Preserve new lines as <br>
    #[arg(short = 'n', long = "preserve-newlines")]
    pub preserve_newlines: bool,

    /// Wrap the output in a div (id = 'unit')
    #[arg(short = 'w', long = "wrap")]
    pub wrap: bool,

    /// Attach a stylesheet
    #[arg(short = 's', long = "stylesheet", value_name = "HREF")]
    pub stylesheet: Option<String>,

    /// Use an HTML template with an id="content" element
    #[arg(short = 't', long = "template", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

/// Where the source comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A file
    File(PathBuf),
}

/// Where the page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Standard output
    Stdout,
    /// A file
    File(PathBuf),
}

impl Cli {
    /// The source to read.
    pub fn input(&self) -> Input {
        match self.source.as_deref() {
            None | Some(STDIN_NAME) => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        }
    }

    /// The destination to write.
    pub fn output(&self) -> Output {
        match self.destination.as_deref() {
            None | Some(STDOUT_NAME) => Output::Stdout,
            Some(path) => Output::File(PathBuf::from(path)),
        }
    }

    /// Apply command-line flags on top of `config`.
    ///
    /// Flags only ever switch settings on; they never clear a value the
    /// config file set.
    pub fn apply(&self, config: &mut Config) {
        if self.preserve_newlines {
            config.compile.preserve_newlines = true;
        }
        if self.wrap {
            config.page.wrap = true;
        }
        if self.template.is_some() {
            config.page.template.clone_from(&self.template);
        }
        if self.stylesheet.is_some() {
            config.page.stylesheet.clone_from(&self.stylesheet);
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
