//! sitefl - compile sitefl markup into HTML.
//!
//! This binary provides the CLI around the sitefl libraries: it reads the
//! source, compiles it, assembles the page and writes it out.

mod cli;

use clap::Parser;
use cli::{Cli, Input, Output};
use log::{debug, error, info, warn, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use sitefl_compiler::{compile_with, FsReader};
use sitefl_config::{Config, PageConfig};
use sitefl_core::Result;
use sitefl_render::Page;

fn main() {
    let cli = Cli::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("sitefl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    env_logger::Builder::new()
        .filter_level(parse_level(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    }
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli);
    debug!("Effective config: {:?}", config);

    let source = read_source(&cli.input())?;
    let compiled = compile_with(&source, &config.compile_options(), &FsReader::new())?;
    if compiled.has_warnings() {
        info!("Compiled with {} warning(s)", compiled.warnings.len());
    }

    let page = build_page(compiled.html, &config.page)?;
    write_page(&cli.output(), &page.render()?)
}

/// Load configuration, then apply the override and command-line flags.
///
/// A broken config file is reported and skipped rather than fatal.
fn load_config(cli: &Cli) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config file: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        match Config::parse_override(config_arg) {
            Ok(override_config) => {
                config.merge(&override_config);
                debug!("Merged config override: {}", config_arg);
            }
            Err(e) => {
                error!("Failed to load config {}: {}", config_arg, e);
            }
        }
    }

    cli.apply(&mut config);
    config
}

/// Read the whole source.
fn read_source(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            info!("Reading from stdin");
            let mut source = String::new();
            io::stdin().lock().read_to_string(&mut source)?;
            Ok(source)
        }
        Input::File(path) => {
            info!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}

/// Build the page around the compiled fragment.
fn build_page(fragment: String, settings: &PageConfig) -> Result<Page> {
    let mut page = Page::new(fragment).wrap(settings.wrap);
    if let Some(ref template) = settings.template {
        debug!("Using template {}", template.display());
        page = page.template(fs::read_to_string(template)?);
    }
    if let Some(ref href) = settings.stylesheet {
        page = page.stylesheet(href.as_str());
    }
    Ok(page)
}

/// Write the finished page.
fn write_page(output: &Output, html: &str) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", html)?;
            stdout.flush()?;
        }
        Output::File(path) => {
            write_file(path, html)?;
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn write_file(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    Ok(())
}
