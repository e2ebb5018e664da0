//! CLI commands for swocdoc: render, links, roles.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config;
use crate::diagnostics;
use crate::error;
use crate::extension;
use crate::html;
use crate::markup::InlineParser;
use crate::registry::App;
use crate::scanner;

/// Exit code when markup errors were reported.
const MARKUP_ERRORS: u8 = 2;

/// An application with this crate's extension loaded.
///
/// # Errors
///
/// Returns registration errors from `extension::setup`.
fn load_app(verbose: bool) -> Result<App, error::Error> {
    let mut app = App::new();
    let metadata = extension::setup(&mut app)?;
    if verbose {
        eprintln!(
            "extension: swocdoc {} (parallel read: {}, parallel write: {})",
            metadata.version, metadata.parallel_read_safe, metadata.parallel_write_safe
        );
        if let Some(domain) = app.domain("swoc") {
            eprintln!("domain: {} ({}), data version {}", domain.name, domain.label, domain.data_version);
        }
    }
    return Ok(app);
}

/// Print every `:swoc:git:` reference under the current directory.
///
/// # Errors
///
/// Returns errors from config loading, scanning, or JSON serialization.
pub fn links(json: bool, verbose: bool) -> Result<ExitCode, error::Error> {
    let root = PathBuf::from(".");
    let config = config::Config::load(&root)?;
    let app = load_app(verbose)?;
    let parser = InlineParser::new()?;

    let report = scanner::scan(&root, &config, &app, &parser, verbose)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for link in &report.links {
            println!("{}:{}  {}  {}", link.source.display(), link.line, link.target, link.url);
        }
        diagnostics::print_messages(&report.messages);
        let count = report.links.len();
        eprintln!("{count} source links");
    }

    let has_errors = report
        .messages
        .iter()
        .any(|m| return m.level >= crate::role::Level::Error);
    return Ok(exit_for(has_errors));
}

/// Render one document's inline markup to an HTML fragment on stdout.
///
/// # Errors
///
/// Returns `Error::FileNotFound` if the document is missing, or `Error::Io`
/// if it cannot be read.
pub fn render(file: &Path, verbose: bool) -> Result<ExitCode, error::Error> {
    let content = match std::fs::read_to_string(file) {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(error::Error::FileNotFound {
                path: file.to_path_buf(),
            });
        },
        Err(e) => return Err(error::Error::Io(e)),
        Ok(c) => c,
    };
    if verbose {
        eprintln!("render: {}", file.display());
    }

    let app = load_app(verbose)?;
    let parser = InlineParser::new()?;
    let parsed = parser.parse(&content, file, &app);

    print!("{}", html::render(&parsed.nodes));
    diagnostics::print_messages(&parsed.messages);
    return Ok(exit_for(parsed.has_errors()));
}

/// List every registered role.
///
/// # Errors
///
/// Returns registration errors from `extension::setup`.
pub fn roles(verbose: bool) -> Result<(), error::Error> {
    let app = load_app(verbose)?;
    let listing = app.roles();
    let width = listing.iter().map(|r| return r.name.len()).max().unwrap_or(0);
    for role in listing {
        println!(":{:<width$}  {}", format!("{}:", role.name), role.description, width = width.saturating_add(1));
    }
    return Ok(());
}

/// Exit code for a run that did or did not report markup errors.
fn exit_for(has_errors: bool) -> ExitCode {
    if has_errors {
        return ExitCode::from(MARKUP_ERRORS);
    }
    return ExitCode::SUCCESS;
}
