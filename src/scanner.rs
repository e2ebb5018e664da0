use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Error;
use crate::markup::{InlineParser, Parsed};
use crate::node::Node;
use crate::registry::App;
use crate::role::Message;

/// A role occurrence that produced a link, and the link itself.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LinkRef {
    /// One-based line of the markup.
    pub line: u32,
    /// Document containing the markup, relative to the scan root.
    pub source: PathBuf,
    /// Interpreted text as written in the markup.
    pub target: String,
    /// Display text of the produced link.
    pub text: String,
    /// URL of the produced link.
    pub url: String,
}

/// Everything found by a scan.
#[derive(Debug, Default, serde::Serialize)]
pub struct ScanReport {
    /// Source links, sorted by (source, line).
    pub links: Vec<LinkRef>,
    /// Markup problems from every scanned document.
    pub messages: Vec<Message>,
}

/// Scan all `.rst` files under `root` and collect source links.
/// Applies the config's include/exclude filters to choose documents.
///
/// # Errors
///
/// Returns `Error::Io` if a document cannot be read.
pub fn scan(
    root: &Path,
    config: &Config,
    app: &App,
    parser: &InlineParser,
    verbose: bool,
) -> Result<ScanReport, Error> {
    let mut report = ScanReport::default();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| return e.file_type().is_file() && e.path().extension().is_some_and(|ext| return ext == "rst"))
    {
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        if !config.should_scan(&relative.to_string_lossy()) {
            continue;
        }
        if verbose {
            eprintln!("scan: {}", relative.display());
        }

        let content = std::fs::read_to_string(path)?;
        let parsed = parser.parse(&content, &relative, app);
        report.links.extend(collect_links(&parsed));
        report.messages.extend(parsed.messages);
    }

    report.links.sort_by(|a, b| return (&a.source, a.line).cmp(&(&b.source, b.line)));
    return Ok(report);
}

/// Every link produced while parsing, whatever spelling resolved to the role.
pub fn collect_links(parsed: &Parsed) -> Vec<LinkRef> {
    return parsed
        .occurrences
        .iter()
        .flat_map(|occurrence| {
            let invocation = &occurrence.invocation;
            return occurrence.nodes.iter().filter_map(move |node| {
                let Node::Reference { refuri, text, .. } = node else {
                    return None;
                };
                return Some(LinkRef {
                    line: invocation.lineno,
                    source: invocation.source.clone(),
                    target: invocation.text.clone(),
                    text: text.clone(),
                    url: refuri.clone(),
                });
            });
        })
        .collect();
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;
    use crate::extension;

    fn app() -> App {
        let mut app = App::new();
        extension::setup(&mut app).unwrap();
        return app;
    }

    #[test]
    fn collects_git_links_only() {
        let app = app();
        let parser = InlineParser::new().unwrap();
        let parsed = parser.parse(
            "The :arg:`arena` lives in :swoc:git:`code/include/swoc/MemArena.h`.\n",
            Path::new("doc/arena.rst"),
            &app,
        );

        let links = collect_links(&parsed);
        assert_eq!(
            links,
            vec![LinkRef {
                line: 1,
                source: PathBuf::from("doc/arena.rst"),
                target: "code/include/swoc/MemArena.h".to_string(),
                text: "MemArena.h".to_string(),
                url: "https://github.com/SolidWallOfCode/libswoc/blob/master/code/include/swoc/MemArena.h"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn unqualified_git_role_is_collected() {
        let app = app();
        let parser = InlineParser::new().unwrap();
        let parsed = parser.parse("see :git:`README.md`\n", Path::new("doc/index.rst"), &app);

        let links = collect_links(&parsed);
        assert_eq!(
            links,
            vec![LinkRef {
                line: 1,
                source: PathBuf::from("doc/index.rst"),
                target: "README.md".to_string(),
                text: "README.md".to_string(),
                url: "https://github.com/SolidWallOfCode/libswoc/blob/master/README.md".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_roles_produce_no_links() {
        let app = app();
        let parser = InlineParser::new().unwrap();
        let parsed = parser.parse(":swoc:svn:`x.h` :pack:`y`\n", Path::new("a.rst"), &app);

        assert!(collect_links(&parsed).is_empty());
        assert_eq!(parsed.occurrences.len(), 2);
    }

    #[test]
    fn scan_walks_rst_files_and_honors_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("doc/code")).unwrap();
        std::fs::create_dir_all(root.join("doc/_build")).unwrap();
        std::fs::write(root.join("doc/index.rst"), "Start at :swoc:git:`README.md`.\n").unwrap();
        std::fs::write(
            root.join("doc/code/lexicon.rst"),
            "intro\n:swoc:git:`code/include/swoc/Lexicon.h` and :oops:`x`\n",
        )
        .unwrap();
        std::fs::write(root.join("doc/_build/index.rst"), ":swoc:git:`stale.h`\n").unwrap();
        std::fs::write(root.join("doc/notes.md"), ":swoc:git:`ignored.h`\n").unwrap();
        std::fs::write(root.join(".swocdoc.toml"), "exclude = [\"doc/_build\"]\n").unwrap();

        let config = Config::load(root).unwrap();
        let parser = InlineParser::new().unwrap();
        let report = scan(root, &config, &app(), &parser, false).unwrap();

        let found: Vec<(String, u32, &str)> = report
            .links
            .iter()
            .map(|l| (l.source.to_string_lossy().replace('\\', "/"), l.line, l.text.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("doc/code/lexicon.rst".to_string(), 2, "Lexicon.h"),
                ("doc/index.rst".to_string(), 1, "README.md"),
            ]
        );
        assert_eq!(report.messages.len(), 1);
        assert_eq!(report.messages.first().unwrap().line, 2);
    }
}
