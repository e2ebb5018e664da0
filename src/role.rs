//! Role invocation contract shared by the registry and every role handler.

use std::fmt;
use std::path::PathBuf;

use crate::node::{Node, NodeKind, Options};

/// Severity of a message attached to a role result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Markup was kept but is probably wrong.
    Warning,
    /// Markup could not be interpreted.
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        };
        return f.write_str(name);
    }
}

/// A problem report produced while interpreting markup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Message {
    /// Severity.
    pub level: Level,
    /// One-based line in the source document.
    pub line: u32,
    /// Document the markup came from.
    pub source: PathBuf,
    /// Human-readable description.
    pub text: String,
}

impl fmt::Display for Message {
    /// `path:line: LEVEL: text`, the usual docutils report shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "{}:{}: {}: {}",
            self.source.display(),
            self.line,
            self.level,
            self.text
        );
    }
}

/// Everything the host knows about one occurrence of role markup.
#[derive(Debug, Clone, Default)]
pub struct RoleInvocation {
    /// Directive content lines; always empty for inline roles.
    pub content: Vec<String>,
    /// One-based line number of the markup.
    pub lineno: u32,
    /// Role name as written, e.g. `swoc:git` or `arg`.
    pub name: String,
    /// Options bag, forwarded to output nodes untouched.
    pub options: Options,
    /// The complete markup, e.g. ``:swoc:git:`README.md` ``.
    pub rawtext: String,
    /// Document containing the markup.
    pub source: PathBuf,
    /// Interpreted text between the backticks.
    pub text: String,
}

/// Nodes to splice into the document plus any messages to report.
pub type RoleOutput = (Vec<Node>, Vec<Message>);

/// A role implementation.
pub type RoleFn = fn(&RoleInvocation) -> RoleOutput;

/// Render interpreted text in one of the built-in styles, with no messages.
pub fn generic_role(kind: NodeKind, invocation: &RoleInvocation) -> RoleOutput {
    let node = Node::Styled {
        kind,
        rawtext: invocation.rawtext.clone(),
        text: invocation.text.clone(),
    };
    return (vec![node], Vec::new());
}
