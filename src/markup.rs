//! Inline role markup in reStructuredText prose.
//!
//! Recognizes ``:role:`text` `` and ``:domain:role:`text` `` and hands each
//! occurrence to the registry. Everything else passes through as text.
//! Interpreted text may wrap onto following lines but never crosses a blank
//! line.

use std::path::Path;

use regex::Regex;

use crate::error::Error;
use crate::node::{Node, Options};
use crate::registry::App;
use crate::role::{Level, Message, RoleInvocation};

/// A complete role: name (optionally domain-qualified) and interpreted text.
const ROLE_PATTERN: &str = r":((?:[A-Za-z][\w.+-]*:)?[A-Za-z][\w.+-]*):`([^`]*)`";

/// A role start-string with no closing backtick before end of paragraph.
const UNTERMINATED_PATTERN: &str = r":(?:[A-Za-z][\w.+-]*:)?[A-Za-z][\w.+-]*:`[^`]*$";

/// Docutils wording for a role missing its closing backtick.
const UNTERMINATED_TEXT: &str =
    "Inline interpreted text or phrase reference start-string without end-string.";

/// One role occurrence and the nodes its handler produced.
#[derive(Debug)]
pub struct RoleOccurrence {
    /// The invocation as dispatched.
    pub invocation: RoleInvocation,
    /// Handler output, with problematic indices already rebased.
    pub nodes: Vec<Node>,
}

/// Result of parsing one document.
#[derive(Debug, Default)]
pub struct Parsed {
    /// Every role occurrence, in document order.
    pub occurrences: Vec<RoleOccurrence>,
    /// Problems found, in document order.
    pub messages: Vec<Message>,
    /// Inline nodes, with adjacent text merged.
    pub nodes: Vec<Node>,
}

impl Parsed {
    /// Whether any message is an error.
    pub fn has_errors(&self) -> bool {
        return self.messages.iter().any(|m| return m.level >= Level::Error);
    }

    /// Append a role result, rebasing problematic nodes onto this message list.
    fn absorb(&mut self, invocation: RoleInvocation, mut nodes: Vec<Node>, messages: Vec<Message>) {
        let base = self.messages.len();
        for node in &mut nodes {
            if let Node::Problematic { message_index, .. } = node {
                *message_index = message_index.saturating_add(base);
            }
        }
        self.nodes.extend(nodes.iter().cloned());
        self.messages.extend(messages);
        self.occurrences.push(RoleOccurrence { invocation, nodes });
    }

    /// Move buffered text into a text node, merging with a preceding one.
    fn flush_text(&mut self, pending: &mut String) {
        if pending.is_empty() {
            return;
        }
        if let Some(Node::Text(last)) = self.nodes.last_mut() {
            last.push_str(pending);
            pending.clear();
            return;
        }
        self.nodes.push(Node::Text(std::mem::take(pending)));
    }
}

/// Compiled inline markup recognizer. Build once, parse many documents.
#[derive(Debug)]
pub struct InlineParser {
    /// Matches complete role markup.
    role: Regex,
    /// Matches role markup missing its end-string.
    unterminated: Regex,
}

impl InlineParser {
    /// Compile the markup patterns.
    ///
    /// # Errors
    ///
    /// Returns `Error::Pattern` if a pattern fails to compile.
    pub fn new() -> Result<Self, Error> {
        return Ok(Self {
            role: Regex::new(ROLE_PATTERN)?,
            unterminated: Regex::new(UNTERMINATED_PATTERN)?,
        });
    }

    /// Parse a document, dispatching each role occurrence through `app`.
    pub fn parse(&self, text: &str, source: &Path, app: &App) -> Parsed {
        let mut parsed = Parsed::default();
        let mut pending = String::new();
        let mut block = String::new();
        let mut block_line = 1_u32;
        let mut lineno = 0_u32;

        for line in text.split_inclusive('\n') {
            lineno = lineno.saturating_add(1);
            if line.trim().is_empty() {
                self.scan_block(&block, block_line, source, app, &mut pending, &mut parsed);
                block.clear();
                pending.push_str(line);
                continue;
            }
            if block.is_empty() {
                block_line = lineno;
            }
            block.push_str(line);
        }
        self.scan_block(&block, block_line, source, app, &mut pending, &mut parsed);

        parsed.flush_text(&mut pending);
        return parsed;
    }

    /// Scan one paragraph starting at `first_line`, appending to `pending` and `parsed`.
    fn scan_block(
        &self,
        block: &str,
        first_line: u32,
        source: &Path,
        app: &App,
        pending: &mut String,
        parsed: &mut Parsed,
    ) {
        let mut cursor = 0_usize;

        for captures in self.role.captures_iter(block) {
            let (Some(whole), Some(name), Some(text)) = (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };
            if !is_markup_start(block, whole.start()) {
                continue;
            }

            pending.push_str(block.get(cursor..whole.start()).unwrap_or_default());
            parsed.flush_text(pending);

            let invocation = RoleInvocation {
                content: Vec::new(),
                lineno: line_at(block, first_line, whole.start()),
                name: name.as_str().to_string(),
                options: Options::new(),
                rawtext: whole.as_str().to_string(),
                source: source.to_path_buf(),
                text: text.as_str().to_string(),
            };
            let (nodes, messages) = app.dispatch(&invocation);
            parsed.absorb(invocation, nodes, messages);
            cursor = whole.end();
        }

        let rest = block.get(cursor..).unwrap_or_default();
        let unterminated = self
            .unterminated
            .find_iter(rest)
            .map(|m| return cursor.saturating_add(m.start()))
            .find(|start| return is_markup_start(block, *start));
        if let Some(start) = unterminated {
            parsed.messages.push(Message {
                level: Level::Warning,
                line: line_at(block, first_line, start),
                source: source.to_path_buf(),
                text: UNTERMINATED_TEXT.to_string(),
            });
        }
        pending.push_str(rest);
    }
}

/// Line number of byte `offset` within a block that starts at `first_line`.
fn line_at(block: &str, first_line: u32, offset: usize) -> u32 {
    let breaks = block.get(..offset).map_or(0, |before| return before.matches('\n').count());
    return first_line.saturating_add(u32::try_from(breaks).unwrap_or(u32::MAX));
}

/// Markup may only start a paragraph or follow whitespace or an opening punctuation mark.
fn is_markup_start(block: &str, start: usize) -> bool {
    return block
        .get(..start)
        .and_then(|before| return before.chars().next_back())
        .is_none_or(|c| return c.is_whitespace() || "-:/'\"<([{".contains(c));
}
