//! Document tree nodes produced by role handlers.

use std::collections::BTreeMap;

/// Free-form role options, forwarded untouched onto the produced node.
pub type Options = BTreeMap<String, String>;

/// One inline unit of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Markup the parser could not resolve, kept verbatim and tied to the
    /// message that explains it.
    Problematic {
        /// Index into the message list returned alongside the nodes.
        message_index: usize,
        /// Original markup text.
        rawtext: String,
    },
    /// Hyperlink to an external location.
    Reference {
        /// Passthrough options from the role invocation.
        options: Options,
        /// Original markup text.
        rawtext: String,
        /// Fully-qualified target URL.
        refuri: String,
        /// Display text.
        text: String,
    },
    /// Text with one of the built-in inline styles.
    Styled {
        /// Which style to apply.
        kind: NodeKind,
        /// Original markup text.
        rawtext: String,
        /// Styled content.
        text: String,
    },
    /// Plain text between markup.
    Text(String),
}

impl Node {
    /// Build a reference node.
    pub fn reference(
        rawtext: impl Into<String>,
        text: impl Into<String>,
        refuri: impl Into<String>,
        options: Options,
    ) -> Self {
        return Self::Reference {
            options,
            rawtext: rawtext.into(),
            refuri: refuri.into(),
            text: text.into(),
        };
    }
}

/// Built-in inline styles a generic role can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Italic text.
    Emphasis,
    /// Inline code.
    Literal,
    /// Bold text.
    Strong,
}

impl NodeKind {
    /// Short name used when listing roles.
    pub const fn name(self) -> &'static str {
        return match self {
            Self::Emphasis => "emphasis",
            Self::Literal => "literal",
            Self::Strong => "strong",
        };
    }
}
