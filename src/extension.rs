//! Extension entry point: registers the SWOC roles and domain.

use crate::domain::Domain;
use crate::error::Error;
use crate::github;
use crate::node::NodeKind;
use crate::registry::Registry;

/// Metadata an extension hands back to the host after setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMetadata {
    /// Whether documents may be read concurrently.
    pub parallel_read_safe: bool,
    /// Whether output may be written concurrently.
    pub parallel_write_safe: bool,
    /// Extension version.
    pub version: &'static str,
}

/// Register everything this extension provides.
///
/// - `:arg:`, `:const:`, `:pack:` render as emphasis, literal, and strong.
/// - The `swoc` domain, with `:swoc:git:` linking paths to GitHub.
///
/// # Errors
///
/// Returns whatever the registry rejects, e.g. a name registered twice.
pub fn setup(registry: &mut impl Registry) -> Result<ExtensionMetadata, Error> {
    registry.add_generic_role("arg", NodeKind::Emphasis)?;
    registry.add_generic_role("const", NodeKind::Literal)?;
    registry.add_generic_role("pack", NodeKind::Strong)?;

    let domain = Domain::swoc();
    let name = domain.name;
    registry.add_domain(domain)?;
    registry.add_role_to_domain(name, "git", github::make_github_link)?;

    return Ok(ExtensionMetadata {
        parallel_read_safe: true,
        parallel_write_safe: true,
        version: env!("CARGO_PKG_VERSION"),
    });
}
