//! The `:swoc:git:` role: link a repository path to its page on GitHub.

use crate::node::Node;
use crate::role::{RoleInvocation, RoleOutput};

/// Blob URL prefix; the path is appended verbatim.
const BLOB_BASE: &str = "https://github.com/SolidWallOfCode/libswoc/blob";

/// The only ref links ever point at.
const GIT_REF: &str = "master";

/// Build the GitHub blob URL for a repository-relative path.
pub fn blob_url(path: &str) -> String {
    return format!("{BLOB_BASE}/{GIT_REF}/{path}");
}

/// Display label for a path: everything after the last `/`.
///
/// A path ending in `/` and the empty path both yield an empty label.
pub fn basename(path: &str) -> &str {
    return path.rsplit_once('/').map_or(path, |(_, name)| return name);
}

/// Turn ``:swoc:git:`path` `` into a reference to the file on GitHub.
///
/// Never fails and never checks that the path exists.
pub fn make_github_link(invocation: &RoleInvocation) -> RoleOutput {
    let node = Node::reference(
        invocation.rawtext.clone(),
        basename(&invocation.text),
        blob_url(&invocation.text),
        invocation.options.clone(),
    );
    return (vec![node], Vec::new());
}
