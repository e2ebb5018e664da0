/// Crate-level error types for swocdoc diagnostics.
use std::path::PathBuf;

/// Every error names the role, domain, or file involved so the diagnostic
/// can be acted on without rerunning anything.
#[allow(clippy::error_impl_error, reason = "crate-internal error type in binary")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file exists but cannot be read as TOML.
    #[error("config invalid: {}: {reason}", path.display())]
    ConfigInvalid {
        /// Path to the malformed config file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A domain with the same name is already registered.
    #[error("duplicate domain: `{name}`")]
    DuplicateDomain {
        /// Domain name that was registered twice.
        name: String,
    },

    /// A role with the same qualified name is already registered.
    #[error("duplicate role: `{name}`")]
    DuplicateRole {
        /// Qualified role name (`domain:role` or bare `role`).
        name: String,
    },

    /// A document passed on the command line does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization of command output failed.
    #[error("json: {0}")]
    Json(
        /// The wrapped serde_json error.
        #[from]
        serde_json::Error,
    ),

    /// The inline markup pattern failed to compile.
    #[error("pattern: {0}")]
    Pattern(
        /// The wrapped regex error.
        #[from]
        regex::Error,
    ),

    /// A role was attached to a domain that was never registered.
    #[error("unknown domain: `{name}`")]
    UnknownDomain {
        /// Domain name that was not found.
        name: String,
    },
}
