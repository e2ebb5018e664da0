use std::path::Path;

use crate::error::Error;

/// Config file name, looked up in the project root.
pub const CONFIG_FILE: &str = ".swocdoc.toml";

/// Project configuration loaded from `.swocdoc.toml`.
/// Include/exclude patterns are path prefixes applied to `.rst` sources.
#[derive(Debug, Default)]
pub struct Config {
    /// Prefixes that are skipped even when included.
    exclude: Vec<String>,
    /// Prefixes to scan; empty means everything.
    include: Vec<String>,
}

/// Raw TOML structure for `.swocdoc.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SwocdocTomlConfig {
    /// Prefixes that are skipped even when included.
    #[serde(default)]
    exclude: Vec<String>,
    /// Prefixes to scan.
    #[serde(default)]
    include: Vec<String>,
}

impl Config {
    /// Load config from `.swocdoc.toml` in the given root directory.
    /// A missing file scans everything. A file that exists but is malformed
    /// is an error, never a silent fallback.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::ConfigInvalid` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };

        let raw: SwocdocTomlConfig = toml::from_str(&content).map_err(|e| {
            return Error::ConfigInvalid {
                path: path.clone(),
                reason: e.message().to_string(),
            };
        })?;
        return Ok(Self {
            exclude: raw.exclude,
            include: raw.include,
        });
    }

    /// Check whether a document path should be scanned.
    ///
    /// A path is included if no include patterns are set, or if it starts
    /// with at least one include pattern. An included path is then dropped
    /// if it starts with any exclude pattern.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| return relative_path.starts_with(p.as_str()));

        if !included {
            return false;
        }

        return !self.exclude.iter().any(|p| return relative_path.starts_with(p.as_str()));
    }
}
