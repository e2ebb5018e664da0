//! Domain identities that namespace custom roles.

/// A named group of roles. Markup of the form `name:role` resolves to roles
/// registered under this domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    /// Schema version of any data the domain stores. Nothing stores data yet.
    pub data_version: u32,
    /// Human-readable label.
    pub label: &'static str,
    /// Identifier used in markup.
    pub name: &'static str,
}

impl Domain {
    /// The Solid Wall Of Code domain, home of the `git` source link role.
    pub const fn swoc() -> Self {
        return Self {
            data_version: 1,
            label: "SWOC",
            name: "swoc",
        };
    }
}
