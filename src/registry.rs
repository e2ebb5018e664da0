//! Role registry: where extensions register roles and domains, and where
//! markup is dispatched to them.

use std::collections::BTreeMap;

use crate::domain::Domain;
use crate::error::Error;
use crate::node::{Node, NodeKind};
use crate::role::{self, Level, Message, RoleFn, RoleInvocation, RoleOutput};

/// Registration surface offered to extensions at setup time.
pub trait Registry {
    /// Register a domain so roles can be attached to it.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateDomain` if the name is taken.
    fn add_domain(&mut self, domain: Domain) -> Result<(), Error>;

    /// Register an unqualified role that renders its text in a built-in style.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateRole` if the name is taken.
    fn add_generic_role(&mut self, name: &str, kind: NodeKind) -> Result<(), Error>;

    /// Attach a role implementation to `domain:name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownDomain` if the domain was never added,
    /// or `Error::DuplicateRole` if the pair is taken.
    fn add_role_to_domain(&mut self, domain: &str, name: &str, role: RoleFn) -> Result<(), Error>;
}

/// What a resolved role name runs.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    /// A role function registered under a domain.
    Custom(RoleFn),
    /// A built-in style.
    Generic(NodeKind),
}

impl Handler {
    /// Run the handler against one invocation.
    pub fn run(self, invocation: &RoleInvocation) -> RoleOutput {
        return match self {
            Self::Custom(role) => role(invocation),
            Self::Generic(kind) => role::generic_role(kind, invocation),
        };
    }
}

/// A registered domain and its roles.
#[derive(Debug)]
struct DomainEntry {
    /// Identity as registered.
    domain: Domain,
    /// Roles keyed by unqualified name.
    roles: BTreeMap<String, RoleFn>,
}

/// One line of `roles` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleListing {
    /// What the role does: a style name or the owning domain's label.
    pub description: String,
    /// Name as written in markup.
    pub name: String,
}

/// The host application: owns every registration made by extensions.
///
/// Each `App` is independent; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct App {
    /// Registered domains keyed by name.
    domains: BTreeMap<String, DomainEntry>,
    /// Generic roles keyed by name.
    generic: BTreeMap<String, NodeKind>,
}

impl App {
    /// An application with nothing registered.
    pub fn new() -> Self {
        return Self::default();
    }

    /// Run the role named by `invocation.name`.
    ///
    /// Unknown names produce an error message and a problematic node that
    /// points at it (index 0 of the returned messages).
    pub fn dispatch(&self, invocation: &RoleInvocation) -> RoleOutput {
        let (domain, name) = match invocation.name.split_once(':') {
            Some((domain, name)) => (Some(domain), name),
            None => (None, invocation.name.as_str()),
        };

        if let Some(handler) = self.resolve(domain, name) {
            return handler.run(invocation);
        }

        let message = Message {
            level: Level::Error,
            line: invocation.lineno,
            source: invocation.source.clone(),
            text: format!("Unknown interpreted text role \"{}\".", invocation.name),
        };
        let node = Node::Problematic {
            message_index: 0,
            rawtext: invocation.rawtext.clone(),
        };
        return (vec![node], vec![message]);
    }

    /// Look up a registered domain by name.
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        return self.domains.get(name).map(|entry| return &entry.domain);
    }

    /// Find the handler for a role name.
    ///
    /// A qualified name only looks in its domain. An unqualified name tries
    /// the generic roles first, then each domain in name order.
    pub fn resolve(&self, domain: Option<&str>, name: &str) -> Option<Handler> {
        if let Some(domain) = domain {
            return self
                .domains
                .get(domain)
                .and_then(|entry| return entry.roles.get(name))
                .map(|role| return Handler::Custom(*role));
        }

        if let Some(kind) = self.generic.get(name) {
            return Some(Handler::Generic(*kind));
        }

        return self
            .domains
            .values()
            .find_map(|entry| return entry.roles.get(name))
            .map(|role| return Handler::Custom(*role));
    }

    /// Every registered role, sorted by name.
    pub fn roles(&self) -> Vec<RoleListing> {
        let generic = self.generic.iter().map(|(name, kind)| {
            return RoleListing {
                description: kind.name().to_string(),
                name: name.clone(),
            };
        });
        let custom = self.domains.iter().flat_map(|(domain, entry)| {
            return entry.roles.keys().map(move |name| {
                return RoleListing {
                    description: format!("{} role", entry.domain.label),
                    name: format!("{domain}:{name}"),
                };
            });
        });

        let mut listing: Vec<RoleListing> = generic.chain(custom).collect();
        listing.sort_by(|a, b| return a.name.cmp(&b.name));
        return listing;
    }
}

impl Registry for App {
    fn add_domain(&mut self, domain: Domain) -> Result<(), Error> {
        if self.domains.contains_key(domain.name) {
            return Err(Error::DuplicateDomain {
                name: domain.name.to_string(),
            });
        }
        self.domains.insert(
            domain.name.to_string(),
            DomainEntry {
                domain,
                roles: BTreeMap::new(),
            },
        );
        return Ok(());
    }

    fn add_generic_role(&mut self, name: &str, kind: NodeKind) -> Result<(), Error> {
        if self.generic.contains_key(name) {
            return Err(Error::DuplicateRole {
                name: name.to_string(),
            });
        }
        self.generic.insert(name.to_string(), kind);
        return Ok(());
    }

    fn add_role_to_domain(&mut self, domain: &str, name: &str, role: RoleFn) -> Result<(), Error> {
        let entry = self.domains.get_mut(domain).ok_or_else(|| {
            return Error::UnknownDomain {
                name: domain.to_string(),
            };
        })?;
        if entry.roles.contains_key(name) {
            return Err(Error::DuplicateRole {
                name: format!("{domain}:{name}"),
            });
        }
        entry.roles.insert(name.to_string(), role);
        return Ok(());
    }
}
