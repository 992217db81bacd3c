//! Route identity and revision targets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved name of the unnamed (default) traffic target.
pub const DEFAULT_TARGET: &str = "";

/// Identity of a logical HTTP route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    /// Route object name.
    pub name: String,

    /// Namespace the route lives in.
    pub namespace: String,

    /// Object uid, used for the owner reference on generated documents.
    #[serde(default)]
    pub uid: Uuid,

    /// Resolved public domain. Absent until the route has been assigned one.
    #[serde(default)]
    pub domain: Option<String>,
}

impl Route {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            uid: Uuid::nil(),
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_uid(mut self, uid: Uuid) -> Self {
        self.uid = uid;
        self
    }

    /// The resolved domain, or the empty string when none is assigned yet.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }
}

/// One allocation of traffic to a revision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RevisionTarget {
    /// Revision receiving the traffic.
    pub revision_name: String,

    /// Share of traffic, 0-100.
    pub percent: u32,

    /// Whether the revision has a running instance.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl RevisionTarget {
    pub fn active(revision_name: impl Into<String>, percent: u32) -> Self {
        Self {
            revision_name: revision_name.into(),
            percent,
            active: true,
        }
    }

    pub fn inactive(revision_name: impl Into<String>, percent: u32) -> Self {
        Self {
            revision_name: revision_name.into(),
            percent,
            active: false,
        }
    }
}

/// Traffic split for a route: target name to the revisions sharing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrafficConfig {
    #[serde(default)]
    pub targets: HashMap<String, Vec<RevisionTarget>>,
}

impl TrafficConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target list under `name`, replacing any previous list.
    pub fn with_target(mut self, name: impl Into<String>, targets: Vec<RevisionTarget>) -> Self {
        self.targets.insert(name.into(), targets);
        self
    }

    /// Target names in lexicographic order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
