//! Authority matching over compiled rules.
//!
//! # Responsibilities
//! - Evaluate a single string predicate against a request authority
//! - Combine a rule's match requests with OR semantics
//!
//! # Design Decisions
//! - Authority comparison is case-insensitive (per HTTP spec)
//! - A match request without an authority predicate matches everything
//! - A rule with no match requests matches everything

use crate::mesh::{HttpMatchRequest, HttpRoute, StringMatch};

/// Trait for matching a request authority against conditions.
pub trait Matcher {
    /// Returns true if the authority satisfies this condition.
    fn matches(&self, authority: &str) -> bool;
}

impl Matcher for StringMatch {
    fn matches(&self, authority: &str) -> bool {
        match self {
            StringMatch::Exact(expected) => expected.eq_ignore_ascii_case(authority),
        }
    }
}

impl Matcher for HttpMatchRequest {
    fn matches(&self, authority: &str) -> bool {
        self.authority
            .as_ref()
            .map_or(true, |predicate| predicate.matches(authority))
    }
}

impl Matcher for HttpRoute {
    fn matches(&self, authority: &str) -> bool {
        // Any match request passing is enough (OR)
        self.matches.is_empty() || self.matches.iter().any(|m| m.matches(authority))
    }
}
