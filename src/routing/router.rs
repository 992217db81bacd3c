//! Rule lookup over a compiled VirtualServiceSpec.
//!
//! # Responsibilities
//! - Find the rule a request authority would be dispatched to
//! - Return the matched rule or an explicit no-match
//!
//! # Design Decisions
//! - First match wins, in rule order (the order the proxy evaluates them)
//! - Hosts are checked before rules: an authority outside the hosts list never matches

use crate::mesh::{HttpRoute, VirtualServiceSpec};
use crate::routing::matcher::Matcher;

impl VirtualServiceSpec {
    /// The first rule matching `authority`, if the spec binds it at all.
    pub fn route_for(&self, authority: &str) -> Option<&HttpRoute> {
        if !self.binds_host(authority) {
            return None;
        }
        self.http.iter().find(|rule| rule.matches(authority))
    }

    /// Whether `authority` is covered by one of the spec's hosts.
    pub fn binds_host(&self, authority: &str) -> bool {
        self.hosts.iter().any(|host| host_covers(host, authority))
    }
}

/// `*.example.com` covers any subdomain of example.com; other hosts match exactly.
fn host_covers(host: &str, authority: &str) -> bool {
    match host.strip_prefix("*.") {
        Some(suffix) => authority
            .len()
            .checked_sub(suffix.len() + 1)
            .filter(|&dot| dot > 0 && authority.as_bytes()[dot] == b'.')
            .is_some_and(|dot| authority[dot + 1..].eq_ignore_ascii_case(suffix)),
        None => host.eq_ignore_ascii_case(authority),
    }
}
