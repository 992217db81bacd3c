//! Configuration and traffic split validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject malformed splits before they reach the compiler
//! - Validate value ranges (percent <= 100, per-name totals of 100)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: input → Result<(), Vec<ValidationError>>
//! - The compiler itself never fails; this is the caller-side gate

use thiserror::Error;
use url::Host;

use crate::config::schema::{MeshConfig, NamingConfig};
use crate::traffic::{Route, TrafficConfig, DEFAULT_TARGET};

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("route domain {0:?} is not a valid DNS name")]
    InvalidDomain(String),

    #[error("target name {0:?} is not a valid DNS label")]
    InvalidTargetName(String),

    #[error("target {0:?} has no revisions")]
    EmptyTarget(String),

    #[error("target {target:?} has a revision with an empty name")]
    EmptyRevisionName { target: String },

    #[error("target {target:?} assigns {percent}% to revision {revision:?} (max 100)")]
    PercentOutOfRange {
        target: String,
        revision: String,
        percent: u32,
    },

    #[error("target {target:?} percentages sum to {total}, expected 100")]
    PercentSum { target: String, total: u32 },
}

/// Validate compiler configuration.
pub fn validate_config(config: &MeshConfig) -> Result<(), Vec<ValidationError>> {
    let errors = naming_errors(&config.naming);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn naming_errors(naming: &NamingConfig) -> Vec<ValidationError> {
    let required = [
        ("naming.cluster_domain", &naming.cluster_domain),
        ("naming.system_namespace", &naming.system_namespace),
        ("naming.gateway_service", &naming.gateway_service),
        ("naming.activator_service", &naming.activator_service),
        ("naming.revision_header", &naming.revision_header),
        ("naming.namespace_header", &naming.namespace_header),
    ];

    required
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| ValidationError::EmptyField(field))
        .collect()
}

/// Validate a route and its traffic split before compilation.
///
/// Errors are reported in target-name order so repeated runs print the same list.
pub fn validate_traffic(route: &Route, traffic: &TrafficConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if route.name.is_empty() {
        errors.push(ValidationError::EmptyField("route.name"));
    }
    if route.namespace.is_empty() {
        errors.push(ValidationError::EmptyField("route.namespace"));
    }
    if let Some(domain) = &route.domain {
        if !is_dns_name(domain) {
            errors.push(ValidationError::InvalidDomain(domain.clone()));
        }
    }

    for name in traffic.sorted_names() {
        let targets = &traffic.targets[name];

        if name != DEFAULT_TARGET && !is_dns_label(name) {
            errors.push(ValidationError::InvalidTargetName(name.to_string()));
        }
        if targets.is_empty() {
            errors.push(ValidationError::EmptyTarget(name.to_string()));
            continue;
        }

        let mut total = 0u32;
        for target in targets {
            if target.revision_name.is_empty() {
                errors.push(ValidationError::EmptyRevisionName {
                    target: name.to_string(),
                });
            }
            if target.percent > 100 {
                errors.push(ValidationError::PercentOutOfRange {
                    target: name.to_string(),
                    revision: target.revision_name.clone(),
                    percent: target.percent,
                });
            }
            total = total.saturating_add(target.percent);
        }
        if total != 100 {
            errors.push(ValidationError::PercentSum {
                target: name.to_string(),
                total,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_dns_name(domain: &str) -> bool {
    matches!(Host::parse(domain), Ok(Host::Domain(_))) && domain.split('.').all(is_dns_label)
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
