//! End-to-end compilation scenarios.

use std::collections::HashMap;

use mesh_route_compiler::mesh::{DestinationWeight, StringMatch};
use mesh_route_compiler::traffic::DEFAULT_TARGET;
use mesh_route_compiler::{ClusterNaming, RevisionTarget, TrafficConfig, VirtualServiceBuilder};
use proptest::prelude::*;

mod common;

use common::{revision_host, route, targets, ACTIVATOR, BASE_DOMAIN, ROUTE_FQDN};

#[test]
fn test_default_target_with_cold_revision() {
    let naming = ClusterNaming::default();
    let traffic = TrafficConfig::new().with_target(
        DEFAULT_TARGET,
        targets(&[("v1", 90, true), ("v2", 10, false)]),
    );

    let spec = VirtualServiceBuilder::new(&naming).build(&route(), &traffic.targets);

    assert_eq!(spec.http.len(), 1);
    let rule = &spec.http[0];
    let domains: Vec<_> = rule.matches.iter().map(|m| m.authority.clone()).collect();
    assert_eq!(
        domains,
        vec![Some(StringMatch::exact(BASE_DOMAIN)), Some(StringMatch::exact(ROUTE_FQDN))]
    );
    assert_eq!(
        rule.route,
        vec![
            DestinationWeight::new(revision_host("v1"), 80, 90),
            DestinationWeight::new(ACTIVATOR, 80, 10),
        ]
    );
    let headers = rule.append_headers.as_ref().expect("fallback headers");
    assert_eq!(headers["knative-serving-revision"], "v2");
    assert_eq!(headers["knative-serving-namespace"], "default");
    assert_eq!(headers["x-envoy-upstream-rq-timeout-ms"], "60000");
}

#[test]
fn test_named_targets_fully_active() {
    let naming = ClusterNaming::default();
    let traffic = TrafficConfig::new()
        .with_target("stable", targets(&[("v1", 100, true)]))
        .with_target("canary", targets(&[("v2", 100, true)]));

    let spec = VirtualServiceBuilder::new(&naming).build(&route(), &traffic.targets);

    assert_eq!(spec.http.len(), 2);
    assert_eq!(
        spec.http[0].matches[0].authority,
        Some(StringMatch::exact("canary.svc.example.com"))
    );
    assert_eq!(
        spec.http[1].matches[0].authority,
        Some(StringMatch::exact("stable.svc.example.com"))
    );
    assert!(spec.http.iter().all(|r| r.append_headers.is_none()));
}

#[test]
fn test_serialized_document() {
    let naming = ClusterNaming::default();
    let traffic = TrafficConfig::new()
        .with_target(DEFAULT_TARGET, targets(&[("v1", 100, true)]))
        .with_target("cold", targets(&[("v0", 100, false)]));

    let vs = VirtualServiceBuilder::new(&naming).make_virtual_service(&route(), &traffic);
    let json = serde_json::to_value(&vs).unwrap();

    assert_eq!(json["apiVersion"], "networking.istio.io/v1alpha3");
    assert_eq!(json["metadata"]["labels"]["route"], "svc");
    assert_eq!(json["metadata"]["ownerReferences"][0]["kind"], "Route");
    assert_eq!(json["metadata"]["ownerReferences"][0]["blockOwnerDeletion"], true);
    assert_eq!(json["spec"]["gateways"][1], "mesh");
    assert_eq!(json["spec"]["hosts"][0], "*.svc.example.com");
    assert!(json["spec"]["http"][0].get("appendHeaders").is_none());
    assert_eq!(
        json["spec"]["http"][1]["appendHeaders"]["knative-serving-revision"],
        "v0"
    );
    assert_eq!(json["spec"]["http"][1]["route"][0]["destination"]["host"], ACTIVATOR);
}

#[test]
fn test_compiled_rules_dispatch_by_authority() {
    let naming = ClusterNaming::default();
    let traffic = TrafficConfig::new()
        .with_target(DEFAULT_TARGET, targets(&[("v1", 100, true)]))
        .with_target("canary", targets(&[("v2", 100, true)]));

    let spec = VirtualServiceBuilder::new(&naming).build(&route(), &traffic.targets);

    let host_for = |authority: &str| {
        spec.route_for(authority)
            .map(|rule| rule.route[0].destination.host.clone())
    };
    assert_eq!(host_for(BASE_DOMAIN), Some(revision_host("v1")));
    assert_eq!(host_for(ROUTE_FQDN), Some(revision_host("v1")));
    assert_eq!(host_for("canary.svc.example.com"), Some(revision_host("v2")));
    assert_eq!(host_for("other.svc.example.com"), None);
}

#[test]
fn test_idempotent_rebuild() {
    let naming = ClusterNaming::default();
    let builder = VirtualServiceBuilder::new(&naming);
    let traffic = TrafficConfig::new()
        .with_target(DEFAULT_TARGET, targets(&[("v1", 50, true), ("v2", 50, false)]))
        .with_target("b", targets(&[("v3", 100, false)]))
        .with_target("a", targets(&[("v4", 0, true), ("v5", 100, true)]));

    let first = builder.make_virtual_service(&route(), &traffic);
    let second = builder.make_virtual_service(&route(), &traffic);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

fn target_strategy() -> impl Strategy<Value = RevisionTarget> {
    ("[a-z]{1,6}", 0u32..=100, any::<bool>()).prop_map(|(revision_name, percent, active)| {
        RevisionTarget {
            revision_name,
            percent,
            active,
        }
    })
}

fn split_strategy() -> impl Strategy<Value = Vec<(String, Vec<RevisionTarget>)>> {
    prop::collection::btree_map("[a-z]{0,5}", prop::collection::vec(target_strategy(), 1..5), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_output_independent_of_insertion_order(entries in split_strategy()) {
        let naming = ClusterNaming::default();
        let builder = VirtualServiceBuilder::new(&naming);

        let forward: HashMap<_, _> = entries.iter().cloned().collect();
        let reverse: HashMap<_, _> = entries.iter().rev().cloned().collect();

        let a = serde_json::to_string(&builder.build(&route(), &forward)).unwrap();
        let b = serde_json::to_string(&builder.build(&route(), &reverse)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_rules_follow_sorted_names(entries in split_strategy()) {
        let naming = ClusterNaming::default();
        let split: HashMap<_, _> = entries.iter().cloned().collect();
        let spec = VirtualServiceBuilder::new(&naming).build(&route(), &split);

        let mut names: Vec<_> = split.keys().cloned().collect();
        names.sort();
        prop_assert_eq!(spec.http.len(), names.len());

        for (rule, name) in spec.http.iter().zip(&names) {
            let expected = if name.is_empty() {
                BASE_DOMAIN.to_string()
            } else {
                format!("{}.{}", name, BASE_DOMAIN)
            };
            prop_assert_eq!(&rule.matches[0].authority, &Some(StringMatch::exact(expected)));
        }
    }

    #[test]
    fn prop_weights_conserved(entries in split_strategy()) {
        let naming = ClusterNaming::default();
        let split: HashMap<_, _> = entries.iter().cloned().collect();
        let spec = VirtualServiceBuilder::new(&naming).build(&route(), &split);

        let mut names: Vec<_> = split.keys().cloned().collect();
        names.sort();

        for (rule, name) in spec.http.iter().zip(&names) {
            let input = &split[name];
            let total_in: u32 = input.iter().map(|t| t.percent).sum();
            let total_out: u32 = rule.route.iter().map(|d| d.weight).sum();
            prop_assert_eq!(total_in, total_out);

            let active_nonzero = input.iter().filter(|t| t.active && t.percent != 0).count();
            let has_inactive = input.iter().any(|t| !t.active);
            prop_assert_eq!(rule.route.len(), active_nonzero + usize::from(has_inactive));
            prop_assert_eq!(rule.append_headers.is_some(), has_inactive);

            if has_inactive {
                let last = rule.route.last().unwrap();
                let inactive_sum: u32 = input.iter().filter(|t| !t.active).map(|t| t.percent).sum();
                prop_assert_eq!(last.destination.host.as_str(), ACTIVATOR);
                prop_assert_eq!(last.weight, inactive_sum);
            }
        }
    }
}
