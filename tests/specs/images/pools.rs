// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent-pool enrichment from pool metadata.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn load_with_pools(profiles: &[&str], pools: &str) -> Vec<ImageConfig> {
    let definitions: Vec<ImageDefinition> = profiles.iter().map(|p| image(p)).collect();
    load_images(&properties(Some(&images_json(&definitions)), Some(pools))).unwrap()
}

#[test]
fn matching_profile_gets_pool() {
    let images = load_with_pools(&["agent1"], r#"[{"id":"agent1","agentPoolId":7}]"#);
    assert_eq!(images[0].agent_pool_id(), Some(7));
}

#[test]
fn unmatched_profile_has_no_pool() {
    let images = load_with_pools(&["agent2"], r#"[{"id":"agent1","agentPoolId":7}]"#);
    assert_eq!(images[0].agent_pool_id(), None);
}

#[test]
fn first_matching_entry_wins() {
    let pools = r#"[{"id":"agent1","agentPoolId":7},{"id":"agent1","agentPoolId":8}]"#;
    let images = load_with_pools(&["agent1"], pools);
    assert_eq!(images[0].agent_pool_id(), Some(7));
}

#[test]
fn malformed_metadata_degrades_to_no_pools() {
    let images = load_with_pools(&["agent1", "agent2"], r#"[{"id":"agent1","agentPoolId":7"#);
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|i| i.agent_pool_id().is_none()));
}

#[test]
fn missing_metadata_means_no_pools() {
    let images = load(&[image("agent1")]).unwrap();
    assert_eq!(images[0].agent_pool_id(), None);
}
