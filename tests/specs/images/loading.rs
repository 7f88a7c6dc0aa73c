// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch loading: ordering, duplicates, fatal paths, repeatability.

use crate::prelude::*;
use proptest::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn distinct_profiles_load_in_order() {
    let images = load(&[image("linux"), image("windows"), image("arm")]).unwrap();
    assert_eq!(profile_names(&images), vec!["linux", "windows", "arm"]);
}

#[test]
fn shared_profile_name_rejects_batch() {
    let err = load(&[image("agent1"), image("other"), image("agent1")]).unwrap_err();
    assert_eq!(messages(&err), vec!["duplicate profile name: agent1"]);
    assert_eq!(err.failures()[0].location(), IMAGES_PARAM);
    assert!(err.to_string().contains("agent1"));
}

#[test]
fn missing_images_text() {
    let err = load_images(&properties(None, None)).unwrap_err();
    assert_eq!(messages(&err), vec!["no image provided"]);
}

#[test]
fn empty_images_text() {
    let err = load_images(&properties(Some(""), Some("[]"))).unwrap_err();
    assert_eq!(messages(&err), vec!["no image provided"]);
}

#[test]
fn truncated_images_text() {
    let json = images_json(&[image("agent1")]);
    let err = load_images(&properties(Some(&json[..json.len() - 2]), None)).unwrap_err();
    assert_eq!(messages(&err), vec!["cannot parse image data"]);
}

#[test]
fn unrelated_properties_are_ignored() {
    let mut props = properties(Some(&images_json(&[image("agent1")])), None);
    props.insert("run.var.teamcity.docker.cloud.instance_uri".to_string(), "tcp://x:2375".to_string());
    assert_eq!(load_images(&props).unwrap().len(), 1);
}

#[test]
fn container_spec_passes_through() {
    let json = r#"[{
        "Administration": {"Version": 1, "Profile": "custom", "RmOnExit": false,
                           "UseOfficialTCAgentImage": false, "MaxInstanceCount": 1},
        "Container": {"Image": "ubuntu", "HostConfig": {"Binds": ["/tmp:/tmp"]}, "Env": ["A=1"]}
    }]"#;
    let images = load_images(&properties(Some(json), None)).unwrap();
    let spec = images[0].container_spec();
    assert_eq!(spec.object("HostConfig").unwrap().to_string(), r#"{"Binds":["/tmp:/tmp"]}"#);
    assert_eq!(spec.get_str("Image").unwrap(), "ubuntu");
}

proptest! {
    #[test]
    fn repeated_loads_are_equal(
        profiles in proptest::collection::vec("[a-z]{1,6}", 1..6),
        pool in proptest::option::of(0i64..100),
    ) {
        let definitions: Vec<ImageDefinition> = profiles.iter().map(|p| image(p)).collect();
        let pools = pool.map(|id| format!(r#"[{{"id": "{}", "agentPoolId": {}}}]"#, profiles[0], id));
        let props = properties(Some(&images_json(&definitions)), pools.as_deref());
        prop_assert_eq!(load_images(&props), load_images(&props));
    }
}
