// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-definition rules surface as a single batch failure.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn assert_rejected(definition: ImageDefinition) {
    let err = load(&[image("valid"), definition]).unwrap_err();
    assert_eq!(messages(&err), vec!["cannot parse image data"]);
}

#[test]
fn unsupported_version_rejects_whole_batch() {
    assert_rejected(ImageDefinition::builder().profile("v2").version(2).build());
}

#[test]
fn reserved_env_variable_rejected() {
    assert_rejected(ImageDefinition::builder().env(vec!["DOCKER_CLOUD_X=1".to_string()]).build());
}

#[test]
fn ordinary_env_variable_accepted() {
    let definition = ImageDefinition::builder().env(vec!["MY_VAR=1".to_string()]).build();
    let images = load(&[definition]).unwrap();
    assert_eq!(images.len(), 1);
}

#[test]
fn reserved_label_rejected() {
    let labels = [("teamcity.docker.internal".to_string(), "1".to_string())].into_iter().collect();
    assert_rejected(ImageDefinition::builder().labels(labels).build());
}

#[test]
fn ordinary_label_accepted() {
    let labels = [("team".to_string(), "build".to_string())].into_iter().collect();
    assert!(load(&[ImageDefinition::builder().labels(labels).build()]).is_ok());
}

#[test]
fn omitted_max_instance_count_rejected() {
    assert_rejected(ImageDefinition::builder().profile("unbounded").max_instance_count(None).build());
}

#[test]
fn zero_max_instance_count_rejected() {
    assert_rejected(ImageDefinition::builder().profile("none").max_instance_count(Some(0)).build());
}

#[test]
fn empty_profile_name_rejected() {
    assert_rejected(image(""));
}
