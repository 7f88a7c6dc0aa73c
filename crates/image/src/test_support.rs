// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{IMAGES_PARAM, SOURCE_IMAGES_JSON};
use dkc_core::Node;
use indexmap::IndexMap;
use serde_json::{json, Value};
use std::collections::HashMap;

/// An image definition as written in the images JSON array.
///
/// `max_instance_count: None` omits the key entirely, and empty `env` or
/// `labels` are left out of the `Container` section.
#[derive(Debug, Clone)]
pub struct ImageDefinition {
    pub profile: String,
    pub image: String,
    pub version: i64,
    pub rm_on_exit: bool,
    pub use_official_agent_image: bool,
    pub max_instance_count: Option<i64>,
    pub env: Vec<String>,
    pub labels: IndexMap<String, String>,
}

dkc_core::builder! {
    pub struct ImageDefinitionBuilder => ImageDefinition {
        into {
            profile: String = "agent1",
            image: String = "jetbrains/teamcity-agent",
        }
        set {
            version: i64 = crate::IMAGE_SPEC_VERSION,
            rm_on_exit: bool = true,
            use_official_agent_image: bool = false,
            max_instance_count: Option<i64> = Some(2),
            env: Vec<String> = Vec::new(),
            labels: IndexMap<String, String> = IndexMap::new(),
        }
    }
}

impl ImageDefinition {
    pub fn to_json(&self) -> Value {
        let mut admin = json!({
            "Version": self.version,
            "Profile": self.profile,
            "RmOnExit": self.rm_on_exit,
            "UseOfficialTCAgentImage": self.use_official_agent_image,
        });
        if let Some(count) = self.max_instance_count {
            admin["MaxInstanceCount"] = json!(count);
        }

        let mut container = json!({ "Image": self.image });
        if !self.env.is_empty() {
            container["Env"] = json!(self.env);
        }
        if !self.labels.is_empty() {
            container["Labels"] = json!(self.labels);
        }

        json!({ "Administration": admin, "Container": container })
    }

    pub fn to_node(&self) -> Node {
        Node::from(self.to_json())
    }
}

/// JSON text of an images array.
pub fn images_json(definitions: &[ImageDefinition]) -> String {
    Value::Array(definitions.iter().map(ImageDefinition::to_json).collect()).to_string()
}

/// Plugin properties carrying `images` and, optionally, pool metadata.
pub fn properties(images: Option<&str>, pool_metadata: Option<&str>) -> HashMap<String, String> {
    let mut props = HashMap::new();
    if let Some(images) = images {
        props.insert(IMAGES_PARAM.to_string(), images.to_string());
    }
    if let Some(pool_metadata) = pool_metadata {
        props.insert(SOURCE_IMAGES_JSON.to_string(), pool_metadata.to_string());
    }
    props
}
