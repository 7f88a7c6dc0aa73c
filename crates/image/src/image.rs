// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated image profile.

use crate::error::DefinitionError;
use dkc_core::Node;
use serde::Serialize;

/// One cloud image profile: a container template agents are started from.
///
/// Immutable once built. Profile names are only unique within a loaded
/// batch; [`load_images`](crate::load_images) enforces that, not this type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageConfig {
    profile_name: String,
    container_spec: Node,
    rm_on_exit: bool,
    use_official_agent_image: bool,
    max_instance_count: u32,
    agent_pool_id: Option<i64>,
}

impl ImageConfig {
    /// Build an image profile.
    ///
    /// Fails if the profile name is empty or `max_instance_count` is not a
    /// positive `u32`.
    pub fn new(
        profile_name: impl Into<String>,
        container_spec: Node,
        rm_on_exit: bool,
        use_official_agent_image: bool,
        max_instance_count: i64,
        agent_pool_id: Option<i64>,
    ) -> Result<Self, DefinitionError> {
        let profile_name = profile_name.into();
        if profile_name.is_empty() {
            return Err(DefinitionError::EmptyProfileName);
        }
        if max_instance_count < 1 {
            return Err(DefinitionError::NoInstanceAllowed(max_instance_count));
        }
        let max_instance_count = u32::try_from(max_instance_count)
            .map_err(|_| DefinitionError::InstanceCountOverflow(max_instance_count))?;

        Ok(Self {
            profile_name,
            container_spec,
            rm_on_exit,
            use_official_agent_image,
            max_instance_count,
            agent_pool_id,
        })
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// The `Container` document, passed through uninterpreted.
    pub fn container_spec(&self) -> &Node {
        &self.container_spec
    }

    /// When `true`, containers are discarded once stopped instead of reused.
    pub fn rm_on_exit(&self) -> bool {
        self.rm_on_exit
    }

    /// When `true`, the official agent image replaces the configured one.
    pub fn use_official_agent_image(&self) -> bool {
        self.use_official_agent_image
    }

    pub fn max_instance_count(&self) -> u32 {
        self.max_instance_count
    }

    pub fn agent_pool_id(&self) -> Option<i64> {
        self.agent_pool_id
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
