// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Image definition parsing.
//!
//! A definition is one element of the images array:
//!
//! ```json
//! {
//!   "Administration": {
//!     "Version": 1,
//!     "Profile": "agent1",
//!     "RmOnExit": true,
//!     "UseOfficialTCAgentImage": false,
//!     "MaxInstanceCount": 2
//!   },
//!   "Container": {
//!     "Image": "jetbrains/teamcity-agent",
//!     "Env": ["MY_VAR=1"],
//!     "Labels": {"team": "build"}
//!   }
//! }
//! ```
//!
//! `Container` is kept as an opaque [`Node`]; only `Env` and `Labels` are
//! inspected, to keep user values out of the reserved namespaces.

use crate::error::{DefinitionError, ImageError};
use crate::image::ImageConfig;
use crate::pool::{resolve_agent_pool_id, PoolParameter};
use dkc_core::{is_reserved_env, is_reserved_label, Node};

/// The only `Administration.Version` this parser understands.
pub const IMAGE_SPEC_VERSION: i64 = 1;

/// `MaxInstanceCount` when absent; always rejected by [`ImageConfig::new`].
const UNSET_INSTANCE_COUNT: i64 = -1;

type ContainerRule = fn(&Node) -> Result<(), DefinitionError>;

/// Checked in order against `Container`; the first failing rule rejects the
/// definition.
const CONTAINER_RULES: &[ContainerRule] = &[no_reserved_env, no_reserved_labels];

fn supported_version(admin: &Node) -> Result<(), DefinitionError> {
    match admin.get_int("Version")? {
        IMAGE_SPEC_VERSION => Ok(()),
        other => Err(DefinitionError::UnsupportedVersion(other)),
    }
}

fn no_reserved_env(container: &Node) -> Result<(), DefinitionError> {
    let env = container.array_or("Env", Node::empty_array())?;
    for value in env.array_values()? {
        let entry = value.as_str()?;
        if is_reserved_env(&entry) {
            return Err(DefinitionError::ReservedEnvPrefix(entry.into_owned()));
        }
    }
    Ok(())
}

fn no_reserved_labels(container: &Node) -> Result<(), DefinitionError> {
    let labels = container.object_or("Labels", Node::empty_object())?;
    let reserved = labels.object_keys()?.find(|key| is_reserved_label(key)).map(str::to_string);
    match reserved {
        Some(key) => Err(DefinitionError::ReservedLabelPrefix(key)),
        None => Ok(()),
    }
}

impl ImageConfig {
    /// Parse one image definition.
    ///
    /// `pool_parameters` supplies agent-pool assignments keyed by profile
    /// name; without it the image has no agent pool.
    ///
    /// Any failure is reported as an [`ImageError`] embedding the JSON text of
    /// `node`.
    pub fn from_node(
        node: &Node,
        pool_parameters: Option<&[PoolParameter]>,
    ) -> Result<Self, ImageError> {
        parse_definition(node, pool_parameters).map_err(|source| ImageError::new(node, source))
    }
}

fn parse_definition(
    node: &Node,
    pool_parameters: Option<&[PoolParameter]>,
) -> Result<ImageConfig, DefinitionError> {
    let admin = node.object("Administration")?;
    supported_version(&admin)?;

    let container = node.object("Container")?;
    for rule in CONTAINER_RULES {
        rule(&container)?;
    }

    let profile_name = admin.get_str("Profile")?;
    let rm_on_exit = admin.get_bool("RmOnExit")?;
    let use_official_agent_image = admin.get_bool("UseOfficialTCAgentImage")?;
    let agent_pool_id = resolve_agent_pool_id(&profile_name, pool_parameters);
    let max_instance_count = admin.get_int_or("MaxInstanceCount", UNSET_INSTANCE_COUNT)?;

    ImageConfig::new(
        profile_name,
        container,
        rm_on_exit,
        use_official_agent_image,
        max_instance_count,
        agent_pool_id,
    )
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
