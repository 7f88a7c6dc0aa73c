// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent-pool assignments supplied alongside the image profiles.

use serde::{Deserialize, Serialize};

/// Per-profile parameters provided by the cloud API.
///
/// ```json
/// [{"id": "agent1", "agentPoolId": 7}, {"id": "agent2"}]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoolParameter {
    /// Profile name the parameters apply to.
    pub id: String,
    #[serde(default, rename = "agentPoolId")]
    pub agent_pool_id: Option<i64>,
}

impl PoolParameter {
    pub fn new(id: impl Into<String>, agent_pool_id: Option<i64>) -> Self {
        Self { id: id.into(), agent_pool_id }
    }

    /// Parse a JSON array of parameters. Unknown keys are ignored.
    pub fn collection_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Agent pool for `profile_name`, from the first parameter entry with a
/// matching id. Later entries for the same id are never consulted.
pub fn resolve_agent_pool_id(
    profile_name: &str,
    parameters: Option<&[PoolParameter]>,
) -> Option<i64> {
    parameters?.iter().find(|p| p.id == profile_name).and_then(|p| p.agent_pool_id)
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
