// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reserved names injected by the cloud plugin into managed containers.
//!
//! User-supplied image definitions must not use these prefixes: the plugin
//! sets variables and labels under them to track the containers it owns.

/// Prefix of environment variables injected into agent containers.
pub const ENV_PREFIX: &str = "DOCKER_CLOUD_";

/// Prefix of label keys used for internal namespacing.
pub const NS_PREFIX: &str = "teamcity.docker.";

/// Returns `true` if a `NAME=VALUE` env entry uses the reserved prefix.
pub fn is_reserved_env(entry: &str) -> bool {
    entry.starts_with(ENV_PREFIX)
}

/// Returns `true` if a label key falls in the reserved namespace.
pub fn is_reserved_label(key: &str) -> bool {
    key.starts_with(NS_PREFIX)
}

#[cfg(test)]
#[path = "reserved_tests.rs"]
mod tests;
