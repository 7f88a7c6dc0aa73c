// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while loading image profiles.

use dkc_core::{Node, NodeError};
use std::fmt;
use thiserror::Error;

/// Why a single image definition was rejected.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error("unsupported image specification version: {0}")]
    UnsupportedVersion(i64),
    #[error("variable starts with reserved prefix: {0}")]
    ReservedEnvPrefix(String),
    #[error("label key starts with reserved prefix: {0}")]
    ReservedLabelPrefix(String),
    #[error("profile name cannot be empty")]
    EmptyProfileName,
    #[error("at least 1 instance must be allowed, got {0}")]
    NoInstanceAllowed(i64),
    #[error("max instance count out of range: {0}")]
    InstanceCountOverflow(i64),
}

/// A definition that could not be turned into an [`ImageConfig`](crate::ImageConfig).
///
/// Carries the JSON text of the offending definition so the failure can be
/// located without the surrounding batch.
#[derive(Debug, Error)]
#[error("failed to parse image definition: {source}\n{definition}")]
pub struct ImageError {
    definition: String,
    source: DefinitionError,
}

impl ImageError {
    pub(crate) fn new(node: &Node, source: DefinitionError) -> Self {
        Self { definition: node.to_string(), source }
    }

    /// JSON text of the rejected definition.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn cause(&self) -> &DefinitionError {
        &self.source
    }
}

/// One invalid configuration key and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProperty {
    location: String,
    message: String,
}

impl InvalidProperty {
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self { location: location.into(), message: message.into() }
    }

    /// Property key the failure is reported against.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InvalidProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// A rejected image batch, with every failure in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid image configuration:\n{}", join_failures(.failures))]
pub struct ConfigError {
    failures: Vec<InvalidProperty>,
}

impl ConfigError {
    pub(crate) fn new(failures: Vec<InvalidProperty>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[InvalidProperty] {
        &self.failures
    }
}

fn join_failures(failures: &[InvalidProperty]) -> String {
    failures.iter().map(|f| format!("  {}", f)).collect::<Vec<_>>().join("\n")
}
