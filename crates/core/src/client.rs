// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection settings for the Docker daemon API.
//!
//! ```ignore
//! let config = DockerClientConfig::new("tcp://127.0.0.1:2376")?
//!     .using_tls(true)
//!     .with_thread_pool_size(4)?
//!     .with_env_overrides()?;
//! ```

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

/// Connect timeout applied when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable overriding the client thread pool size.
pub const THREAD_POOL_SIZE_ENV: &str = "DKC_DOCKER_THREAD_POOL_SIZE";

/// Environment variable overriding the connect timeout, in milliseconds.
pub const CONNECT_TIMEOUT_ENV: &str = "DKC_DOCKER_CONNECT_TIMEOUT_MS";

/// `scheme://rest`, e.g. `unix:///var/run/docker.sock` or `tcp://host:2376`.
#[allow(clippy::expect_used)]
static INSTANCE_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://\S+$").expect("constant regex pattern is valid")
});

/// Errors from building a [`DockerClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientConfigError {
    #[error("invalid Docker instance URI: '{0}'")]
    InvalidUri(String),
    #[error("invalid thread pool size: {0}")]
    InvalidThreadPoolSize(usize),
    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

/// Docker client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerClientConfig {
    instance_uri: String,
    using_tls: bool,
    thread_pool_size: usize,
    connect_timeout: Duration,
}

impl DockerClientConfig {
    pub fn new(instance_uri: impl Into<String>) -> Result<Self, ClientConfigError> {
        let instance_uri = instance_uri.into();
        if !INSTANCE_URI.is_match(&instance_uri) {
            return Err(ClientConfigError::InvalidUri(instance_uri));
        }
        Ok(Self {
            instance_uri,
            using_tls: false,
            thread_pool_size: 1,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    pub fn using_tls(mut self, using_tls: bool) -> Self {
        self.using_tls = using_tls;
        self
    }

    /// Number of worker threads used for daemon requests. Must be at least 1.
    pub fn with_thread_pool_size(mut self, size: usize) -> Result<Self, ClientConfigError> {
        if size == 0 {
            return Err(ClientConfigError::InvalidThreadPoolSize(size));
        }
        self.thread_pool_size = size;
        Ok(self)
    }

    /// Connect timeout. `Duration::ZERO` disables the timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ClientConfigError> {
        self.with_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, keyed by the `*_ENV` variable names.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ClientConfigError> {
        if let Some(raw) = lookup(THREAD_POOL_SIZE_ENV) {
            let size = raw.trim().parse::<usize>().map_err(|_| ClientConfigError::InvalidEnv {
                name: THREAD_POOL_SIZE_ENV,
                value: raw.clone(),
            })?;
            self = self.with_thread_pool_size(size)?;
            tracing::debug!(size, "thread pool size overridden from environment");
        }
        if let Some(raw) = lookup(CONNECT_TIMEOUT_ENV) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ClientConfigError::InvalidEnv {
                name: CONNECT_TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            self = self.with_connect_timeout(Duration::from_millis(millis));
            tracing::debug!(millis, "connect timeout overridden from environment");
        }
        Ok(self)
    }

    pub fn instance_uri(&self) -> &str {
        &self.instance_uri
    }

    pub fn is_using_tls(&self) -> bool {
        self.using_tls
    }

    pub fn thread_pool_size(&self) -> usize {
        self.thread_pool_size
    }

    /// Effective connect timeout, `None` when disabled.
    pub fn connect_timeout(&self) -> Option<Duration> {
        Some(self.connect_timeout).filter(|t| !t.is_zero())
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
