// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dkc-core: shared building blocks for the Docker cloud image configuration

pub mod macros;

pub mod client;
pub mod node;
pub mod reserved;

pub use client::{ClientConfigError, DockerClientConfig};
pub use node::{Node, NodeError};
pub use reserved::{is_reserved_env, is_reserved_label, ENV_PREFIX, NS_PREFIX};
