// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dkc-image: cloud image profiles loaded from plugin properties
//!
//! Image profiles arrive as a JSON array under [`IMAGES_PARAM`], optionally
//! accompanied by agent-pool assignments under [`SOURCE_IMAGES_JSON`].
//! [`load_images`] validates the whole batch and either returns every
//! profile in document order or a [`ConfigError`] listing all problems.

mod definition;
mod error;
mod image;
mod loader;
mod pool;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use definition::IMAGE_SPEC_VERSION;
pub use error::{ConfigError, DefinitionError, ImageError, InvalidProperty};
pub use image::ImageConfig;
pub use loader::{load_images, IMAGES_PARAM, SOURCE_IMAGES_JSON};
pub use pool::{resolve_agent_pool_id, PoolParameter};
