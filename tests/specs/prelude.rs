// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

pub use dkc_image::test_support::{images_json, properties, ImageDefinition};
pub use dkc_image::{load_images, ConfigError, ImageConfig, IMAGES_PARAM};

/// A valid definition for `profile` with test defaults.
pub fn image(profile: &str) -> ImageDefinition {
    ImageDefinition::builder().profile(profile).build()
}

/// Load a batch built from `definitions`, without pool metadata.
pub fn load(definitions: &[ImageDefinition]) -> Result<Vec<ImageConfig>, ConfigError> {
    load_images(&properties(Some(&images_json(definitions)), None))
}

/// Failure messages of a rejected batch.
pub fn messages(err: &ConfigError) -> Vec<String> {
    err.failures().iter().map(|f| f.message().to_string()).collect()
}

pub fn profile_names(images: &[ImageConfig]) -> Vec<String> {
    images.iter().map(|i| i.profile_name().to_string()).collect()
}
