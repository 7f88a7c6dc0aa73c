// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch loading of image profiles from plugin properties.

use crate::error::{ConfigError, ImageError, InvalidProperty};
use crate::image::ImageConfig;
use crate::pool::PoolParameter;
use dkc_core::{Node, NodeError};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Property holding the JSON array of image definitions.
pub const IMAGES_PARAM: &str = "run.var.teamcity.docker.cloud.img_param";

/// Property holding the JSON array of per-profile pool parameters.
pub const SOURCE_IMAGES_JSON: &str = "source_images_json";

/// Why the images array as a whole could not be parsed.
#[derive(Debug, Error)]
enum BatchError {
    #[error(transparent)]
    Node(#[from] NodeError),
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Load every image profile from `properties`.
///
/// The images array is all-or-nothing: a malformed document or a single
/// invalid definition rejects the batch with one "cannot parse image data"
/// failure. Duplicate profile names are reported individually once the
/// whole array has been read.
///
/// Pool metadata only enriches the images, so a malformed metadata document
/// is logged and ignored rather than failing the load.
pub fn load_images(properties: &HashMap<String, String>) -> Result<Vec<ImageConfig>, ConfigError> {
    let pool_parameters = properties.get(SOURCE_IMAGES_JSON).and_then(|json| {
        PoolParameter::collection_from_json(json)
            .inspect_err(|e| tracing::warn!(error = %e, "failed to parse cloud image parameters"))
            .ok()
    });

    let mut failures = Vec::new();
    let mut images = Vec::new();

    match properties.get(IMAGES_PARAM).filter(|json| !json.is_empty()) {
        None => failures.push(InvalidProperty::new(IMAGES_PARAM, "no image provided")),
        Some(json) => match parse_images(json, pool_parameters.as_deref()) {
            Ok(parsed) => {
                let mut profile_names = HashSet::new();
                for image in parsed {
                    if profile_names.insert(image.profile_name().to_string()) {
                        images.push(image);
                    } else {
                        failures.push(InvalidProperty::new(
                            IMAGES_PARAM,
                            format!("duplicate profile name: {}", image.profile_name()),
                        ));
                    }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejecting image data");
                failures.push(InvalidProperty::new(IMAGES_PARAM, "cannot parse image data"));
            }
        },
    }

    if !failures.is_empty() {
        return Err(ConfigError::new(failures));
    }

    tracing::debug!(count = images.len(), "loaded image profiles");
    Ok(images)
}

fn parse_images(
    json: &str,
    pool_parameters: Option<&[PoolParameter]>,
) -> Result<Vec<ImageConfig>, BatchError> {
    let root = Node::parse(json)?;
    let mut images = Vec::new();
    for node in root.array_values()? {
        images.push(ImageConfig::from_node(&node, pool_parameters)?);
    }
    Ok(images)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
