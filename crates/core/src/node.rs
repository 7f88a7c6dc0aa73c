// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed read access over a parsed JSON document.
//!
//! A [`Node`] owns a JSON value and exposes keyed reads with two flavours:
//! required (`get_int`, `object`, ...) which fail on a missing key, and
//! defaulted (`get_int_or`, `object_or`, ...) which fall back when the key
//! is absent. A key holding `null` counts as absent in both flavours.
//!
//! Scalar reads coerce where the value is unambiguous:
//! - integers accept integral numbers and strings such as `"1"`
//! - booleans accept `true`/`false` and the strings `"true"`/`"false"`
//! - strings accept strings verbatim plus numbers and booleans as JSON text

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors from parsing or reading a [`Node`].
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing key '{key}'")]
    MissingKey { key: String },
    #[error("'{key}' must be {expected}, found {found}")]
    WrongType { key: String, expected: &'static str, found: &'static str },
    #[error("expected {expected}, found {found}")]
    NotA { expected: &'static str, found: &'static str },
}

/// A JSON document or sub-document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(Value);

impl Node {
    /// Parse JSON text into a node.
    pub fn parse(json: &str) -> Result<Self, NodeError> {
        Ok(Self(serde_json::from_str(json)?))
    }

    pub fn empty_array() -> Self {
        Self(Value::Array(Vec::new()))
    }

    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Child object under `key`; the key must be present.
    pub fn object(&self, key: &str) -> Result<Node, NodeError> {
        let value = self.required(key)?;
        expect(key, value, Value::is_object, "an object").map(|v| Node(v.clone()))
    }

    /// Child object under `key`, or `default` when absent.
    pub fn object_or(&self, key: &str, default: Node) -> Result<Node, NodeError> {
        match self.field(key)? {
            Some(value) => expect(key, value, Value::is_object, "an object").map(|v| Node(v.clone())),
            None => Ok(default),
        }
    }

    /// Child array under `key`; the key must be present.
    pub fn array(&self, key: &str) -> Result<Node, NodeError> {
        let value = self.required(key)?;
        expect(key, value, Value::is_array, "an array").map(|v| Node(v.clone()))
    }

    /// Child array under `key`, or `default` when absent.
    pub fn array_or(&self, key: &str, default: Node) -> Result<Node, NodeError> {
        match self.field(key)? {
            Some(value) => expect(key, value, Value::is_array, "an array").map(|v| Node(v.clone())),
            None => Ok(default),
        }
    }

    /// Elements of this array node, in document order.
    pub fn array_values(&self) -> Result<impl Iterator<Item = Node> + '_, NodeError> {
        match &self.0 {
            Value::Array(items) => Ok(items.iter().cloned().map(Node)),
            other => Err(NodeError::NotA { expected: "an array", found: kind(other) }),
        }
    }

    /// Keys of this object node, in document order.
    pub fn object_keys(&self) -> Result<impl Iterator<Item = &str> + '_, NodeError> {
        match &self.0 {
            Value::Object(map) => Ok(map.keys().map(String::as_str)),
            other => Err(NodeError::NotA { expected: "an object", found: kind(other) }),
        }
    }

    /// This node as text.
    pub fn as_str(&self) -> Result<Cow<'_, str>, NodeError> {
        coerce_str(&self.0).ok_or(NodeError::NotA { expected: "a string", found: kind(&self.0) })
    }

    pub fn get_str(&self, key: &str) -> Result<String, NodeError> {
        let value = self.required(key)?;
        coerce_str(value).map(Cow::into_owned).ok_or_else(|| wrong_type(key, "a string", value))
    }

    pub fn get_int(&self, key: &str) -> Result<i64, NodeError> {
        let value = self.required(key)?;
        coerce_int(value).ok_or_else(|| wrong_type(key, "an integer", value))
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> Result<i64, NodeError> {
        match self.field(key)? {
            Some(value) => coerce_int(value).ok_or_else(|| wrong_type(key, "an integer", value)),
            None => Ok(default),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, NodeError> {
        let value = self.required(key)?;
        coerce_bool(value).ok_or_else(|| wrong_type(key, "a boolean", value))
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool, NodeError> {
        match self.field(key)? {
            Some(value) => coerce_bool(value).ok_or_else(|| wrong_type(key, "a boolean", value)),
            None => Ok(default),
        }
    }

    fn field(&self, key: &str) -> Result<Option<&Value>, NodeError> {
        match &self.0 {
            Value::Object(map) => Ok(map.get(key).filter(|v| !v.is_null())),
            other => Err(NodeError::NotA { expected: "an object", found: kind(other) }),
        }
    }

    fn required(&self, key: &str) -> Result<&Value, NodeError> {
        self.field(key)?.ok_or_else(|| NodeError::MissingKey { key: key.to_string() })
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Compact JSON text of the node.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn expect<'a>(
    key: &str,
    value: &'a Value,
    is: fn(&Value) -> bool,
    expected: &'static str,
) -> Result<&'a Value, NodeError> {
    if is(value) {
        Ok(value)
    } else {
        Err(wrong_type(key, expected, value))
    }
}

fn wrong_type(key: &str, expected: &'static str, value: &Value) -> NodeError {
    NodeError::WrongType { key: key.to_string(), expected, found: kind(value) }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn coerce_str(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(_) | Value::Bool(_) => Some(Cow::Owned(value.to_string())),
        _ => None,
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
