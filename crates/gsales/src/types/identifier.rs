//! Entity identifiers and reference resolution
//!
//! Every mutating operation accepts either a bare identifier or an entity and
//! resolves it to an [`Identifier`] before dispatch. Loosely typed input
//! (signed integers, numeric strings, JSON values) is accepted too, but is
//! validated at resolution time.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Identifier of an entity within its resource type.
///
/// Serialized as a bare JSON number. Deserialization also accepts a string
/// holding a decimal integer, which is how some service responses carry ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(u64);

impl Identifier {
    /// Create an identifier from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for Identifier {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u32> for Identifier {
    fn from(raw: u32) -> Self {
        Self(u64::from(raw))
    }
}

impl From<Identifier> for Value {
    fn from(id: Identifier) -> Self {
        Value::from(id.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(raw) => Ok(Self(raw)),
            Raw::Text(text) => text.trim().parse().map(Self).map_err(|_| {
                serde::de::Error::custom(format!("invalid identifier string: {text:?}"))
            }),
        }
    }
}

/// A persisted entity that carries an identifier.
pub trait Entity {
    /// The entity's identifier.
    fn id(&self) -> Identifier;
}

/// Reference to an entity: a bare identifier, the entity itself, or a loosely
/// typed value to be validated on resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRef<'a, E> {
    /// A bare identifier
    Id(Identifier),
    /// A materialized entity
    Entity(&'a E),
    /// An unchecked value (signed integer, numeric string, JSON object with `id`)
    Value(Value),
}

impl<E: Entity> EntityRef<'_, E> {
    /// Resolve the reference to an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReferenceKind`] if a [`EntityRef::Value`] does not
    /// denote an identifier.
    pub fn resolve(&self) -> Result<Identifier> {
        match self {
            EntityRef::Id(id) => Ok(*id),
            EntityRef::Entity(entity) => Ok(entity.id()),
            EntityRef::Value(value) => resolve_value(value),
        }
    }
}

/// Resolve a loosely typed JSON value to an identifier.
///
/// Accepts a non-negative integer, a string holding a decimal integer, or an
/// object whose `id` member is one of those.
///
/// # Errors
///
/// Returns [`Error::InvalidReferenceKind`] naming the rejected kind of value.
pub fn resolve_value(value: &Value) -> Result<Identifier> {
    match value {
        Value::Object(map) => match map.get("id") {
            Some(inner @ (Value::Number(_) | Value::String(_))) => resolve_scalar(inner),
            Some(other) => Err(invalid(format!("object with {} `id`", kind_of(other)))),
            None => Err(invalid("object without `id`")),
        },
        other => resolve_scalar(other),
    }
}

fn resolve_scalar(value: &Value) -> Result<Identifier> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .map(Identifier)
            .ok_or_else(|| invalid(format!("number {number}"))),
        Value::String(text) => text
            .trim()
            .parse()
            .map(Identifier)
            .map_err(|_| invalid(format!("string {text:?}"))),
        other => Err(invalid(kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid(kind: impl Into<String>) -> Error {
    Error::InvalidReferenceKind(kind.into())
}

impl<E> From<Identifier> for EntityRef<'_, E> {
    fn from(id: Identifier) -> Self {
        EntityRef::Id(id)
    }
}

impl<E> From<u64> for EntityRef<'_, E> {
    fn from(raw: u64) -> Self {
        EntityRef::Id(Identifier(raw))
    }
}

impl<E> From<u32> for EntityRef<'_, E> {
    fn from(raw: u32) -> Self {
        EntityRef::Id(Identifier::from(raw))
    }
}

impl<E> From<i64> for EntityRef<'_, E> {
    fn from(raw: i64) -> Self {
        EntityRef::Value(Value::from(raw))
    }
}

impl<E> From<i32> for EntityRef<'_, E> {
    fn from(raw: i32) -> Self {
        EntityRef::Value(Value::from(raw))
    }
}

impl<E> From<&str> for EntityRef<'_, E> {
    fn from(raw: &str) -> Self {
        EntityRef::Value(Value::from(raw))
    }
}

impl<E> From<String> for EntityRef<'_, E> {
    fn from(raw: String) -> Self {
        EntityRef::Value(Value::from(raw))
    }
}

impl<E> From<Value> for EntityRef<'_, E> {
    fn from(value: Value) -> Self {
        EntityRef::Value(value)
    }
}

impl<'a, E: Entity> From<&'a E> for EntityRef<'a, E> {
    fn from(entity: &'a E) -> Self {
        EntityRef::Entity(entity)
    }
}
