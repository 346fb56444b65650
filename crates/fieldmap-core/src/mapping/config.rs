use crate::schema::ClassId;
use serde::{Deserialize, Serialize};

/// Configuration for a [`MappingContext`](super::MappingContext).
///
/// Deserializes from any serde format, so it can live in an application's
/// own configuration file:
///
/// ```toml
/// entities = ["app::model::User", "app::model::Order"]
/// collisions = "reject"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Classes registered by `MappingContext::from_config`
    pub entities: Vec<ClassId>,

    /// What to do when two bindings of a class share an index key
    pub collisions: CollisionPolicy,

    /// Separator between segments of a binding's full path
    pub path_separator: String,
}

/// How index construction treats two bindings that land on the same key.
///
/// Bindings are indexed in traversal order: the registered class first, then
/// each ancestor up the chain; within a type, properties in declaration order,
/// with an embedded container's properties visited in its place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The binding visited last replaces earlier ones. A warning is logged.
    #[default]
    LastWriteWins,

    /// Registration fails with a mapping conflict error.
    Reject,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class to register on startup
    pub fn entity(mut self, class: impl Into<ClassId>) -> Self {
        self.entities.push(class.into());
        self
    }

    /// Set the collision policy
    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Set the full path separator
    pub fn path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entities: vec![],
            collisions: CollisionPolicy::default(),
            path_separator: ".".to_string(),
        }
    }
}
