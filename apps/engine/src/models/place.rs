use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A candidate place as supplied by the caller's data source.
///
/// The schema is open-ended — whatever fields the upstream source produced
/// (name, category, tags, ...) ride along untouched. The engine never
/// validates or constrains them; they exist to be serialized into prompts and
/// handed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Place(pub Map<String, Value>);

impl Place {
    /// The `name` field, when the source happened to provide one. Used for
    /// log lines only.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }
}

/// How strongly a place matches the stated user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A filtered place after the model attached its `priority` tag.
///
/// Every field other than `priority` passes through unmodified — including any
/// fields the model chose to add during filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedPlace {
    pub priority: Priority,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
