//! Tool calls requested by the model.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tool call made by the model.
///
/// Arguments are a resolved mapping, never a raw JSON string: optional
/// wire fields are defaulted once at extraction time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ToolCall {
    /// The id of the tool call, unique within one response.
    pub id: CompactString,

    /// The name of the tool to call.
    pub name: CompactString,

    /// The arguments to pass to the tool (may be empty).
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    /// Create a new tool call.
    pub fn new(
        id: impl Into<CompactString>,
        name: impl Into<CompactString>,
        arguments: Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}
