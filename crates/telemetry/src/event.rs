use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named telemetry record with key/value properties.
///
/// Property insertion order carries no meaning; events are aggregated by
/// name and property keys downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl TelemetryEvent {
    /// Create an event with the given properties
    pub fn with_properties(name: impl Into<String>, properties: HashMap<String, String>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}
