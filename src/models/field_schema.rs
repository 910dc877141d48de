use serde::{Deserialize, Serialize};

/// Describes one field of a record as the host framework sees it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name, when the host knows it
    pub alias: Option<String>,
}

impl FieldSchema {
    pub fn named(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
        }
    }

    pub fn unnamed() -> Self {
        Self { alias: None }
    }
}
