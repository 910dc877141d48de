use serde::{Deserialize, Serialize};

/// An input record: an ordered list of optional text fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub fields: Vec<Option<String>>,
}

impl Record {
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self { fields }
    }

    /// A record holding exactly one present value
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            fields: vec![Some(value.into())],
        }
    }

    /// A record with no fields at all
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of field `index`, `None` when missing or null
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|f| f.as_deref())
    }
}

impl From<Vec<Option<String>>> for Record {
    fn from(fields: Vec<Option<String>>) -> Self {
        Self::new(fields)
    }
}
