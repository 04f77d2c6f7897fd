use serde::{Deserialize, Serialize};

/// The dataset a slice derives from, with its full dimension schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name, unique within the cube backend.
    pub name: String,
    /// Every dimension column the dataset exposes. Breakdown requests
    /// explore this full set.
    pub dimensions: Vec<String>,
}

impl DatasetConfig {
    pub fn new(name: impl Into<String>, dimensions: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dimensions,
        }
    }
}
