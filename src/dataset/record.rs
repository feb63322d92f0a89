use serde::{Deserialize, Serialize};

/// A single rated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Descriptive label (e.g., movie title); never used for distance
    pub name: String,
    /// Numeric value used for clustering (e.g., IMDB rating)
    pub value: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
