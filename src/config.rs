//! Classifier configuration

use serde::{Deserialize, Serialize};

use crate::domain::Nation;

/// Configuration for postcode classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Trimmed input shorter than this gets no verdict
    pub min_input_length: usize,
    /// Nations a business may be quoted in
    pub serviced_nations: Vec<Nation>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_input_length: 5,
            serviced_nations: Nation::SERVICED.to_vec(),
        }
    }
}

impl ClassifierConfig {
    /// Whether `raw` is long enough to be classified
    pub fn meets_length_gate(&self, raw: &str) -> bool {
        raw.trim().chars().count() >= self.min_input_length
    }
}
