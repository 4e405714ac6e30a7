use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;

/// One recorded baseline: the pass rate plus whatever extra fields the
/// recording pipeline attached (row counts, commit, timestamp).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub pass_rate: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Baseline file contents: a JSON object mapping dataset key to entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Baseline {
    entries: BTreeMap<String, BaselineEntry>,
}

impl Baseline {
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let raw = std::fs::read_to_string(path).map_err(|e| HarnessError::Baseline {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| HarnessError::Baseline {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&BaselineEntry> {
        self.entries.get(key)
    }

    /// A missing key is a fatal configuration error, never a silent pass.
    pub fn pass_rate_for(&self, key: &str) -> Result<f64, HarnessError> {
        self.get(key)
            .map(|e| e.pass_rate)
            .ok_or_else(|| HarnessError::MissingBaselineKey {
                key: key.to_string(),
            })
    }
}
