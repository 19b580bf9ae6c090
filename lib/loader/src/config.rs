use serde::{Deserialize, Serialize};

use showgraph_core::{Error, Result, ScoreKind};

/// How similarity edges are drawn between items at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Two items are connected when their score reaches this value
    pub similarity_threshold: f64,
    pub score_kind: ScoreKind,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.75,
            score_kind: ScoreKind::Composite,
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::InvalidConfig(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}
