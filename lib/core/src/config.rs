use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Limits that bound what a graph hands to a visualization layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Maximum number of title/value pairs in a chart series
    pub chart_capacity: usize,
    /// Default vertex cap for node/edge export
    pub max_export_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            chart_capacity: 15,
            max_export_vertices: 5000,
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chart_capacity == 0 {
            return Err(Error::InvalidConfig("chart_capacity must be positive".to_string()));
        }
        if self.max_export_vertices == 0 {
            return Err(Error::InvalidConfig(
                "max_export_vertices must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
