// Title/value series handed to a bar-chart renderer
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parallel lists of labels and values; `titles[i]` labels `values[i]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub titles: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Append-only accumulator with a hard cap
#[derive(Debug, Clone)]
pub struct ChartBuffer {
    capacity: usize,
    series: ChartSeries,
}

impl ChartBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            series: ChartSeries::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append one entry, failing once the buffer is full
    pub fn push(&mut self, title: impl Into<String>, value: f64) -> Result<()> {
        let requested = self.series.len() + 1;
        if requested > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
                requested,
            });
        }
        self.series.titles.push(title.into());
        self.series.values.push(value);
        Ok(())
    }

    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    pub fn reset(&mut self) {
        self.series = ChartSeries::default();
    }
}
