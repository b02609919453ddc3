use serde::{Deserialize, Serialize};

/// Configuration for a store instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Partition count for topics created implicitly by name
    pub default_partitions: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_partitions: 1,
        }
    }
}

impl Config {
    /// Create a new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default partition count
    pub fn with_default_partitions(mut self, partitions: u32) -> Self {
        self.default_partitions = partitions;
        self
    }
}
