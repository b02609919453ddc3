use crate::validation::Validator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one partition of one topic.
///
/// Orders by topic name first, then partition index, so sorted
/// collections keep a topic's partitions together. Useful as a map key
/// when tracking anything per partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicPartition {
    topic: String,
    partition: u32,
}

impl TopicPartition {
    /// Create an identifier for `partition` of `topic`.
    pub fn new(topic: impl Into<String>, partition: u32) -> Self {
        Self {
            topic: topic.into(),
            partition,
        }
    }

    /// The topic name.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The partition index.
    pub fn partition(&self) -> u32 {
        self.partition
    }

    /// Identifiers for every partition of a topic with `count`
    /// partitions, in index order.
    pub fn range(topic: &str, count: u32) -> Vec<Self> {
        (0..count).map(|partition| Self::new(topic, partition)).collect()
    }
}

impl fmt::Display for TopicPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-partition-{}", self.topic, self.partition)
    }
}

impl FromStr for TopicPartition {
    type Err = String;

    /// Parse the `Display` form back. The marker is matched from the
    /// right, so topic names containing `-partition-` survive the
    /// round trip.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (topic, partition) = s
            .rsplit_once("-partition-")
            .ok_or_else(|| format!("Invalid topic partition '{}': expected '<topic>-partition-<n>'", s))?;

        Validator::validate_topic_name(topic).map_err(|e| e.to_string())?;

        let partition = partition
            .parse::<u32>()
            .map_err(|_| format!("Invalid partition index in '{}'", s))?;

        Ok(Self::new(topic, partition))
    }
}
