use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Topic already exists: {0}")]
    TopicAlreadyExists(String),

    #[error("Partition {index} out of range: topic '{topic}' has {count} partitions")]
    PartitionOutOfRange { topic: String, index: u32, count: u32 },

    #[error("Offset {offset} out of range for partition {partition}: {size} messages stored")]
    OffsetOutOfRange { partition: u32, offset: u64, size: u64 },

    #[error("Invalid range [{start}, {end}] for partition {partition}: {size} messages stored")]
    InvalidRange {
        partition: u32,
        start: u64,
        end: u64,
        size: u64,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;
