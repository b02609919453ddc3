//! Input validation for memlog operations
//!
//! Checks the identifiers and payloads that enter the store before any
//! state is touched, so a rejected input never leaves a partial write.

/// Maximum topic name length
pub const MAX_TOPIC_NAME_LENGTH: usize = 255;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Topic name is empty or blank
    EmptyTopicName,
    /// Topic name is too long
    TopicNameTooLong { len: usize, max: usize },
    /// Partition count is zero
    InvalidPartitionCount { count: u32 },
    /// Message value is empty
    EmptyMessageValue,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopicName => write!(f, "Topic name cannot be empty"),
            Self::TopicNameTooLong { len, max } => {
                write!(f, "Topic name too long: {} chars (max: {})", len, max)
            }
            Self::InvalidPartitionCount { count } => {
                write!(f, "Partition count must be at least 1, got {}", count)
            }
            Self::EmptyMessageValue => write!(f, "Message value cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validator for memlog inputs
pub struct Validator;

impl Validator {
    /// Validate a topic name
    ///
    /// Names must contain at least one non-whitespace character and
    /// stay within 255 characters.
    pub fn validate_topic_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyTopicName);
        }

        if name.len() > MAX_TOPIC_NAME_LENGTH {
            return Err(ValidationError::TopicNameTooLong {
                len: name.len(),
                max: MAX_TOPIC_NAME_LENGTH,
            });
        }

        Ok(())
    }

    /// Validate a partition count
    pub fn validate_partition_count(count: u32) -> Result<(), ValidationError> {
        if count == 0 {
            return Err(ValidationError::InvalidPartitionCount { count });
        }
        Ok(())
    }

    /// Validate a message value
    pub fn validate_message_value(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyMessageValue);
        }
        Ok(())
    }
}
