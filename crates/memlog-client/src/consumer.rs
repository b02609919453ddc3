//! Read-side cursor over a topic's partitions.

use memlog_core::validation::ValidationError;
use memlog_core::{Message, Result, Topic, TopicPartition, TopicRegistry};
use std::sync::Arc;
use tracing::debug;

/// A read position inside a topic: the partition being drained and the
/// next offset to read from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the partition being read
    pub partition: u32,

    /// Next offset to read within that partition
    pub offset: u64,
}

/// Advance one step from `cursor`: the next readable message plus the
/// cursor to resume from.
///
/// Exhausted and empty partitions are skipped lazily, at call time, so
/// messages appended to the current partition between calls are still
/// seen. Returns `None` when nothing at or after `cursor` is readable;
/// a later call with the same cursor may succeed again once writers
/// catch up.
pub fn advance(topic: &Topic, cursor: Cursor) -> Option<(Message, Cursor)> {
    let mut partition_index = cursor.partition;
    let mut offset = cursor.offset;

    while partition_index < topic.partition_count() {
        let partition = topic.partition(partition_index).ok()?;
        if offset < partition.latest_offset() {
            let message = partition.read(offset).ok()?;
            let next = Cursor {
                partition: partition_index,
                offset: offset + 1,
            };
            return Some((message, next));
        }

        partition_index += 1;
        offset = 0;
    }

    None
}

/// Iterates a topic's messages partition by partition, in offset order
/// within each partition.
///
/// The consumer never writes: advancing moves only its own cursor.
#[derive(Debug)]
pub struct Consumer {
    topic: Arc<Topic>,
    cursor: Cursor,
}

impl Consumer {
    /// Attach a consumer to an existing topic.
    ///
    /// Blank names are a validation error and unknown topics are
    /// reported as such; consuming never creates topics.
    pub fn new(registry: &TopicRegistry, topic_name: &str) -> Result<Self> {
        if topic_name.trim().is_empty() {
            return Err(ValidationError::EmptyTopicName.into());
        }

        let topic = registry.get_topic(topic_name)?;
        debug!("Consumer attached to topic '{}'", topic_name);

        Ok(Self {
            topic,
            cursor: Cursor::default(),
        })
    }

    /// Whether a message is currently readable.
    ///
    /// Pure lookahead: calling it any number of times does not move the
    /// cursor.
    pub fn has_next(&self) -> bool {
        advance(&self.topic, self.cursor).is_some()
    }

    /// Where the next read starts: the partition as a value object plus
    /// the offset within it.
    pub fn position(&self) -> (TopicPartition, u64) {
        (
            TopicPartition::new(self.topic.name(), self.cursor.partition),
            self.cursor.offset,
        )
    }
}

impl Iterator for Consumer {
    type Item = Message;

    fn next(&mut self) -> Option<Message> {
        let (message, next) = advance(&self.topic, self.cursor)?;
        self.cursor = next;
        Some(message)
    }
}
