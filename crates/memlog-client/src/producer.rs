//! Publish-side facade over a topic registry.

use memlog_core::validation::ValidationError;
use memlog_core::{Result, Topic, TopicRegistry};
use std::sync::Arc;
use tracing::debug;

/// Publishes messages through a [`TopicRegistry`].
///
/// Topics are created on first use with the registry's configured
/// partition count. Cheap to clone; clones publish into the same
/// store.
#[derive(Debug, Clone)]
pub struct Producer {
    registry: TopicRegistry,
}

impl Producer {
    /// Create a producer backed by `registry`.
    pub fn new(registry: TopicRegistry) -> Self {
        Self { registry }
    }

    /// Send one message, creating the topic if it does not exist yet.
    ///
    /// Blank topic names and blank values are rejected before the
    /// registry is touched, so a failed send never creates a topic.
    /// Core errors propagate unchanged.
    pub fn send(&self, topic_name: &str, key: Option<&str>, value: &str) -> Result<()> {
        if topic_name.trim().is_empty() {
            return Err(ValidationError::EmptyTopicName.into());
        }
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyMessageValue.into());
        }

        let topic = self.registry.get_or_create_topic(topic_name)?;
        topic.send(key, value)?;

        debug!("Sent message to topic '{}'", topic_name);
        Ok(())
    }

    /// Whether a topic exists. Blank names are rejected rather than
    /// reported as absent.
    pub fn topic_exists(&self, topic_name: &str) -> Result<bool> {
        if topic_name.trim().is_empty() {
            return Err(ValidationError::EmptyTopicName.into());
        }
        Ok(self.registry.topic_exists(topic_name))
    }

    /// Look up an existing topic. Never creates one.
    pub fn topic(&self, topic_name: &str) -> Result<Arc<Topic>> {
        self.registry.get_topic(topic_name)
    }

    /// Names of all topics in the registry.
    pub fn topic_names(&self) -> Vec<String> {
        self.registry.topic_names()
    }
}
