use crate::validation::Validator;
use crate::Result;
use serde::{Deserialize, Serialize};

/// A single record in the store: an optional routing key and a payload.
///
/// Immutable once built. Equality and hashing are structural over both
/// fields, so two messages with the same key and value are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Routing key (optional; keyless messages are routed round-robin)
    key: Option<String>,

    /// Message payload
    value: String,
}

impl Message {
    /// Start building a message. [`MessageBuilder::build`] is the only
    /// way to construct one, so every stored message has passed
    /// validation.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// The routing key, if one was set.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The payload.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Builder for [`Message`].
#[derive(Debug, Default)]
pub struct MessageBuilder {
    key: Option<String>,
    value: Option<String>,
}

impl MessageBuilder {
    /// Set the routing key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the payload.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Validate and build. Fails when the value is unset or empty.
    pub fn build(self) -> Result<Message> {
        let value = self.value.unwrap_or_default();
        Validator::validate_message_value(&value)?;

        Ok(Message {
            key: self.key,
            value,
        })
    }
}
