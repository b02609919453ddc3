use crate::validation::Validator;
use crate::{hash, Config, Error, Message, Partition, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// A named stream of messages spread over a fixed set of partitions.
///
/// The partition count is set at construction and never changes, which
/// is what keeps keyed routing stable: `hash(key) % count` points at
/// the same partition for the lifetime of the topic.
#[derive(Debug)]
pub struct Topic {
    /// Topic name
    name: String,

    /// Partitions in this topic, indexed by id
    partitions: Vec<Arc<Partition>>,

    /// Turn counter for routing keyless messages
    round_robin: AtomicU64,
}

impl Topic {
    /// Create a topic with a single partition.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_partitions(name, 1)
    }

    /// Create a topic with the specified number of partitions.
    pub fn with_partitions(name: impl Into<String>, partition_count: u32) -> Result<Self> {
        let name = name.into();
        Validator::validate_topic_name(&name)?;
        Validator::validate_partition_count(partition_count)?;

        info!(
            "Creating topic '{}' with {} partitions",
            name, partition_count
        );

        let partitions = (0..partition_count)
            .map(|id| Arc::new(Partition::new(id)))
            .collect();

        Ok(Self {
            name,
            partitions,
            round_robin: AtomicU64::new(0),
        })
    }

    /// Get the topic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of partitions.
    pub fn partition_count(&self) -> u32 {
        self.partitions.len() as u32
    }

    /// Route one message to a partition and append it.
    ///
    /// The message is built (and validated) before any routing state is
    /// touched: a rejected value neither advances the round-robin
    /// counter nor reaches a partition.
    pub fn send(&self, key: Option<&str>, value: &str) -> Result<()> {
        let mut builder = Message::builder().value(value);
        if let Some(key) = key {
            builder = builder.key(key);
        }
        let message = builder.build()?;

        let index = self.route(message.key());
        self.partitions[index as usize].append(message);
        Ok(())
    }

    /// Pick a partition index: keyed messages hash, keyless messages
    /// take the next round-robin turn.
    fn route(&self, key: Option<&str>) -> u32 {
        match key {
            Some(key) => hash::partition_for_key(key.as_bytes(), self.partition_count()),
            None => {
                let turn = self.round_robin.fetch_add(1, Ordering::Relaxed);
                (turn % self.partitions.len() as u64) as u32
            }
        }
    }

    /// Get a specific partition.
    pub fn partition(&self, index: u32) -> Result<Arc<Partition>> {
        self.partitions
            .get(index as usize)
            .cloned()
            .ok_or_else(|| Error::PartitionOutOfRange {
                topic: self.name.clone(),
                index,
                count: self.partition_count(),
            })
    }

    /// Total messages across all partitions.
    ///
    /// Each partition is sampled under its own lock, one after another,
    /// so concurrent writers can make the sum stale by the time it
    /// returns. It is a monitoring figure, not a synchronization point.
    pub fn total_message_count(&self) -> u64 {
        self.partitions.iter().map(|p| p.len() as u64).sum()
    }
}

/// Owns every topic of one store instance.
///
/// Handed to producers and consumers explicitly. Clones are cheap
/// handles onto the same store; two registries built with
/// [`TopicRegistry::new`] share nothing.
#[derive(Debug, Clone)]
pub struct TopicRegistry {
    topics: Arc<RwLock<HashMap<String, Arc<Topic>>>>,
    config: Config,
}

impl TopicRegistry {
    /// Create an empty registry.
    pub fn new(config: Config) -> Self {
        info!(
            "Creating topic registry with {} default partitions",
            config.default_partitions
        );

        Self {
            topics: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Create a new topic, failing if the name is already taken.
    ///
    /// `partition_count` of `None` uses the configured default.
    pub fn create_topic(&self, name: &str, partition_count: Option<u32>) -> Result<Arc<Topic>> {
        let mut topics = self.topics.write();

        if topics.contains_key(name) {
            return Err(Error::TopicAlreadyExists(name.to_string()));
        }

        let partition_count = partition_count.unwrap_or(self.config.default_partitions);
        let topic = Arc::new(Topic::with_partitions(name, partition_count)?);

        topics.insert(name.to_string(), topic.clone());
        Ok(topic)
    }

    /// Get a topic by name.
    pub fn get_topic(&self, name: &str) -> Result<Arc<Topic>> {
        self.topics
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TopicNotFound(name.to_string()))
    }

    /// Get a topic, creating it with the configured partition count if
    /// it does not exist yet.
    pub fn get_or_create_topic(&self, name: &str) -> Result<Arc<Topic>> {
        if let Some(topic) = self.topics.read().get(name) {
            return Ok(topic.clone());
        }

        let mut topics = self.topics.write();
        // Re-check: another caller may have created it while we waited
        // for the write lock.
        if let Some(topic) = topics.get(name) {
            return Ok(topic.clone());
        }

        let topic = Arc::new(Topic::with_partitions(
            name,
            self.config.default_partitions,
        )?);
        topics.insert(name.to_string(), topic.clone());
        Ok(topic)
    }

    /// Whether a topic with this name exists.
    pub fn topic_exists(&self, name: &str) -> bool {
        self.topics.read().contains_key(name)
    }

    /// Names of all registered topics, in no particular order.
    pub fn topic_names(&self) -> Vec<String> {
        self.topics.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let topic = Topic::with_partitions("orders", 3).unwrap();
        assert_eq!(topic.name(), "orders");
        assert_eq!(topic.partition_count(), 3);
        for id in 0..3 {
            assert_eq!(topic.partition(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_single_partition_default() {
        let topic = Topic::new("events").unwrap();
        assert_eq!(topic.partition_count(), 1);
    }

    #[test]
    fn test_topic_name_validation() {
        assert!(matches!(
            Topic::new("").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            Topic::new("   ").unwrap_err(),
            Error::Validation(_)
        ));
        assert!(matches!(
            Topic::new("a".repeat(256)).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_zero_partitions_rejected() {
        assert!(matches!(
            Topic::with_partitions("orders", 0).unwrap_err(),
            Error::Validation(_)
        ));
    }

    #[test]
    fn test_keyed_sends_are_deterministic() {
        let topic = Topic::with_partitions("orders", 3).unwrap();
        let expected = hash::partition_for_key(b"customer-7", 3);

        topic.send(Some("customer-7"), "created").unwrap();
        topic.send(Some("customer-7"), "paid").unwrap();
        topic.send(Some("customer-7"), "shipped").unwrap();

        let partition = topic.partition(expected).unwrap();
        assert_eq!(partition.len(), 3);
        assert_eq!(partition.read(0).unwrap().value(), "created");
        assert_eq!(partition.read(1).unwrap().value(), "paid");
        assert_eq!(partition.read(2).unwrap().value(), "shipped");

        for index in 0..3 {
            if index != expected {
                assert!(topic.partition(index).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_keyless_sends_round_robin() {
        let topic = Topic::with_partitions("events", 3).unwrap();

        topic.send(None, "e1").unwrap();
        topic.send(None, "e2").unwrap();
        topic.send(None, "e3").unwrap();
        topic.send(None, "e4").unwrap();

        // Counter starts at 0: partitions 0, 1, 2, then 0 again
        let p0 = topic.partition(0).unwrap();
        assert_eq!(p0.len(), 2);
        assert_eq!(p0.read(0).unwrap().value(), "e1");
        assert_eq!(p0.read(1).unwrap().value(), "e4");
        assert_eq!(topic.partition(1).unwrap().read(0).unwrap().value(), "e2");
        assert_eq!(topic.partition(2).unwrap().read(0).unwrap().value(), "e3");
    }

    #[test]
    fn test_failed_send_leaves_no_trace() {
        let topic = Topic::with_partitions("events", 2).unwrap();

        assert!(topic.send(None, "").is_err());
        assert_eq!(topic.total_message_count(), 0);

        // The rejected send must not have taken a round-robin turn
        topic.send(None, "first").unwrap();
        assert_eq!(topic.partition(0).unwrap().len(), 1);
    }

    #[test]
    fn test_partition_index_bounds() {
        let topic = Topic::with_partitions("orders", 2).unwrap();

        assert!(topic.partition(0).is_ok());
        assert!(topic.partition(1).is_ok());
        assert!(matches!(
            topic.partition(2).unwrap_err(),
            Error::PartitionOutOfRange {
                index: 2,
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_total_message_count() {
        let topic = Topic::with_partitions("orders", 4).unwrap();
        assert_eq!(topic.total_message_count(), 0);

        for i in 0..10 {
            topic.send(Some(&format!("key-{}", i)), "payload").unwrap();
        }
        assert_eq!(topic.total_message_count(), 10);
    }

    #[test]
    fn test_registry_create_and_get() {
        let registry = TopicRegistry::new(Config::default());

        let created = registry.create_topic("orders", Some(3)).unwrap();
        assert_eq!(created.partition_count(), 3);

        let fetched = registry.get_topic("orders").unwrap();
        assert!(Arc::ptr_eq(&created, &fetched));

        assert!(registry.topic_exists("orders"));
        assert_eq!(registry.topic_names(), vec!["orders".to_string()]);
    }

    #[test]
    fn test_registry_rejects_duplicate_names() {
        let registry = TopicRegistry::new(Config::default());
        registry.create_topic("orders", None).unwrap();

        assert!(matches!(
            registry.create_topic("orders", Some(5)).unwrap_err(),
            Error::TopicAlreadyExists(_)
        ));
    }

    #[test]
    fn test_registry_get_missing_topic() {
        let registry = TopicRegistry::new(Config::default());
        assert!(matches!(
            registry.get_topic("ghost").unwrap_err(),
            Error::TopicNotFound(_)
        ));
        assert!(!registry.topic_exists("ghost"));
    }

    #[test]
    fn test_get_or_create_uses_configured_default() {
        let registry = TopicRegistry::new(Config::default().with_default_partitions(4));

        let topic = registry.get_or_create_topic("metrics").unwrap();
        assert_eq!(topic.partition_count(), 4);

        let again = registry.get_or_create_topic("metrics").unwrap();
        assert!(Arc::ptr_eq(&topic, &again));
    }

    #[test]
    fn test_registry_rejects_invalid_names_without_registering() {
        let registry = TopicRegistry::new(Config::default());

        assert!(registry.create_topic("  ", None).is_err());
        assert!(registry.get_or_create_topic("").is_err());
        assert!(registry.topic_names().is_empty());
    }

    #[test]
    fn test_clones_share_the_store() {
        let registry = TopicRegistry::new(Config::default());
        let handle = registry.clone();

        registry.create_topic("orders", None).unwrap();
        assert!(handle.topic_exists("orders"));
    }
}
