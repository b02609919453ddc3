//! # Memlog
//!
//! In-memory partitioned pub/sub log store: ordered append-only
//! partitions, key-based routing, safe concurrent writes.
//!
//! This crate provides a unified API for the memlog workspace,
//! re-exporting commonly used types from [`memlog_core`] and
//! [`memlog_client`].
//!
//! ## Quick Start
//!
//! ```rust
//! use memlog::prelude::*;
//!
//! fn main() -> memlog::error::Result<()> {
//!     let registry = TopicRegistry::new(Config::new().with_default_partitions(3));
//!
//!     let producer = Producer::new(registry.clone());
//!     producer.send("greetings", Some("en"), "hello")?;
//!     producer.send("greetings", None, "anybody there?")?;
//!
//!     let consumer = Consumer::new(&registry, "greetings")?;
//!     for message in consumer {
//!         println!("{:?}: {}", message.key(), message.value());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `client` (default): Include the producer/consumer facades

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

// Re-export core crate
pub use memlog_core as core;

/// Message construction and accessors.
pub mod message {
    pub use memlog_core::message::*;
}

/// Partition log primitives.
pub mod partition {
    pub use memlog_core::partition::*;
}

/// Topic routing and the topic registry.
pub mod topic {
    pub use memlog_core::topic::*;
}

/// Per-partition identifiers.
pub mod topic_partition {
    pub use memlog_core::topic_partition::*;
}

/// Store configuration.
pub mod config {
    pub use memlog_core::config::*;
}

/// Error types.
pub mod error {
    pub use memlog_core::error::*;
}

// Re-export client when feature is enabled
#[cfg(feature = "client")]
pub use memlog_client as client;

/// Prelude module for convenient imports.
///
/// ```rust
/// use memlog::prelude::*;
/// ```
pub mod prelude {
    pub use memlog_core::config::Config;
    pub use memlog_core::message::Message;
    pub use memlog_core::topic::{Topic, TopicRegistry};
    pub use memlog_core::topic_partition::TopicPartition;

    #[cfg(feature = "client")]
    pub use memlog_client::{Consumer, Cursor, Producer};
}
