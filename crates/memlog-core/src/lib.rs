pub mod config;
pub mod error;
pub mod hash;
pub mod message;
pub mod partition;
pub mod topic;
pub mod topic_partition;
pub mod validation;


pub use config::Config;
pub use error::{Error, Result};
pub use message::{Message, MessageBuilder};
pub use partition::Partition;
pub use topic::{Topic, TopicRegistry};
pub use topic_partition::TopicPartition;
pub use validation::{ValidationError, Validator};
