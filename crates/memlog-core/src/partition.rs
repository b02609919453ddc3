use crate::{Error, Message, Result};
use parking_lot::Mutex;
use tracing::debug;

/// Log state guarded by the partition mutex. `next_offset` always
/// equals `messages.len()`; keeping both makes the offset assignment
/// explicit in `append`.
#[derive(Debug, Default)]
struct Log {
    messages: Vec<Message>,
    next_offset: u64,
}

/// An append-only, totally ordered message log.
///
/// Offsets are dense: the first message gets offset 0 and every append
/// gets the previous offset plus one. A single mutex guards the message
/// store and the offset counter together, so each operation observes
/// both in a consistent state and appends from concurrent writers can
/// neither collide nor leave gaps.
#[derive(Debug)]
pub struct Partition {
    id: u32,
    log: Mutex<Log>,
}

impl Partition {
    /// Create an empty partition.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            log: Mutex::new(Log::default()),
        }
    }

    /// Partition index within its topic. Lock-free; set once at
    /// construction.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Append a message and return the offset it was assigned.
    pub fn append(&self, message: Message) -> u64 {
        let mut log = self.log.lock();
        debug_assert_eq!(log.next_offset, log.messages.len() as u64);

        let offset = log.next_offset;
        log.messages.push(message);
        log.next_offset += 1;

        debug!(
            "Appended message at offset {} to partition {}",
            offset, self.id
        );
        offset
    }

    /// Read the message at `offset`.
    ///
    /// Returns an owned copy; the log itself is never handed out.
    pub fn read(&self, offset: u64) -> Result<Message> {
        let log = self.log.lock();
        log.messages
            .get(offset as usize)
            .cloned()
            .ok_or(Error::OffsetOutOfRange {
                partition: self.id,
                offset,
                size: log.messages.len() as u64,
            })
    }

    /// Read the inclusive offset range `[start, end]`.
    ///
    /// Both bounds must refer to stored messages, so every range is
    /// invalid on an empty partition.
    pub fn read_range(&self, start: u64, end: u64) -> Result<Vec<Message>> {
        let log = self.log.lock();
        let size = log.messages.len() as u64;

        if start > end || end >= size {
            return Err(Error::InvalidRange {
                partition: self.id,
                start,
                end,
                size,
            });
        }

        Ok(log.messages[start as usize..=end as usize].to_vec())
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.log.lock().messages.len()
    }

    /// True until the first append.
    pub fn is_empty(&self) -> bool {
        self.log.lock().messages.is_empty()
    }

    /// The offset the next append will be assigned (0 for an empty
    /// partition). Equal to [`len`](Self::len) at all times.
    pub fn latest_offset(&self) -> u64 {
        self.log.lock().next_offset
    }
}
