use std::{collections::VecDeque, num::NonZeroUsize};

use tokio::sync::Mutex;

use crate::models::WebhookLogEntry;

pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(20).unwrap();

/// Fixed-capacity record of the most recent webhook deliveries.
///
/// Once full, every append evicts the oldest entry. Entries live only as
/// long as the process.
pub struct WebhookLog {
    capacity: usize,
    entries: Mutex<VecDeque<WebhookLogEntry>>,
}

impl WebhookLog {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            capacity: capacity.get(),
            entries: Mutex::new(VecDeque::with_capacity(capacity.get())),
        }
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn append(&self, entry: WebhookLogEntry) {
        let mut entries = self.entries.lock().await;
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Oldest first.
    pub async fn snapshot(&self) -> Vec<WebhookLogEntry> {
        self.entries.lock().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for WebhookLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
