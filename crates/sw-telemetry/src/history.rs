//! `HistoryBuffer`: bounded rolling window of chart entries.
//!
//! Appends go to the tail; once the buffer holds `capacity` entries every
//! append evicts the oldest one.  Eviction is purely count-based, never
//! time-based, and entries are neither reordered nor deduplicated.

use std::collections::VecDeque;

use sw_core::HistoryEntry;

use crate::{TelemetryError, TelemetryResult};

/// Number of points the trend charts display.
pub const DEFAULT_CAPACITY: usize = 6;

/// A FIFO of [`HistoryEntry`] values, oldest first, never longer than
/// `capacity`.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    entries:  VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self {
            entries:  VecDeque::with_capacity(DEFAULT_CAPACITY + 1),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> TelemetryResult<Self> {
        if capacity == 0 {
            return Err(TelemetryError::ZeroCapacity);
        }
        // Only the chart-sized prefix is reserved up front; larger bounds grow on demand.
        Ok(Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1),
            capacity,
        })
    }

    /// Append `entry` at the tail, evicting from the head until the bound
    /// holds again.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Append every entry in order.  Only the newest `capacity` survive.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = HistoryEntry>,
    {
        for entry in entries {
            self.append(entry);
        }
    }

    /// Copy of the current contents, oldest first.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Iterate oldest → newest without copying.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
