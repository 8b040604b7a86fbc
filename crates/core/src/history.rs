use crate::sample::Sample;
use std::collections::VecDeque;

/// Number of samples kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 20;

/// Rolling window of the most recent samples, oldest first.
#[derive(Debug, Clone)]
pub struct History {
    samples:  VecDeque<Sample>,
    capacity: usize,
}

impl History {
    /// A capacity of zero is bumped to one so the window can always hold the
    /// latest reading.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if at capacity.
    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        // Keep the ring contiguous so `as_slice` can hand out a plain slice.
        self.samples.make_contiguous();
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Owned copy of the window in chronological order.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().cloned().collect()
    }

    /// Read-only view of the window in chronological order.
    pub fn as_slice(&self) -> &[Sample] {
        let (front, back) = self.samples.as_slices();
        debug_assert!(back.is_empty());
        front
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
