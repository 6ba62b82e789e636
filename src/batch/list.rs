// list.rs - accumulates items and hands them out in fixed-size batches

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::num::NonZeroUsize;
use std::slice::Chunks;
use tracing::debug;

use super::{BatchError, DEFAULT_NON_ZERO_BATCH_SIZE};
use crate::config::BatchConfig;

/// Append-only list that exposes its items grouped into batches
///
/// Every batch holds exactly `batch_size` items except the last one, which
/// holds the remainder. An empty list has no batches at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchList<T> {
    items: Vec<T>,
    batch_size: NonZeroUsize,
}

impl<T> BatchList<T> {
    /// Create an empty list using `DEFAULT_BATCH_SIZE`
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            batch_size: DEFAULT_NON_ZERO_BATCH_SIZE,
        }
    }

    /// Create an empty list with a custom batch size
    ///
    /// Fails for a batch size of zero.
    pub fn with_batch_size(batch_size: usize) -> Result<Self, BatchError> {
        let config = BatchConfig::new(batch_size)?;

        debug!(batch_size, "creating batch list");
        Ok(Self::from_config(&config))
    }

    /// Create an empty list sized by an already validated config
    pub fn from_config(config: &BatchConfig) -> Self {
        Self {
            items: Vec::new(),
            batch_size: config.non_zero_batch_size(),
        }
    }

    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    /// Current grouping of the items, in insertion order
    pub fn batches(&self) -> Vec<&[T]> {
        self.iter_batches().collect()
    }

    /// Lazy variant of [`BatchList::batches`]
    pub fn iter_batches(&self) -> Chunks<'_, T> {
        self.items.chunks(self.batch_size.get())
    }

    /// Number of batches, without building them
    pub fn batch_count(&self) -> usize {
        self.items.len().div_ceil(self.batch_size.get())
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Number of items added so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Drop all items, keeping the batch size
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consume the list into owned batches
    pub fn into_batches(self) -> Vec<Vec<T>> {
        let mut batches = Vec::with_capacity(self.batch_count());
        let mut items = self.items.into_iter();

        loop {
            let batch: Vec<T> = items.by_ref().take(self.batch_size.get()).collect();
            if batch.is_empty() {
                break;
            }
            batches.push(batch);
        }

        batches
    }
}

impl<T> Default for BatchList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for BatchList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Serialized as an array of batches
impl<T: Serialize> Serialize for BatchList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.batch_count()))?;
        for batch in self.iter_batches() {
            seq.serialize_element(batch)?;
        }
        seq.end()
    }
}
