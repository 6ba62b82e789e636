mod error;
mod list;


pub use error::BatchError;
pub use list::BatchList;

use std::num::NonZeroUsize;

/// Number of items per batch when nothing else is configured
pub const DEFAULT_BATCH_SIZE: usize = 50;

pub(crate) const DEFAULT_NON_ZERO_BATCH_SIZE: NonZeroUsize =
    match NonZeroUsize::new(DEFAULT_BATCH_SIZE) {
        Some(size) => size,
        None => panic!("DEFAULT_BATCH_SIZE must be non-zero"),
    };
