// Public API exports
pub mod batch;
pub mod config;
pub mod dateutil;
pub mod text;

// Re-export main types for convenience
pub use batch::{BatchError, BatchList, DEFAULT_BATCH_SIZE};
pub use config::{BatchConfig, BATCH_SIZE_ENV};

pub use dateutil::{format_datetime, now, parse_datetime, DateError, DateValue, Timestamp};

pub use text::{strip_text, text_strip, HasText};
