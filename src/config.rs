use std::num::NonZeroUsize;
use tracing::debug;

use crate::batch::{BatchError, DEFAULT_NON_ZERO_BATCH_SIZE};

/// Environment variable overriding the batch size
pub const BATCH_SIZE_ENV: &str = "BATCH_SIZE";

/// Validated batching configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    batch_size: NonZeroUsize,
}

impl BatchConfig {
    /// Fails for a batch size of zero
    pub fn new(batch_size: usize) -> Result<Self, BatchError> {
        let batch_size =
            NonZeroUsize::new(batch_size).ok_or(BatchError::InvalidBatchSize(batch_size))?;
        Ok(Self { batch_size })
    }

    /// Resolve the batch size from `BATCH_SIZE`, falling back to the default
    pub fn from_env() -> Result<Self, BatchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BatchConfig::from_env`] over an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(BATCH_SIZE_ENV) else {
            return Ok(Self::default());
        };

        // Rejects "0" as well as negatives and non-numbers
        let batch_size: NonZeroUsize = raw.trim().parse().map_err(|_| BatchError::InvalidEnv {
            var: BATCH_SIZE_ENV.to_string(),
            value: raw.clone(),
        })?;

        debug!(batch_size = batch_size.get(), "batch size taken from {}", BATCH_SIZE_ENV);
        Ok(Self { batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    pub fn non_zero_batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_NON_ZERO_BATCH_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::DEFAULT_BATCH_SIZE;

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, BATCH_SIZE_ENV);
            value.map(String::from)
        }
    }

    #[test]
    fn test_default_when_unset() {
        let config = BatchConfig::from_lookup(lookup_with(None)).unwrap();
        assert_eq!(config.batch_size(), DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_value_from_env() {
        let config = BatchConfig::from_lookup(lookup_with(Some("200"))).unwrap();
        assert_eq!(config.batch_size(), 200);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let config = BatchConfig::from_lookup(lookup_with(Some(" 10\n"))).unwrap();
        assert_eq!(config.batch_size(), 10);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = BatchConfig::from_lookup(lookup_with(Some("lots"))).unwrap_err();
        assert_eq!(
            err,
            BatchError::InvalidEnv {
                var: "BATCH_SIZE".to_string(),
                value: "lots".to_string(),
            }
        );
        assert!(err.to_string().contains("BATCH_SIZE"));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(BatchConfig::from_lookup(lookup_with(Some("0"))).is_err());
        assert!(BatchConfig::from_lookup(lookup_with(Some("-5"))).is_err());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            BatchConfig::new(0).unwrap_err(),
            BatchError::InvalidBatchSize(0)
        );
        assert_eq!(BatchConfig::new(7).unwrap().batch_size(), 7);
    }
}
