use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),

    #[error("Invalid value for {var}: {value:?} (expected a positive integer)")]
    InvalidEnv { var: String, value: String },
}
