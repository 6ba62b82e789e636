use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unrecognized date/time: {0:?}")]
    Unparseable(String),
}
