use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionEventError {
    #[error("failed to serialize execution event: {0}")]
    Serialization(#[from] sonic_rs::Error),
}
