use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid bucket count `{0}`: expected a positive integer")]
    InvalidBucketCount(String),
    #[error("keys must not be empty")]
    EmptyKey,
    #[error("out of memory")]
    OutOfMemory(#[from] TryReserveError),
}

pub type Result<T> = core::result::Result<T, Error>;
