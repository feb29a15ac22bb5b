use std::env::{self, VarError};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Bucket count used when nothing else is configured.
pub const DEFAULT_NUM_BUCKETS: usize = 5000;

/// Initial DJB2 state.
pub const DJB2_SEED: u64 = 5381;

/// Value stored for every key inserted by `load_all`.
pub const BULK_LOAD_VALUE: i32 = 1;

const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_NUM_BUCKETS) {
    Some(n) => n,
    None => panic!("DEFAULT_NUM_BUCKETS must be non-zero"),
};

/// Environment variable read by [`TableConfig::from_env`].
pub const BUCKETS_ENV_VAR: &str = "CHAINED_HASH_BUCKETS";

/// Construction parameters for a `ChainedHashTable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    num_buckets: NonZeroUsize,
}

impl TableConfig {
    pub fn new(num_buckets: usize) -> Result<Self> {
        NonZeroUsize::new(num_buckets)
            .map(|num_buckets| Self { num_buckets })
            .ok_or_else(|| Error::InvalidBucketCount(num_buckets.to_string()))
    }

    /// Reads the bucket count from `CHAINED_HASH_BUCKETS`, falling back to the
    /// default when the variable is unset. A set but invalid value is an error.
    pub fn from_env() -> Result<Self> {
        match env::var(BUCKETS_ENV_VAR) {
            Ok(raw) => raw.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(Error::InvalidBucketCount(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    pub fn num_buckets(&self) -> usize {
        self.num_buckets.get()
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_buckets: DEFAULT_BUCKETS,
        }
    }
}

impl FromStr for TableConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<NonZeroUsize>()
            .map(|num_buckets| Self { num_buckets })
            .map_err(|_| Error::InvalidBucketCount(trimmed.to_string()))
    }
}
