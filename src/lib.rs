//! A string-keyed hash table with a fixed number of buckets, separate
//! chaining and DJB2 hashing.
//!
//! ```
//! use chained_hash::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new(5000)?;
//! table.load_all(["MARY", "", "PATRICIA"])?;
//! assert_eq!(table.get("MARY"), Some(1));
//! assert_eq!(table.describe("LINDA"), "LINDA doesn't exist!");
//! table.destroy();
//! # Ok::<(), chained_hash::Error>(())
//! ```

pub mod config;
pub mod djb2;
mod error;
pub mod logger;
mod table;

pub use config::TableConfig;
pub use djb2::{djb2, BuildDjb2, Djb2Hasher};
pub use error::{Error, Result};
pub use table::{Chain, ChainOrder, ChainedHashTable, Dump, Entry, Iter};
