//! Fixed-size separate-chaining table.
//!
//! Entries live in a slot pool; each chain is a singly linked list of slot
//! indices starting at its bucket head. Freed slots are threaded into a free
//! list and reused by later inserts. Nothing here recurses, so chain length
//! never turns into stack depth.

use core::fmt;
use core::mem;

use log::{debug, trace};

use crate::config::{TableConfig, BULK_LOAD_VALUE};
use crate::djb2::djb2;
use crate::error::{Error, Result};

type SlotId = usize;

/// A key/value pair stored in the table.
#[derive(Clone, Debug)]
pub struct Entry {
    key: Box<str>,
    value: i32,
    next: Option<SlotId>,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

// Chain position is not part of an entry's identity.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for Entry {}

#[derive(Clone, Debug)]
enum Slot {
    Occupied(Entry),
    Vacant(Option<SlotId>),
}

/// Order in which entries of one chain are rendered by [`ChainedHashTable::dump`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChainOrder {
    /// Head to tail, i.e. the order keys were inserted.
    #[default]
    Insertion,
    /// Tail to head: the newest entry of each chain comes first.
    Reversed,
}

/// String-keyed hash table with a bucket count fixed at construction.
///
/// Inserting never updates: a repeated key gets its own entry at the end of
/// the chain, and lookups/removals act on the earliest one.
#[derive(Clone, Debug)]
pub struct ChainedHashTable {
    heads: Box<[Option<SlotId>]>,
    slots: Vec<Slot>,
    free: Option<SlotId>,
    len: usize,
}

impl ChainedHashTable {
    /// Creates a table with `num_buckets` empty chains. Zero is rejected.
    pub fn new(num_buckets: usize) -> Result<Self> {
        Self::with_config(&TableConfig::new(num_buckets)?)
    }

    pub fn with_config(config: &TableConfig) -> Result<Self> {
        let num_buckets = config.num_buckets();
        let mut heads = Vec::new();
        heads.try_reserve_exact(num_buckets)?;
        heads.resize(num_buckets, None);
        debug!("Constructed table with {} buckets", num_buckets);
        Ok(Self {
            heads: heads.into_boxed_slice(),
            slots: Vec::new(),
            free: None,
            len: 0,
        })
    }

    pub fn num_buckets(&self) -> usize {
        self.heads.len()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket that `key` hashes to: `djb2(key) % num_buckets`.
    pub fn bucket_index(&self, key: &str) -> usize {
        (djb2(key) % self.heads.len() as u64) as usize
    }

    /// Appends `(key, value)` to the tail of its chain.
    pub fn insert(&mut self, key: &str, value: i32) -> Result<()> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let idx = self.bucket_index(key);
        let tail = self.tail(idx);
        let id = self.alloc(Entry {
            key: key.into(),
            value,
            next: None,
        })?;
        match tail.and_then(|t| self.entry_mut(t)) {
            Some(last) => last.next = Some(id),
            None => self.heads[idx] = Some(id),
        }
        self.len += 1;
        trace!("Inserted {:?}={} into bucket {}", key, value, idx);
        Ok(())
    }

    /// Returns the first entry in chain order whose key equals `key`.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.chain(self.bucket_index(key)).find(|e| e.key() == key)
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.find(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Unlinks the first entry matching `key` and returns its value. The rest
    /// of the chain stays in place. Absent keys leave the table untouched.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let idx = self.bucket_index(key);
        let mut prev: Option<SlotId> = None;
        let mut cur = self.heads[idx];
        while let Some(id) = cur {
            let (matches, next) = {
                let entry = self.entry(id)?;
                (entry.key() == key, entry.next)
            };
            if matches {
                match prev.and_then(|p| self.entry_mut(p)) {
                    Some(before) => before.next = next,
                    None => self.heads[idx] = next,
                }
                let removed = self.release(id)?;
                trace!("Removed {:?} from bucket {}", key, idx);
                return Some(removed.value);
            }
            prev = Some(id);
            cur = next;
        }
        None
    }

    /// Inserts every non-empty key with value 1, in order. Returns how many
    /// entries were added.
    pub fn load_all<I>(&mut self, keys: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut loaded = 0;
        let mut skipped = 0;
        for key in keys {
            let key = key.as_ref();
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            self.insert(key, BULK_LOAD_VALUE)?;
            loaded += 1;
        }
        debug!("Bulk loaded {} keys, skipped {} empty", loaded, skipped);
        Ok(loaded)
    }

    /// Calls `visit` for every entry, bucket by bucket, each chain head to tail.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&str, i32),
    {
        for entry in self.iter() {
            visit(entry.key(), entry.value());
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            bucket: 0,
            chain: Chain {
                table: self,
                cur: None,
            },
        }
    }

    /// Entries of bucket `idx`, head to tail. Out-of-range buckets are empty.
    pub fn chain(&self, idx: usize) -> Chain<'_> {
        Chain {
            table: self,
            cur: self.heads.get(idx).copied().flatten(),
        }
    }

    pub fn chain_len(&self, idx: usize) -> usize {
        self.chain(idx).count()
    }

    /// `"<key>: <value>"`, or `"<key> doesn't exist!"` when absent.
    pub fn describe(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => format!("{}: {}", key, value),
            None => format!("{} doesn't exist!", key),
        }
    }

    pub fn print_value(&self, key: &str) {
        println!("{}", self.describe(key));
    }

    /// Renders every bucket as `"\n[<index>] <key>:<value> ..."` followed by a
    /// final newline.
    pub fn dump(&self, order: ChainOrder) -> Dump<'_> {
        Dump { table: self, order }
    }

    pub fn print_table(&self, order: ChainOrder) {
        print!("{}", self.dump(order));
    }

    /// Releases every entry and the bucket array. Returns how many entries
    /// were dropped.
    pub fn destroy(self) -> usize {
        let released = self.len;
        debug!(
            "Destroying table: {} entries across {} buckets",
            released,
            self.heads.len()
        );
        drop(self);
        released
    }

    fn entry(&self, id: SlotId) -> Option<&Entry> {
        match self.slots.get(id)? {
            Slot::Occupied(entry) => Some(entry),
            Slot::Vacant(_) => None,
        }
    }

    fn entry_mut(&mut self, id: SlotId) -> Option<&mut Entry> {
        match self.slots.get_mut(id)? {
            Slot::Occupied(entry) => Some(entry),
            Slot::Vacant(_) => None,
        }
    }

    fn tail(&self, idx: usize) -> Option<SlotId> {
        let mut cur = self.heads[idx]?;
        while let Some(next) = self.entry(cur).and_then(|e| e.next) {
            cur = next;
        }
        Some(cur)
    }

    fn alloc(&mut self, entry: Entry) -> Result<SlotId> {
        if let Some(id) = self.free {
            if let Some(slot) = self.slots.get_mut(id) {
                if let Slot::Vacant(next_free) = *slot {
                    self.free = next_free;
                    *slot = Slot::Occupied(entry);
                    return Ok(id);
                }
            }
        }
        self.slots.try_reserve(1)?;
        self.slots.push(Slot::Occupied(entry));
        Ok(self.slots.len() - 1)
    }

    fn release(&mut self, id: SlotId) -> Option<Entry> {
        let slot = self.slots.get_mut(id)?;
        match mem::replace(slot, Slot::Vacant(self.free)) {
            Slot::Occupied(entry) => {
                self.free = Some(id);
                self.len -= 1;
                Some(entry)
            }
            vacant => {
                *slot = vacant;
                None
            }
        }
    }
}

impl fmt::Display for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(ChainOrder::Insertion).fmt(f)
    }
}

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over one chain.
#[derive(Clone, Debug)]
pub struct Chain<'a> {
    table: &'a ChainedHashTable,
    cur: Option<SlotId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let entry = self.table.entry(self.cur?)?;
        self.cur = entry.next;
        Some(entry)
    }
}

/// Iterator over all entries, in bucket order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    table: &'a ChainedHashTable,
    bucket: usize,
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some(entry);
            }
            if self.bucket >= self.table.num_buckets() {
                return None;
            }
            self.chain = self.table.chain(self.bucket);
            self.bucket += 1;
        }
    }
}

/// Printable view returned by [`ChainedHashTable::dump`].
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a> {
    table: &'a ChainedHashTable,
    order: ChainOrder,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for idx in 0..self.table.num_buckets() {
            write!(f, "\n[{}] ", idx)?;
            match self.order {
                ChainOrder::Insertion => {
                    for entry in self.table.chain(idx) {
                        write!(f, "{}:{} ", entry.key(), entry.value())?;
                    }
                }
                ChainOrder::Reversed => {
                    let entries: Vec<&Entry> = self.table.chain(idx).collect();
                    for entry in entries.into_iter().rev() {
                        write!(f, "{}:{} ", entry.key(), entry.value())?;
                    }
                }
            }
        }
        writeln!(f)
    }
}
