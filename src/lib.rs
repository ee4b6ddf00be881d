//! robin-table: a single-threaded open-addressing hash table with Robin
//! Hood displacement, tombstone deletion and pluggable hash/equality
//! functions.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one small engine whose invariants can be checked slot by slot.
//! - Layers:
//!   - `hash`: pure 32-bit hash functions (FNV-1a for bytes, a Murmur3
//!     finalizer for integers) and the probe-distance helper.
//!   - `slot`: the storage unit. A slot is `Empty`, `Tombstone` or
//!     `Occupied(Bucket)`; only the occupied variant carries a key, a
//!     value and the cached hash.
//!   - `Table<'a, K, V>`: owns a fixed-length slot vector plus metadata
//!     and implements get/insert/remove/resize.
//!   - `iter`: cursors over the slot vector yielding occupied slots only.
//!
//! Constraints
//! - Single-threaded: no internal locking. Mutating while iterating is
//!   rejected by the borrow checker.
//! - The live load factor never exceeds 0.9. Growth happens eagerly,
//!   before the insert that would pass the bound.
//! - Lookups probe linearly from `hash % capacity`, stop at the first
//!   `Empty` slot and skip tombstones. Every probe is also bounded by the
//!   capacity.
//! - Inserting a key that is already present replaces its value in place
//!   and returns the old one; a table never holds two entries for a key.
//!
//! Hashing and rehashing
//! - Hash and equality are plain `fn` pointers chosen at construction.
//!   Byte-like keys (`str`, `[u8]`, `String`, ...) default to FNV-1a and
//!   `PartialEq`; every other key type must supply a hash function.
//! - Each entry stores its 32-bit hash. Growth places entries by the
//!   stored hash; the hash function is never invoked after insertion.
//!
//! Key ownership
//! - Keys are stored as `Cow<'a, K>`. `insert` clones the key it is given,
//!   so any short-lived reference works. `insert_borrowed` takes `&'a K`
//!   and follows the table's policy: `Ownership::Borrowed` keeps the
//!   reference and `'a` ties the caller's keys to the table, while
//!   `Ownership::Owned` clones. `insert_owned` hands the key over by value.
//!
//! Resize and failure
//! - `resize` allocates the new slot vector first (`try_reserve_exact`)
//!   and only then moves entries over, so an allocation failure leaves the
//!   table untouched. Tombstones are dropped during the move; `compact`
//!   triggers the same rebuild without growing.
//! - Errors are `Result`s; nothing is retried internally.
//!
//! Notes and non-goals
//! - No concurrent access, no serialization, no ordered iteration.
//! - Tombstones are never compacted implicitly. Delete-heavy workloads
//!   should call `compact` periodically.
//! - With the `logging` feature, resizes are reported through `log`.

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

mod config;
mod error;
pub mod hash;
mod iter;
mod slot;
mod table;
mod table_proptest;

// Public surface
pub use config::{
    Destructor, EqFn, HashFn, Ownership, TableBuilder, DEFAULT_CAPACITY, DEFAULT_GROW_FACTOR,
    MAX_LOAD_FACTOR,
};
pub use error::TableError;
pub use iter::{Iter, IterMut, Keys, Values};
pub use slot::SlotStatus;
pub use table::Table;
