//! Construction parameters for [`Table`].

use crate::error::TableError;
use crate::hash::{default_eq, default_hash};
use crate::table::Table;

/// Initial slot count used when none is given.
pub const DEFAULT_CAPACITY: usize = 16;
/// Capacity multiplier applied on growth when none is given.
pub const DEFAULT_GROW_FACTOR: f64 = 2.0;
/// Live entries may never exceed this fraction of the capacity.
pub const MAX_LOAD_FACTOR: f64 = 0.9;

/// Maps a key to its 32-bit hash.
pub type HashFn<K> = fn(&K) -> u32;
/// Key equality, consulted whenever two cached hashes match.
pub type EqFn<K> = fn(&K, &K) -> bool;
/// Teardown hook, run once before the slot storage is released.
pub type Destructor<'a, K, V> = fn(&mut Table<'a, K, V>);

/// Who owns the keys stored in a table.
///
/// The policy applies to `Table::insert_borrowed`:
/// - `Owned`: the key is cloned into the table and dropped by it on
///   removal, resize and teardown.
/// - `Borrowed`: the table keeps the caller's reference; the caller's keys
///   must outlive the table, which the `'a` lifetime enforces.
///
/// `Table::insert` always clones and `Table::insert_owned` takes the key by
/// value, so both store owned keys under either policy.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Ownership {
    #[default]
    Owned,
    Borrowed,
}

/// Builder for [`Table`].
///
/// ```
/// use robin_table::{Ownership, TableBuilder};
///
/// let key = String::from("answer");
/// let mut t = TableBuilder::<str, i32>::default()
///     .capacity(32)
///     .grow_factor(1.5)
///     .ownership(Ownership::Borrowed)
///     .build()
///     .unwrap();
///
/// t.insert_borrowed(&key, 42).unwrap();
/// assert_eq!(t.get("answer"), Some(&42));
/// assert_eq!(t.capacity(), 32);
/// ```
pub struct TableBuilder<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) capacity: usize,
    pub(crate) grow_factor: f64,
    pub(crate) hash_fn: HashFn<K>,
    pub(crate) eq_fn: EqFn<K>,
    pub(crate) ownership: Ownership,
    pub(crate) destructor: Option<Destructor<'a, K, V>>,
}

impl<'a, K, V> TableBuilder<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    /// Starts a builder for any key type from explicit hash and equality
    /// functions.
    pub fn with_fns(hash_fn: HashFn<K>, eq_fn: EqFn<K>) -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            grow_factor: DEFAULT_GROW_FACTOR,
            hash_fn,
            eq_fn,
            ownership: Ownership::default(),
            destructor: None,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn grow_factor(mut self, grow_factor: f64) -> Self {
        self.grow_factor = grow_factor;
        self
    }

    pub fn hash_fn(mut self, hash_fn: HashFn<K>) -> Self {
        self.hash_fn = hash_fn;
        self
    }

    pub fn eq_fn(mut self, eq_fn: EqFn<K>) -> Self {
        self.eq_fn = eq_fn;
        self
    }

    pub fn ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn destructor(mut self, destructor: Destructor<'a, K, V>) -> Self {
        self.destructor = Some(destructor);
        self
    }

    /// Validates the parameters and allocates the slot storage.
    pub fn build(self) -> Result<Table<'a, K, V>, TableError> {
        if self.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if !(self.grow_factor.is_finite() && self.grow_factor > 1.0) {
            return Err(TableError::InvalidGrowFactor(self.grow_factor));
        }
        Table::from_builder(self)
    }
}

impl<'a, K, V> TableBuilder<'a, K, V>
where
    K: ?Sized + ToOwned + Eq,
{
    /// Starts a builder with a custom hash function and `PartialEq` equality.
    pub fn with_hash_fn(hash_fn: HashFn<K>) -> Self {
        Self::with_fns(hash_fn, default_eq::<K>)
    }
}

/// Byte-like keys default to FNV-1a hashing and `PartialEq` equality.
impl<'a, K, V> Default for TableBuilder<'a, K, V>
where
    K: ?Sized + ToOwned + AsRef<[u8]> + Eq,
{
    fn default() -> Self {
        Self::with_fns(default_hash::<K>, default_eq::<K>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_u32;

    /// Invariant: zero capacity and non-growing factors are rejected before allocating.
    #[test]
    fn build_rejects_invalid_parameters() {
        let zero = TableBuilder::<str, i32>::default().capacity(0).build();
        assert!(matches!(zero, Err(TableError::ZeroCapacity)));

        for gf in [1.0, 0.5, -2.0, f64::NAN, f64::INFINITY] {
            let res = TableBuilder::<str, i32>::default().grow_factor(gf).build();
            assert!(
                matches!(res, Err(TableError::InvalidGrowFactor(_))),
                "grow factor {gf} must be rejected"
            );
        }
    }

    /// Invariant: defaults are capacity 16, grow factor 2.0, owned keys.
    #[test]
    fn defaults_applied() {
        let t = TableBuilder::<str, i32>::default().build().unwrap();
        assert_eq!(t.capacity(), DEFAULT_CAPACITY);
        assert_eq!(t.grow_factor(), DEFAULT_GROW_FACTOR);
        assert_eq!(t.ownership(), Ownership::Owned);
        assert!(t.is_empty());
    }

    /// Invariant: non-byte keys build from an explicit hash function.
    #[test]
    fn integer_keys_with_custom_hash() {
        let mut t = TableBuilder::<u32, &str>::with_hash_fn(|k: &u32| hash_u32(*k))
            .capacity(4)
            .build()
            .unwrap();
        t.insert_owned(7, "seven").unwrap();
        assert_eq!(t.get(&7), Some(&"seven"));
        assert_eq!(t.get(&8), None);
    }
}
