//! Table: the open-addressing engine.

use crate::config::{Destructor, EqFn, HashFn, Ownership, TableBuilder, MAX_LOAD_FACTOR};
use crate::error::TableError;
use crate::hash::{home_index, probe_distance};
use crate::iter::{Iter, IterMut, Keys, Values};
use crate::slot::{Bucket, Slot, SlotStatus};
use core::borrow::Borrow;
use core::fmt;
use core::mem;
use std::borrow::Cow;

/// Open-addressing hash table with Robin Hood insertion and tombstone
/// deletion.
///
/// Keys are stored as `Cow<'a, K>`: owned or borrowed depending on the
/// table's [`Ownership`] and on which insert method is used. Every entry
/// caches its 32-bit hash, so the hash function runs once per insert or
/// lookup and never during growth.
///
/// ```
/// use robin_table::Table;
///
/// let mut t: Table<'_, str, i32> = Table::new(16, 1.5).unwrap();
/// t.insert("apple", 42).unwrap();
/// t.insert("banana", 7).unwrap();
///
/// assert_eq!(t.get("apple"), Some(&42));
/// assert_eq!(t.remove("apple"), Some(42));
/// assert_eq!(t.get("apple"), None);
/// assert_eq!(t.len(), 1);
/// ```
pub struct Table<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    slots: Vec<Slot<'a, K, V>>,
    count: usize,
    tombstones: usize,
    grow_factor: f64,
    hash_fn: HashFn<K>,
    eq_fn: EqFn<K>,
    ownership: Ownership,
    destructor: Option<Destructor<'a, K, V>>,
}

#[inline(always)]
fn next_index(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next == capacity {
        0
    } else {
        next
    }
}

#[inline]
fn exceeds_load(entries: usize, capacity: usize) -> bool {
    entries as f64 > capacity as f64 * MAX_LOAD_FACTOR
}

/// Places `candidate` with Robin Hood displacement and reports what the
/// final slot held before (`Empty` or `Tombstone`).
///
/// The caller guarantees at least one non-occupied slot exists.
fn place<'a, K, V>(slots: &mut [Slot<'a, K, V>], mut candidate: Bucket<'a, K, V>) -> SlotStatus
where
    K: ?Sized + ToOwned,
{
    let capacity = slots.len();
    let mut index = home_index(candidate.hash, capacity);
    let mut dist = 0usize;
    loop {
        let slot = &mut slots[index];
        match slot {
            Slot::Occupied(resident) => {
                let existing = probe_distance(resident.hash, index, capacity);
                if dist > existing {
                    // The poorer entry keeps the slot; the richer one moves on.
                    mem::swap(resident, &mut candidate);
                    dist = existing;
                }
            }
            _ => {
                let prior = slot.status();
                *slot = Slot::Occupied(candidate);
                return prior;
            }
        }
        index = next_index(index, capacity);
        dist += 1;
    }
}

impl<'a, K, V> Table<'a, K, V>
where
    K: ?Sized + ToOwned + AsRef<[u8]> + Eq,
{
    /// Creates a table over byte-like keys hashed with FNV-1a.
    pub fn new(capacity: usize, grow_factor: f64) -> Result<Self, TableError> {
        Self::builder()
            .capacity(capacity)
            .grow_factor(grow_factor)
            .build()
    }

    pub fn builder() -> TableBuilder<'a, K, V> {
        TableBuilder::default()
    }
}

impl<'a, K, V> Table<'a, K, V>
where
    K: ?Sized + ToOwned + Eq,
{
    /// Creates a table for any `Eq` key type with the given hash function.
    pub fn with_hash_fn(
        capacity: usize,
        grow_factor: f64,
        hash_fn: HashFn<K>,
    ) -> Result<Self, TableError> {
        TableBuilder::with_hash_fn(hash_fn)
            .capacity(capacity)
            .grow_factor(grow_factor)
            .build()
    }
}

impl<'a, K, V> Table<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) fn from_builder(b: TableBuilder<'a, K, V>) -> Result<Self, TableError> {
        let slots = Self::allocate_slots(b.capacity)?;
        Ok(Self {
            slots,
            count: 0,
            tombstones: 0,
            grow_factor: b.grow_factor,
            hash_fn: b.hash_fn,
            eq_fn: b.eq_fn,
            ownership: b.ownership,
            destructor: b.destructor,
        })
    }

    /// Allocates `capacity` empty slots, reporting failure instead of aborting.
    fn allocate_slots(capacity: usize) -> Result<Vec<Slot<'a, K, V>>, TableError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| TableError::Allocation { capacity, source })?;
        slots.resize_with(capacity, || Slot::Empty);
        Ok(slots)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Number of deleted slots still occupying the probe sequences.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Status of the slot at `index`, or `None` past the end.
    pub fn slot_status(&self, index: usize) -> Option<SlotStatus> {
        self.slots.get(index).map(Slot::status)
    }

    /// Cached hash of the entry at `index`, if that slot is occupied.
    #[cfg(test)]
    pub(crate) fn slot_hash(&self, index: usize) -> Option<u32> {
        self.slots.get(index).and_then(Slot::bucket).map(|b| b.hash)
    }

    /// Largest displacement of any live entry from its home bucket.
    pub fn max_probe_distance(&self) -> usize {
        let capacity = self.capacity();
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.bucket().map(|b| probe_distance(b.hash, i, capacity)))
            .max()
            .unwrap_or(0)
    }

    fn grown_capacity(&self, capacity: usize) -> usize {
        let grown = (capacity as f64 * self.grow_factor) as usize;
        grown.max(capacity.saturating_add(1))
    }

    /// Index of the live slot holding `key`.
    ///
    /// Empty slots end the probe; tombstones do not. The walk is bounded
    /// by the capacity so a table whose empty slots were all consumed by
    /// tombstones still terminates.
    fn find_index(&self, hash: u32, key: &K) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = home_index(hash, capacity);
        for _ in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(b) if b.hash == hash && (self.eq_fn)(&*b.key, key) => {
                    return Some(index)
                }
                _ => {}
            }
            index = next_index(index, capacity);
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = (self.hash_fn)(key);
        let index = self.find_index(hash, key)?;
        self.slots[index].bucket().map(|b| (&*b.key, &b.value))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = (self.hash_fn)(key);
        let index = self.find_index(hash, key)?;
        self.slots[index].bucket_mut().map(|b| &mut b.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        let hash = (self.hash_fn)(key);
        self.find_index(hash, key).is_some()
    }

    /// Inserts `value` under a clone of `key`.
    ///
    /// The reference is only read, so `key` may be a temporary. An existing
    /// entry for `key` is updated in place: its value is replaced, the
    /// stored key is kept and the old value is returned. Only new entries
    /// can trigger growth; if that growth fails the table is left as it was.
    pub fn insert(&mut self, key: &K, value: V) -> Result<Option<V>, TableError> {
        let hash = (self.hash_fn)(key);
        self.insert_hashed(hash, key, value, || Cow::Owned(key.to_owned()))
    }

    /// Inserts `value` under `key`, keeping the reference when the table
    /// was built with [`Ownership::Borrowed`] and cloning it otherwise.
    /// Same update semantics as [`Table::insert`].
    pub fn insert_borrowed(&mut self, key: &'a K, value: V) -> Result<Option<V>, TableError> {
        let hash = (self.hash_fn)(key);
        let ownership = self.ownership;
        self.insert_hashed(hash, key, value, || match ownership {
            Ownership::Owned => Cow::Owned(key.to_owned()),
            Ownership::Borrowed => Cow::Borrowed(key),
        })
    }

    fn insert_hashed(
        &mut self,
        hash: u32,
        key: &K,
        value: V,
        store: impl FnOnce() -> Cow<'a, K>,
    ) -> Result<Option<V>, TableError> {
        if let Some(index) = self.find_index(hash, key) {
            return Ok(Some(self.replace_value(index, value)));
        }
        self.insert_new(Bucket {
            key: store(),
            value,
            hash,
        })?;
        Ok(None)
    }

    /// Inserts with a key the table takes ownership of, regardless of the
    /// configured [`Ownership`]. Same update semantics as [`Table::insert`].
    pub fn insert_owned(&mut self, key: K::Owned, value: V) -> Result<Option<V>, TableError> {
        let hash = (self.hash_fn)(key.borrow());
        if let Some(index) = self.find_index(hash, key.borrow()) {
            return Ok(Some(self.replace_value(index, value)));
        }
        self.insert_new(Bucket {
            key: Cow::Owned(key),
            value,
            hash,
        })?;
        Ok(None)
    }

    fn replace_value(&mut self, index: usize, value: V) -> V {
        match self.slots[index].bucket_mut() {
            Some(b) => mem::replace(&mut b.value, value),
            None => unreachable!("probe returned a non-occupied slot"),
        }
    }

    fn insert_new(&mut self, bucket: Bucket<'a, K, V>) -> Result<(), TableError> {
        let needed = self.count + 1;
        if exceeds_load(needed, self.capacity()) {
            let target = self.grown_capacity(self.capacity());
            self.resize_to_fit(target, needed)?;
        }
        debug_assert!(self.count < self.capacity());
        if place(&mut self.slots, bucket) == SlotStatus::Tombstone {
            self.tombstones -= 1;
        }
        self.count += 1;
        Ok(())
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key`, returning the stored key and value.
    ///
    /// The slot becomes a tombstone. Tombstones are only cleared by
    /// [`Table::resize`] or [`Table::compact`].
    pub fn remove_entry(&mut self, key: &K) -> Option<(Cow<'a, K>, V)> {
        let hash = (self.hash_fn)(key);
        let index = self.find_index(hash, key)?;
        let Slot::Occupied(bucket) = mem::replace(&mut self.slots[index], Slot::Tombstone) else {
            unreachable!("probe returned a non-occupied slot")
        };
        self.count -= 1;
        self.tombstones += 1;
        Some((bucket.key, bucket.value))
    }

    /// Rebuilds the table into `new_capacity` slots, dropping tombstones.
    ///
    /// If `new_capacity` cannot hold the live entries under the load bound
    /// it is grown by the grow factor until it can. Storage is allocated
    /// before any entry moves, so on error the table is unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), TableError> {
        self.resize_to_fit(new_capacity, self.count)
    }

    /// Clears all tombstones without changing the capacity (unless the
    /// live entries no longer fit under the load bound).
    pub fn compact(&mut self) -> Result<(), TableError> {
        self.resize(self.capacity())
    }

    /// Ensures `additional` more entries fit without further growth.
    pub fn reserve(&mut self, additional: usize) -> Result<(), TableError> {
        let needed = self.count.saturating_add(additional);
        if exceeds_load(needed, self.capacity()) {
            let target = self.grown_capacity(self.capacity());
            self.resize_to_fit(target, needed)?;
        }
        Ok(())
    }

    fn resize_to_fit(&mut self, new_capacity: usize, needed: usize) -> Result<(), TableError> {
        if new_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut target = new_capacity;
        while exceeds_load(needed, target) && target < usize::MAX {
            target = self.grown_capacity(target);
        }

        let mut fresh = match Self::allocate_slots(target) {
            Ok(slots) => slots,
            Err(e) => {
                log_warn!(
                    "resize from {} to {} slots failed: {}",
                    self.capacity(),
                    target,
                    e
                );
                return Err(e);
            }
        };

        // Index order; the cached hash decides placement.
        for slot in self.slots.iter_mut() {
            if let Slot::Occupied(bucket) = mem::replace(slot, Slot::Empty) {
                place(&mut fresh, bucket);
            }
        }

        log_debug!(
            "resized {} -> {} slots ({} live, {} tombstones dropped)",
            self.capacity(),
            target,
            self.count,
            self.tombstones
        );
        self.slots = fresh;
        self.tombstones = 0;
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, 'a, K, V> {
        Iter::new(&self.slots, self.count)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, 'a, K, V> {
        IterMut::new(&mut self.slots, self.count)
    }

    pub fn keys(&self) -> Keys<'_, 'a, K, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, 'a, K, V> {
        Values::new(self.iter())
    }
}

impl<'a, K, V> Drop for Table<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    fn drop(&mut self) {
        if let Some(destructor) = self.destructor.take() {
            destructor(self);
        }
    }
}

impl<K, V> fmt::Debug for Table<'_, K, V>
where
    K: ?Sized + ToOwned + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'t, 'a, K, V> IntoIterator for &'t Table<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = (&'t K, &'t V);
    type IntoIter = Iter<'t, 'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t, 'a, K, V> IntoIterator for &'t mut Table<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = (&'t K, &'t mut V);
    type IntoIter = IterMut<'t, 'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    fn identity(k: &u32) -> u32 {
        *k
    }

    fn int_table(capacity: usize) -> Table<'static, u32, &'static str> {
        Table::with_hash_fn(capacity, 2.0, identity).unwrap()
    }

    fn layout<K: ?Sized + ToOwned, V>(t: &Table<'_, K, V>) -> Vec<SlotStatus> {
        (0..t.capacity()).map(|i| t.slot_status(i).unwrap()).collect()
    }

    fn snapshot(t: &Table<'_, str, i32>) -> BTreeMap<String, i32> {
        t.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    /// Invariant: a richer incoming entry displaces no one, a poorer one
    /// takes the slot of a richer resident.
    #[test]
    fn robin_hood_swaps_poorer_entry_in() {
        let mut t = int_table(8);
        t.insert_owned(1, "one").unwrap();
        t.insert_owned(0, "zero").unwrap();
        // 8 homes at 0, probes past 0 and steals slot 1 from key 1 (home 1).
        t.insert_owned(8, "eight").unwrap();

        let at = |i: usize| t.slots[i].bucket().map(|b| *b.key);
        assert_eq!(at(0), Some(0));
        assert_eq!(at(1), Some(8));
        assert_eq!(at(2), Some(1));
        assert_eq!(t.max_probe_distance(), 1);
        for k in [0, 1, 8] {
            assert!(t.contains_key(&k));
        }
    }

    /// Invariant: tombstones keep later entries of the probe chain reachable.
    #[test]
    fn tombstone_does_not_end_probe() {
        let mut t = int_table(8);
        for k in [0, 8, 16] {
            t.insert_owned(k, "x").unwrap();
        }
        assert_eq!(t.remove(&8), Some("x"));
        assert_eq!(t.slot_status(1), Some(SlotStatus::Tombstone));
        assert_eq!(t.tombstones(), 1);
        assert_eq!(t.get(&16), Some(&"x"));
        assert_eq!(t.get(&8), None);
        assert_eq!(t.get(&24), None);
    }

    /// Invariant: updating a key that sits past a tombstone overwrites it
    /// instead of filling the tombstone with a duplicate.
    #[test]
    fn overwrite_behind_tombstone_is_not_duplicated() {
        let mut t = int_table(8);
        for k in [0, 8, 16] {
            t.insert_owned(k, "old").unwrap();
        }
        t.remove(&8);
        assert_eq!(t.insert_owned(16, "new").unwrap(), Some("old"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.tombstones(), 1);
        assert_eq!(t.get(&16), Some(&"new"));
        assert_eq!(t.iter().filter(|(k, _)| **k == 16).count(), 1);
    }

    /// Invariant: a new entry reuses the first tombstone on its probe path.
    #[test]
    fn insert_reuses_tombstone() {
        let mut t = int_table(8);
        for k in [0, 8, 16] {
            t.insert_owned(k, "x").unwrap();
        }
        t.remove(&8);
        t.insert_owned(24, "y").unwrap();
        assert_eq!(t.tombstones(), 0);
        assert_eq!(t.slots[1].bucket().map(|b| *b.key), Some(24));
        assert_eq!(t.len(), 3);
    }

    /// Invariant: lookups terminate even when no empty slot is left.
    #[test]
    fn probe_is_bounded_without_empty_slots() {
        let mut t = int_table(4);
        for k in [0, 1, 2] {
            t.insert_owned(k, "x").unwrap();
        }
        for k in [0, 1, 2] {
            t.remove(&k);
        }
        t.insert_owned(3, "three").unwrap();
        assert!(layout(&t).iter().all(|s| *s != SlotStatus::Empty));

        assert_eq!(t.get(&7), None);
        assert_eq!(t.remove(&11), None);
        assert!(!t.contains_key(&0));
        assert_eq!(t.get(&3), Some(&"three"));

        // New keys still find a tombstone to reuse.
        t.insert_owned(4, "four").unwrap();
        assert_eq!(t.get(&4), Some(&"four"));
        assert_eq!(t.capacity(), 4);
    }

    /// Invariant: all keys colliding on one hash stay distinguishable via `eq_fn`.
    #[test]
    fn constant_hash_collisions_resolved_by_eq() {
        let mut t: Table<'_, str, i32> = TableBuilder::default()
            .hash_fn(|_| 0)
            .capacity(4)
            .build()
            .unwrap();
        let keys = ["a", "b", "c", "d", "e", "f", "g"];
        for (i, k) in keys.into_iter().enumerate() {
            t.insert(k, i as i32).unwrap();
        }
        for (i, k) in keys.into_iter().enumerate() {
            assert_eq!(t.get(k), Some(&(i as i32)));
        }
        t.remove("c");
        assert_eq!(t.get("d"), Some(&3));
        assert_eq!(t.get("c"), None);
    }

    /// Invariant: growth happens before the insert that would pass 0.9 load.
    #[test]
    fn grows_before_exceeding_load() {
        let mut t = int_table(10);
        for k in 0..9 {
            t.insert_owned(k, "x").unwrap();
        }
        assert_eq!(t.capacity(), 10);
        t.insert_owned(9, "x").unwrap();
        assert_eq!(t.capacity(), 20);
        assert_eq!(t.len(), 10);
    }

    /// Invariant: overwriting a present key never triggers growth.
    #[test]
    fn overwrite_at_load_limit_does_not_grow() {
        let mut t = int_table(10);
        for k in 0..9 {
            t.insert_owned(k, "x").unwrap();
        }
        assert_eq!(t.insert_owned(3, "y").unwrap(), Some("x"));
        assert_eq!(t.capacity(), 10);
    }

    /// Invariant: tiny grow factors still make progress and keep the load bound.
    #[test]
    fn small_grow_factor_still_grows() {
        let mut t: Table<'_, u32, u32> = Table::with_hash_fn(1, 1.01, identity).unwrap();
        for k in 0..50 {
            t.insert_owned(k, k).unwrap();
            assert!(t.len() as f64 <= t.capacity() as f64 * MAX_LOAD_FACTOR);
        }
        for k in 0..50 {
            assert_eq!(t.get(&k), Some(&k));
        }
    }

    /// Invariant: a failed resize leaves capacity, count, tombstones and
    /// every slot exactly as they were.
    #[test]
    fn failed_resize_is_atomic() {
        let mut t: Table<'_, str, i32> = Table::new(16, 2.0).unwrap();
        for (i, k) in ["a", "b", "c", "d"].into_iter().enumerate() {
            t.insert(k, i as i32).unwrap();
        }
        t.remove("b");
        let before_layout = layout(&t);
        let before = snapshot(&t);

        let err = t.resize(usize::MAX).unwrap_err();
        assert!(matches!(err, TableError::Allocation { capacity: usize::MAX, .. }));

        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 3);
        assert_eq!(t.tombstones(), 1);
        assert_eq!(layout(&t), before_layout);
        assert_eq!(snapshot(&t), before);
    }

    /// Invariant: resize to zero is rejected without touching the table.
    #[test]
    fn resize_to_zero_rejected() {
        let mut t: Table<'_, str, i32> = Table::new(8, 2.0).unwrap();
        t.insert("a", 1).unwrap();
        assert!(matches!(t.resize(0), Err(TableError::ZeroCapacity)));
        assert_eq!(t.capacity(), 8);
        assert_eq!(t.get("a"), Some(&1));
    }

    /// Invariant: shrinking below the load bound grows the target until the
    /// live entries fit.
    #[test]
    fn shrinking_resize_keeps_entries() {
        let mut t = int_table(64);
        for k in 0..5 {
            t.insert_owned(k, "x").unwrap();
        }
        t.resize(2).unwrap();
        // 2 -> 4 -> 8: five entries need more than 3.6 slots of room.
        assert_eq!(t.capacity(), 8);
        for k in 0..5 {
            assert_eq!(t.get(&k), Some(&"x"));
        }
    }

    /// Invariant: resize reuses cached hashes; the hash function is not re-run.
    #[test]
    fn resize_does_not_rehash() {
        thread_local! {
            static CALLS: Cell<usize> = Cell::new(0);
        }
        fn counting(k: &u32) -> u32 {
            CALLS.with(|c| c.set(c.get() + 1));
            *k
        }
        let mut t: Table<'_, u32, u32> = Table::with_hash_fn(32, 2.0, counting).unwrap();
        for k in 0..10 {
            t.insert_owned(k, k).unwrap();
        }
        let calls = CALLS.with(Cell::get);
        t.resize(128).unwrap();
        t.compact().unwrap();
        assert_eq!(CALLS.with(Cell::get), calls);
    }

    /// Invariant: `compact` clears tombstones and keeps capacity.
    #[test]
    fn compact_drops_tombstones() {
        let mut t = int_table(16);
        for k in 0..10 {
            t.insert_owned(k, "x").unwrap();
        }
        for k in 0..5 {
            t.remove(&k);
        }
        assert_eq!(t.tombstones(), 5);
        t.compact().unwrap();
        assert_eq!(t.tombstones(), 0);
        assert_eq!(t.capacity(), 16);
        assert_eq!(t.len(), 5);
        assert!(layout(&t).iter().all(|s| *s != SlotStatus::Tombstone));
        for k in 5..10 {
            assert!(t.contains_key(&k));
        }
    }

    /// Invariant: `reserve` grows once so the reserved inserts never resize.
    #[test]
    fn reserve_avoids_later_growth() {
        let mut t = int_table(4);
        t.reserve(100).unwrap();
        let cap = t.capacity();
        assert!(100.0 <= cap as f64 * MAX_LOAD_FACTOR);
        for k in 0..100 {
            t.insert_owned(k, "x").unwrap();
        }
        assert_eq!(t.capacity(), cap);
    }

    /// Invariant: `get_mut` and `iter_mut` update stored values in place.
    #[test]
    fn mutation_through_get_mut_and_iter_mut() {
        let mut t: Table<'_, str, i32> = Table::new(8, 2.0).unwrap();
        t.insert("a", 1).unwrap();
        t.insert("b", 2).unwrap();
        *t.get_mut("a").unwrap() += 10;
        for (_, v) in &mut t {
            *v *= 2;
        }
        assert_eq!(t.get("a"), Some(&22));
        assert_eq!(t.get("b"), Some(&4));
        assert!(t.get_mut("zz").is_none());
    }

    /// Invariant: `Debug` renders the live entries as a map.
    #[test]
    fn debug_renders_entries() {
        let mut t: Table<'_, str, i32> = Table::new(4, 2.0).unwrap();
        t.insert("only", 1).unwrap();
        assert_eq!(format!("{:?}", t), r#"{"only": 1}"#);
    }
}
