//! Slot: one storage unit of the table.

use std::borrow::Cow;
use std::fmt;

/// Observable state of a slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SlotStatus {
    Empty,
    Occupied,
    Tombstone,
}

/// A live entry. The cached hash is only reachable through an occupied
/// slot, so it can never be read from an empty or deleted one.
pub(crate) struct Bucket<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) key: Cow<'a, K>,
    pub(crate) value: V,
    pub(crate) hash: u32,
}

impl<K, V> fmt::Debug for Bucket<'_, K, V>
where
    K: ?Sized + ToOwned + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bucket")
            .field("key", &&*self.key)
            .field("value", &self.value)
            .field("hash", &self.hash)
            .finish()
    }
}

pub(crate) enum Slot<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    Empty,
    Occupied(Bucket<'a, K, V>),
    Tombstone,
}

impl<'a, K, V> Slot<'a, K, V>
where
    K: ?Sized + ToOwned,
{
    #[inline]
    pub(crate) fn status(&self) -> SlotStatus {
        match self {
            Slot::Empty => SlotStatus::Empty,
            Slot::Occupied(_) => SlotStatus::Occupied,
            Slot::Tombstone => SlotStatus::Tombstone,
        }
    }

    #[inline]
    pub(crate) fn bucket(&self) -> Option<&Bucket<'a, K, V>> {
        match self {
            Slot::Occupied(b) => Some(b),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn bucket_mut(&mut self) -> Option<&mut Bucket<'a, K, V>> {
        match self {
            Slot::Occupied(b) => Some(b),
            _ => None,
        }
    }
}

impl<K, V> fmt::Debug for Slot<'_, K, V>
where
    K: ?Sized + ToOwned + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => f.write_str("Empty"),
            Slot::Occupied(b) => b.fmt(f),
            Slot::Tombstone => f.write_str("Tombstone"),
        }
    }
}
