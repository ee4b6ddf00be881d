//! Iterators over the live entries of a [`Table`](crate::Table).
//!
//! Entries come out in physical slot order, which is neither insertion
//! order nor stable across growth.

use crate::slot::Slot;
use core::iter::FusedIterator;

/// Iterator over immutable entries in `Table`.
pub struct Iter<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    slots: core::slice::Iter<'t, Slot<'a, K, V>>,
    remaining: usize,
}

impl<'t, 'a, K, V> Iter<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) fn new(slots: &'t [Slot<'a, K, V>], live: usize) -> Self {
        Self {
            slots: slots.iter(),
            remaining: live,
        }
    }
}

impl<'t, 'a, K, V> Iterator for Iter<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = (&'t K, &'t V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(b) = slot {
                self.remaining -= 1;
                return Some((&*b.key, &b.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, '_, K, V> where K: ?Sized + ToOwned {}
impl<K, V> FusedIterator for Iter<'_, '_, K, V> where K: ?Sized + ToOwned {}

impl<K, V> Clone for Iter<'_, '_, K, V>
where
    K: ?Sized + ToOwned,
{
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

/// Iterator over mutable entries in `Table`. Keys stay immutable.
pub struct IterMut<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    slots: core::slice::IterMut<'t, Slot<'a, K, V>>,
    remaining: usize,
}

impl<'t, 'a, K, V> IterMut<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) fn new(slots: &'t mut [Slot<'a, K, V>], live: usize) -> Self {
        Self {
            slots: slots.iter_mut(),
            remaining: live,
        }
    }
}

impl<'t, 'a, K, V> Iterator for IterMut<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = (&'t K, &'t mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(b) = slot {
                self.remaining -= 1;
                return Some((&*b.key, &mut b.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, '_, K, V> where K: ?Sized + ToOwned {}
impl<K, V> FusedIterator for IterMut<'_, '_, K, V> where K: ?Sized + ToOwned {}

pub struct Keys<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    inner: Iter<'t, 'a, K, V>,
}

impl<'t, 'a, K, V> Keys<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) fn new(inner: Iter<'t, 'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'t, 'a, K, V> Iterator for Keys<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = &'t K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, '_, K, V> where K: ?Sized + ToOwned {}
impl<K, V> FusedIterator for Keys<'_, '_, K, V> where K: ?Sized + ToOwned {}

pub struct Values<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    inner: Iter<'t, 'a, K, V>,
}

impl<'t, 'a, K, V> Values<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    pub(crate) fn new(inner: Iter<'t, 'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'t, 'a, K, V> Iterator for Values<'t, 'a, K, V>
where
    K: ?Sized + ToOwned,
{
    type Item = &'t V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, '_, K, V> where K: ?Sized + ToOwned {}
impl<K, V> FusedIterator for Values<'_, '_, K, V> where K: ?Sized + ToOwned {}
