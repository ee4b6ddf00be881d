//! Hash functions and the Robin Hood probe-distance helper.
//!
//! All functions here are pure and allocation free. The FNV-1a variants
//! share one step function so the byte, string and single-byte forms can
//! never drift apart.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

#[inline(always)]
const fn fnv1a_step(hash: u32, byte: u8) -> u32 {
    (hash ^ byte as u32).wrapping_mul(FNV_PRIME)
}

/// FNV-1a over an arbitrary byte slice.
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |h, &b| fnv1a_step(h, b))
}

/// FNV-1a over the UTF-8 bytes of `s`. Usable directly as a `HashFn<str>`.
#[inline]
pub fn hash_string(s: &str) -> u32 {
    hash_bytes(s.as_bytes())
}

/// A single FNV-1a step over one byte.
#[inline]
pub const fn hash_char(c: u8) -> u32 {
    fnv1a_step(FNV_OFFSET_BASIS, c)
}

/// Murmur3-style 32-bit finalizer for integer keys.
#[inline]
pub const fn hash_u32(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x85eb_ca6b);
    x ^= x >> 13;
    x = x.wrapping_mul(0xc2b2_ae35);
    x ^= x >> 16;
    x
}

/// Default hash for byte-like keys (`str`, `String`, `[u8]`, `Vec<u8>`).
pub fn default_hash<K>(key: &K) -> u32
where
    K: ?Sized + AsRef<[u8]>,
{
    hash_bytes(key.as_ref())
}

/// Default equality, delegating to `PartialEq`.
pub fn default_eq<K>(a: &K, b: &K) -> bool
where
    K: ?Sized + Eq,
{
    a == b
}

/// How far the slot at `index` sits from the bucket `hash` maps to,
/// counting forward with wrap-around.
#[inline]
pub fn probe_distance(hash: u32, index: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (index + capacity - home_index(hash, capacity)) % capacity
}

#[inline(always)]
pub(crate) fn home_index(hash: u32, capacity: usize) -> usize {
    hash as usize % capacity
}
