//! Node keys for sibling identity in the produced node sequence.
//!
//! Every container and separator the layout engine emits carries a
//! [`NodeKey`]. Keys only need to be unique within one layout call; the
//! consuming render tree uses them to tell siblings apart.
//!
//! Key production sits behind the [`KeyGenerator`] trait so callers can plug
//! in their own scheme. [`SequentialKeys`] is the stock implementation: it
//! hashes a seed together with a running sequence number using blake3, which
//! gives well-spread keys that are still reproducible for a given seed.

use std::fmt;

// =============================================================================
// NodeKey
// =============================================================================

/// Opaque key attached to emitted nodes.
///
/// - 8 bytes, `Copy`
/// - Displayed as lowercase hex, which is also the form used in the
///   `data-key` attribute of rendered HTML
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct NodeKey(u64);

impl NodeKey {
    /// Create a key from a raw value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation.
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Derive a key from a seed and a sequence number.
    ///
    /// Takes the first 8 bytes of the blake3 digest as a little-endian u64.
    pub fn derive(seed: u64, sequence: u64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"draft-vdom:key");
        hasher.update(&seed.to_le_bytes());
        hasher.update(&sequence.to_le_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest.as_bytes()[..8]);
        Self(u64::from_le_bytes(bytes))
    }

    /// Hex form used for attribute values.
    #[inline]
    pub fn to_attr_value(self) -> String {
        format!("{:x}", self.0)
    }
}

impl fmt::Debug for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKey({:016x})", self.0)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

// =============================================================================
// KeyGenerator
// =============================================================================

/// Source of keys for emitted nodes.
///
/// Implementations must not repeat a key within a single layout call.
/// Uniqueness across calls is not required.
pub trait KeyGenerator {
    /// Produce the next key.
    fn next_key(&mut self) -> NodeKey;
}

impl<F> KeyGenerator for F
where
    F: FnMut() -> NodeKey,
{
    #[inline]
    fn next_key(&mut self) -> NodeKey {
        self()
    }
}

/// Hash-based key source: `blake3(seed, 0)`, `blake3(seed, 1)`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialKeys {
    seed: u64,
    issued: u64,
}

impl SequentialKeys {
    /// Start a key sequence with a zero seed.
    pub const fn new() -> Self {
        Self { seed: 0, issued: 0 }
    }

    /// Start a key sequence with a caller-chosen seed.
    ///
    /// Two generators with different seeds produce disjoint-looking keys,
    /// which is handy when several layouts end up in one render tree.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed, issued: 0 }
    }

    /// Number of keys handed out so far.
    pub const fn issued(&self) -> u64 {
        self.issued
    }
}

impl KeyGenerator for SequentialKeys {
    fn next_key(&mut self) -> NodeKey {
        let key = NodeKey::derive(self.seed, self.issued);
        self.issued += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(NodeKey::derive(7, 3), NodeKey::derive(7, 3));
        assert_ne!(NodeKey::derive(7, 3), NodeKey::derive(7, 4));
        assert_ne!(NodeKey::derive(7, 3), NodeKey::derive(8, 3));
    }

    #[test]
    fn test_sequential_keys_are_unique() {
        let mut keys = SequentialKeys::new();
        let seen: FxHashSet<NodeKey> = (0..1000).map(|_| keys.next_key()).collect();
        assert_eq!(seen.len(), 1000);
        assert_eq!(keys.issued(), 1000);
    }

    #[test]
    fn test_same_seed_restarts_sequence() {
        let mut a = SequentialKeys::with_seed(42);
        let mut b = SequentialKeys::with_seed(42);
        assert_eq!(a.next_key(), b.next_key());
        assert_eq!(a.next_key(), b.next_key());
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut next = || {
            n += 1;
            NodeKey::from_raw(n)
        };
        assert_eq!(next.next_key().as_raw(), 1);
        assert_eq!(next.next_key().as_raw(), 2);
    }

    #[test]
    fn test_display_format() {
        let key = NodeKey::from_raw(0xabc);
        assert_eq!(key.to_string(), "abc");
        assert_eq!(key.to_attr_value(), "abc");
        assert_eq!(format!("{:?}", key), "NodeKey(0000000000000abc)");
    }
}
