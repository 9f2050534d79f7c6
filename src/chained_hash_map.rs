//! Separate-chaining hash table with load-factor driven resizing.
//!
//! Each bucket is a short in-order chain of entries; an entry stores its
//! precomputed `u64` hash alongside the key and value, so resizing
//! redistributes entries from the stored hashes and `K: Hash` is never
//! invoked again after insertion. The hasher is a pluggable
//! `BuildHasher` seam defaulting to the deterministic
//! [`Fnv1aBuildHasher`]; bucket indices are `hash % capacity` and thus
//! in range for every key. After any insertion the load factor
//! (`len / capacity`) is at most [`LOAD_FACTOR_THRESHOLD`]; crossing it
//! doubles the capacity.
//!
//! Absence is ordinary here: `get` on a missing key is `None`, `remove`
//! on a missing key is a no-op. Iteration order is bucket-then-chain and
//! implementation-defined; callers must not rely on it.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use crate::fnv::Fnv1aBuildHasher;

/// Bucket count used by [`ChainedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor above which an insertion doubles the bucket array.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

/// Hash table using separate chaining for collision resolution.
pub struct ChainedHashMap<K, V, S = Fnv1aBuildHasher> {
    hasher: S,
    buckets: Vec<Vec<Entry<K, V>>>,
    len: usize,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map with at least one bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Fnv1aBuildHasher)
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        let capacity = capacity.max(1);
        ChainedHashMap {
            hasher,
            buckets: (0..capacity).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    fn bucket_index(&self, hash: u64) -> usize {
        (hash % self.buckets.len() as u64) as usize
    }

    /// Inserts or updates. Returns the previous value when `key` was
    /// already present; `len` only grows (and resizing only triggers)
    /// for genuinely new keys.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        let index = self.bucket_index(hash);
        for entry in &mut self.buckets[index] {
            if entry.hash == hash && entry.key == key {
                return Some(core::mem::replace(&mut entry.value, value));
            }
        }

        self.buckets[index].push(Entry { key, value, hash });
        self.len += 1;
        if self.load_factor() > LOAD_FACTOR_THRESHOLD {
            self.resize();
        }
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        self.buckets[self.bucket_index(hash)]
            .iter()
            .find(|entry| entry.hash == hash && entry.key.borrow() == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.hash == hash && entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value; no-op when absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let index = self.bucket_index(hash);
        let bucket = &mut self.buckets[index];
        let position = bucket
            .iter()
            .position(|entry| entry.hash == hash && entry.key.borrow() == key)?;
        // Vec::remove keeps the rest of the chain in order.
        let entry = bucket.remove(position);
        self.len -= 1;
        Some(entry.value)
    }

    /// Empties every bucket; capacity is retained.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Doubles the bucket array and redistributes entries using their
    /// stored hashes. Bucket indices depend on capacity, so every entry
    /// must move to its freshly computed slot.
    fn resize(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let old_buckets = core::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| Vec::new()).collect(),
        );
        for bucket in old_buckets {
            for entry in bucket {
                let index = self.bucket_index(entry.hash);
                self.buckets[index].push(entry);
            }
        }
    }

    /// Entries in bucket-then-chain order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            outer: self.buckets.iter(),
            inner: [].iter(),
            remaining: self.len,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Bucket occupancy diagnostics. Purely observational: a degenerate
    /// hash shows up as a large `max_chain_len` long before lookups get
    /// measurably slow.
    pub fn collision_stats(&self) -> CollisionStats {
        let mut stats = CollisionStats {
            capacity: self.buckets.len(),
            len: self.len,
            load_factor: self.load_factor(),
            empty_buckets: 0,
            occupied_buckets: 0,
            colliding_buckets: 0,
            max_chain_len: 0,
            total_chain_len: 0,
        };
        for bucket in &self.buckets {
            if bucket.is_empty() {
                stats.empty_buckets += 1;
                continue;
            }
            stats.occupied_buckets += 1;
            stats.total_chain_len += bucket.len();
            if bucket.len() > 1 {
                stats.colliding_buckets += 1;
            }
            stats.max_chain_len = stats.max_chain_len.max(bucket.len());
        }
        stats
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Snapshot of bucket occupancy, from [`ChainedHashMap::collision_stats`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionStats {
    pub capacity: usize,
    pub len: usize,
    pub load_factor: f64,
    pub empty_buckets: usize,
    pub occupied_buckets: usize,
    pub colliding_buckets: usize,
    pub max_chain_len: usize,
    pub total_chain_len: usize,
}

/// Iterator over `(&K, &V)` entries in bucket-then-chain order.
pub struct Iter<'a, K, V> {
    outer: core::slice::Iter<'a, Vec<Entry<K, V>>>,
    inner: core::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.inner.next() {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.inner = self.outer.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// Iterator over keys, in the same order as [`Iter`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over values, in the same order as [`Iter`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::with_hasher(S::default());
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
