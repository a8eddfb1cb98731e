//! Separate-chaining hash table keyed by [`Scalar`].
//!
//! # Architecture
//! - **Buckets**: boxed slice of chain heads, length always a power of two.
//! - **Nodes**: singly linked list per bucket, new keys pushed at the head.
//! - **Hashing**: each node caches its full hash, so lookups compare the
//!   integer first and growth never rehashes keys.
//! - **Growth**: the bucket array doubles once the load factor is exceeded,
//!   up to `MAX_BUCKETS`; past that, chains just get longer.

use crate::config::{MapConfig, MAX_BUCKETS};
use crate::error::MapError;
use crate::scalar::Scalar;
use core::fmt;
use core::hash::BuildHasher;
use core::mem;
use foldhash::fast::FixedState;

/// Node in a bucket chain.
/// Layout optimized for scanning: `hash` and `key` are checked first.
struct Node {
    hash: u64,
    key: Scalar,
    value: Scalar,
    next: Option<Box<Node>>,
}

type Link = Option<Box<Node>>;

fn empty_buckets(count: usize) -> Box<[Link]> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, || None);
    buckets.into_boxed_slice()
}

/// Unlinks a chain node by node so long chains do not recurse on drop.
fn drop_chain(mut link: Link) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

/// Hash map from [`Scalar`] keys to [`Scalar`] values
///
/// Single-threaded: mutation needs `&mut self`, and callers sharing a map
/// across threads must wrap it in their own lock.
///
/// # Type Parameters
///
/// - `S`: Hash builder fed with each key's fingerprint (defaults to
///   foldhash's `FixedState`)
///
/// # Examples
///
/// ```
/// use scalar_map::{Scalar, ScalarMap};
///
/// let mut map = ScalarMap::new();
/// map.insert(Scalar::from("a"), Scalar::Integer(1));
/// map.insert(Scalar::Float(1.0), Scalar::from("one"));
///
/// assert_eq!(map.get(&Scalar::from("a")), Some(&Scalar::Integer(1)));
/// assert_eq!(map.get(&Scalar::Integer(1)), None);
/// assert_eq!(map.len(), 2);
/// ```
pub struct ScalarMap<S = FixedState> {
    buckets: Box<[Link]>,
    mask: usize,
    count: usize,
    max_load_factor: f64,
    hasher: S,
}

impl ScalarMap<FixedState> {
    /// Creates a new empty map with the default bucket count
    pub fn new() -> Self {
        Self::with_hasher(FixedState::default())
    }

    /// Creates a new map with at least `buckets` buckets
    ///
    /// The capacity is the number of buckets, not the number of elements.
    /// It is rounded up to the next power of two and capped at
    /// [`MAX_BUCKETS`](crate::MAX_BUCKETS).
    pub fn with_capacity(buckets: usize) -> Self {
        Self::with_capacity_and_hasher(buckets, FixedState::default())
    }
}

impl<S: BuildHasher> ScalarMap<S> {
    /// Creates a new map with default sizing and the given hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self::from_parts(MapConfig::new(), hasher)
    }

    /// Creates a new map with at least `buckets` buckets and the given hasher
    pub fn with_capacity_and_hasher(buckets: usize, hasher: S) -> Self {
        Self::from_parts(MapConfig::new().initial_buckets(buckets), hasher)
    }

    /// Creates a new map from a validated configuration and the given hasher
    pub fn with_config_and_hasher(config: MapConfig, hasher: S) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    pub(crate) fn from_parts(config: MapConfig, hasher: S) -> Self {
        let capacity = config.bucket_count();
        Self {
            buckets: empty_buckets(capacity),
            mask: capacity - 1,
            count: 0,
            max_load_factor: config.max_load_factor,
            hasher,
        }
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns a reference to the map's hash builder
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    #[inline(always)]
    fn bucket_index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Inserts a key-value pair
    ///
    /// If the key already exists its value is replaced and the old value is
    /// returned. The stored key is kept as it was.
    pub fn insert(&mut self, key: Scalar, value: Scalar) -> Option<Scalar> {
        let hash = self.hasher.hash_one(&key);
        let idx = self.bucket_index(hash);

        let mut current = self.buckets[idx].as_deref_mut();
        while let Some(node) = current {
            if node.hash == hash && node.key == key {
                return Some(mem::replace(&mut node.value, value));
            }
            current = node.next.as_deref_mut();
        }

        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(Node {
            hash,
            key,
            value,
            next: head,
        }));
        self.count += 1;

        if self.count as f64 > self.buckets.len() as f64 * self.max_load_factor
            && self.buckets.len() < MAX_BUCKETS
        {
            self.grow();
        }
        None
    }

    /// Gets the value associated with a key
    pub fn get(&self, key: &Scalar) -> Option<&Scalar> {
        let hash = self.hasher.hash_one(key);
        let mut current = self.buckets[self.bucket_index(hash)].as_deref();

        while let Some(node) = current {
            // Check hash first (integer compare is fast)
            if node.hash == hash && node.key == *key {
                return Some(&node.value);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Returns true if the map contains the key
    pub fn contains_key(&self, key: &Scalar) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key from the map, returning its value if it existed
    pub fn remove(&mut self, key: &Scalar) -> Option<Scalar> {
        let hash = self.hasher.hash_one(key);
        let idx = self.bucket_index(hash);

        let mut link = &mut self.buckets[idx];
        while link
            .as_ref()
            .is_some_and(|node| !(node.hash == hash && node.key == *key))
        {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.count -= 1;
        Some(node.value)
    }

    /// Clears the map, removing all entries
    ///
    /// The bucket array keeps its current size.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
        self.count = 0;
    }

    /// Doubles the bucket array and relinks every node by its cached hash
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mask = new_capacity - 1;
        let mut buckets = empty_buckets(new_capacity);

        for bucket in self.buckets.iter_mut() {
            let mut current = bucket.take();
            while let Some(mut node) = current {
                current = node.next.take();
                let idx = (node.hash as usize) & mask;
                node.next = buckets[idx].take();
                buckets[idx] = Some(node);
            }
        }

        log::debug!(
            "scalar map grew from {} to {} buckets at {} entries",
            self.buckets.len(),
            new_capacity,
            self.count
        );
        self.buckets = buckets;
        self.mask = mask;
    }

    /// Upserts `keys[i] -> values[i]` for every index, left to right
    ///
    /// Both sequences must have the same length. A mismatch is rejected
    /// before anything is inserted.
    pub fn insert_batch(&mut self, keys: Vec<Scalar>, values: Vec<Scalar>) -> Result<(), MapError> {
        if keys.len() != values.len() {
            log::debug!(
                "rejected batch insert of {} keys and {} values",
                keys.len(),
                values.len()
            );
            return Err(MapError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        for (key, value) in keys.into_iter().zip(values) {
            self.insert(key, value);
        }
        Ok(())
    }

    /// Looks up every key, in order, returning `None` for absent keys
    pub fn get_batch(&self, keys: &[Scalar]) -> Vec<Option<Scalar>> {
        keys.iter().map(|key| self.get(key).cloned()).collect()
    }

    /// Removes every key that is present, returning how many were removed
    pub fn remove_batch(&mut self, keys: &[Scalar]) -> usize {
        keys.iter().filter(|key| self.remove(key).is_some()).count()
    }
}

impl<S> ScalarMap<S> {
    /// Iterates over entries in bucket order
    ///
    /// The order is stable for as long as the map is not mutated.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.count,
        }
    }

    /// Iterates over keys in the same order as [`iter`](Self::iter)
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }

    /// Iterates over values in the same order as [`iter`](Self::iter)
    pub fn values(&self) -> Values<'_> {
        Values { inner: self.iter() }
    }
}

impl<S> Drop for ScalarMap<S> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
    }
}

impl Default for ScalarMap<FixedState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for ScalarMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S: BuildHasher> Extend<(Scalar, Scalar)> for ScalarMap<S> {
    fn extend<T: IntoIterator<Item = (Scalar, Scalar)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(Scalar, Scalar)> for ScalarMap<FixedState> {
    fn from_iter<T: IntoIterator<Item = (Scalar, Scalar)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, S> IntoIterator for &'a ScalarMap<S> {
    type Item = (&'a Scalar, &'a Scalar);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the entries of a [`ScalarMap`]
pub struct Iter<'a> {
    buckets: core::slice::Iter<'a, Link>,
    current: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Scalar, &'a Scalar);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_deref();
                self.remaining -= 1;
                return Some((&node.key, &node.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Iterator over the keys of a [`ScalarMap`]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<&'a Scalar> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

/// Iterator over the values of a [`ScalarMap`]
pub struct Values<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Scalar;

    fn next(&mut self) -> Option<&'a Scalar> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Values<'_> {}
