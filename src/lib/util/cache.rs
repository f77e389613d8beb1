//! Module implementing an LRU cache of loaded resources.

use std::borrow::Borrow;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use lru_cache::LruCache;


/// Cache of keys & shared values, evicting the least recently used ones.
/// Actual values stored in the cache are `Rc<V>`'s.
///
/// This is a wrapper around `LruCache` that also counts cache hits & misses.
/// It's meant to be owned by a single engine, so it isn't thread-safe.
pub struct ResourceCache<K: Eq + Hash, V> {
    inner: RefCell<LruCache<K, Rc<V>>>,
    // Cache statistics.
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<K: Eq + Hash, V> ResourceCache<K, V> {
    /// Create the cache with given capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        ResourceCache{
            inner: RefCell::new(LruCache::new(capacity)),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }
}

impl<K: Eq + Hash, V> ResourceCache<K, V> {
    /// Check if the cache contains given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        self.inner.borrow_mut().contains_key(key)
    }

    /// Get the element corresponding to given key if it's present in the cache.
    pub fn get<Q>(&self, key: &Q) -> Option<Rc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        let found = self.inner.borrow_mut().get_mut(key).map(|v| v.clone());
        match found {
            Some(_) => self.hits.set(self.hits.get() + 1),
            None => self.misses.set(self.misses.get() + 1),
        }
        found
    }

    /// Put an item into cache under given key.
    ///
    /// Returns the shared value that's now in the cache.
    pub fn put(&self, k: K, v: V) -> Rc<V> {
        let value = Rc::new(v);
        self.inner.borrow_mut().insert(k, value.clone());
        value
    }

    /// Cache capacity.
    pub fn capacity(&self) -> usize {
        self.inner.borrow().capacity()
    }

    /// Current size of the cache.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Remove all elements from the cache.
    pub fn clear(&self) {
        self.inner.borrow_mut().clear()
    }
}

impl<K: Eq + Hash, V> ResourceCache<K, V> {
    /// Returns the number of cache hits.
    #[inline]
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Returns the number of cache misses.
    #[inline]
    pub fn misses(&self) -> usize {
        self.misses.get()
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ResourceCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("ResourceCache");
        if let Ok(inner) = self.inner.try_borrow() {
            ds.field("capacity", &inner.capacity());
            ds.field("len", &inner.len());
        }
        ds.field("hits", &self.hits());
        ds.field("misses", &self.misses());
        ds.finish()
    }
}
