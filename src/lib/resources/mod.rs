//! Module handling the resources used for filling image macros.

mod filesystem;
mod fonts;
mod templates;


pub use self::filesystem::{BytesLoader, FileLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader, FILE_EXTENSIONS as FONT_FILE_EXTENSIONS};
pub use self::templates::{format_for_path, Template, TemplateError, TemplateLoader,
                          DEFAULT_IMAGE_FORMAT, IMAGE_FORMAT_EXTENSIONS};


use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::util::cache::ResourceCache;


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err: Error + 'static;

    /// Load a resource of given name.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err>;
}


/// A loader that keeps a cache of resources previously loaded.
pub struct CachingLoader<L: Loader> {
    inner: L,
    cache: ResourceCache<String, L::Item>,
    phony: bool,
}

impl<L: Loader> CachingLoader<L> {
    #[inline]
    pub fn new(inner: L, capacity: usize) -> Self {
        CachingLoader{inner, cache: ResourceCache::new(capacity), phony: false}
    }

    /// Create a phony version of CachingLoader that doesn't actually cache anything.
    ///
    /// It still hands out shared references, so that the cached and uncached
    /// loaders can be used interchangeably.
    #[inline]
    pub fn phony(inner: L) -> Self {
        CachingLoader{inner, cache: ResourceCache::new(1), phony: true}
    }
}

impl<L: Loader> CachingLoader<L> {
    #[inline]
    pub fn cache(&self) -> &ResourceCache<String, L::Item> {
        &self.cache
    }

    #[inline]
    pub fn is_phony(&self) -> bool {
        self.phony
    }

    #[inline]
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Loader> Loader for CachingLoader<L> {
    type Item = Rc<L::Item>;
    type Err = L::Err;

    /// Load the object from cache or fall back on the original Loader.
    /// Cache the objects loaded this way.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        if self.phony {
            return self.inner.load(name).map(Rc::new);
        }
        if let Some(obj) = self.cache.get(name) {
            trace!("Cache hit for resource `{}`", name);
            return Ok(obj);
        }
        let obj = self.inner.load(name)?;
        Ok(self.cache.put(name.to_owned(), obj))
    }
}

impl<L: Loader> fmt::Debug for CachingLoader<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CachingLoader")
            .field("inner", &"...")
            .field("cache", &self.cache)
            .field("phony", &self.phony)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io;
    use std::rc::Rc;
    use super::{CachingLoader, Loader};

    /// Loader that counts how many times it was asked for something.
    #[derive(Default)]
    struct CountingLoader {
        calls: Cell<usize>,
    }
    impl Loader for CountingLoader {
        type Item = String;
        type Err = io::Error;
        fn load(&self, name: &str) -> Result<String, io::Error> {
            self.calls.set(self.calls.get() + 1);
            if name.is_empty() {
                return Err(io::Error::new(io::ErrorKind::NotFound, "empty name"));
            }
            Ok(name.to_uppercase())
        }
    }

    #[test]
    fn caches_loaded_items() {
        let loader = CachingLoader::new(CountingLoader::default(), 4);
        let first = loader.load("foo").unwrap();
        let second = loader.load("foo").unwrap();
        assert_eq!("FOO", *first);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(1, loader.inner().calls.get());
        assert_eq!(1, loader.cache().hits());
        assert_eq!(1, loader.cache().misses());
    }

    #[test]
    fn errors_are_not_cached() {
        let loader = CachingLoader::new(CountingLoader::default(), 4);
        assert!(loader.load("").is_err());
        assert!(loader.load("").is_err());
        assert_eq!(2, loader.inner().calls.get());
        assert!(loader.cache().is_empty());
    }

    #[test]
    fn phony_always_loads() {
        let loader = CachingLoader::phony(CountingLoader::default());
        assert!(loader.is_phony());
        loader.load("foo").unwrap();
        loader.load("foo").unwrap();
        assert_eq!(2, loader.inner().calls.get());
        assert!(loader.cache().is_empty());
    }
}
