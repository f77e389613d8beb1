//! Module defining and implementing loaders of files from a directory.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use glob;

use super::Loader;


/// Resolves resource names to paths of files in a directory.
///
/// A name can either be a complete file name, or a file name without
/// its extension. In the latter case it must match exactly one file.
pub struct PathLoader {
    directory: PathBuf,
    predicate: Box<dyn Fn(&Path) -> bool>,
}

impl PathLoader {
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        Self::with_predicate(directory, |_| true)
    }

    /// Only resolve to files with one of given extensions (case-insensitive).
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        let allowed: Vec<String> = extensions.into_iter()
            .map(|e| e.to_string().to_lowercase())
            .collect();
        Self::with_predicate(directory, move |path| {
            match path.extension().and_then(|e| e.to_str()) {
                Some(ext) => allowed.contains(&ext.to_lowercase()),
                None => false,
            }
        })
    }

    pub fn with_predicate<D, P>(directory: D, predicate: P) -> Self
        where D: AsRef<Path>, P: Fn(&Path) -> bool + 'static
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            predicate: Box::new(predicate),
        }
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Loader for PathLoader {
    type Item = PathBuf;
    type Err = io::Error;

    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        // Names with an extension can refer to the file directly.
        let exact = self.directory.join(name);
        if exact.is_file() && (self.predicate)(&exact) {
            trace!("Resource `{}` found at {}", name, exact.display());
            return Ok(exact);
        }

        // Otherwise try the name as a stem with any extension.
        let pattern = Path::new(&glob::Pattern::escape(&self.directory.to_string_lossy()))
            .join(format!("{}.*", glob::Pattern::escape(name)))
            .to_string_lossy().into_owned();
        trace!("Looking for resource `{}` with pattern {}", name, pattern);

        let candidates = glob::glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut found = vec![];
        for entry in candidates {
            match entry {
                Ok(path) => if path.is_file() && (self.predicate)(&path) {
                    found.push(path);
                },
                Err(e) => warn!("Cannot check a candidate for resource `{}`: {}", name, e),
            }
        }

        if found.len() > 1 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, format!(
                "resource name `{}` is ambiguous ({} matching files in {})",
                name, found.len(), self.directory.display())));
        }
        found.pop().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!(
            "no resource `{}` in {}", name, self.directory.display())))
    }
}

impl fmt::Debug for PathLoader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .finish()
    }
}


/// Opens the files that a `PathLoader` resolves to.
#[derive(Debug)]
pub struct FileLoader {
    inner: PathLoader,
}

impl FileLoader {
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        FileLoader{inner: PathLoader::new(directory)}
    }

    #[inline]
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        FileLoader{inner: PathLoader::for_extensions(directory, extensions)}
    }
}

impl Loader for FileLoader {
    type Item = File;
    type Err = io::Error;

    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        File::open(self.inner.load(name)?)
    }
}


/// Reads whole files opened by a `FileLoader`.
#[derive(Debug)]
pub struct BytesLoader {
    inner: FileLoader,
}

impl BytesLoader {
    #[inline]
    pub fn new(inner: FileLoader) -> Self {
        BytesLoader{inner}
    }
}
impl From<FileLoader> for BytesLoader {
    fn from(input: FileLoader) -> Self {
        Self::new(input)
    }
}

impl Loader for BytesLoader {
    type Item = Vec<u8>;
    type Err = io::Error;

    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        let mut file = self.inner.load(name)?;
        let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);
        let mut bytes = Vec::with_capacity(size);
        file.read_to_end(&mut bytes)?;
        trace!("Read {} byte(s) of resource `{}`", bytes.len(), name);
        Ok(bytes)
    }
}


#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;
    use std::process;

    use speculoos::prelude::*;
    use super::{BytesLoader, FileLoader, PathLoader};
    use super::super::Loader;

    /// Create a fresh directory with given (empty) files in it.
    fn scratch_dir(test: &str, files: &[&str]) -> PathBuf {
        let dir = env::temp_dir()
            .join(format!("macrofill-{}-{}", test, process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for f in files {
            fs::write(dir.join(f), f.as_bytes()).unwrap();
        }
        dir
    }

    #[test]
    fn finds_by_stem_or_full_name() {
        let dir = scratch_dir("stem", &["drake.jpg", "doge.png"]);
        let loader = PathLoader::new(&dir);
        assert_that!(loader.load("drake")).is_ok().is_equal_to(dir.join("drake.jpg"));
        assert_that!(loader.load("doge.png")).is_ok().is_equal_to(dir.join("doge.png"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_and_ambiguous() {
        let dir = scratch_dir("ambiguous", &["cat.jpg", "cat.png"]);
        let loader = PathLoader::new(&dir);
        let missing = loader.load("dog").unwrap_err();
        assert_eq!(ErrorKind::NotFound, missing.kind());
        let ambiguous = loader.load("cat").unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, ambiguous.kind());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn extensions_filter() {
        let dir = scratch_dir("ext", &["cat.jpg", "cat.txt", "notes.txt"]);
        let loader = PathLoader::for_extensions(&dir, &["png", "JPG"]);
        assert_that!(loader.load("cat")).is_ok().is_equal_to(dir.join("cat.jpg"));
        assert_that!(loader.load("notes")).is_err();
        assert_that!(loader.load("notes.txt")).is_err();
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn bytes_are_read() {
        let dir = scratch_dir("bytes", &["hello.txt"]);
        let loader = BytesLoader::new(FileLoader::new(&dir));
        assert_that!(loader.load("hello")).is_ok().is_equal_to(b"hello.txt".to_vec());
        let _ = fs::remove_dir_all(&dir);
    }
}
