//! Corpus lifecycle
//!
//! A corpus is a pair of sibling files sharing a base name: the packed
//! digit store and the precomputed suffix index. The handle opens and maps
//! both atomically, exposes the query surface, and releases everything on
//! close.

use crate::corpus::digits::DigitStore;
use crate::corpus::suffix::SuffixIndex;
use crate::error::Result;
use crate::query::engine::{SearchConfig, SearchEngine, SearchResult};
use std::path::{Path, PathBuf};

/// File suffix of the packed digit store.
pub const DIGITS_EXT: &str = ".4.bin";
/// File suffix of the suffix index.
pub const INDEX_EXT: &str = ".4.idx";

/// An opened corpus: both artifacts mapped and validated against each
/// other.
///
/// Every query operation takes `&self` and reads only the immutable maps,
/// so a handle can be shared across threads freely. Closing requires
/// ownership, which is exactly the exclusivity the teardown needs.
#[derive(Debug)]
pub struct Corpus {
    digits: DigitStore,
    index: SuffixIndex,
    config: SearchConfig,
}

impl Corpus {
    /// Open `<base>.4.bin` and `<base>.4.idx` with the default search
    /// configuration.
    pub fn open(base: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(base, SearchConfig::default())
    }

    /// Open a corpus with an explicit search configuration.
    ///
    /// Acquisition is all-or-nothing: if the index fails to open or does
    /// not match the digit store, the already-mapped digit store is
    /// released on the way out.
    pub fn open_with_config(base: impl AsRef<Path>, config: SearchConfig) -> Result<Self> {
        let base = base.as_ref();
        let digits = DigitStore::open(artifact_path(base, DIGITS_EXT))?;
        let index = SuffixIndex::open(artifact_path(base, INDEX_EXT), digits.digit_count())?;
        Ok(Self {
            digits,
            index,
            config,
        })
    }

    /// Total number of decimal digits in the corpus.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.digit_count()
    }

    /// The search configuration this handle was opened with.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The underlying digit store.
    pub fn digits(&self) -> &DigitStore {
        &self.digits
    }

    /// The underlying suffix index.
    pub fn index(&self) -> &SuffixIndex {
        &self.index
    }

    /// A search engine borrowing this handle's store and index.
    pub fn engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.digits, &self.index, self.config)
    }

    /// Find the first occurrence of `query` at or after `start`.
    pub fn search(&self, start: usize, query: &str) -> Result<SearchResult> {
        self.engine().search(start, query)
    }

    /// Corpus-wide occurrence count for `query`.
    pub fn count(&self, query: &str) -> Result<usize> {
        self.engine().count(query)
    }

    /// ASCII digits starting at `start`, clamped as the digit store
    /// clamps.
    pub fn digit_range(&self, start: usize, length: usize) -> String {
        self.digits.digit_range(start, length)
    }

    /// Unmap both buffers and close the underlying files.
    ///
    /// Consuming the handle makes use-after-close a compile error instead
    /// of a caller contract. Dropping the handle is equivalent; `close`
    /// exists so the teardown point reads explicitly at call sites.
    pub fn close(self) {}
}

/// `<base>` + extension, appended to the final path component as-is.
fn artifact_path(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(ext);
    PathBuf::from(name)
}
