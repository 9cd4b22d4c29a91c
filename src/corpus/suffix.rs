//! Suffix index reader
//!
//! Memory-maps the `.4.idx` artifact: a raw array of 32-bit little-endian
//! offsets into the digit sequence, one entry per digit, sorted by the
//! lexicographic order of the suffix starting at each offset. The array is
//! produced offline and trusted as-is; this reader only binary-searches it.

use crate::corpus::digits::DigitStore;
use crate::error::{PidexError, Result};
use memmap2::Mmap;
use std::cmp::Ordering;
use std::fs::File;
use std::ops::Range;
use std::path::Path;

/// Width of one index entry in bytes.
pub const ENTRY_SIZE: usize = 4;

/// Read-only view of the precomputed suffix index.
#[derive(Debug)]
pub struct SuffixIndex {
    map: Mmap,
    entry_count: usize,
}

impl SuffixIndex {
    /// Open and map a suffix index file for a corpus of `digit_count`
    /// digits.
    ///
    /// The file must hold exactly one 4-byte entry per digit; anything else
    /// is reported as `IndexMismatch` here rather than surfacing as garbage
    /// offsets at query time.
    pub fn open(path: impl AsRef<Path>, digit_count: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PidexError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let map = unsafe { Mmap::map(&file) }.map_err(|source| PidexError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let expected = digit_count as u64 * ENTRY_SIZE as u64;
        if map.len() as u64 != expected {
            return Err(PidexError::IndexMismatch {
                expected,
                actual: map.len() as u64,
            });
        }

        Ok(Self {
            map,
            entry_count: digit_count,
        })
    }

    /// Number of entries, equal to the corpus digit count.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Entry `i` without the bounds check. Callers stay within
    /// `entry_count`.
    #[inline]
    pub(crate) fn entry(&self, i: usize) -> usize {
        let at = i * ENTRY_SIZE;
        u32::from_le_bytes(self.map[at..at + ENTRY_SIZE].try_into().unwrap()) as usize
    }

    /// Corpus offset stored at index position `i`.
    pub fn offset_at(&self, i: usize) -> Result<usize> {
        if i >= self.entry_count {
            return Err(PidexError::OutOfRange {
                pos: i,
                limit: self.entry_count,
            });
        }
        Ok(self.entry(i))
    }

    /// Contiguous interval `[lo, hi)` of index positions whose suffixes
    /// compare equal to `key`; empty when no suffix matches.
    pub fn match_range(&self, digits: &DigitStore, key: &[u8]) -> Range<usize> {
        if key.is_empty() || self.entry_count == 0 {
            return 0..0;
        }
        let lo = self.lower_bound(digits, key);
        let hi = self.upper_bound(digits, key, lo);
        lo..hi
    }

    /// First index whose suffix compares greater than or equal to `key`.
    fn lower_bound(&self, digits: &DigitStore, key: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.entry_count;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if digits.compare_suffix(self.entry(mid), key) == Ordering::Less {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// First index at or after `start` whose suffix no longer compares
    /// equal to `key`.
    fn upper_bound(&self, digits: &DigitStore, key: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.entry_count;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if digits.compare_suffix(self.entry(mid), key) == Ordering::Equal {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Number of suffixes matching `key` across the whole corpus.
    ///
    /// Always answered from the index: two binary searches are cheap at any
    /// key length.
    pub fn count(&self, digits: &DigitStore, key: &[u8]) -> usize {
        self.match_range(digits, key).len()
    }
}
