//! Query engine
//!
//! Turns a digit query and a start offset into the first occurrence at or
//! after that offset plus a corpus-wide occurrence count. Short queries
//! locate their position by sequential scanning (matches are dense, the
//! scan ends quickly); long queries binary-search the suffix index. The
//! occurrence count always comes from the index, whichever strategy found
//! the position.

use crate::corpus::digits::DigitStore;
use crate::corpus::suffix::SuffixIndex;
use crate::error::Result;
use crate::utils::encoding::digit_value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default query-length threshold for switching from sequential scanning
/// to the suffix index. Both 4 and 6 have been run in production.
pub const DEFAULT_SEQ_THRESHOLD: usize = 4;

/// Tunables for a search engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Queries longer than this locate their position through the suffix
    /// index; shorter ones scan sequentially.
    pub seq_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seq_threshold: DEFAULT_SEQ_THRESHOLD,
        }
    }
}

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchResult {
    /// Whether an occurrence at or after the start offset exists.
    pub found: bool,
    /// Offset of the first occurrence at or after the start offset; zero
    /// when nothing was found.
    pub position: usize,
    /// Occurrences across the whole corpus, regardless of start offset.
    pub match_count: usize,
}

impl SearchResult {
    const NONE: Self = Self {
        found: false,
        position: 0,
        match_count: 0,
    };
}

/// Read-only search over a digit store and its suffix index.
pub struct SearchEngine<'a> {
    digits: &'a DigitStore,
    index: &'a SuffixIndex,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(digits: &'a DigitStore, index: &'a SuffixIndex, config: SearchConfig) -> Self {
        Self {
            digits,
            index,
            config,
        }
    }

    /// Find the first occurrence of `query` at or after `start`.
    ///
    /// The returned `match_count` counts occurrences over the whole corpus
    /// even when every one of them lies before `start` and `found` is
    /// false; the position search is restricted, the count never is.
    pub fn search(&self, start: usize, query: &str) -> Result<SearchResult> {
        if query.is_empty() {
            return Ok(SearchResult::NONE);
        }
        let key = query_to_digits(query)?;

        if key.len() > self.config.seq_threshold {
            return Ok(self.indexed_search(start, &key));
        }

        let match_count = self.index.count(self.digits, &key);
        let hit = if key.len() <= 2 {
            self.scan_digits(start, &key)
        } else {
            self.scan_packed(start, &key)
        };
        Ok(match hit {
            Some(position) => SearchResult {
                found: true,
                position,
                match_count,
            },
            None => SearchResult {
                found: false,
                position: 0,
                match_count,
            },
        })
    }

    /// Corpus-wide occurrence count for `query`, independent of any start
    /// offset and of the length threshold.
    pub fn count(&self, query: &str) -> Result<usize> {
        let key = query_to_digits(query)?;
        Ok(self.index.count(self.digits, &key))
    }

    /// Per-digit sequential scan. Reference strategy: works for any key
    /// length, used for dispatch at lengths 1 and 2.
    ///
    /// Candidates run over `start..digit_count - key_len`; the exclusive
    /// bound means the final alignment is never matched sequentially,
    /// matching the behavior every deployed corpus was serving.
    fn scan_digits(&self, start: usize, key: &[u8]) -> Option<usize> {
        let max_pos = self.digits.digit_count().saturating_sub(key.len());
        (start..max_pos).find(|&pos| self.digits.compare_suffix(pos, key) == Ordering::Equal)
    }

    /// Byte-packed sequential scan for keys of three or more digits.
    ///
    /// Packs two consecutive key digits into one comparison byte and steps
    /// two positions per iteration, covering both alignments with a single
    /// pair of byte reads; the full comparator only runs when a packed
    /// pre-check hits. Returns exactly what [`Self::scan_digits`] returns,
    /// only faster.
    fn scan_packed(&self, start: usize, key: &[u8]) -> Option<usize> {
        debug_assert!(key.len() >= 3);
        let bytes = self.digits.packed_bytes();
        let max_pos = self.digits.digit_count().saturating_sub(key.len());
        // Key digits 0,1 as seen in one byte at an even candidate; key
        // digits 1,2 as seen one byte past an odd candidate.
        let even_pair = (key[0] << 4) | key[1];
        let odd_pair = (key[1] << 4) | key[2];

        let mut pos = start;
        if pos & 1 == 0 {
            if pos >= max_pos {
                return None;
            }
            let b = bytes[pos / 2];
            if b == even_pair && self.digits.compare_suffix(pos, key) == Ordering::Equal {
                return Some(pos);
            }
            pos += 1;
        }

        while pos < max_pos {
            let b = bytes[(pos + 1) / 2];
            if b == odd_pair && self.digits.compare_suffix(pos, key) == Ordering::Equal {
                return Some(pos);
            }
            if b == even_pair
                && pos + 1 < max_pos
                && self.digits.compare_suffix(pos + 1, key) == Ordering::Equal
            {
                return Some(pos + 1);
            }
            pos += 2;
        }

        None
    }

    /// Indexed strategy: binary-search the matching interval, then pick the
    /// smallest offset at or after `start` out of it.
    fn indexed_search(&self, start: usize, key: &[u8]) -> SearchResult {
        let range = self.index.match_range(self.digits, key);
        let match_count = range.len();

        let best = range
            .map(|i| self.index.entry(i))
            .filter(|&pos| pos >= start)
            .min();

        match best {
            Some(position) => SearchResult {
                found: true,
                position,
                match_count,
            },
            None => SearchResult {
                found: false,
                position: 0,
                match_count,
            },
        }
    }
}

/// Convert an ASCII query into raw digit values, rejecting anything that
/// is not a decimal digit.
fn query_to_digits(query: &str) -> Result<Vec<u8>> {
    query.bytes().map(digit_value).collect()
}
