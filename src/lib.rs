//! # pidex — substring search over the digits of pi
//!
//! pidex serves substring-occurrence queries against a very large, fixed
//! corpus of decimal digits, backed by two on-disk artifacts produced
//! offline:
//!
//! - `<base>.4.bin` — the digits, packed two per byte (BCD, high nibble
//!   first)
//! - `<base>.4.idx` — a suffix index: every corpus offset as a 32-bit
//!   little-endian integer, sorted by the lexicographic order of the digit
//!   suffix starting there
//!
//! Both files are memory-mapped read-only, so queries are pure lookups
//! with no locking; a [`Corpus`] handle can be shared across threads.
//!
//! ## Architecture
//!
//! - [`corpus`] - The mapped artifacts ([`corpus::DigitStore`],
//!   [`corpus::SuffixIndex`]) and the [`Corpus`] lifecycle handle
//! - [`query`] - The search engine: strategy dispatch, sequential scans,
//!   suffix-index binary search
//! - [`utils`] - Packed-decimal codec shared by the store, the CLI
//!   converters, and test fixtures
//!
//! ## Quick Start
//!
//! ```ignore
//! use pidex::Corpus;
//!
//! let pi = Corpus::open("/data/pi200")?;
//! let hit = pi.search(0, "1415")?;
//! if hit.found {
//!     println!(
//!         "found at {} ({} occurrences): ...{}",
//!         hit.position,
//!         hit.match_count,
//!         pi.digit_range(hit.position, 20),
//!     );
//! }
//! pi.close();
//! ```
//!
//! ## Strategy
//!
//! Short queries are located by sequential scanning — with uniformly
//! distributed digits a 2-digit key matches every ~100 positions, so the
//! scan ends almost immediately. Long queries binary-search the suffix
//! index in O(|key| log n). The crossover is
//! [`query::DEFAULT_SEQ_THRESHOLD`] and can be tuned per handle via
//! [`query::SearchConfig`]. Occurrence counts always come from the index,
//! whichever strategy located the position.

pub mod corpus;
pub mod error;
pub mod query;
pub mod utils;

pub use corpus::Corpus;
pub use error::{PidexError, Result};
pub use query::{SearchConfig, SearchResult};

#[cfg(test)]
mod testutil;
