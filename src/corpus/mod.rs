pub mod digits;
pub mod handle;
pub mod suffix;

pub use digits::DigitStore;
pub use handle::{Corpus, DIGITS_EXT, INDEX_EXT};
pub use suffix::SuffixIndex;
