pub mod engine;

pub use engine::{DEFAULT_SEQ_THRESHOLD, SearchConfig, SearchEngine, SearchResult};
