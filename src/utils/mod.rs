pub mod encoding;

pub use encoding::*;
