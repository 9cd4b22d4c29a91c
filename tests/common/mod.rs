//! Shared fixtures for the integration suite.

use pidex::utils::encoding::{pack_digits, write_u32_le};
use std::fs;
use std::path::{Path, PathBuf};

/// First 100 digits of pi after the decimal point.
pub const PI_100: &str = "1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Write a digit-store/suffix-index pair for `ascii` under `dir` and
/// return the base path. The index is built the way the offline builder
/// builds it: every offset, sorted by the suffix starting there.
pub fn write_corpus(dir: &Path, ascii: &str) -> PathBuf {
    assert!(
        ascii.len() % 2 == 0,
        "fixture digit strings must have even length"
    );
    let base = dir.join("pi");

    let packed = pack_digits(ascii.as_bytes()).unwrap();
    fs::write(dir.join("pi.4.bin"), &packed).unwrap();

    let digits: Vec<u8> = ascii.bytes().map(|c| c - b'0').collect();
    let mut order: Vec<u32> = (0..digits.len() as u32).collect();
    order.sort_by(|&a, &b| digits[a as usize..].cmp(&digits[b as usize..]));

    let mut bytes = Vec::with_capacity(order.len() * 4);
    for off in order {
        write_u32_le(&mut bytes, off).unwrap();
    }
    fs::write(dir.join("pi.4.idx"), &bytes).unwrap();

    base
}
