//! Shared on-disk fixtures for unit tests.

use crate::utils::encoding::{pack_digits, write_u32_le};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a digit-store/suffix-index pair for `ascii` under `dir` and return
/// the base path (`<dir>/pi`).
///
/// The digit string must have even length so the packed file encodes
/// exactly those digits. The index is built the way the offline builder
/// builds it: every offset, sorted by the lexicographic order of the suffix
/// starting there, with a truncated suffix ordering below any longer run it
/// prefixes.
pub(crate) fn write_corpus(dir: &Path, ascii: &str) -> PathBuf {
    assert!(
        ascii.len() % 2 == 0,
        "fixture digit strings must have even length"
    );
    let base = dir.join("pi");

    let packed = pack_digits(ascii.as_bytes()).unwrap();
    fs::write(artifact(&base, ".4.bin"), &packed).unwrap();

    let digits: Vec<u8> = ascii.bytes().map(|c| c - b'0').collect();
    let mut order: Vec<u32> = (0..digits.len() as u32).collect();
    order.sort_by(|&a, &b| digits[a as usize..].cmp(&digits[b as usize..]));

    let mut bytes = Vec::with_capacity(order.len() * 4);
    for off in order {
        write_u32_le(&mut bytes, off).unwrap();
    }
    fs::write(artifact(&base, ".4.idx"), &bytes).unwrap();

    base
}

fn artifact(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(ext);
    PathBuf::from(name)
}
