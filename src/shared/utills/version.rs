//! Dot-separated version comparison for release listings.

use std::cmp::Ordering;

/// Compare two dot-separated version strings segment by segment.
///
/// A leading `v` is ignored. Missing segments count as zero, as do
/// segments that do not start with a number, so `1.2` equals `1.2.0` and
/// `2.0.0-rc1` compares like `2.0.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn segments(version: &str) -> Vec<u64> {
    let version = version.trim();
    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);

    version.split('.').map(leading_number).collect()
}

fn leading_number(segment: &str) -> u64 {
    let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
