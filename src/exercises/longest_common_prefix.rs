//! Longest common prefix of a set of strings.
//!
//! The result is always a prefix slice of the *first* string: the scan
//! walks character columns left to right and stops at the first column
//! where any other string disagrees or runs out. No normalization and no
//! case folding; comparison is exact `char` equality.

/// Return the longest string that is a leading substring of every string
/// in `strings`.
///
/// An empty input yields `""`. Slicing is done on `char` boundaries of the
/// first string, so multi-byte input is safe.
pub fn longest_common_prefix<'a>(strings: &[&'a str]) -> &'a str {
    let Some((&first, rest)) = strings.split_first() else {
        return "";
    };

    let mut others: Vec<_> = rest.iter().map(|s| s.chars()).collect();
    for (pos, ch) in first.char_indices() {
        for other in &mut others {
            match other.next() {
                Some(c) if c == ch => {}
                _ => return &first[..pos],
            }
        }
    }
    first
}
