//! Telephone-keypad letter combinations.
//!
//! Each digit `2..=9` maps to a fixed group of letters. A digit string of
//! length `m` expands to every `m`-length string formed by picking one
//! letter per position, generated by depth-first backtracking so the output
//! follows digit order and keypad letter order. Since every group is itself
//! sorted, the output is lexicographically sorted.
//!
//! Digits `0` and `1` carry no letters and are rejected, as is any
//! non-digit character.

use thiserror::Error;

/// Letter groups for digits `2..=9`, indexed by `digit - '2'`.
const KEYPAD: [&str; 8] = ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// Rejection of a character with no keypad letter group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    #[error("character '{0}' has no letters on the keypad")]
    UnsupportedDigit(char),
}

/// Look up the letter group for a single keypad digit.
pub fn letters_for(digit: char) -> Result<&'static str, KeypadError> {
    match digit {
        '2'..='9' => Ok(KEYPAD[digit as usize - '2' as usize]),
        other => Err(KeypadError::UnsupportedDigit(other)),
    }
}

/// Produce every letter string spelled by `digits` on a telephone keypad.
///
/// The empty digit string yields an empty vector, not a vector holding the
/// empty string. The result count is the product of the group sizes, and
/// the order is lexicographic in the keypad mapping.
pub fn letter_combinations(digits: &str) -> Result<Vec<String>, KeypadError> {
    if digits.is_empty() {
        return Ok(Vec::new());
    }

    let groups: Vec<&'static str> = digits
        .chars()
        .map(letters_for)
        .collect::<Result<_, _>>()?;

    let mut combos = Vec::with_capacity(groups.iter().map(|g| g.len()).product());
    let mut path = String::with_capacity(groups.len());
    extend(&groups, 0, &mut path, &mut combos);
    Ok(combos)
}

/// Depth-first expansion: try each letter of `groups[depth]`, recurse, and
/// undo the choice before moving on. `path` holds the letters chosen so
/// far; a full-length path is one output.
fn extend(groups: &[&str], depth: usize, path: &mut String, combos: &mut Vec<String>) {
    if depth == groups.len() {
        combos.push(path.clone());
        return;
    }
    for ch in groups[depth].chars() {
        path.push(ch);
        extend(groups, depth + 1, path, combos);
        path.pop();
    }
}
