//! Line-oriented text harness for the exercise catalog.
//!
//! Each exercise reads a small textual input format and writes one
//! formatted result per case. The formats are test scaffolding rather than
//! a designed protocol; [`Drill`] is the seam between the driver binary
//! and the pure functions in [`crate::exercises`].
//!
//! Input formats:
//! - `find-lucky`: an integer count `n`, then `n` integers, separated by
//!   any whitespace. Output: the lucky value or `-1`.
//! - `common-prefix`: one line holding a quoted, comma-separated string
//!   list (`"flower","flow","flight"`). Output: the prefix in quotes.
//! - `letter-combinations`: a case count `t`, then `t` lines each holding
//!   a digit string. Output: one bracketed quoted list per case.

use std::fmt::Write as _;

use thiserror::Error;

use crate::exercises::find_lucky::find_lucky;
use crate::exercises::letter_combinations::{letter_combinations, KeypadError};
use crate::exercises::longest_common_prefix::longest_common_prefix;

/// Failure while parsing or running an exercise's textual input.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("expected {0}, found end of input")]
    MissingInput(&'static str),
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
    #[error("unterminated quote in string list")]
    UnterminatedQuote,
    #[error("unexpected character '{0}' in string list")]
    UnexpectedCharacter(char),
    #[error(transparent)]
    Keypad(#[from] KeypadError),
    #[error("no exercise named '{0}'")]
    UnknownDrill(String),
}

/// One exercise wired to its textual input and output format.
///
/// Implementations consume the whole input text up front; none of the
/// exercises need streaming, and whole-text parsing keeps the error paths
/// in one place.
pub trait Drill {
    /// Name used to select the exercise from the command line.
    fn name(&self) -> &'static str;

    /// One-line description for catalog listings.
    fn summary(&self) -> &'static str;

    /// Run the exercise over `input` and return the formatted output,
    /// trailing newline included.
    fn run(&self, input: &str) -> Result<String, HarnessError>;
}

/// `find-lucky` harness: count-prefixed integers in, one integer out.
pub struct FindLucky;

impl Drill for FindLucky {
    fn name(&self) -> &'static str {
        "find-lucky"
    }

    fn summary(&self) -> &'static str {
        "largest value whose frequency equals itself, -1 if none"
    }

    fn run(&self, input: &str) -> Result<String, HarnessError> {
        let values = parse_counted_integers(input)?;
        let rendered = match find_lucky(&values) {
            Some(v) => v.to_string(),
            None => "-1".to_string(),
        };
        Ok(format!("{rendered}\n"))
    }
}

/// `common-prefix` harness: quoted string list in, quoted prefix out.
pub struct CommonPrefix;

impl Drill for CommonPrefix {
    fn name(&self) -> &'static str {
        "common-prefix"
    }

    fn summary(&self) -> &'static str {
        "longest shared leading substring of a quoted string list"
    }

    fn run(&self, input: &str) -> Result<String, HarnessError> {
        let line = input.lines().next().unwrap_or("");
        let strings = parse_quoted_list(line)?;
        let refs: Vec<&str> = strings.iter().map(String::as_str).collect();
        Ok(format!("{}\n", format_quoted(longest_common_prefix(&refs))))
    }
}

/// `letter-combinations` harness: case count plus digit strings in, one
/// bracketed list per case out.
pub struct LetterCombinations;

impl Drill for LetterCombinations {
    fn name(&self) -> &'static str {
        "letter-combinations"
    }

    fn summary(&self) -> &'static str {
        "keypad letter combinations for each digit string"
    }

    fn run(&self, input: &str) -> Result<String, HarnessError> {
        let mut lines = input.lines();
        let count_line = lines
            .next()
            .ok_or(HarnessError::MissingInput("a case count"))?;
        let cases = parse_integer(count_line.trim())?;

        let mut out = String::new();
        for _ in 0..cases {
            let digits = lines
                .next()
                .ok_or(HarnessError::MissingInput("a digit string"))?
                .trim();
            let combos = letter_combinations(digits)?;
            out.push_str(&format_string_list(&combos));
            out.push('\n');
        }
        Ok(out)
    }
}

/// The full exercise catalog, in presentation order.
pub fn all() -> [&'static dyn Drill; 3] {
    [&FindLucky, &CommonPrefix, &LetterCombinations]
}

/// Run the named exercise over `input`.
pub fn run_by_name(name: &str, input: &str) -> Result<String, HarnessError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("drill_run", drill = name);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let drill = all()
        .into_iter()
        .find(|d| d.name() == name)
        .ok_or_else(|| HarnessError::UnknownDrill(name.to_string()))?;
    drill.run(input)
}

/// Parse a count-prefixed integer sequence: a count `n` followed by `n`
/// integers, separated by any whitespace.
pub fn parse_counted_integers(input: &str) -> Result<Vec<u32>, HarnessError> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("parse_counted_integers");
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut tokens = input.split_whitespace();
    let n = parse_integer(tokens.next().ok_or(HarnessError::MissingInput("a count"))?)?;

    let mut values = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let token = tokens.next().ok_or(HarnessError::MissingInput("a value"))?;
        values.push(parse_integer(token)?);
    }
    Ok(values)
}

/// Parse a quoted, comma-separated string list such as
/// `"flower","flow","flight"`. An empty or all-whitespace line is an
/// empty list. Quotes inside items are not supported.
pub fn parse_quoted_list(line: &str) -> Result<Vec<String>, HarnessError> {
    let mut items = Vec::new();
    let mut rest = line.trim();

    while let Some(first) = rest.chars().next() {
        if !items.is_empty() {
            if first != ',' {
                return Err(HarnessError::UnexpectedCharacter(first));
            }
            rest = rest[1..].trim_start();
        }
        rest = match rest.strip_prefix('"') {
            Some(tail) => tail,
            None => {
                return Err(match rest.chars().next() {
                    Some(c) => HarnessError::UnexpectedCharacter(c),
                    None => HarnessError::MissingInput("an opening quote"),
                })
            }
        };
        let Some(end) = rest.find('"') else {
            return Err(HarnessError::UnterminatedQuote);
        };
        items.push(rest[..end].to_string());
        rest = rest[end + 1..].trim_start();
    }
    Ok(items)
}

fn parse_integer(token: &str) -> Result<u32, HarnessError> {
    token
        .parse()
        .map_err(|_| HarnessError::InvalidInteger(token.to_string()))
}

/// Wrap a result in double quotes: `fl` becomes `"fl"`.
pub fn format_quoted(s: &str) -> String {
    format!("\"{s}\"")
}

/// Render a bracketed, comma-separated, quoted list: `["ad","ae"]`.
/// The empty list renders as `[]`.
pub fn format_string_list(items: &[String]) -> String {
    let mut out = String::from("[");
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        let _ = write!(out, "\"{item}\"");
    }
    out.push(']');
    out
}
