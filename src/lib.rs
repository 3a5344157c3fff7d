//! Drills
//!
//! This crate collects independent, self-contained solutions to small
//! algorithmic exercises. Each exercise is a pure function with no shared
//! state and no dependency on the others; the [`harness`] module wires each
//! one to a line-oriented text format so it can be exercised from standard
//! input.
//!
//! ## Quick start
//! ```
//! use drills::exercises::letter_combinations::letter_combinations;
//!
//! let combos = letter_combinations("23").unwrap();
//! assert_eq!(combos.len(), 9);
//! assert_eq!(combos.first().map(String::as_str), Some("ad"));
//! ```
//!
//! ## Built-in exercises
//! The `exercises` module contains one module per exercise:
//! - [`exercises::find_lucky`]              : largest value whose frequency equals itself.
//! - [`exercises::longest_common_prefix`]   : longest shared leading substring.
//! - [`exercises::letter_combinations`]     : keypad letter combinations via backtracking.
//!
//! The driver binary (`drill`) selects an exercise by name, reads its input
//! format from standard input, and prints a single formatted result.

pub mod exercises;
pub mod harness;

pub use crate::harness::{run_by_name, Drill, HarnessError};
