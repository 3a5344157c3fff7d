//! The exercise catalog.
//!
//! Each module solves one exercise with a pure function and carries its own
//! unit tests. The modules are leaves: they do not call into one another
//! and hold no state between invocations.
//!
//! - [`find_lucky`]              : frequency-equals-value search over an integer sequence.
//! - [`longest_common_prefix`]   : longest shared leading substring of a string set.
//! - [`letter_combinations`]     : telephone-keypad letter combinations.

pub mod find_lucky;
pub mod letter_combinations;
pub mod longest_common_prefix;
