//! Small routines that answer "does this string contain a vowel?", written
//! several different ways so they can be measured against each other.
//!
//! - [`scan`]: direct byte-by-byte comparison, in both loop orders.
//! - [`dfa`]: a two-state automaton driven by a constant lookup table.
//! - [`corpus`]: random test strings, short and long, with and without
//!   vowels (requires the `corpus` feature).
//!
//! Every scanner has the same signature, and [`SCANNERS`] lists them all.

#![cfg_attr(not(feature = "corpus"), no_std)]

#[cfg(feature = "corpus")]
pub mod corpus;
pub mod dfa;
pub mod scan;

/// The characters counted as vowels. ASCII only.
pub const VOWELS: &str = "aeiouAEIOU";

/// Digits and ASCII letters.
pub const CHARS_WITH_VOWELS: &str = "0123456789\
                                     abcdefghijklmnopqrstuvwxyz\
                                     ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits and ASCII letters, minus [`VOWELS`].
pub const CHARS_NO_VOWELS: &str = "0123456789\
                                   bcdfghjklmnpqrstvwxyz\
                                   BCDFGHJKLMNPQRSTVWXYZ";

/// A vowel-search routine.
pub type Scanner = fn(&str) -> bool;

/// Every scanner in the crate, with the name it is benchmarked under.
pub const SCANNERS: &[(&str, Scanner)] = &[
    ("loop", scan::has_vowel_loop),
    ("loop_interchanged", scan::has_vowel_loop_interchanged),
    ("table", dfa::has_vowel_table),
    ("table_early_return", dfa::has_vowel_table_early_return),
];

/// Returns whether `byte` is one of [`VOWELS`].
#[inline]
pub const fn is_vowel(byte: u8) -> bool {
    matches!(
        byte,
        b'a' | b'e' | b'i' | b'o' | b'u' | b'A' | b'E' | b'I' | b'O' | b'U'
    )
}

//=============================================================
