//! Vowel search by direct comparison.
//!
//! The two functions here do the same work in a different loop order, which
//! is the whole point: with the vowels on the outside the haystack is walked
//! up to ten times, with the haystack on the outside it is walked once.

use crate::VOWELS;

/// Searches the whole haystack for each vowel in turn.
///
/// Runs in O(N * V) time, where V is the number of vowels.
pub fn has_vowel_loop(haystack: &str) -> bool {
    let bytes = haystack.as_bytes();
    for v in VOWELS.bytes() {
        for &byte in bytes {
            if byte == v {
                return true;
            }
        }
    }
    false
}

/// Checks each haystack byte against every vowel.
///
/// Same result as [`has_vowel_loop()`], but returns as soon as the first
/// vowel in the haystack is reached.
pub fn has_vowel_loop_interchanged(haystack: &str) -> bool {
    let bytes = haystack.as_bytes();
    for &byte in bytes {
        for v in VOWELS.bytes() {
            if byte == v {
                return true;
            }
        }
    }
    false
}

//=============================================================
