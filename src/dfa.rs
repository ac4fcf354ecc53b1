//! Vowel search with a table-driven automaton.
//!
//! The automaton has two states. It starts in [`REJECT`], moves to
//! [`ACCEPT`] on any vowel byte, and never leaves [`ACCEPT`]. The transition
//! table is built at compile time.

use crate::is_vowel;

/// Automaton state.
pub type State = u8;

/// No vowel seen yet.
pub const REJECT: State = 0;

/// A vowel has been seen.
pub const ACCEPT: State = 1;

/// Transition table, indexed as `TABLE[state][byte]`.
///
/// Every entry is either [`REJECT`] or [`ACCEPT`].
pub static TABLE: [[State; 256]; 2] = make_table();

const fn make_table() -> [[State; 256]; 2] {
    let mut tbl = [[REJECT; 256]; 2];

    let mut i = 0;
    while i < 256 {
        tbl[REJECT as usize][i] = if is_vowel(i as u8) { ACCEPT } else { REJECT };
        tbl[ACCEPT as usize][i] = ACCEPT;
        i += 1;
    }

    tbl
}

/// Single transition of the automaton.
#[inline(always)]
pub fn next_state(state: State, byte: u8) -> State {
    TABLE[state as usize][byte as usize]
}

/// Runs the whole haystack through the automaton.
///
/// There is no branch inside the loop, so this takes the same time whether
/// the first vowel is at the start of the string or there is none at all.
pub fn has_vowel_table(haystack: &str) -> bool {
    let mut state = REJECT;
    for &byte in haystack.as_bytes() {
        state = next_state(state, byte);
    }
    state == ACCEPT
}

/// Like [`has_vowel_table()`], but stops at the first vowel.
pub fn has_vowel_table_early_return(haystack: &str) -> bool {
    let mut state = REJECT;
    for &byte in haystack.as_bytes() {
        state = next_state(state, byte);
        if state == ACCEPT {
            return true;
        }
    }
    false
}

//=============================================================
