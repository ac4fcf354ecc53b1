//! Random test strings.
//!
//! There are four corpora: short and long strings, each drawn either from
//! [`CHARS_WITH_VOWELS`] or from [`CHARS_NO_VOWELS`]. Each one is generated
//! the first time it is asked for and then kept for the life of the process,
//! so every benchmark iteration sees the same data.
//!
//! By default each corpus is seeded from OS entropy. Set `VOWEL_SCAN_SEED`
//! to a `u64` to make them reproducible.

use std::sync::OnceLock;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{CHARS_NO_VOWELS, CHARS_WITH_VOWELS};

/// Environment variable holding an optional `u64` corpus seed.
pub const SEED_VAR: &str = "VOWEL_SCAN_SEED";

/// Number of strings in each short corpus.
pub const SHORT_NUM_STRINGS: usize = 1_000;

/// Number of strings in each long corpus.
pub const LONG_NUM_STRINGS: usize = 1_000;

/// Distribution of string lengths.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthDistribution {
    /// `Binomial(trials, 0.5) + offset`.
    Binomial { trials: u32, offset: usize },
}

impl LengthDistribution {
    /// 5 to 20 chars, centered on 12.
    pub const SHORT: Self = Self::Binomial {
        trials: 15,
        offset: 5,
    };

    /// 0 to 10000 chars, centered on 5000.
    pub const LONG: Self = Self::Binomial {
        trials: 10_000,
        offset: 0,
    };

    /// Smallest length this can produce.
    pub fn min(&self) -> usize {
        match *self {
            Self::Binomial { offset, .. } => offset,
        }
    }

    /// Largest length this can produce.
    pub fn max(&self) -> usize {
        match *self {
            Self::Binomial { trials, offset } => offset + trials as usize,
        }
    }
}

impl Distribution<usize> for LengthDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match *self {
            Self::Binomial { trials, offset } => offset + coin_flips(rng, trials) as usize,
        }
    }
}

/// Counts heads in `n` fair coin flips, i.e. samples `Binomial(n, 0.5)`.
///
/// Each random bit is one flip, so this takes one `u64` per 64 trials.
fn coin_flips<R: Rng + ?Sized>(rng: &mut R, n: u32) -> u32 {
    let mut remaining = n;
    let mut heads = 0;
    while remaining >= 64 {
        heads += rng.gen::<u64>().count_ones();
        remaining -= 64;
    }
    if remaining > 0 {
        let mask = (1u64 << remaining) - 1;
        heads += (rng.gen::<u64>() & mask).count_ones();
    }
    heads
}

/// What to generate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CorpusSpec {
    /// Characters to draw from, uniformly. Must be non-empty ASCII.
    pub alphabet: &'static str,
    pub num_strings: usize,
    pub lengths: LengthDistribution,
}

/// Generates `spec.num_strings` random strings.
///
/// # Panics
///
/// Panics if `spec.alphabet` is empty.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, spec: &CorpusSpec) -> Vec<String> {
    let alphabet = spec.alphabet.as_bytes();
    assert!(!alphabet.is_empty(), "corpus alphabet must not be empty");
    debug_assert!(alphabet.is_ascii());
    let char_dist = Uniform::new(0, alphabet.len());

    let mut strs = Vec::with_capacity(spec.num_strings);
    for _ in 0..spec.num_strings {
        let len = spec.lengths.sample(rng);
        let s: String = (0..len)
            .map(|_| alphabet[char_dist.sample(rng)] as char)
            .collect();
        strs.push(s);
    }
    strs
}

//-------------------------------------------------------------

/// The four benchmark corpora.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corpus {
    ShortWithVowels,
    ShortNoVowels,
    LongWithVowels,
    LongNoVowels,
}

impl Corpus {
    pub const ALL: [Corpus; 4] = [
        Corpus::ShortWithVowels,
        Corpus::ShortNoVowels,
        Corpus::LongWithVowels,
        Corpus::LongNoVowels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Corpus::ShortWithVowels => "short_with_vowels",
            Corpus::ShortNoVowels => "short_no_vowels",
            Corpus::LongWithVowels => "long_with_vowels",
            Corpus::LongNoVowels => "long_no_vowels",
        }
    }

    pub fn spec(self) -> CorpusSpec {
        let (alphabet, num_strings, lengths) = match self {
            Corpus::ShortWithVowels => {
                (CHARS_WITH_VOWELS, SHORT_NUM_STRINGS, LengthDistribution::SHORT)
            }
            Corpus::ShortNoVowels => {
                (CHARS_NO_VOWELS, SHORT_NUM_STRINGS, LengthDistribution::SHORT)
            }
            Corpus::LongWithVowels => {
                (CHARS_WITH_VOWELS, LONG_NUM_STRINGS, LengthDistribution::LONG)
            }
            Corpus::LongNoVowels => (CHARS_NO_VOWELS, LONG_NUM_STRINGS, LengthDistribution::LONG),
        };
        CorpusSpec {
            alphabet,
            num_strings,
            lengths,
        }
    }

    /// The cached strings of this corpus, generated on first use.
    pub fn strings(self) -> &'static [String] {
        static SHORT_WITH_VOWELS: OnceLock<Vec<String>> = OnceLock::new();
        static SHORT_NO_VOWELS: OnceLock<Vec<String>> = OnceLock::new();
        static LONG_WITH_VOWELS: OnceLock<Vec<String>> = OnceLock::new();
        static LONG_NO_VOWELS: OnceLock<Vec<String>> = OnceLock::new();

        let cell = match self {
            Corpus::ShortWithVowels => &SHORT_WITH_VOWELS,
            Corpus::ShortNoVowels => &SHORT_NO_VOWELS,
            Corpus::LongWithVowels => &LONG_WITH_VOWELS,
            Corpus::LongNoVowels => &LONG_NO_VOWELS,
        };
        cell.get_or_init(|| generate(&mut self.rng(), &self.spec()))
    }

    /// A fresh RNG for this corpus.
    ///
    /// With a seed configured, each corpus gets its own stream derived from
    /// it; otherwise the RNG is seeded from entropy.
    fn rng(self) -> StdRng {
        match seed() {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(self as u64)),
            None => StdRng::from_entropy(),
        }
    }
}

/// The seed from `VOWEL_SCAN_SEED`, if it is set to a valid `u64`.
pub fn seed() -> Option<u64> {
    parse_seed(std::env::var(SEED_VAR).ok()?.as_str())
}

fn parse_seed(text: &str) -> Option<u64> {
    text.trim().parse().ok()
}

//=============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xDEAD_BEEF)
    }

    #[test]
    fn coin_flips_01() {
        let mut r = rng();
        assert_eq!(0, coin_flips(&mut r, 0));
        for n in [1, 15, 63, 64, 65, 128, 10_000] {
            assert!(coin_flips(&mut r, n) <= n);
        }
    }

    #[test]
    fn coin_flips_02() {
        // Mean of Binomial(10000, 0.5) is 5000 with a standard deviation
        // of 50, so 500 either way is far outside anything plausible.
        let mut r = rng();
        for _ in 0..20 {
            let heads = coin_flips(&mut r, 10_000);
            assert!((4_500..=5_500).contains(&heads), "{}", heads);
        }
    }

    #[test]
    fn length_distribution_01() {
        assert_eq!(5, LengthDistribution::SHORT.min());
        assert_eq!(20, LengthDistribution::SHORT.max());
        assert_eq!(0, LengthDistribution::LONG.min());
        assert_eq!(10_000, LengthDistribution::LONG.max());

        let mut r = rng();
        for _ in 0..1000 {
            let len = LengthDistribution::SHORT.sample(&mut r);
            assert!((5..=20).contains(&len));
        }
    }

    #[test]
    fn generate_01() {
        let spec = Corpus::ShortNoVowels.spec();
        let strs = generate(&mut rng(), &spec);
        assert_eq!(SHORT_NUM_STRINGS, strs.len());
        for s in strs.iter() {
            assert!(s.len() >= spec.lengths.min() && s.len() <= spec.lengths.max());
            assert!(s.bytes().all(|b| CHARS_NO_VOWELS.as_bytes().contains(&b)));
        }
    }

    #[test]
    fn generate_02() {
        let spec = CorpusSpec {
            alphabet: "x",
            num_strings: 3,
            lengths: LengthDistribution::Binomial {
                trials: 0,
                offset: 4,
            },
        };
        assert_eq!(vec!["xxxx"; 3], generate(&mut rng(), &spec));
    }

    #[test]
    fn generate_03() {
        let spec = Corpus::ShortWithVowels.spec();
        assert_eq!(generate(&mut rng(), &spec), generate(&mut rng(), &spec));
    }

    #[test]
    #[should_panic]
    fn generate_04() {
        let spec = CorpusSpec {
            alphabet: "",
            num_strings: 1,
            lengths: LengthDistribution::SHORT,
        };
        generate(&mut rng(), &spec);
    }

    #[test]
    fn corpus_strings_01() {
        let strs = Corpus::ShortWithVowels.strings();
        assert_eq!(SHORT_NUM_STRINGS, strs.len());
        // Cached, not regenerated.
        assert!(std::ptr::eq(strs, Corpus::ShortWithVowels.strings()));
    }

    #[test]
    fn corpus_names_01() {
        let mut names: Vec<_> = Corpus::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(4, names.len());
    }

    #[test]
    fn parse_seed_01() {
        assert_eq!(Some(42), parse_seed("42"));
        assert_eq!(Some(7), parse_seed(" 7\n"));
        assert_eq!(None, parse_seed(""));
        assert_eq!(None, parse_seed("-1"));
        assert_eq!(None, parse_seed("seed"));
    }
}
