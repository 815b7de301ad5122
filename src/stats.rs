use std::fmt;

use crate::codes::CodeTable;
use crate::symbols::{FrequencyTable, ProbabilityTable};

#[derive(Debug)]
pub struct UndefinedRatioError;

impl fmt::Display for UndefinedRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compression ratio is undefined for a zero-bit baseline")
    }
}

/// Entropy and compression figures for one code table, measured against a
/// fixed-width baseline of 8 bits per character.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Statistics {
    pub total_characters: u64,
    /// Shannon entropy
    ///   $ H = -sum_i p_i log_2 p_i $
    /// in bits per character; the theoretical minimum for the distribution.
    pub entropy: f64,
    /// Expected code length
    ///   $ L = sum_i p_i l_i $
    /// in bits per character. Never below `entropy`.
    pub average_bits: f64,
    pub bits_ascii: u64,
    pub bits_huffman: u64,
    pub compression_percentage: f64,
}

impl Statistics {
    /// Fails when the baseline is zero bits (an empty table), which would
    /// make the compression percentage a division by zero.
    pub fn compute(
        frequencies: &FrequencyTable,
        probabilities: &ProbabilityTable,
        codes: &CodeTable,
    ) -> Result<Statistics, UndefinedRatioError> {
        let total_characters = frequencies.total_characters();
        let bits_ascii = total_characters * 8;
        if bits_ascii == 0 {
            return Err(UndefinedRatioError);
        }

        let mut entropy = 0.0;
        for (_, p) in probabilities.iter() {
            if p > 0.0 {
                entropy -= p * p.log2();
            }
        }

        let mut average_bits = 0.0;
        let mut bits_huffman = 0;
        for (symbol, code) in codes.iter() {
            average_bits += probabilities.probability(symbol) * code.len() as f64;
            bits_huffman += frequencies.count(symbol) * code.len() as u64;
        }

        let compression_percentage = bits_huffman as f64 / bits_ascii as f64 * 100.0;

        Ok(Statistics {
            total_characters,
            entropy,
            average_bits,
            bits_ascii,
            bits_huffman,
            compression_percentage,
        })
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::codes::test::example_codes;
    use crate::symbols::{SymbolCounter, test::example_table};
    use crate::tree::HuffmanTree;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn statistics_of(text: &str) -> Statistics {
        let mut counter = SymbolCounter::empty();
        let frequencies = counter.count(text.chars()).finish();
        let probabilities = frequencies.probabilities().unwrap();
        let tree = HuffmanTree::build(&frequencies).unwrap();
        let codes = CodeTable::build(&tree);

        Statistics::compute(&frequencies, &probabilities, &codes).unwrap()
    }

    pub fn example_statistics() -> Statistics {
        let frequencies = example_table();
        let probabilities = frequencies.probabilities().unwrap();
        let codes = example_codes();

        Statistics::compute(&frequencies, &probabilities, &codes).unwrap()
    }

    #[test]
    fn test_scenario_statistics() {
        let stats = example_statistics();

        assert_eq!(stats.total_characters, 11);
        assert!(approx(stats.entropy, 1.4949188));
        assert!(approx(stats.average_bits, 17.0 / 11.0));
        assert_eq!(stats.bits_ascii, 88);
        assert_eq!(stats.bits_huffman, 17);
        assert!(approx(stats.compression_percentage, 1700.0 / 88.0));
    }

    #[test]
    fn test_average_never_beats_entropy() {
        for text in [
            "aaaaabbbbcc",
            "abcdefgh",
            "aaaaaaaaab",
            "mississippi river runs",
            "zzzzzzzzzzzzzzzzy x w",
        ] {
            let stats = statistics_of(text);
            assert!(
                stats.entropy <= stats.average_bits + 1e-9,
                "entropy {} exceeds average {} for {:?}",
                stats.entropy,
                stats.average_bits,
                text
            );
        }
    }

    #[test]
    fn test_average_within_one_bit_of_entropy() {
        // The redundancy of a Huffman code is below one bit per symbol, so
        // any construction drifting away from optimality shows up here.
        for text in [
            "aaaaabbbbcc",
            "abcdefgh",
            "aaaaaaaaab",
            "mississippi river runs",
            "the quick brown fox jumps over the lazy dog",
        ] {
            let stats = statistics_of(text);
            assert!(
                stats.average_bits < stats.entropy + 1.0,
                "average {} not within one bit of entropy {} for {:?}",
                stats.average_bits,
                stats.entropy,
                text
            );
        }
    }

    #[test]
    fn test_bit_totals_are_consistent() {
        for text in ["aaaaabbbbcc", "abcdefgh", "to be or not to be"] {
            let stats = statistics_of(text);
            let expected = stats.average_bits * stats.total_characters as f64;
            let relative = (stats.bits_huffman as f64 - expected).abs() / expected;
            assert!(relative < 1e-6);
        }
    }

    #[test]
    fn test_uniform_distribution_hits_the_bound() {
        // Four equally likely symbols: two bits each, entropy exactly two.
        let stats = statistics_of("abcd");
        assert!(approx(stats.entropy, 2.0));
        assert!(approx(stats.average_bits, 2.0));
        assert_eq!(stats.bits_huffman, 8);
    }

    #[test]
    fn test_single_symbol_statistics_match_code_policy() {
        // The lone symbol carries the one-bit code, so the text costs one
        // bit per character.
        let stats = statistics_of("aaaa");
        assert_eq!(stats.total_characters, 4);
        assert!(approx(stats.entropy, 0.0));
        assert!(approx(stats.average_bits, 1.0));
        assert_eq!(stats.bits_ascii, 32);
        assert_eq!(stats.bits_huffman, 4);
        assert!(approx(stats.compression_percentage, 12.5));
    }

    #[test]
    fn test_empty_baseline_fails() {
        let frequencies = SymbolCounter::empty().finish();
        let probabilities = example_table().probabilities().unwrap();
        let codes = example_codes();

        assert!(Statistics::compute(&frequencies, &probabilities, &codes).is_err());
    }
}
