use std::fmt;

use crate::codes::CodeTable;
use crate::stats::{Statistics, UndefinedRatioError};
use crate::symbols::{EmptyInputError, FrequencyTable, ProbabilityTable, SymbolCounter};
use crate::tree::{EmptyTreeError, HuffmanTree};

#[derive(Debug)]
pub enum AnalysisError {
    EmptyInput(EmptyInputError),
    EmptyTree(EmptyTreeError),
    UndefinedRatio(UndefinedRatioError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyInput(e) => write!(f, "empty input: {}", e),
            AnalysisError::EmptyTree(e) => write!(f, "empty tree: {}", e),
            AnalysisError::UndefinedRatio(e) => write!(f, "undefined ratio: {}", e),
        }
    }
}

impl From<EmptyInputError> for AnalysisError {
    fn from(e: EmptyInputError) -> Self {
        AnalysisError::EmptyInput(e)
    }
}

impl From<EmptyTreeError> for AnalysisError {
    fn from(e: EmptyTreeError) -> Self {
        AnalysisError::EmptyTree(e)
    }
}

impl From<UndefinedRatioError> for AnalysisError {
    fn from(e: UndefinedRatioError) -> Self {
        AnalysisError::UndefinedRatio(e)
    }
}

/// Everything derived from one scan of the input text: the frequency and
/// probability tables, the code table and the compression statistics.
#[derive(Debug, Clone)]
pub struct HuffmanAnalysis {
    frequencies: FrequencyTable,
    probabilities: ProbabilityTable,
    codes: CodeTable,
    statistics: Statistics,
}

impl HuffmanAnalysis {
    /// Runs the full pipeline: count, derive probabilities, build the tree,
    /// assign codes, compute statistics. The tree is local to this call and
    /// dropped once the codes are extracted.
    pub fn analyze(symbols: impl Iterator<Item = char>) -> Result<HuffmanAnalysis, AnalysisError> {
        let mut counter = SymbolCounter::empty();
        counter.count(symbols);
        let frequencies = counter.finish();
        log::debug!(
            "counted {} distinct symbols over {} characters",
            frequencies.len(),
            frequencies.total_characters()
        );

        let probabilities = frequencies.probabilities()?;
        let tree = HuffmanTree::build(&frequencies)?;
        log::debug!("built Huffman tree of weight {}", tree.weight());

        let codes = CodeTable::build(&tree);
        let statistics = Statistics::compute(&frequencies, &probabilities, &codes)?;

        Ok(HuffmanAnalysis {
            frequencies,
            probabilities,
            codes,
            statistics,
        })
    }

    pub fn of_text(text: &str) -> Result<HuffmanAnalysis, AnalysisError> {
        Self::analyze(text.chars())
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn probabilities(&self) -> &ProbabilityTable {
        &self.probabilities
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
