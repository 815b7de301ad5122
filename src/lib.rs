mod analysis;
pub mod cli;
mod codes;
pub mod report;
mod stats;
mod symbols;
mod tree;

pub use analysis::{AnalysisError, HuffmanAnalysis};
pub use codes::{Bit, Code, CodeTable};
pub use stats::{Statistics, UndefinedRatioError};
pub use symbols::{EmptyInputError, FrequencyTable, ProbabilityTable, Symbol, SymbolCounter};
pub use tree::{EmptyTreeError, HuffmanTree, NodeId};
