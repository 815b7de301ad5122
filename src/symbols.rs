use std::collections::BTreeMap;
use std::fmt;

/// A single counted unit of the analyzed text.
///
/// A literal space is renamed to the named symbol `(space)`; a newline never
/// becomes a `Symbol` at all and contributes to no count, code or statistic.
/// All other characters compare by raw code point, case-sensitively.
///
/// The derived order is the canonical report order: `(space)` first, then
/// code-point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    Space,
    Char(char),
}

impl Symbol {
    /// Applies the normalization rules in order: drop newlines, rename space.
    pub fn normalize(char: char) -> Option<Symbol> {
        match char {
            '\n' => None,
            ' ' => Some(Symbol::Space),
            c => Some(Symbol::Char(c)),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Space => write!(f, "(space)"),
            Symbol::Char(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug)]
pub struct EmptyInputError;

impl fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input contains no countable symbols")
    }
}

pub struct SymbolCounter {
    counts: BTreeMap<Symbol, u64>,
    total: u64,
}

impl SymbolCounter {
    pub fn empty() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }

    pub fn count_one(&mut self, char: char) {
        if let Some(symbol) = Symbol::normalize(char) {
            *self.counts.entry(symbol).or_insert(0) += 1;
            self.total += 1;
        }
    }

    pub fn count(&mut self, it: impl Iterator<Item = char>) -> &mut Self {
        it.for_each(|c| self.count_one(c));
        self
    }

    pub fn finish(&self) -> FrequencyTable {
        FrequencyTable {
            counts: self.counts.clone(),
            total: self.total,
        }
    }
}

/// Per-symbol occurrence counts of one scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
    total: u64,
}

impl FrequencyTable {
    pub fn from_counts(counts: impl IntoIterator<Item = (Symbol, u64)>) -> Self {
        let counts: BTreeMap<Symbol, u64> = counts.into_iter().collect();
        let total = counts.values().sum();
        Self { counts, total }
    }

    pub fn total_characters(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Symbols with their counts, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Derives $ p_i = c_i / n $ for every symbol.
    ///
    /// Fails on an empty table instead of dividing by zero; a table scanned
    /// from newlines only is empty too.
    pub fn probabilities(&self) -> Result<ProbabilityTable, EmptyInputError> {
        if self.total == 0 {
            return Err(EmptyInputError);
        }

        let probabilities = self
            .counts
            .iter()
            .map(|(&symbol, &count)| (symbol, count as f64 / self.total as f64))
            .collect();

        Ok(ProbabilityTable(probabilities))
    }
}

/// Relative frequencies in `(0, 1]`; entries sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable(BTreeMap<Symbol, f64>);

impl ProbabilityTable {
    pub fn probability(&self, symbol: Symbol) -> f64 {
        self.0.get(&symbol).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        self.0.iter().map(|(&symbol, &p)| (symbol, p))
    }
}
