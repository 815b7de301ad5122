use std::collections::BTreeMap;
use std::fmt;

use crate::symbols::Symbol;
use crate::tree::{HuffmanTree, NodeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

/// A bit-string code: the root-to-leaf path of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<Bit>);

impl Code {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn join(&self, tail: Bit) -> Self {
        let mut v = self.0.clone();
        v.push(tail);
        Self(v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bit> {
        self.0.iter()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.0.len() <= other.0.len() && self.0[..] == other.0[..self.0.len()]
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", bit.as_char())?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its assigned code, iterated in canonical symbol
/// order. The codes are prefix-free: they are paths to distinct leaves of a
/// strict binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable(BTreeMap<Symbol, Code>);

impl CodeTable {
    /// Walks the tree depth-first with an explicit stack, appending `0` when
    /// descending into a left child and `1` into a right child, and records
    /// the accumulated path at each leaf.
    ///
    /// A tree that is a single leaf would yield the empty path; its symbol is
    /// assigned the one-bit code `0` instead, so every reported code holds at
    /// least one bit and the bit totals stay meaningful.
    pub fn build(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root(), Code::empty())];

        while let Some((id, code)) = stack.pop() {
            match tree.kind(id) {
                NodeKind::Leaf(symbol) => {
                    let code = if code.is_empty() {
                        code.join(Bit::Zero)
                    } else {
                        code
                    };
                    codes.insert(*symbol, code);
                }
                NodeKind::Internal { left, right } => {
                    stack.push((*right, code.join(Bit::One)));
                    stack.push((*left, code.join(Bit::Zero)));
                }
            }
        }

        CodeTable(codes)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.0.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> {
        self.0.iter().map(|(&symbol, code)| (symbol, code))
    }
}

mod serialize {
    use serde::ser::SerializeMap;

    use super::*;

    impl serde::Serialize for CodeTable {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (symbol, code) in self.iter() {
                map.serialize_entry(&symbol.to_string(), &code.to_string())?;
            }
            map.end()
        }
    }
}
