use std::cmp::Ordering;
use std::fmt;

use crate::code_table::{Code, CodeTable, MAX_CODE_LENGTH};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(bytes))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        // leaves are numbered in symbol order, merged nodes continue the count
        let nodes: Vec<Pending> = frequencies
            .iter()
            .enumerate()
            .map(|(order, (byte, count))| Pending {
                order,
                node: HuffNode::new(byte, count),
            })
            .collect();
        let next_order = nodes.len();

        HuffmanTree::build_from_heap(MinHeap::build(nodes), next_order)
    }

    fn build_from_heap(mut heap: MinHeap<Pending>, mut next_order: usize) -> Result<Self> {
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;

            heap.insert(Pending {
                order: next_order,
                node: HuffNode::merge(x.node, y.node),
            });
            next_order += 1;
        }
        let root = heap.extract_min()?.node;

        Ok(HuffmanTree { root })
    }

    /// Assigns every leaf the path leading to it, `0` for left and `1` for right.
    ///
    /// A tree made of a single leaf gives that symbol the code `0`.
    pub fn code_table(&self) -> Result<CodeTable> {
        let mut table = CodeTable::new();
        match &self.root {
            HuffNode::Leaf { byte, .. } => {
                table.insert(*byte, Code::one_bit(false));
            }
            HuffNode::Internal { .. } => self.root.generate_table(&mut table, 0, 0)?,
        }
        Ok(table)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn weight(&self) -> usize {
        self.root.weight()
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_node(f, 0, "root")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        byte: u8,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(b: u8, f: usize) -> Self {
        HuffNode::Leaf { weight: f, byte: b }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Self {
        // a is the smaller node
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn generate_table(&self, code_table: &mut CodeTable, code: u8, depth: usize) -> Result<()> {
        match self {
            HuffNode::Leaf { byte, .. } => {
                let code = Code::new(code, depth).ok_or(HuffmanError::UnsupportedCodeLength {
                    symbol: *byte,
                    length: depth,
                })?;
                code_table.insert(*byte, code);
                Ok(())
            }
            HuffNode::Internal { left, right, .. } => {
                if depth == MAX_CODE_LENGTH {
                    let (symbol, length) = left.leftmost_leaf(depth + 1);
                    return Err(HuffmanError::UnsupportedCodeLength { symbol, length });
                }
                // Left = 0, Right = 1, building codes from MSB to LSB
                left.generate_table(code_table, code << 1, depth + 1)?;
                right.generate_table(code_table, (code << 1) | 1, depth + 1)
            }
        }
    }

    fn leftmost_leaf(&self, depth: usize) -> (u8, usize) {
        match self {
            HuffNode::Leaf { byte, .. } => (*byte, depth),
            HuffNode::Internal { left, .. } => left.leftmost_leaf(depth + 1),
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { byte, weight } => {
                writeln!(f, "{indent}{label}-> Leaf: {byte:#04x} [weight: {weight}]")
            }
            HuffNode::Internal { weight, left, right } => {
                writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
                left.fmt_node(f, depth + 1, "L")?;
                right.fmt_node(f, depth + 1, "R")
            }
        }
    }
}

/// Queue entry ordered by weight, ties broken by insertion order.
#[derive(Debug)]
struct Pending {
    order: usize,
    node: HuffNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.order.cmp(&other.order))
    }
}
