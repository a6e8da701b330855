use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        symbol: char,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: char, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn merge(a: Self, b: Self) -> Result<Self> {
        // a is the smaller node
        let weight = a
            .weight()
            .checked_add(b.weight())
            .ok_or_else(|| HuffmanError::format("merged weight overflows u64"))?;
        Ok(HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        })
    }
}

/// A node waiting in the merge queue.
///
/// `seq` breaks weight ties. Leaves are numbered in symbol order and merged
/// nodes continue the count in creation order, so the merge order depends
/// on the frequency table alone.
struct Queued {
    weight: u64,
    seq: usize,
    node: HuffNode,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
    height: usize,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// A table with a single symbol leaves a bare leaf as root; the code
    /// table and the decoder give that symbol the one-bit code `0`.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let leaves: Vec<Queued> = frequencies
            .iter()
            .enumerate()
            .map(|(seq, (symbol, count))| Queued {
                weight: count,
                seq,
                node: HuffNode::new(symbol, count),
            })
            .collect();
        let mut next_seq = leaves.len();
        let mut heap = MinHeap::build(leaves);

        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            let z = HuffNode::merge(x.node, y.node)?;

            heap.insert(Queued {
                weight: z.weight(),
                seq: next_seq,
                node: z,
            });
            next_seq += 1;
        }
        let root = heap.extract_min()?.node;
        let height = height_of(&root);

        debug!(
            "built tree over {} symbols, weight {}, height {}",
            frequencies.len(),
            root.weight(),
            height
        );
        Ok(HuffmanTree { root, height })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Length of the longest root-to-leaf path; 0 for a bare leaf root.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generate_table(&self) -> CodeTable {
        CodeTable::from_tree(self)
    }

    /// Walks the tree one bit at a time, emitting a symbol at every leaf.
    pub fn decode(&self, bits: &BitVec) -> Result<String> {
        let mut decoded = String::new();

        if let HuffNode::Leaf { symbol, .. } = &self.root {
            for bit in bits.iter() {
                if bit {
                    return Err(HuffmanError::corrupt(format!(
                        "single-symbol stream holds a 1 bit (only {symbol:?} = 0 exists)"
                    )));
                }
                decoded.push(*symbol);
            }
            return Ok(decoded);
        }

        let mut node = &self.root;
        let mut depth = 0;
        for bit in bits.iter() {
            node = match node {
                HuffNode::Internal { left, right, .. } => {
                    if bit {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                // node is reset to the internal root after every leaf
                HuffNode::Leaf { .. } => {
                    return Err(HuffmanError::corrupt("walk resumed from a leaf"));
                }
            };
            depth += 1;

            if let HuffNode::Leaf { symbol, .. } = node {
                decoded.push(*symbol);
                node = &self.root;
                depth = 0;
            } else if depth >= self.height {
                // only a tree whose height understates its depth gets here
                return Err(HuffmanError::corrupt(format!(
                    "no leaf reached within {} steps",
                    self.height
                )));
            }
        }

        if depth != 0 {
            return Err(HuffmanError::corrupt(
                "bit stream ends in the middle of a code",
            ));
        }
        Ok(decoded)
    }

    fn fmt_node(
        f: &mut fmt::Formatter<'_>,
        node: &HuffNode,
        depth: usize,
        label: &str,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match node {
            HuffNode::Leaf { symbol, weight } => {
                writeln!(f, "{indent}{label}-> Leaf: {symbol:?} [weight: {weight}]")
            }
            HuffNode::Internal {
                weight,
                left,
                right,
            } => {
                writeln!(f, "{indent}{label}-> Internal [weight: {weight}]")?;
                Self::fmt_node(f, left, depth + 1, "0")?;
                Self::fmt_node(f, right, depth + 1, "1")
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_node(f, &self.root, 0, "root")
    }
}

fn height_of(root: &HuffNode) -> usize {
    let mut height = 0;
    let mut stack = vec![(root, 0usize)];
    while let Some((node, depth)) = stack.pop() {
        match node {
            HuffNode::Leaf { .. } => height = height.max(depth),
            HuffNode::Internal { left, right, .. } => {
                stack.push((right.as_ref(), depth + 1));
                stack.push((left.as_ref(), depth + 1));
            }
        }
    }
    height
}
