use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use crate::bit_vec::BitVec;
use crate::error::{HuffmanError, Result};
use crate::hufftree::{HuffNode, HuffmanTree};

/// Path from the root to a leaf: `false` for a left edge, `true` for a right one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        match tree.root() {
            // no edges to walk, so hand out a fixed one-bit code
            HuffNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code(vec![false]));
            }
            root => {
                let mut stack = vec![(root, Vec::new())];
                while let Some((node, path)) = stack.pop() {
                    match node {
                        HuffNode::Leaf { symbol, .. } => {
                            codes.insert(*symbol, Code(path));
                        }
                        HuffNode::Internal { left, right, .. } => {
                            let mut right_path = path.clone();
                            right_path.push(true);
                            stack.push((right.as_ref(), right_path));

                            let mut left_path = path;
                            left_path.push(false);
                            stack.push((left.as_ref(), left_path));
                        }
                    }
                }
            }
        }

        for (symbol, code) in &codes {
            trace!("code {symbol:?} = {code}");
        }
        CodeTable { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Concatenates the code of every symbol of `text`, in order.
    pub fn encode(&self, text: &str) -> Result<BitVec> {
        let mut bit_vec = BitVec::new();
        for symbol in text.chars() {
            let code = self
                .get(symbol)
                .ok_or(HuffmanError::UnsupportedSymbol { symbol })?;
            bit_vec.extend_bits(code.bits());
        }
        Ok(bit_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn table_for(text: &str) -> CodeTable {
        let frequencies = FrequencyTable::analyze(text.chars()).unwrap();
        HuffmanTree::from_frequencies(&frequencies)
            .unwrap()
            .generate_table()
    }

    #[test]
    fn abracadabra_codes() {
        let table = table_for("abracadabra");
        let rendered: Vec<String> = table
            .iter()
            .map(|(symbol, code)| format!("{symbol}={code}"))
            .collect();
        assert_eq!(rendered, vec!["a=0", "b=110", "c=100", "d=101", "r=111"]);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        for (x, cx) in table.iter() {
            for (y, cy) in table.iter() {
                if x != y {
                    assert!(!cx.is_prefix_of(cy), "{x:?}={cx} prefixes {y:?}={cy}");
                }
            }
        }
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('a').unwrap().to_string(), "0");
    }

    #[test]
    fn encode_concatenates_codes() {
        let table = table_for("abracadabra");
        let bits = table.encode("abra").unwrap();
        // 0 110 111 0
        assert_eq!(bits.len(), 8);
        assert_eq!(bits.as_bytes(), &[0b0110_1110]);
    }

    #[test]
    fn encode_rejects_unknown_symbols() {
        let table = table_for("abc");
        assert!(matches!(
            table.encode("abz"),
            Err(HuffmanError::UnsupportedSymbol { symbol: 'z' })
        ));
    }
}
