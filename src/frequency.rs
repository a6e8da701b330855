use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{HuffmanError, Result};

/// Occurrence count per symbol.
///
/// Backed by an ordered map so iteration always walks symbols in ordinal
/// order. The tree builder relies on that to number its leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Counts every symbol of `symbols` in a single pass.
    pub fn analyze<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let counts = symbols
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, symbol| {
                *acc.entry(symbol).or_insert(0u64) += 1;
                acc
            });

        if counts.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        Ok(Self { counts })
    }

    /// Adds the counts of `other` into `self`, e.g. to combine partial
    /// counts taken over chunks of one input.
    pub fn merge(&mut self, other: &FrequencyTable) -> Result<()> {
        for (&symbol, &count) in &other.counts {
            let entry = self.counts.entry(symbol).or_insert(0);
            *entry = entry
                .checked_add(count)
                .ok_or_else(|| HuffmanError::format(format!("count of {symbol:?} overflows")))?;
        }
        Ok(())
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Sum of all counts, i.e. the length of the input that produced the table.
    pub fn total(&self) -> Result<u64> {
        self.counts
            .values()
            .try_fold(0u64, |acc, &count| acc.checked_add(count))
            .ok_or_else(|| HuffmanError::format("total symbol count overflows u64"))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (char, u64)>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            let entry = counts.entry(symbol).or_insert(0u64);
            *entry = entry.saturating_add(count);
        }
        Self { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_abracadabra() {
        let table = FrequencyTable::analyze("abracadabra".chars()).unwrap();
        assert_eq!(table.get('a'), Some(5));
        assert_eq!(table.get('b'), Some(2));
        assert_eq!(table.get('r'), Some(2));
        assert_eq!(table.get('c'), Some(1));
        assert_eq!(table.get('d'), Some(1));
        assert_eq!(table.get('z'), None);
        assert_eq!(table.len(), 5);
        assert_eq!(table.total().unwrap(), 11);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            FrequencyTable::analyze("".chars()),
            Err(HuffmanError::EmptyInput)
        ));
    }

    #[test]
    fn repeated_analysis_is_stable() {
        let text = "the quick brown fox";
        assert_eq!(
            FrequencyTable::analyze(text.chars()).unwrap(),
            FrequencyTable::analyze(text.chars()).unwrap()
        );
    }

    #[test]
    fn merged_partials_match_whole() {
        let text = "mississippi river";
        let (head, tail) = text.split_at(7);
        let mut merged = FrequencyTable::analyze(head.chars()).unwrap();
        merged.merge(&FrequencyTable::analyze(tail.chars()).unwrap()).unwrap();
        assert_eq!(merged, FrequencyTable::analyze(text.chars()).unwrap());
    }

    #[test]
    fn overflowing_counts_are_errors() {
        let table: FrequencyTable = [('a', u64::MAX), ('b', 1)].into_iter().collect();
        assert!(matches!(table.total(), Err(HuffmanError::Format { .. })));

        let mut merged: FrequencyTable = [('a', u64::MAX)].into_iter().collect();
        let one: FrequencyTable = [('a', 1)].into_iter().collect();
        assert!(matches!(merged.merge(&one), Err(HuffmanError::Format { .. })));
    }

    #[test]
    fn iterates_in_symbol_order() {
        let table = FrequencyTable::analyze("cab".chars()).unwrap();
        let symbols: Vec<char> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
    }

    #[test]
    fn serializes_as_plain_json_object() {
        let table = FrequencyTable::analyze("a\nb".chars()).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"\n":1,"a":1,"b":1}"#);
        let back: FrequencyTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
