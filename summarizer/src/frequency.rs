// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::collections::HashMap;

use crate::stopwords::Stopwords;

/// Occurrence counts of the content tokens of a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts all tokens which aren't stopwords.
    pub fn build(tokens: impl IntoIterator<Item = String>, stopwords: &Stopwords) -> Self {
        let mut counts = HashMap::<String, usize>::new();
        for token in tokens {
            if !stopwords.contains(&token) {
                *counts.entry(token).or_default() += 1;
            }
        }

        Self { counts }
    }

    /// The number of occurrences of the token, if it was counted at all.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Sums up the frequencies of the tokens, unknown tokens count as zero.
    pub fn score<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> usize {
        tokens
            .into_iter()
            .filter_map(|token| self.get(token))
            .sum()
    }

    /// The number of distinct counted tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(ToOwned::to_owned).collect()
    }

    #[test]
    fn test_build_counts_non_stopwords() {
        let table = FrequencyTable::build(
            tokens("the cat sat . the cat ate fish ."),
            Stopwords::english(),
        );
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("sat"), Some(1));
        assert_eq!(table.get("fish"), Some(1));
        assert_eq!(table.get("the"), None);
        assert_eq!(table.get("."), None);
    }

    #[test]
    fn test_stopwords_only_build_empty_table() {
        let table = FrequencyTable::build(
            tokens("it is what it is . was it ?"),
            Stopwords::english(),
        );
        assert!(table.is_empty());
        assert_eq!(table.score(["it", "is", "?"]), 0);
    }

    #[test]
    fn test_score_ignores_unknown_tokens() {
        let table = FrequencyTable::build(tokens("cat cat fish"), &Stopwords::default());
        assert_eq!(table.score(["the", "cat", "ate", "fish", "cat"]), 5);
        assert_eq!(table.score(std::iter::empty()), 0);
    }
}
