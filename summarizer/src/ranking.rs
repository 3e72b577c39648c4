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

use std::cmp::Reverse;

use crate::{
    frequency::FrequencyTable,
    tokenizer::{TokenizationError, WordTokenizer},
};

/// A sentence of a document together with its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedSentence<'a> {
    /// Position of the sentence in the document, starting at zero.
    pub index: usize,
    /// The verbatim sentence.
    pub text: &'a str,
    /// Summed frequencies of the sentence tokens.
    pub score: usize,
}

/// Scores each sentence by the document frequencies of its tokens.
///
/// The sentence tokens are not filtered again, stopwords simply have no entry
/// in the frequency table and don't contribute.
pub fn rank_sentences<'a>(
    sentences: &[&'a str],
    tokenizer: &impl WordTokenizer,
    frequencies: &FrequencyTable,
) -> Result<Vec<RankedSentence<'a>>, TokenizationError> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, &text)| {
            let tokens = tokenizer.tokenize(text)?;
            let score = frequencies.score(tokens.iter().map(String::as_str));
            Ok(RankedSentence { index, text, score })
        })
        .collect()
}

/// Keeps the `num_sentences` highest scoring sentences, in document order.
///
/// Ties are decided by the position, earlier sentences win.
pub fn select_top(
    mut ranked: Vec<RankedSentence<'_>>,
    num_sentences: usize,
) -> Vec<RankedSentence<'_>> {
    ranked.sort_unstable_by_key(|sentence| (Reverse(sentence.score), sentence.index));
    ranked.truncate(num_sentences);
    ranked.sort_unstable_by_key(|sentence| sentence.index);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stopwords::Stopwords, tokenizer::UnicodeWordTokenizer};

    fn ranked(scores: &[usize]) -> Vec<RankedSentence<'static>> {
        scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RankedSentence {
                index,
                text: "",
                score,
            })
            .collect()
    }

    fn indices(sentences: &[RankedSentence<'_>]) -> Vec<usize> {
        sentences.iter().map(|sentence| sentence.index).collect()
    }

    #[test]
    fn test_rank_sentences() {
        let text = "The cat sat. The cat ate fish. Dogs bark loudly at night.";
        let frequencies = FrequencyTable::build(
            UnicodeWordTokenizer.tokenize(text).unwrap(),
            Stopwords::english(),
        );
        let sentences = ["The cat sat.", "The cat ate fish.", "Dogs bark loudly at night."];
        let ranked = rank_sentences(&sentences, &UnicodeWordTokenizer, &frequencies).unwrap();

        assert_eq!(
            ranked
                .iter()
                .map(|sentence| (sentence.index, sentence.text, sentence.score))
                .collect::<Vec<_>>(),
            [
                (0, "The cat sat.", 3),
                (1, "The cat ate fish.", 4),
                (2, "Dogs bark loudly at night.", 4),
            ],
        );
    }

    #[test]
    fn test_select_top_restores_document_order() {
        let selected = select_top(ranked(&[1, 7, 3, 9, 0]), 3);
        assert_eq!(indices(&selected), [1, 2, 3]);
    }

    #[test]
    fn test_select_top_prefers_earlier_sentences_on_ties() {
        assert_eq!(indices(&select_top(ranked(&[2, 5, 5, 5]), 2)), [1, 2]);
        assert_eq!(indices(&select_top(ranked(&[0, 0, 0]), 2)), [0, 1]);
    }

    #[test]
    fn test_select_top_keeps_all() {
        assert_eq!(indices(&select_top(ranked(&[4, 1, 2]), 3)), [0, 1, 2]);
        assert!(select_top(ranked(&[4, 1, 2]), 0).is_empty());
    }
}
