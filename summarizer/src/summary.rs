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

use std::borrow::Cow;

use tracing::debug;

use crate::{
    error::Error,
    frequency::FrequencyTable,
    ranking::{rank_sentences, select_top, RankedSentence},
    stopwords::Stopwords,
    tokenizer::{
        SentenceSegmenter,
        UnicodeSentenceSegmenter,
        UnicodeWordTokenizer,
        WordTokenizer,
    },
};

/// Extractive summarizer based on word frequencies.
pub struct Summarizer<S = UnicodeSentenceSegmenter, W = UnicodeWordTokenizer> {
    segmenter: S,
    tokenizer: W,
    stopwords: Cow<'static, Stopwords>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(UnicodeSentenceSegmenter, UnicodeWordTokenizer)
    }
}

impl<S, W> Summarizer<S, W>
where
    S: SentenceSegmenter,
    W: WordTokenizer,
{
    /// Creates a summarizer with the english stopwords.
    pub fn new(segmenter: S, tokenizer: W) -> Self {
        Self {
            segmenter,
            tokenizer,
            stopwords: Cow::Borrowed(Stopwords::english()),
        }
    }

    /// Replaces the stopwords.
    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = Cow::Owned(stopwords);
        self
    }

    /// Summarizes `text` to its `num_sentences` highest scoring sentences.
    ///
    /// The summary always has exactly `num_sentences` sentences, which are
    /// verbatim slices of `text` in document order. Equal scores are decided
    /// in favor of the earlier sentence.
    pub fn summarize<'a>(
        &self,
        text: &'a str,
        num_sentences: usize,
    ) -> Result<Summary<'a>, Error> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        if num_sentences == 0 {
            return Err(Error::ZeroSentences);
        }

        let sentences = self.segmenter.segment(text)?;
        if num_sentences > sentences.len() {
            return Err(Error::TooManySentences {
                requested: num_sentences,
                available: sentences.len(),
            });
        }

        let frequencies = FrequencyTable::build(self.tokenizer.tokenize(text)?, &self.stopwords);
        debug!(
            sentences = sentences.len(),
            vocabulary = frequencies.len(),
            "built frequency table",
        );
        let ranked = rank_sentences(&sentences, &self.tokenizer, &frequencies)?;

        Ok(Summary {
            sentences: select_top(ranked, num_sentences),
        })
    }
}

/// The sentences selected for a summary, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary<'a> {
    sentences: Vec<RankedSentence<'a>>,
}

impl<'a> Summary<'a> {
    pub fn sentences(&self) -> &[RankedSentence<'a>] {
        &self.sentences
    }

    /// The verbatim texts of the sentences.
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sentences.iter().map(|sentence| sentence.text)
    }

    pub fn into_texts(self) -> Vec<String> {
        self.texts().map(ToOwned::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
