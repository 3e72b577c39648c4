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

//! Sentence and word segmentation.

use displaydoc::Display;
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Failed to tokenize the text: {msg}
#[derive(Debug, Display, Error)]
pub struct TokenizationError {
    msg: String,
}

impl TokenizationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Splits a text into its sentences.
pub trait SentenceSegmenter {
    /// Returns the sentences of `text` in document order.
    ///
    /// Every sentence must be a slice of `text`, sentences must not overlap.
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizationError>;
}

/// Splits a text into lowercased word tokens.
pub trait WordTokenizer {
    /// Returns the lowercased tokens of `text` in order.
    ///
    /// Punctuation is expected to be kept as separate tokens, filtering it is
    /// left to the stopwords.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizationError>;
}

/// Sentence boundaries as defined by Unicode Standard Annex #29.
///
/// Surrounding whitespace is trimmed and whitespace only pieces are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Result<Vec<&'a str>, TokenizationError> {
        Ok(text
            .split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }
}

/// Word boundaries as defined by Unicode Standard Annex #29.
///
/// Every punctuation character ends up as its own token, whitespace is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizationError> {
        Ok(text
            .to_lowercase()
            .split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .map(ToOwned::to_owned)
            .collect())
    }
}
