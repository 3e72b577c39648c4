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

//! Summarize an article by extracting its most representative sentences.
//!
//! Every sentence is scored by the summed document wide frequency of its words,
//! ignoring stopwords and punctuation. The highest scoring sentences are returned
//! verbatim and in their original order.

#![forbid(unsafe_op_in_unsafe_fn)]
#![forbid(unsafe_code)]
#![deny(
    clippy::pedantic,
    noop_method_call,
    rust_2018_idioms,
    unused_qualifications
)]
#![warn(unreachable_pub, rustdoc::missing_crate_level_docs)]
#![allow(
    clippy::items_after_statements,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

mod config;
mod error;
mod frequency;
mod ranking;
mod stopwords;
mod summary;
pub mod tokenizer;

pub use crate::{
    config::{Config, ConfigError},
    error::Error,
    frequency::FrequencyTable,
    ranking::{rank_sentences, select_top, RankedSentence},
    stopwords::Stopwords,
    summary::{Summarizer, Summary},
    tokenizer::{
        SentenceSegmenter,
        TokenizationError,
        UnicodeSentenceSegmenter,
        UnicodeWordTokenizer,
        WordTokenizer,
    },
};

/// Summarizes `text` to its `num_sentences` highest scoring sentences.
///
/// All selected sentences are returned, in the order they appear in `text`.
/// Sentences with equal scores are preferred by their position, earlier first.
///
/// Uses the unicode tokenizers and the english stopwords, see [`Summarizer`]
/// to customize them.
///
/// # Errors
///
/// Fails if `text` is empty, if `num_sentences` is zero or if `text` has less
/// than `num_sentences` sentences.
///
/// # Examples
///
/// ```
/// use article_summarizer::summarize;
///
/// let summary = summarize(
///     "The cat sat. The cat ate fish. Dogs bark loudly at night.",
///     1,
/// )
/// .unwrap();
/// assert_eq!(summary, ["The cat ate fish."]);
/// ```
pub fn summarize(text: &str, num_sentences: usize) -> Result<Vec<String>, Error> {
    Summarizer::default()
        .summarize(text, num_sentences)
        .map(Summary::into_texts)
}
