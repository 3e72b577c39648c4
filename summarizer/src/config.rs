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

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{stopwords::Stopwords, summary::Summarizer};

/// Configures how many sentences are kept from the original text.
///
/// Defaults to 4 sentences and the plain english stopwords.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
#[must_use]
pub struct Config {
    num_sentences: usize,
    additional_stopwords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_sentences: 4,
            additional_stopwords: Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, Error)]
pub enum ConfigError {
    /// Invalid number of summary sentences, expected positive value
    NumSentences,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_sentences == 0 {
            return Err(ConfigError::NumSentences);
        }

        Ok(())
    }

    /// The number of sentences of a summary.
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Sets the number of sentences.
    ///
    /// # Errors
    /// Fails if the number is zero.
    pub fn with_num_sentences(mut self, num_sentences: usize) -> Result<Self, ConfigError> {
        self.num_sentences = num_sentences;
        self.validate()?;

        Ok(self)
    }

    /// Words ignored in addition to the english stopwords.
    pub fn additional_stopwords(&self) -> &[String] {
        &self.additional_stopwords
    }

    /// Sets the additional stopwords.
    pub fn with_additional_stopwords(
        mut self,
        words: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.additional_stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Creates a summarizer with the unicode tokenizers.
    pub fn build(&self) -> Summarizer {
        let summarizer = Summarizer::default();
        if self.additional_stopwords.is_empty() {
            summarizer
        } else {
            summarizer.with_stopwords(
                Stopwords::english().with_additional(&self.additional_stopwords),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_zero_sentences_are_invalid() {
        assert!(matches!(
            Config::default().with_num_sentences(0),
            Err(ConfigError::NumSentences),
        ));
        assert_eq!(
            Config::default()
                .with_num_sentences(2)
                .unwrap()
                .num_sentences(),
            2,
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{ "additional_stopwords": ["Said"] }"#).unwrap();
        assert_eq!(config.num_sentences(), 4);
        assert_eq!(config.additional_stopwords(), ["Said"]);
        assert!(serde_json::from_str::<Config>(r#"{ "sentences": 2 }"#).is_err());
    }

    #[test]
    fn test_build_with_additional_stopwords() {
        let text = "Reporters said it said so. The storm hit the coast. The storm was strong.";

        let summary = Config::default().build().summarize(text, 1).unwrap();
        assert_eq!(summary.texts().collect::<Vec<_>>(), ["Reporters said it said so."]);

        let summary = Config::default()
            .with_additional_stopwords(["Said"])
            .build()
            .summarize(text, 1)
            .unwrap();
        assert_eq!(summary.texts().collect::<Vec<_>>(), ["The storm hit the coast."]);
    }
}
