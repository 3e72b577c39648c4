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

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The NLTK english stopwords.
const ENGLISH: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// The ascii punctuation characters.
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Right single quotation mark, commonly used as apostrophe in articles.
const RIGHT_SINGLE_QUOTE: &str = "’";

static ENGLISH_STOPWORDS: Lazy<Stopwords> = Lazy::new(|| {
    Stopwords::new(
        ENGLISH
            .iter()
            .map(|&word| word.to_owned())
            .chain(PUNCTUATION.chars().map(String::from))
            .chain([RIGHT_SINGLE_QUOTE.to_owned()]),
    )
});

/// Tokens which don't carry content and are ignored for the word frequencies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates stopwords from the given words, they are lowercased.
    pub fn new(words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The english stopwords together with the ascii punctuation and `’`.
    pub fn english() -> &'static Self {
        &ENGLISH_STOPWORDS
    }

    /// Extends a copy of these stopwords with the given words.
    #[must_use]
    pub fn with_additional(&self, words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut extended = self.clone();
        extended.words.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase()),
        );
        extended
    }

    /// Checks if the token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let stopwords = Stopwords::english();
        assert_eq!(stopwords.len(), ENGLISH.len() + PUNCTUATION.len() + 1);
        for word in ["the", "is", "at", "don't", "wouldn't", "s"] {
            assert!(stopwords.contains(word), "{word}");
        }
        for symbol in [".", ",", "'", "\"", "\\", "`", "~", "’"] {
            assert!(stopwords.contains(symbol), "{symbol}");
        }
        for word in ["cat", "fish", "dogs", "The", "‘"] {
            assert!(!stopwords.contains(word), "{word}");
        }
    }

    #[test]
    fn test_additional_stopwords_are_lowercased() {
        let stopwords = Stopwords::english().with_additional(["Said", "WASHINGTON"]);
        assert!(stopwords.contains("said"));
        assert!(stopwords.contains("washington"));
        assert!(stopwords.contains("the"));
        assert_eq!(stopwords.len(), Stopwords::english().len() + 2);
    }

    #[test]
    fn test_empty_stopwords() {
        let stopwords = Stopwords::default();
        assert!(stopwords.is_empty());
        assert!(!stopwords.contains("the"));
    }
}
