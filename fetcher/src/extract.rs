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

use dom_smoothie::Readability;
use scraper::{Html, Selector};
use url::Url;

use crate::{config::Extraction, error::Error};

/// A prepared [`Extraction`].
#[derive(Debug)]
pub(crate) enum Extractor {
    Selector(Selector),
    Readability,
}

impl Extractor {
    pub(crate) fn new(extraction: &Extraction) -> Result<Self, Error> {
        match extraction {
            Extraction::Selector { selector } => Selector::parse(selector)
                .map(Self::Selector)
                .map_err(|error| Error::InvalidSelector {
                    selector: selector.clone(),
                    msg: error.to_string(),
                }),
            Extraction::Readability => Ok(Self::Readability),
        }
    }

    /// Extracts the article text, with all whitespace runs collapsed to single spaces.
    pub(crate) fn extract(&self, html: &str, url: Option<&Url>) -> Result<String, Error> {
        let text = match self {
            Self::Selector(selector) => {
                let document = Html::parse_document(html);
                let texts = document
                    .select(selector)
                    .map(|element| element.text().collect::<String>())
                    .collect::<Vec<_>>();
                texts.join(" ")
            }
            Self::Readability => {
                let mut readability = Readability::new(html, url.map(Url::as_str), None)
                    .map_err(|error| Error::Readability(error.to_string()))?;
                let article = readability
                    .parse()
                    .map_err(|error| Error::Readability(error.to_string()))?;
                article.text_content.to_string()
            }
        };

        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            Err(Error::NoContent)
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use article_test_utils::fixtures::{
        ARTICLE_HTML,
        ARTICLE_HTML_TEXT,
        ARTICLE_SENTENCES,
        HTML_WITHOUT_ARTICLE,
    };

    use super::*;

    fn selector(selector: &str) -> Extractor {
        Extractor::new(&Extraction::Selector {
            selector: selector.into(),
        })
        .unwrap()
    }

    #[test]
    fn test_extract_article_elements() {
        let text = selector("article").extract(ARTICLE_HTML, None).unwrap();
        assert_eq!(text, ARTICLE_HTML_TEXT);
    }

    #[test]
    fn test_extract_custom_selector() {
        let text = selector("aside, nav").extract(ARTICLE_HTML, None).unwrap();
        assert_eq!(text, "Home World Health Subscribe to our newsletter.");
    }

    #[test]
    fn test_extract_without_matches() {
        assert!(matches!(
            selector("article").extract(HTML_WITHOUT_ARTICLE, None),
            Err(Error::NoContent),
        ));
        assert!(matches!(
            selector("article").extract("<article> \n </article>", None),
            Err(Error::NoContent),
        ));
    }

    #[test]
    fn test_invalid_selector() {
        let error = Extractor::new(&Extraction::Selector {
            selector: "<<".into(),
        })
        .unwrap_err();
        assert!(matches!(error, Error::InvalidSelector { selector, .. } if selector == "<<"));
    }

    #[test]
    fn test_extract_readability() {
        let paragraphs = ARTICLE_SENTENCES
            .iter()
            .map(|sentence| format!("<p>{sentence} {sentence}</p>"))
            .collect::<String>();
        let html = format!(
            "<html><head><title>Health</title></head><body>\
             <nav>Home World Health</nav><article>{paragraphs}</article></body></html>"
        );
        let url = Url::parse("https://news.example.com/health/ai").unwrap();

        let text = Extractor::Readability.extract(&html, Some(&url)).unwrap();
        for sentence in ARTICLE_SENTENCES {
            assert!(text.contains(sentence), "{sentence}");
        }
        assert!(!text.contains("Home World Health"));
    }

    #[test]
    fn test_extract_readability_without_content() {
        let html = "<html><head><title>Empty</title></head><body></body></html>";
        assert!(matches!(
            Extractor::Readability.extract(html, None),
            Err(Error::Readability(_) | Error::NoContent),
        ));
    }
}
