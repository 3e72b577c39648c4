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

use url::Url;

use crate::{error::Error, fetcher::Fetcher};

/// Specifies where the content that needs to be summarized is located.
///
/// Which is either remote (url) or local (html or plain text).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(Url),
    Html(String),
    PlainText(String),
}

impl Source {
    /// Gets the text of the source, fetching and extracting it if necessary.
    pub async fn to_readable_text(&self, fetcher: &Fetcher) -> Result<String, Error> {
        match self {
            Source::Url(url) => fetcher.fetch(url).await,
            Source::Html(html) => fetcher.extract(html, None),
            Source::PlainText(text) => Ok(text.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use article_test_utils::fixtures::{ARTICLE, ARTICLE_HTML, ARTICLE_HTML_TEXT};

    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_plain_text_is_kept() {
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let text = Source::PlainText(ARTICLE.into())
            .to_readable_text(&fetcher)
            .await
            .unwrap();
        assert_eq!(text, ARTICLE);
    }

    #[tokio::test]
    async fn test_html_is_extracted() {
        let fetcher = Fetcher::new(&Config::default()).unwrap();
        let text = Source::Html(ARTICLE_HTML.into())
            .to_readable_text(&fetcher)
            .await
            .unwrap();
        assert_eq!(text, ARTICLE_HTML_TEXT);
    }
}
