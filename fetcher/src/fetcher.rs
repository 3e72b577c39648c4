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

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::{config::Config, error::Error, extract::Extractor};

/// Downloads pages and extracts their article text.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
    retry: usize,
    extractor: Extractor,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.timeout.is_zero() {
            return Err(Error::InvalidTimeout);
        }
        let extractor = Extractor::new(&config.extraction)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::ClientSetup)?;

        Ok(Self {
            client,
            timeout: config.timeout,
            retry: config.retry,
            extractor,
        })
    }

    /// Downloads the page and extracts its article text.
    ///
    /// Fails if the page can't be downloaded or has no article text.
    pub async fn fetch(&self, url: &Url) -> Result<String, Error> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::UnsupportedScheme(url.clone()));
        }

        info!(%url, "fetching article");
        let html = self.download(url).await?;
        self.extract(&html, Some(url))
    }

    /// Extracts the article text of an already downloaded page.
    ///
    /// The `url` of the page is used to resolve relative links, if known.
    pub fn extract(&self, html: &str, url: Option<&Url>) -> Result<String, Error> {
        self.extractor.extract(html, url)
    }

    async fn download(&self, url: &Url) -> Result<String, Error> {
        let mut retry = 0;
        let response = loop {
            match self
                .client
                .get(url.clone())
                .timeout(self.timeout)
                .send()
                .await
            {
                Err(error) if error.is_timeout() && retry < self.retry => {
                    retry += 1;
                    warn!(%url, retry, "fetching article timed out, retrying");
                }
                result => {
                    break result
                        .map_err(Error::RequestExecution)?
                        .error_for_status()
                        .map_err(Error::StatusCode)?;
                }
            }
        };

        response.text().await.map_err(Error::Fetching)
    }
}
