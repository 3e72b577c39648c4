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

use serde::{Deserialize, Serialize};

mod serde_duration_as_seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Request timeout in seconds.
    #[serde(with = "serde_duration_as_seconds")]
    pub timeout: Duration,

    /// The number of retries in case of a timeout.
    pub retry: usize,

    /// User agent sent with each request.
    pub user_agent: String,

    /// How the article text is taken from the page.
    pub extraction: Extraction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retry: 0,
            user_agent: concat!("article-fetcher/", env!("CARGO_PKG_VERSION")).into(),
            extraction: Extraction::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(tag = "extractor", rename_all = "snake_case")]
pub enum Extraction {
    /// Joins the text of all elements matching the css selector.
    Selector {
        #[serde(default = "default_selector")]
        selector: String,
    },
    /// Runs the readability algorithm of Mozilla.
    Readability,
}

fn default_selector() -> String {
    "article".into()
}

impl Default for Extraction {
    fn default() -> Self {
        Self::Selector {
            selector: default_selector(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_extraction() {
        let extraction: Extraction =
            serde_json::from_value(json!({ "extractor": "selector" })).unwrap();
        assert_eq!(extraction, Extraction::default());

        let extraction: Extraction =
            serde_json::from_value(json!({ "extractor": "selector", "selector": "main p" }))
                .unwrap();
        assert_eq!(
            extraction,
            Extraction::Selector {
                selector: "main p".into(),
            },
        );

        let extraction: Extraction =
            serde_json::from_value(json!({ "extractor": "readability" })).unwrap();
        assert_eq!(extraction, Extraction::Readability);
    }

    #[test]
    fn test_deserialize_timeout_in_seconds() {
        let config: Config = serde_json::from_value(json!({ "timeout": 3, "retry": 2 })).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.retry, 2);
        assert_eq!(config.extraction, Extraction::default());
    }
}
