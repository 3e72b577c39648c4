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

//! Summarize an online article from the command line.

#![forbid(unsafe_code, unsafe_op_in_unsafe_fn)]
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

pub mod config;
pub mod logging;

use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use article_fetcher::{Fetcher, Source};
use tracing::{debug, info};
use url::Url;

use crate::config::Config;

/// Determines the source from the command line argument.
///
/// Http(s) urls are fetched, files with an `html`/`htm` extension are read as
/// html and all other files as plain text.
pub async fn read_source(source: &str) -> Result<Source, anyhow::Error> {
    if let Ok(url) = Url::parse(source) {
        if matches!(url.scheme(), "http" | "https") {
            return Ok(Source::Url(url));
        }
    }

    let path = Path::new(source);
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read the article from {}", path.display()))?;
    let is_html = path
        .extension()
        .and_then(OsStr::to_str)
        .map_or(false, |extension| {
            extension.eq_ignore_ascii_case("html") || extension.eq_ignore_ascii_case("htm")
        });

    Ok(if is_html {
        Source::Html(content)
    } else {
        Source::PlainText(content)
    })
}

/// Fetches the article from the source and summarizes it.
///
/// Returns the summary sentences in the order they appear in the article.
pub async fn run(config: &Config, source: &str) -> Result<Vec<String>, anyhow::Error> {
    config.validate()?;
    let fetcher = Fetcher::new(&config.fetcher)?;

    let text = read_source(source)
        .await?
        .to_readable_text(&fetcher)
        .await?;
    debug!(length = text.len(), "read article");

    let summary = config
        .summarizer
        .build()
        .summarize(&text, config.summarizer.num_sentences())?
        .into_texts();
    info!(sentences = summary.len(), "summarized article");

    Ok(summary)
}
