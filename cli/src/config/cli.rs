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

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Summarize an online article to its most representative sentences.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub(super) struct Args {
    /// Url of the article, or path to a local html or plain text file.
    #[arg(required_unless_present = "print_config")]
    pub(super) source: Option<String>,

    /// Number of sentences of the summary.
    ///
    /// This setting is prioritized over settings through
    /// the config and environment.
    #[arg(short = 'n', long = "sentences")]
    pub(super) sentences: Option<usize>,

    /// File to log to additionally to logging to stderr.
    #[arg(short, long)]
    pub(super) log_file: Option<PathBuf>,

    /// Use given configuration file.
    ///
    /// Instead of a path "inline" toml configuration file can also be
    /// passed in by prefixing it with `inline:`.
    #[arg(short, long)]
    pub(super) config: Option<String>,

    /// Print the config and exit instead of summarizing
    #[arg(long)]
    pub(super) print_config: bool,
}

impl Args {
    pub(super) fn to_config_overrides(&self) -> impl Serialize {
        let mut map = Map::new();
        if let Some(sentences) = self.sentences {
            map.insert(
                String::from("summarizer"),
                json!({ "num_sentences": sentences }),
            );
        }
        if let Some(log_file) = &self.log_file {
            map.insert(String::from("logging"), json!({ "file": log_file }));
        }

        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_source_is_required() {
        assert!(Args::try_parse_from(["summarize-article"]).is_err());
        assert!(Args::try_parse_from(["summarize-article", "--print-config"]).is_ok());
    }

    #[test]
    fn test_config_overrides() {
        let args = Args::try_parse_from([
            "summarize-article",
            "-n",
            "3",
            "--log-file",
            "summary.log",
            "https://news.example.com/health/ai",
        ])
        .unwrap();
        assert_eq!(
            args.source.as_deref(),
            Some("https://news.example.com/health/ai"),
        );
        assert_eq!(
            serde_json::to_value(args.to_config_overrides()).unwrap(),
            json!({
                "summarizer": { "num_sentences": 3 },
                "logging": { "file": "summary.log" },
            }),
        );
    }

    #[test]
    fn test_no_config_overrides() {
        let args = Args::try_parse_from(["summarize-article", "article.txt"]).unwrap();
        assert_eq!(
            serde_json::to_value(args.to_config_overrides()).unwrap(),
            json!({}),
        );
    }
}
