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

mod cli;

use std::{fmt::Display, path::Path, process::exit};

use clap::{CommandFactory, Parser};
use derive_more::AsRef;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use self::cli::Args;
use crate::logging;

/// Prefix of the environment variables the config is read from.
pub const APPLICATION_NAME: &str = "ARTICLE_SUMMARIZER";

#[derive(AsRef, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub logging: logging::Config,
    pub fetcher: article_fetcher::Config,
    pub summarizer: article_summarizer::Config,
}

impl Config {
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.summarizer.validate()?;

        Ok(())
    }
}

/// The loaded config together with the source to summarize.
#[derive(Debug)]
pub struct Invocation {
    pub config: Config,
    pub source: String,
}

/// Loads the config.
///
/// # Panic/Program Exit
///
/// In case of `--help`, `--print-config` and failure
/// this functions will not return normally but terminate
/// the program normally instead.
pub fn load(application_names: impl IntoIterator<Item = impl Display>) -> Invocation {
    load_with_parsed_args(application_names, Args::parse())
}

fn load_with_parsed_args(
    application_names: impl IntoIterator<Item = impl Display>,
    mut cli_args: Args,
) -> Invocation {
    let config = cli_args.config.take();
    let config: Config = match load_config(
        application_names,
        config.as_deref(),
        cli_args.to_config_overrides(),
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            Args::command().print_help().ok();
            exit(1);
        }
    };

    if cli_args.print_config {
        match serde_json::to_string_pretty(&config) {
            Ok(config) => {
                println!("{config}");
                exit(0);
            }
            Err(err) => {
                eprintln!("Error: {err}");
                exit(1);
            }
        }
    }

    let Some(source) = cli_args.source else {
        eprintln!("Error: missing the article source");
        Args::command().print_help().ok();
        exit(1);
    };

    Invocation { config, source }
}

/// Load the configuration into given type.
///
/// # Load order/priority
///
/// This will by ascending priority load:
///
/// 1. `./config.toml` or specified toml config file
/// 2. `./.env`
/// 3. `./.env.local`
/// 4. process environment
/// 5. options passed through `update_with`
///
/// Config values loaded from higher priority sources override such from lower
/// priority sources. E.g. values defined in `update_with` override values
/// from any other source.
///
/// # Env and .env
///
/// Environment variables from `.env` and `.env.local` will be loaded into the process
/// environment if they don't already exist there (keeping priority as described above).
///
/// Only environment variables which start with one of the names passed in
/// `application_names` followed by `__` will be considered (case insensitive).
///
/// Env variable are converted into a config path by splitting it at `__` (and stripping
/// the application name). E.g. `ARTICLE_SUMMARIZER__FETCHER__TIMEOUT=12` will be treated
/// like the json `{ "fetcher": { "timeout": 12 } }` wrt. deserializing the config.
fn load_config<U>(
    application_names: impl IntoIterator<Item = impl Display>,
    config: Option<&str>,
    update_with: U,
) -> Result<Config, figment::Error>
where
    U: Serialize,
{
    // the order must be from highest to lowest priority
    // or else it won't work correctly
    load_dotenv(".env.local")?;
    load_dotenv(".env")?;

    let mut figment = Figment::new().join(Serialized::defaults(update_with));

    for name in application_names {
        figment = figment.join(Env::prefixed(&format!("{name}__")).split("__"));
    }

    let provider = if let Some(content_or_path) = config {
        if let Some(content) = content_or_path.strip_prefix("inline:") {
            Some(Toml::string(content))
        } else {
            let path = Path::new(content_or_path);
            if path.is_file() {
                Some(Toml::file(path))
            } else {
                return Err(figment::Error::from(format!(
                    "Config file missing or not a file: {}",
                    path.display()
                )));
            }
        }
    } else {
        // only the current dir, figment would search parent dirs too
        let default_file = Path::new("config.toml");
        default_file.is_file().then(|| Toml::file(default_file))
    };

    if let Some(provider) = provider {
        figment = figment.join(provider);
    }

    figment.extract().map_err(Into::into)
}

fn load_dotenv(file_name: &str) -> Result<(), figment::Error> {
    match dotenvy::from_filename(file_name) {
        Err(error) if !error.not_found() => {
            Err(figment::Error::from(error.to_string()).with_path(file_name))
        }
        _ => Ok(()),
    }
}
