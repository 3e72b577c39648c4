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

//! Setup tracing for the summarizer binary.
//!
//! Logs are written to stderr as stdout is reserved for the summary.

use std::{fs::OpenOptions, io, path::Path};

use derive_more::Deref;
use figment::value::magic::RelativePathBuf;
use serde::{Deserialize, Serialize};
use tracing::{error, Dispatch, Level};
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

mod serde_level_filter {
    use serde::{
        de::{Deserialize, Deserializer, Error},
        ser::{Serialize, Serializer},
    };
    use tracing_subscriber::filter::LevelFilter;

    #[allow(clippy::trivially_copy_pass_by_ref)] // required by serde
    pub(super) fn serialize<S>(level: &LevelFilter, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        level.to_string().serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|level| {
            level
                .parse::<LevelFilter>()
                .map_err(|error| D::Error::custom(error.to_string()))
        })
    }
}

/// Log file path, relative to the config file which set it.
#[derive(Debug, Deref, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LogFile {
    #[serde(serialize_with = "RelativePathBuf::serialize_relative")]
    path: RelativePathBuf,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File to log to in addition to stderr.
    pub file: Option<LogFile>,
    /// Most verbose level which is logged.
    #[serde(with = "serde_level_filter")]
    pub level: LevelFilter,
    /// Log panics before the process aborts.
    pub install_panic_hook: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            level: LevelFilter::INFO,
            install_panic_hook: true,
        }
    }
}

/// Initializes the logging.
///
/// Even though this returns an error if logging was already initialized you
/// should only call this function when you expect it to succeed.
pub fn initialize_global(config: &Config) -> Result<(), TryInitError> {
    let dispatch = create_trace_dispatch(
        config.level,
        config.file.as_ref().map(|file| file.relative()).as_deref(),
    );
    dispatch.try_init()?;
    if config.install_panic_hook {
        init_panic_logging();
    }
    Ok(())
}

fn create_trace_dispatch(level: LevelFilter, file: Option<&Path>) -> Dispatch {
    let subscriber = tracing_subscriber::registry();

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(false);

    // the http client stack is chatty on debug level
    let http_client_no_debug = Targets::new()
        .with_default(level)
        .with_target("hyper", Level::INFO)
        .with_target("reqwest", Level::INFO)
        .with_target("rustls", Level::INFO);

    let file_log = file
        .as_ref()
        .map(|file| {
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(file)
                .map(|writer| {
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .json()
                })
        })
        .transpose()
        .map_err(|error| {
            eprintln!("Setup file logging failed: {error}");
        })
        .ok();

    subscriber
        .with(stderr_log)
        .with(http_client_no_debug)
        .with(file_log)
        .with(level)
        .into()
}

fn init_panic_logging() {
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            error!(message = %panic);
        }
    }));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_level() {
        let config: Config = serde_json::from_value(json!({ "level": "warn" })).unwrap();
        assert_eq!(config.level, LevelFilter::WARN);
        assert!(config.file.is_none());
        assert!(config.install_panic_hook);

        assert!(serde_json::from_value::<Config>(json!({ "level": "loud" })).is_err());
    }

    #[test]
    fn test_serialize_level_roundtrips() {
        let config = Config {
            level: LevelFilter::OFF,
            ..Config::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        let config: Config = serde_json::from_value(value).unwrap();
        assert_eq!(config.level, LevelFilter::OFF);
    }
}
