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

use std::{
    env,
    ffi::{OsStr, OsString},
    sync::Mutex,
};

/// Prefix of all environment variables the summarizer binary reads its config from.
pub const ENV_PREFIX: &str = "ARTICLE_SUMMARIZER__";

/// Runs `test` with exactly the given config variables set.
///
/// Config variables from the surrounding environment are removed first. Tests
/// using this are serialized, as the process environment is shared.
pub fn with_env_guard(
    vars: impl IntoIterator<Item = (impl AsRef<OsStr>, impl AsRef<OsStr>)>,
    test: impl FnOnce(),
) {
    static GUARD: Mutex<()> = Mutex::new(());

    let guard = GUARD.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_config_vars();
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test();

    clear_config_vars();
    drop(guard);
}

/// No config variables at all.
pub fn no_env() -> Vec<(OsString, OsString)> {
    Vec::new()
}

fn clear_config_vars() {
    for (key, _) in env::vars_os() {
        if key
            .to_str()
            .map_or(false, |key| key.to_ascii_uppercase().starts_with(ENV_PREFIX))
        {
            env::remove_var(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_guard_sets_and_clears_vars() {
        env::set_var("ARTICLE_SUMMARIZER__LOGGING__LEVEL", "trace");
        with_env_guard([("ARTICLE_SUMMARIZER__FETCHER__RETRY", "2")], || {
            assert!(env::var_os("ARTICLE_SUMMARIZER__LOGGING__LEVEL").is_none());
            assert_eq!(env::var("ARTICLE_SUMMARIZER__FETCHER__RETRY").unwrap(), "2");
        });
        assert!(env::var_os("ARTICLE_SUMMARIZER__FETCHER__RETRY").is_none());
    }
}
