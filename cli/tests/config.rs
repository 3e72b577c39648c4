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

use article_test_utils::env::{no_env, with_env_guard};
use trycmd::TestCases;

#[test]
fn test_summarize_article_cases() {
    with_env_guard(no_env(), || {
        TestCases::new().case("tests/cmd/*.auto.toml");
    });
}

#[test]
fn test_loading_config_with_env_overrides() {
    with_env_guard(
        [
            ("ARTICLE_SUMMARIZER__LOGGING__LEVEL", "trace"),
            ("ARTICLE_SUMMARIZER__FETCHER__TIMEOUT", "30"),
        ],
        || {
            TestCases::new().case("tests/cmd/env_overrides.toml");
        },
    );
}

#[test]
fn test_loading_config_with_mixed_overrides() {
    with_env_guard(
        [
            ("ARTICLE_SUMMARIZER__FETCHER__RETRY", "1"),
            ("ARTICLE_SUMMARIZER__SUMMARIZER__NUM_SENTENCES", "5"),
        ],
        || {
            TestCases::new().case("tests/cmd/mixed_overrides.toml");
        },
    );
}
