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

use displaydoc::Display;
use thiserror::Error;
use url::Url;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// Invalid fetch timeout, expected positive value
    InvalidTimeout,
    /// Invalid css selector {selector:?}: {msg}
    InvalidSelector { selector: String, msg: String },
    /// Failed to set up the HTTP client: {0}
    ClientSetup(#[source] reqwest::Error),
    /// Only http and https urls can be fetched: {0}
    UnsupportedScheme(Url),
    /// Failed to execute the HTTP request: {0}
    RequestExecution(#[source] reqwest::Error),
    /// Server returned a non-successful status code: {0}
    StatusCode(#[source] reqwest::Error),
    /// Failed to fetch the page content: {0}
    Fetching(#[source] reqwest::Error),
    /// Failed to extract the readable article: {0}
    Readability(String),
    /// The page doesn't contain any article text
    NoContent,
}
