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

use crate::tokenizer::TokenizationError;

#[derive(Debug, Display, Error)]
pub enum Error {
    /// The text to summarize is empty
    EmptyText,
    /// Requested a summary without any sentences
    ZeroSentences,
    /// Requested {requested} summary sentences but the document has only {available} sentences
    TooManySentences { requested: usize, available: usize },
    /// {0}
    Tokenization(#[from] TokenizationError),
}

impl Error {
    /// Whether the summarizer was called with arguments it can't work with.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyText | Self::ZeroSentences | Self::TooManySentences { .. }
        )
    }
}
