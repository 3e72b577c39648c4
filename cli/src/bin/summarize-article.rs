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

use article_summarizer_cli::{
    config::{self, APPLICATION_NAME},
    logging,
    run,
};
use tracing::instrument;

#[tokio::main(flavor = "current_thread")]
#[instrument(err)]
async fn main() -> Result<(), anyhow::Error> {
    let invocation = config::load([APPLICATION_NAME]);
    logging::initialize_global(invocation.config.as_ref())?;

    for sentence in run(&invocation.config, &invocation.source).await? {
        println!("{sentence}");
    }

    Ok(())
}
