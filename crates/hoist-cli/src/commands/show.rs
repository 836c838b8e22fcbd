//! `hoist show`: print the canonical form of a valid manifest.

use tracing::instrument;

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = super::resolve_dir(args.dir, &config);

    let service = super::manifest_service();
    let template = service.load(&dir)?;

    output.data(&service.render(&template))?;
    Ok(())
}
