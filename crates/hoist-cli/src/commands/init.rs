//! `hoist init`: write a new hoist.yml.

use hoist_core::domain::{SUPPORTED_VERSION, Service, Services, Stack, Template};
use tracing::instrument;

use crate::{cli::InitArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Build a manifest from the arguments and write it.
///
/// The manifest is validated before anything touches the disk, so an invalid
/// stack or service name never leaves a file behind.
#[instrument(skip_all)]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let dir = super::resolve_dir(args.dir.clone(), &config);
    let force = args.force;
    let template = template_from_args(args);

    let outcome = super::manifest_service().init(&dir, template, force)?;

    let path = outcome.path.display();
    if outcome.replaced {
        output.warning(&format!("Replaced existing {path}"))?;
    } else {
        output.success(&format!("Created {path}"))?;
    }
    Ok(())
}

fn template_from_args(args: InitArgs) -> Template {
    let mut services = Services::new();
    if let Some(name) = args.service {
        let path = args.path.unwrap_or_else(|| ".".into());
        services.insert(name, Service::new(args.kind.unwrap_or_default(), path));
    }
    Template::new(SUPPORTED_VERSION, Stack::new(args.stack), services)
}
