//! `hoist validate`: load a manifest and report every problem.

use hoist_core::application::{ValidationReport, manifest_path};
use tracing::instrument;

use crate::{
    cli::{ReportFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Validate the manifest and print a report.
///
/// Exits successfully only when the manifest is valid. With `--format json`
/// the report goes to stdout either way; the failure itself is still
/// returned so the exit code reflects it.
#[instrument(skip_all)]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = resolve_format(args.format, &config)?;
    let dir = super::resolve_dir(args.dir, &config);

    let service = super::manifest_service();
    let result = service.load(&dir);

    if format == ReportFormat::Json {
        let report = ValidationReport::from_result(manifest_path(&dir), &result);
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::IoError {
            message: format!("Failed to serialise report: {e}"),
            source: e.into(),
        })?;
        output.data(&json)?;
        return result.map(|_| ()).map_err(CliError::from);
    }

    let template = result?;
    output.success(&format!("{} is valid", manifest_path(&dir).display()))?;
    output.detail("stack", &template.stack.name)?;

    let names: Vec<_> = template.services.iter().map(|(name, _)| name.as_str()).collect();
    if names.is_empty() {
        output.detail("services", "(none)")?;
    } else {
        output.detail("services", &names.join(", "))?;
    }

    Ok(())
}

/// `--format` if given, else the configured default.
fn resolve_format(flag: Option<ReportFormat>, config: &AppConfig) -> CliResult<ReportFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    ReportFormat::from_config(&config.output.format).ok_or_else(|| CliError::ConfigError {
        message: format!(
            "output.format must be 'human' or 'json', got '{}'",
            config.output.format
        ),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(
            resolve_format(Some(ReportFormat::Human), &config).unwrap(),
            ReportFormat::Human
        );
        assert_eq!(resolve_format(None, &config).unwrap(), ReportFormat::Json);
    }

    #[test]
    fn unknown_configured_format_is_config_error() {
        let mut config = AppConfig::default();
        config.output.format = "table".into();
        assert!(matches!(
            resolve_format(None, &config),
            Err(CliError::ConfigError { .. })
        ));
    }
}
