//! `hoist config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `hoist config get`.
const KEYS: [&str; 3] = ["output.format", "output.no_color", "manifest.dir"];

pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.data(&lookup(&config, &key)?)?,
        ConfigCommands::List => {
            output.header("Effective configuration")?;
            let table = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("cannot render configuration as TOML: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.data(&table)?;
        }
        ConfigCommands::Path => output.data(&AppConfig::config_path().display().to_string())?,
    }
    Ok(())
}

fn lookup(config: &AppConfig, key: &str) -> CliResult<String> {
    let value = match key {
        "output.format" => config.output.format.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "manifest.dir" => config.manifest.dir.display().to_string(),
        unknown => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key '{unknown}' (known: {})", KEYS.join(", ")),
                source: None,
            });
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(lookup(&cfg, key).is_ok(), "{key}");
        }
        assert_eq!(lookup(&cfg, "output.format").unwrap(), "human");
        assert_eq!(lookup(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(lookup(&cfg, "manifest.dir").unwrap(), ".");
    }

    #[test]
    fn unknown_key_names_the_known_ones() {
        let err = lookup(&AppConfig::default(), "output.colour").unwrap_err();
        let CliError::ConfigError { message, .. } = err else {
            panic!("expected a configuration error");
        };
        assert!(message.contains("output.colour"));
        assert!(message.contains("manifest.dir"));
    }
}
