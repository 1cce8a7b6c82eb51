use std::fs;
use std::path::Path;

use anyhow::Context;
use hanzi_config::Config;

use crate::Cli;

/// Resolve the effective config: file, then environment, then command line
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(&cli.config)?;
    config.apply_env();
    apply_cli(&mut config, cli);

    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

pub fn apply_cli(config: &mut Config, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.paths.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.paths.output = output.clone();
    }
    if let Some(cache) = &cli.cache {
        config.paths.cache = cache.clone();
    }
    if let Some(target) = &cli.target {
        config.translator.to_lang = target.clone();
    }
    if cli.dark {
        config.report.dark_mode = true;
    }
    if cli.offline {
        config.translator.enabled = false;
    }
}

/// Seed `--config` with the effective config. An API key is only kept when
/// the file already held it, so keys from the environment stay out of it.
pub fn init_config(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let from_file = Config::load(&cli.config)?;

    let mut saved = config.clone();
    saved.translator.api_key = from_file.translator.api_key;
    write_config(&cli.config, &saved)
}

/// Save a config as pretty JSON
pub fn write_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}
