//! Config command

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use vta_core::config::HierarchicalConfigLoader;
use vta_core::types::ScaffoldConfig;

use crate::cli::{ConfigCommands, ConfigShowArgs};

pub fn run(cmd: ConfigCommands, config_file: Option<Utf8PathBuf>) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => show(args, config_file),
    }
}

/// Resolve configuration from defaults, user files and the environment
pub fn load(config_file: Option<Utf8PathBuf>) -> Result<ScaffoldConfig> {
    let loader = HierarchicalConfigLoader::new()
        .context("Failed to locate the vta configuration directory")?
        .with_config_file(config_file);
    loader.load().context("Failed to load configuration")
}

fn show(args: ConfigShowArgs, config_file: Option<Utf8PathBuf>) -> Result<()> {
    let config = load(config_file)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", serde_yaml_ng::to_string(&config)?);
    }

    Ok(())
}
