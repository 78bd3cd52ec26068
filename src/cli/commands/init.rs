//! Implementation of the `reliefhub init` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::config::CONFIG_DIR;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.success {
            format!("{}\n\nConfiguration written to {}", self.message, self.config_path.display())
        } else {
            self.message.clone()
        }
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let output_data = write_default_config(&args.path, args.force).await?;
    output(&output_data, json_mode);
    Ok(())
}

/// Write the default configuration under `root`, keeping an existing file
/// unless `force` is set.
pub async fn write_default_config(root: &Path, force: bool) -> Result<InitOutput> {
    let config_dir = root.join(CONFIG_DIR);
    let config_path = config_dir.join("config.yaml");

    if config_path.exists() && !force {
        return Ok(InitOutput {
            success: false,
            message: "Project already initialized. Use --force to overwrite.".to_string(),
            config_path,
        });
    }

    fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let yaml = serde_yaml::to_string(&Config::default())
        .context("Failed to serialize default configuration")?;
    fs::write(&config_path, yaml)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(InitOutput {
        success: true,
        message: if force {
            "Project reinitialized successfully.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        config_path,
    })
}
