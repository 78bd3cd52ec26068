//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::board::BoardArgs;
use crate::cli::commands::init::InitArgs;
use crate::cli::commands::list::ListArgs;
use crate::cli::commands::submit::{AlertArgs, HelplineArgs, ShelterArgs, VolunteerArgs};

#[derive(Parser, Debug)]
#[command(name = "reliefhub")]
#[command(about = "Reliefhub - disaster relief board client", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file to use instead of .reliefhub/config.yaml
    #[arg(short, long, global = true, env = "RELIEFHUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the configured one
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration to .reliefhub/config.yaml
    Init(InitArgs),

    /// Load every collection and show the whole board
    Board(BoardArgs),

    /// List one collection as a table
    List(ListArgs),

    /// Post a public alert
    Alert(AlertArgs),

    /// Add an emergency helpline
    Helpline(HelplineArgs),

    /// Add a shelter or other safe location
    Shelter(ShelterArgs),

    /// Register as a volunteer
    Volunteer(VolunteerArgs),

    /// Insert sample records into collections that are still empty
    Seed,
}

/// Record kind selector for `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Alerts,
    Helplines,
    SafeLocations,
    Volunteers,
}
