// Fri Oct 16 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "algo-runner")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Run iterative algorithms on a background worker with polling and abort", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Defaults to the runner config's level, then "info".
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub json_output: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Run(RunArgs),
    List,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Algorithm configuration (JSON with "type" and "options").
    #[arg(short, long)]
    pub algorithm: PathBuf,

    /// Runner configuration (JSON). Flags below override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub iterations: Option<u32>,

    #[arg(long)]
    pub poll_ms: Option<u64>,

    #[arg(long)]
    pub deadline_ms: Option<u64>,

    #[arg(long)]
    pub no_progress: bool,
}

impl RunArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.algorithm.exists() {
            return Err(format!("Algorithm config does not exist: {:?}", self.algorithm));
        }
        if let Some(config) = &self.config {
            if !config.exists() {
                return Err(format!("Runner config does not exist: {:?}", config));
            }
        }
        if self.poll_ms == Some(0) {
            return Err("--poll-ms must be at least 1".to_string());
        }
        if self.deadline_ms == Some(0) {
            return Err("--deadline-ms must be at least 1".to_string());
        }
        Ok(())
    }
}
