// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, RunArgs};
use crate::algorithm::{AlgorithmConfig, AlgorithmRegistry};
use crate::config::RunnerConfig;
use crate::engine::{RunReport, RunnerBuilder};
use crate::ui::progress::ProgressSpinner;
use crate::utils::logging::{scoped_timer, LoggingUtils};
use anyhow::Context;
use colored::Colorize;
use std::sync::Arc;

pub struct CommandHandler {
    registry: Arc<AlgorithmRegistry>,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self::with_registry(Arc::new(AlgorithmRegistry::with_builtins()))
    }

    pub fn with_registry(registry: Arc<AlgorithmRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        match args.command {
            Command::Run(ref run_args) => {
                let config = self.runner_config(run_args)?;
                self.setup_logging(&args, Some(config.log_level.as_str()))?;
                self.handle_run(run_args, config, args.quiet, args.json_output)
            }
            Command::List => {
                self.setup_logging(&args, None)?;
                self.handle_list(args.json_output)
            }
        }
    }

    fn setup_logging(&self, args: &Args, configured: Option<&str>) -> anyhow::Result<()> {
        let name = args.log_level.as_deref().or(configured).unwrap_or("info");
        let level = LoggingUtils::level_from_str(name);

        match &args.log_file {
            Some(path) => LoggingUtils::init_logger_with_file(level, path)
                .with_context(|| format!("Failed to open log file {:?}", path))?,
            None => LoggingUtils::init_logger(level, !args.no_color),
        }

        Ok(())
    }

    fn runner_config(&self, args: &RunArgs) -> anyhow::Result<RunnerConfig> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let mut config = match &args.config {
            Some(path) => RunnerConfig::load(path)
                .with_context(|| format!("Failed to load runner config {:?}", path))?,
            None => RunnerConfig::default(),
        };

        if let Some(iterations) = args.iterations {
            config.default_iterations = iterations;
        }
        if let Some(poll_ms) = args.poll_ms {
            config.poll_interval_ms = poll_ms;
        }
        if let Some(deadline_ms) = args.deadline_ms {
            config.deadline_ms = Some(deadline_ms);
        }
        if args.no_progress {
            config.show_progress = false;
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    fn handle_run(
        &self,
        args: &RunArgs,
        config: RunnerConfig,
        quiet: bool,
        json_output: bool,
    ) -> anyhow::Result<()> {
        let algorithm = AlgorithmConfig::load(&args.algorithm)
            .with_context(|| format!("Failed to load algorithm config {:?}", args.algorithm))?;
        let algorithm_type = algorithm.algorithm_type().to_string();

        let mut runner = RunnerBuilder::new()
            .with_config(config.clone())
            .with_factory(self.registry.clone())
            .with_algorithm(algorithm)
            .build()
            .with_context(|| format!("Failed to set up algorithm {}", algorithm_type))?;

        let spinner = if config.show_progress && !quiet && !json_output {
            ProgressSpinner::new(&format!("Running {}...", algorithm_type))
        } else {
            ProgressSpinner::hidden()
        };

        let report = {
            let _timer = scoped_timer(&format!("{} run", algorithm_type));
            runner.run_with(|event| {
                let suffix = if event.abort_requested { " (aborting)" } else { "" };
                spinner.set_message(&format!(
                    "Running {}... poll {}{}",
                    algorithm_type, event.polls, suffix
                ));
            })?
        };

        if report.abort_requested {
            spinner.warning(&format!("{} stopped early", algorithm_type));
        } else {
            spinner.success(&format!("{} finished", algorithm_type));
        }

        if json_output {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else if !quiet {
            print_report(&report);
        }

        Ok(())
    }

    fn handle_list(&self, json_output: bool) -> anyhow::Result<()> {
        let types = self.registry.types();

        if json_output {
            println!("{}", serde_json::to_string_pretty(&types)?);
            return Ok(());
        }

        println!("{}", "Registered algorithms:".cyan().bold());
        for name in types {
            println!("  {} {}", "-".dimmed(), name);
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn print_report(report: &RunReport) {
    let status = if report.abort_requested {
        "aborted".yellow().bold()
    } else {
        "completed".green().bold()
    };

    println!("{} {} {}", "[+]".green(), report.algorithm.bold(), status);
    println!("  Iterations requested: {}", report.iterations_requested);
    println!("  Polls: {}", report.polls);
    println!("  Elapsed: {}ms", report.elapsed_ms);

    for (key, value) in &report.information {
        println!("  {}: {}", key.cyan(), value);
    }
}
