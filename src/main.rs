//! Main entry point for the `fcl` CLI application.
//!
//! `fcl` deletes files older than `--mtime` days and/or bigger than `--size`
//! megabytes under `--path`, skipping anything listed in `--skip`.
//!
//! # Flow
//! Parse args → init logging → collect files → list (`--check`) or delete
//! → optionally collect and remove empty directories.
//!
//! Collection failures end the run with a non-zero exit status. Individual
//! deletion failures are logged and only lower the reported count.

use anyhow::{Context, Result, bail};
use clap::Parser;
use fcl::cli::{Args, CleanupConfig};
use fcl::output::{render_csv, render_terminal};
use fcl::{collect_deletable, collect_empty_dirs, remove_dirs, remove_files};
use tracing::{debug, info, warn};

fn init_logging(args: &Args) {
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .without_time()
        .with_ansi(!args.no_colors)
        .with_writer(std::io::stdout)
        .init();
}

fn run(args: &Args, config: &CleanupConfig) -> Result<()> {
    let root = &config.root;
    debug!("Working dir: {}", root.display());
    if config.thresholds.has_age() {
        debug!("Searching files older than {:?}", config.thresholds.max_age);
    }
    if config.thresholds.has_size() {
        debug!("Searching files bigger than {} bytes", config.thresholds.min_size);
    }

    let to_delete = collect_deletable(root, &config.thresholds, &config.exclusions)
        .context("Can't get files to delete")?;

    if to_delete.is_empty() {
        info!("No files found to delete");
    } else {
        info!("Found {} files to delete.", to_delete.len());
    }

    if args.check {
        if !to_delete.is_empty() {
            render_terminal(&to_delete);
        }
        if let Some(output) = &args.output {
            render_csv(&to_delete, output)?;
        }
        return Ok(());
    }

    if !to_delete.is_empty() {
        let report = remove_files(&to_delete);
        info!("Deleted {} files", report.deleted);
        if !report.is_clean() {
            warn!("Failed to delete {} files", report.failures.len());
        }
    }

    if args.cleanup_empty_dirs {
        let empty_dirs = collect_empty_dirs(root, &config.exclusions)
            .context("Can't get empty dirs to delete")?;
        info!("Found {} empty dirs to delete.", empty_dirs.len());
        let report = remove_dirs(&empty_dirs);
        info!("Deleted {} dirs", report.deleted);
        if !report.is_clean() {
            warn!("Failed to delete {} dirs", report.failures.len());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = args.to_config()?;
    if config.root.exists() && !config.root.is_dir() {
        bail!("{} is not a directory", config.root.display());
    }

    run(&args, &config)
}
