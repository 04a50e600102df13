// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calcsite::{GenerationReport, SiteConfig};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "calcsite")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every calculator page and the sitemap (default)
    Build(BuildArgs),
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Site root holding the catalog; pages and sitemap are written here
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Site configuration YAML (default: <root>/site.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Resolve the site config for `args`.
fn load_config(args: &BuildArgs) -> Result<SiteConfig> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let yaml_path = args.config.clone().or_else(|| {
        let default = root.join("site.yaml");
        default.is_file().then_some(default)
    });

    match yaml_path {
        Some(path) => {
            info!("Using site config {:?}", path);
            SiteConfig::load(root, &path)
                .with_context(|| format!("Failed to load site config {}", path.display()))
        }
        None => Ok(SiteConfig::with_root(root)),
    }
}

fn build_command(args: &BuildArgs, run_date: NaiveDate) -> Result<GenerationReport> {
    let config = load_config(args)?;
    info!("Generating site in {}", display_root(&config.root));
    calcsite::build(&config, run_date)
        .with_context(|| format!("Failed to generate site in {}", config.root.display()))
}

fn display_root(root: &Path) -> String {
    root.canonicalize()
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Dispatch `cli`; a bare `calcsite` is `calcsite build`.
fn run(cli: Cli, run_date: NaiveDate) -> Result<GenerationReport> {
    match cli.command {
        Some(Commands::Build(args)) => build_command(&args, run_date),
        None => build_command(&BuildArgs::default(), run_date),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = run(cli, Utc::now().date_naive())?;
    info!(
        "Generated {} pages and {}",
        report.pages.len(),
        report.sitemap.display()
    );
    Ok(())
}
