use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use next_version::cli::orchestration::{self, ResolveWorkflowArgs};
use next_version::config::{self, OutputFormat};
use next_version::{output, ui};

#[derive(clap::Parser)]
#[command(
    name = "next-version",
    version,
    about = "Compute the next semantic version tag from existing release tags"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "BUMP_TYPE",
        help = "Bump type: alpha, beta, rc, promote_to_final, patch, minor, major"
    )]
    bump: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Repository to read tags from")]
    repo: PathBuf,

    #[arg(
        short,
        long = "tag",
        value_name = "TAG",
        help = "Use this tag instead of reading the repository (repeatable)"
    )]
    tags: Vec<String>,

    #[arg(short, long, value_enum, help = "Output format (overrides config)")]
    format: Option<OutputFormat>,

    #[arg(short, long, help = "Log resolution details to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    ui::init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = ResolveWorkflowArgs {
        bump: args.bump,
        repo: args.repo,
        tags: args.tags,
        format: args.format,
    };

    let source = orchestration::tag_source(&workflow_args, &config);
    let result = orchestration::run_resolve_workflow(&workflow_args, &config, source.as_ref())?;

    let next_tag = &result.resolution.next_tag;
    ui::display_proposed_tag(result.latest_tag.as_deref(), next_tag);
    ui::display_status(&format!("Calculated next version: {}", next_tag));

    output::emit(&result.resolution, result.format)
        .with_context(|| format!("Failed to publish outputs for {}", next_tag))?;

    if result.resolution.is_prerelease {
        ui::display_success(&format!("{} is a prerelease", next_tag));
    } else {
        ui::display_success(&format!("{} is a final release", next_tag));
    }

    Ok(())
}
