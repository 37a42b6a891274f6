//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing (in main.rs) apart from the resolution flow so
//! the flow can be driven programmatically with any [TagSource].

use std::path::PathBuf;

use crate::config::{Config, OutputFormat};
use crate::domain::BumpKind;
use crate::error::Result;
use crate::git::{Git2Repository, StaticTags, TagSource};
use crate::resolver::{latest_overall, ResolutionResult, VersionResolver};

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveWorkflowArgs {
    /// Raw bump selector; `None` when neither flag nor environment set it
    pub bump: Option<String>,

    /// Repository to list tags from
    pub repo: PathBuf,

    /// Explicit tag list; replaces repository enumeration when non-empty
    pub tags: Vec<String>,

    /// Overrides the configured output format
    pub format: Option<OutputFormat>,
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Overall latest tag before this release, if any
    pub latest_tag: Option<String>,

    pub resolution: ResolutionResult,

    pub format: OutputFormat,
}

/// Pick the tag source for the given arguments
///
/// A repository that cannot be opened is not fatal: resolution proceeds as
/// if no tags existed.
pub fn tag_source(args: &ResolveWorkflowArgs, config: &Config) -> Box<dyn TagSource> {
    if !args.tags.is_empty() {
        return Box::new(StaticTags::new(args.tags.iter().cloned()));
    }

    match Git2Repository::open(&args.repo) {
        Ok(repo) => Box::new(repo.with_pattern(config.tags.pattern.clone())),
        Err(e) => {
            tracing::warn!("Error fetching tags: {}", e);
            Box::new(StaticTags::default())
        }
    }
}

/// Read the tag snapshot, degrading to an empty list on failure
pub fn collect_tags(source: &dyn TagSource) -> Vec<String> {
    match source.list_release_tags() {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!("Error fetching tags: {}", e);
            Vec::new()
        }
    }
}

/// Resolve the next version
///
/// 1. Validate the bump selector
/// 2. Read the tag snapshot once
/// 3. Run the resolver with the configured bootstrap version
pub fn run_resolve_workflow(
    args: &ResolveWorkflowArgs,
    config: &Config,
    source: &dyn TagSource,
) -> Result<WorkflowResult> {
    let bump = BumpKind::from_selector(args.bump.as_deref())?;
    let resolver = VersionResolver::new(config.bootstrap.parsed()?);

    let tags = collect_tags(source);
    tracing::debug!(count = tags.len(), %bump, "collected tags");

    let latest_tag = latest_overall(&tags).map(|v| v.to_tag());
    let resolution = resolver.resolve(&tags, bump)?;

    Ok(WorkflowResult {
        latest_tag,
        resolution,
        format: args.format.unwrap_or(config.output.format),
    })
}
