//! Path command: shortest connection between two named people

use clap::Args;

use degrees_core::{PathFinder, PathQuery};

use crate::commands::lookup::resolve_name;
use crate::output::PathReport;
use crate::AppContext;

#[derive(Args)]
pub struct PathArgs {
    /// Name of the first person
    pub source: String,

    /// Name of the second person
    pub target: String,

    /// Person id to use when the first name is ambiguous
    #[arg(long)]
    pub source_id: Option<String>,

    /// Person id to use when the second name is ambiguous
    #[arg(long)]
    pub target_id: Option<String>,

    /// Give up after expanding this many people
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Only accept the target once it is dequeued
    #[arg(long)]
    pub no_early_exit: bool,

    /// Print search statistics
    #[arg(long)]
    pub stats: bool,
}

pub fn run(args: &PathArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let source = resolve_name(
        &ctx.dataset,
        &args.source,
        args.source_id.as_deref(),
        "--source-id",
    )?;
    let target = resolve_name(
        &ctx.dataset,
        &args.target,
        args.target_id.as_deref(),
        "--target-id",
    )?;

    let mut query = PathQuery::new(source, target);
    if let Some(budget) = args.max_expansions.or(ctx.config.max_expansions) {
        query = query.with_budget(budget);
    }
    if args.no_early_exit {
        query = query.without_early_exit();
    }

    tracing::info!(
        "Finding path from {} to {} (budget: {:?})",
        query.source,
        query.target,
        query.max_expansions
    );

    let result = PathFinder::new(&ctx.dataset).execute(&query)?;
    let report = PathReport::build(&ctx.dataset, &result, args.stats)?;
    print!("{}", report.render(ctx.format)?);
    Ok(())
}
