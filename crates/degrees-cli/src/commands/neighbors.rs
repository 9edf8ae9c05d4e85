//! Neighbors command: everyone who starred with a person

use clap::Args;

use crate::commands::lookup::resolve_name;
use crate::output::{neighbor_reports, render_neighbors};
use crate::AppContext;

#[derive(Args)]
pub struct NeighborsArgs {
    /// Person name
    pub name: String,

    /// Person id to use when the name is ambiguous
    #[arg(long)]
    pub id: Option<String>,
}

pub fn run(args: &NeighborsArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let person_id = resolve_name(&ctx.dataset, &args.name, args.id.as_deref(), "--id")?;
    let person = ctx.dataset.require_person(&person_id)?;

    let reports = neighbor_reports(&ctx.dataset, &person_id)?;
    tracing::info!("{} has {} co-star links", person.name, reports.len());

    print!("{}", render_neighbors(person, &reports, ctx.format)?);
    Ok(())
}
