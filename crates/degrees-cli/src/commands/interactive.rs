//! Interactive prompt: ask for two names and print the connection
//!
//! Prompts share stdout with the report in table format. Other formats send
//! the dialogue to stderr so stdout holds the report alone.

use std::io::{self, BufRead, Write};

use degrees_core::{Dataset, PathFinder, PathQuery, PersonId};

use crate::commands::lookup::suggestion_hint;
use crate::config::Config;
use crate::output::{OutputFormat, PathReport};
use crate::prompt::Prompter;
use crate::{AppContext, Cli};

pub fn run(cli: &Cli, config: Config) -> anyhow::Result<()> {
    let input = io::stdin().lock();
    if cli.output_format(&config) == OutputFormat::Table {
        let mut prompter = Prompter::new(input, io::stdout());
        session(&mut prompter, &mut io::stdout(), cli, config)
    } else {
        let mut prompter = Prompter::new(input, io::stderr());
        session(&mut prompter, &mut io::stdout(), cli, config)
    }
}

fn session<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    report: &mut O,
    cli: &Cli,
    config: Config,
) -> anyhow::Result<()> {
    writeln!(prompter.output(), "Loading data...")?;
    let ctx = AppContext::load(cli, config)?;
    writeln!(prompter.output(), "Data loaded.")?;
    run_with(prompter, report, &ctx)
}

/// Run the dialogue against a loaded dataset, writing the report to `report`
pub fn run_with<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    report: &mut O,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    let source = ask_person(prompter, &ctx.dataset)?;
    let target = ask_person(prompter, &ctx.dataset)?;

    let mut query = PathQuery::new(source, target);
    if let Some(budget) = ctx.config.max_expansions {
        query = query.with_budget(budget);
    }

    let result = PathFinder::new(&ctx.dataset).execute(&query)?;
    let rendered = PathReport::build(&ctx.dataset, &result, false)?.render(ctx.format)?;
    write!(report, "{}", rendered)?;
    report.flush()?;
    Ok(())
}

fn ask_person<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    dataset: &Dataset,
) -> anyhow::Result<PersonId> {
    let name = prompter.ask("Name: ")?.unwrap_or_default();
    match prompter.choose_person(dataset, &name)? {
        Some(id) => Ok(id),
        None => anyhow::bail!("Person not found.{}", suggestion_hint(dataset, &name)),
    }
}
