//! Info command: dataset statistics

use crate::output::DatasetInfo;
use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let info = DatasetInfo {
        data_dir: ctx.data_dir.display().to_string(),
        people: ctx.dataset.person_count(),
        movies: ctx.dataset.movie_count(),
        distinct_names: ctx.dataset.name_count(),
        load: ctx.summary.clone(),
    };
    print!("{}", info.render(ctx.format)?);
    Ok(())
}
