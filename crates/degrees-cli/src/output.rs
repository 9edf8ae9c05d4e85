//! Output formatting utilities

use std::fmt::Write as _;

use serde::Serialize;

use degrees_core::{
    CastGraph, Dataset, LoadSummary, PathResult, Person, PersonId, SearchOutcome, SearchStats,
};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// Serialize as pretty JSON
pub fn format_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(data)?))
}

/// Serialize rows as CSV with a header line
pub fn format_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// A person as shown in reports
#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth,
        }
    }
}

/// One numbered line of a path: two people and the movie they shared
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub from_id: String,
    pub from_name: String,
    pub to_id: String,
    pub to_name: String,
    pub movie_id: String,
    pub movie_title: String,
    pub movie_year: Option<i32>,
}

/// Rendered result of a path search
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub source: PersonSummary,
    pub target: PersonSummary,
    /// connected, not_connected or budget_exceeded
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    pub steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl PathReport {
    /// Resolve every id in the result to display names and titles
    pub fn build(dataset: &Dataset, result: &PathResult, with_stats: bool) -> anyhow::Result<Self> {
        let source = dataset.require_person(&result.source)?;
        let target = dataset.require_person(&result.target)?;

        let (outcome, degrees, steps) = match &result.outcome {
            SearchOutcome::Connected(path) => {
                let mut steps = Vec::with_capacity(path.degrees());
                for (i, (from, step)) in path.hops(&result.source).enumerate() {
                    let from = dataset.require_person(from)?;
                    let to = dataset.require_person(&step.person)?;
                    let movie = dataset.require_movie(&step.movie)?;
                    steps.push(StepReport {
                        index: i + 1,
                        from_id: from.id.to_string(),
                        from_name: from.name.clone(),
                        to_id: to.id.to_string(),
                        to_name: to.name.clone(),
                        movie_id: movie.id.to_string(),
                        movie_title: movie.title.clone(),
                        movie_year: movie.year,
                    });
                }
                ("connected", Some(path.degrees()), steps)
            }
            SearchOutcome::NotConnected => ("not_connected", None, Vec::new()),
            SearchOutcome::BudgetExceeded => ("budget_exceeded", None, Vec::new()),
        };

        Ok(Self {
            source: source.into(),
            target: target.into(),
            outcome,
            degrees,
            steps,
            stats: with_stats.then(|| result.stats.clone()),
        })
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => format_json(self),
            OutputFormat::Csv => format_csv(&self.csv_rows()),
            OutputFormat::Table => Ok(self.render_table()),
        }
    }

    // A report without steps still gets one line so the outcome shows
    fn csv_rows(&self) -> Vec<CsvStepRow<'_>> {
        if self.steps.is_empty() {
            return vec![CsvStepRow {
                outcome: self.outcome,
                index: None,
                from_id: None,
                from_name: None,
                to_id: None,
                to_name: None,
                movie_id: None,
                movie_title: None,
                movie_year: None,
            }];
        }
        self.steps
            .iter()
            .map(|step| CsvStepRow {
                outcome: self.outcome,
                index: Some(step.index),
                from_id: Some(step.from_id.as_str()),
                from_name: Some(step.from_name.as_str()),
                to_id: Some(step.to_id.as_str()),
                to_name: Some(step.to_name.as_str()),
                movie_id: Some(step.movie_id.as_str()),
                movie_title: Some(step.movie_title.as_str()),
                movie_year: step.movie_year,
            })
            .collect()
    }

    fn render_table(&self) -> String {
        let mut out = String::new();
        match self.degrees {
            Some(degrees) => {
                let _ = writeln!(out, "{} degrees of separation.", degrees);
                for step in &self.steps {
                    let _ = writeln!(
                        out,
                        "{}: {} and {} starred in {}",
                        step.index, step.from_name, step.to_name, step.movie_title
                    );
                }
            }
            None if self.outcome == "budget_exceeded" => {
                let _ = writeln!(out, "Search budget exceeded before a connection was found.");
            }
            None => {
                let _ = writeln!(out, "Not connected.");
            }
        }
        if let Some(stats) = &self.stats {
            let _ = writeln!(
                out,
                "Stats: expanded {} people, examined {} links, deepest level {}",
                stats.nodes_expanded, stats.edges_examined, stats.max_depth_reached
            );
        }
        out
    }
}

#[derive(Serialize)]
struct CsvStepRow<'a> {
    outcome: &'a str,
    index: Option<usize>,
    from_id: Option<&'a str>,
    from_name: Option<&'a str>,
    to_id: Option<&'a str>,
    to_name: Option<&'a str>,
    movie_id: Option<&'a str>,
    movie_title: Option<&'a str>,
    movie_year: Option<i32>,
}

/// One co-star of a person
#[derive(Debug, Clone, Serialize)]
pub struct NeighborReport {
    pub movie_id: String,
    pub movie_title: String,
    pub movie_year: Option<i32>,
    pub person_id: String,
    pub person_name: String,
}

/// Co-stars of `person`, self links removed, ordered by movie then person
pub fn neighbor_reports(dataset: &Dataset, person: &PersonId) -> anyhow::Result<Vec<NeighborReport>> {
    let mut reports = Vec::new();
    for step in dataset.neighbors(person) {
        if &step.person == person {
            continue;
        }
        let movie = dataset.require_movie(&step.movie)?;
        let co_star = dataset.require_person(&step.person)?;
        reports.push(NeighborReport {
            movie_id: movie.id.to_string(),
            movie_title: movie.title.clone(),
            movie_year: movie.year,
            person_id: co_star.id.to_string(),
            person_name: co_star.name.clone(),
        });
    }
    Ok(reports)
}

pub fn render_neighbors(
    person: &Person,
    reports: &[NeighborReport],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(&reports),
        OutputFormat::Csv => format_csv(reports),
        OutputFormat::Table => {
            let mut out = String::new();
            if reports.is_empty() {
                let _ = writeln!(out, "{} has no co-stars.", person.name);
                return Ok(out);
            }
            let _ = writeln!(out, "Co-stars of {} ({} links):", person.name, reports.len());
            for report in reports {
                let year = report
                    .movie_year
                    .map(|y| format!(" ({})", y))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "  {} in {}{}",
                    report.person_name, report.movie_title, year
                );
            }
            Ok(out)
        }
    }
}

/// Dataset statistics shown by `degrees info`
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub data_dir: String,
    pub people: usize,
    pub movies: usize,
    pub distinct_names: usize,
    pub load: LoadSummary,
}

impl DatasetInfo {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => format_json(self),
            OutputFormat::Csv => format_csv(std::slice::from_ref(&self.flat())),
            OutputFormat::Table => {
                let mut out = String::new();
                let _ = writeln!(out, "Dataset: {}", self.data_dir);
                let _ = writeln!(out, "  People: {}", self.people);
                let _ = writeln!(out, "  Movies: {}", self.movies);
                let _ = writeln!(out, "  Distinct names: {}", self.distinct_names);
                let _ = writeln!(out, "  Star links: {}", self.load.stars);
                let _ = writeln!(out, "  Dropped star rows: {}", self.load.dropped_stars);
                let _ = writeln!(
                    out,
                    "  Duplicate rows: {} people, {} movies, {} stars",
                    self.load.duplicate_people, self.load.duplicate_movies, self.load.duplicate_stars
                );
                Ok(out)
            }
        }
    }

    // csv cannot serialize nested structs
    fn flat(&self) -> FlatDatasetInfo<'_> {
        FlatDatasetInfo {
            data_dir: &self.data_dir,
            people: self.people,
            movies: self.movies,
            distinct_names: self.distinct_names,
            stars: self.load.stars,
            dropped_stars: self.load.dropped_stars,
            duplicate_people: self.load.duplicate_people,
            duplicate_movies: self.load.duplicate_movies,
            duplicate_stars: self.load.duplicate_stars,
        }
    }
}

#[derive(Serialize)]
struct FlatDatasetInfo<'a> {
    data_dir: &'a str,
    people: usize,
    movies: usize,
    distinct_names: usize,
    stars: usize,
    dropped_stars: usize,
    duplicate_people: usize,
    duplicate_movies: usize,
    duplicate_stars: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::{Movie, PathFinder, PathQuery};

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("A", "Alice").with_birth(Some(1970)));
        builder.add_person(Person::new("B", "Bob"));
        builder.add_person(Person::new("C", "Carol"));
        builder.add_person(Person::new("D", "Dave"));
        builder
            .add_cast(Movie::new("M1", "First").with_year(Some(2001)), &["A", "B"])
            .add_cast(Movie::new("M2", "Second, Part Two"), &["B", "C"]);
        builder.build()
    }

    fn report(dataset: &Dataset, source: &str, target: &str, stats: bool) -> PathReport {
        let result = PathFinder::new(dataset)
            .execute(&PathQuery::new(source, target))
            .unwrap();
        PathReport::build(dataset, &result, stats).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_table_lists_numbered_steps() {
        let dataset = create_test_dataset();
        let text = report(&dataset, "A", "C", false)
            .render(OutputFormat::Table)
            .unwrap();

        assert_eq!(
            text,
            "2 degrees of separation.\n\
             1: Alice and Bob starred in First\n\
             2: Bob and Carol starred in Second, Part Two\n"
        );
    }

    #[test]
    fn test_table_not_connected() {
        let dataset = create_test_dataset();
        let text = report(&dataset, "A", "D", false)
            .render(OutputFormat::Table)
            .unwrap();
        assert_eq!(text, "Not connected.\n");
    }

    #[test]
    fn test_table_zero_degrees_with_stats() {
        let dataset = create_test_dataset();
        let text = report(&dataset, "A", "A", true)
            .render(OutputFormat::Table)
            .unwrap();

        assert!(text.starts_with("0 degrees of separation.\n"));
        assert!(text.contains("Stats: expanded 0 people"));
    }

    #[test]
    fn test_json_report() {
        let dataset = create_test_dataset();
        let text = report(&dataset, "A", "C", false)
            .render(OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["outcome"], "connected");
        assert_eq!(value["degrees"], 2);
        assert_eq!(value["source"]["name"], "Alice");
        assert_eq!(value["steps"][1]["movie_title"], "Second, Part Two");
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn test_csv_quotes_titles() {
        let dataset = create_test_dataset();
        let text = report(&dataset, "A", "C", false)
            .render(OutputFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "outcome,index,from_id,from_name,to_id,to_name,movie_id,movie_title,movie_year"
        );
        assert_eq!(lines[1], "connected,1,A,Alice,B,Bob,M1,First,2001");
        assert_eq!(lines[2], "connected,2,B,Bob,C,Carol,M2,\"Second, Part Two\",");
    }

    #[test]
    fn test_csv_keeps_outcome_without_steps() {
        let dataset = create_test_dataset();

        let text = report(&dataset, "A", "D", false)
            .render(OutputFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("outcome,index,"));
        assert_eq!(lines[1], "not_connected,,,,,,,,");

        let text = report(&dataset, "A", "A", false)
            .render(OutputFormat::Csv)
            .unwrap();
        assert_eq!(text.lines().nth(1), Some("connected,,,,,,,,"));
    }

    #[test]
    fn test_neighbor_reports_skip_self() {
        let dataset = create_test_dataset();
        let reports = neighbor_reports(&dataset, &PersonId::from("B")).unwrap();

        let names: Vec<_> = reports.iter().map(|r| r.person_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }
}
