//! Name to person id resolution shared by commands

use degrees_core::limits::validate_name_query;
use degrees_core::{Dataset, Error, PersonId, Resolution};
use degrees_search::{ExactNameSearch, NameSearch};

/// Resolve a name without prompting.
///
/// `choice` picks one person when the name is ambiguous; `id_flag` names the
/// option that supplies it, for the error message.
pub fn resolve_name(
    dataset: &Dataset,
    name: &str,
    choice: Option<&str>,
    id_flag: &str,
) -> anyhow::Result<PersonId> {
    validate_name_query(name)?;

    let resolution = match (dataset.resolve(name), choice) {
        (resolution @ Resolution::Ambiguous(_), Some(choice)) => {
            return resolution.disambiguate(choice).ok_or_else(|| {
                anyhow::anyhow!("Person not found: no '{}' with id {}", name, choice)
            });
        }
        (resolution, _) => resolution,
    };

    match resolution.into_unique(name) {
        Ok(id) => Ok(id),
        Err(Error::AmbiguousName { name, .. }) => {
            let hits = ExactNameSearch::new().search(&name, dataset)?;
            let mut message = format!(
                "Name '{}' matches {} people; choose one with {}:",
                name,
                hits.len(),
                id_flag
            );
            for hit in &hits {
                message.push_str(&format!(
                    "\n  ID: {}, Name: {}, Birth: {}",
                    hit.person_id,
                    hit.name,
                    hit.birth.map(|b| b.to_string()).unwrap_or_default()
                ));
            }
            anyhow::bail!(message)
        }
        Err(Error::PersonNotFound(name)) => {
            anyhow::bail!("Person not found: {}{}", name, suggestion_hint(dataset, &name))
        }
        Err(e) => Err(e.into()),
    }
}

/// " (did you mean: ...?)" when close names exist, empty otherwise
#[cfg(feature = "fuzzy")]
pub fn suggestion_hint(dataset: &Dataset, name: &str) -> String {
    use degrees_search::FuzzyNameSearch;

    let hits = match FuzzyNameSearch::new().with_limit(3).search(name, dataset) {
        Ok(hits) => hits,
        Err(e) => {
            tracing::debug!("No suggestions for '{}': {}", name, e);
            return String::new();
        }
    };
    if hits.is_empty() {
        return String::new();
    }

    let names: Vec<String> = hits
        .iter()
        .map(|hit| format!("{} ({})", hit.name, hit.person_id))
        .collect();
    format!(" (did you mean: {}?)", names.join(", "))
}

#[cfg(not(feature = "fuzzy"))]
pub fn suggestion_hint(_dataset: &Dataset, _name: &str) -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::Person;

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Chris Evans").with_birth(Some(1981)));
        builder.add_person(Person::new("2", "Chris Evans").with_birth(Some(1966)));
        builder.add_person(Person::new("3", "Tom Hanks"));
        builder.build()
    }

    #[test]
    fn test_unique_name() {
        let dataset = create_test_dataset();
        let id = resolve_name(&dataset, "tom hanks", None, "--id").unwrap();
        assert_eq!(id, PersonId::from("3"));
    }

    #[test]
    fn test_ambiguous_name_lists_candidates() {
        let dataset = create_test_dataset();
        let err = resolve_name(&dataset, "Chris Evans", None, "--source-id").unwrap_err();
        let message = err.to_string();

        assert!(message.contains("matches 2 people"));
        assert!(message.contains("--source-id"));
        assert!(message.contains("ID: 2, Name: Chris Evans, Birth: 1966"));
    }

    #[test]
    fn test_ambiguous_name_with_choice() {
        let dataset = create_test_dataset();
        let id = resolve_name(&dataset, "Chris Evans", Some("1"), "--id").unwrap();
        assert_eq!(id, PersonId::from("1"));

        assert!(resolve_name(&dataset, "Chris Evans", Some("3"), "--id").is_err());
    }

    #[test]
    fn test_not_found() {
        let dataset = create_test_dataset();
        let err = resolve_name(&dataset, "Nobody", None, "--id").unwrap_err();
        assert!(err.to_string().starts_with("Person not found: Nobody"));
    }

    #[cfg(feature = "fuzzy")]
    #[test]
    fn test_not_found_suggests_close_names() {
        let dataset = create_test_dataset();
        let err = resolve_name(&dataset, "Tom Hnks", None, "--id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Person not found: Tom Hnks (did you mean: Tom Hanks (3)?)"
        );
    }
}
