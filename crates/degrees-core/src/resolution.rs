//! Name resolution outcomes

use crate::error::Error;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};

/// Result of looking a name up in the name index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "ids", rename_all = "snake_case")]
pub enum Resolution {
    /// Exactly one person carries this name
    Found(PersonId),
    /// Several people share the name; candidates are sorted by id
    Ambiguous(Vec<PersonId>),
    /// No person carries this name
    NotFound,
}

impl Resolution {
    /// Apply a disambiguation choice.
    ///
    /// A unique match resolves regardless of the choice. For an ambiguous
    /// name the choice must be one of the candidates; anything else is
    /// treated as not found.
    pub fn disambiguate(self, choice: &str) -> Option<PersonId> {
        match self {
            Self::Found(id) => Some(id),
            Self::Ambiguous(candidates) => {
                let choice = choice.trim();
                candidates.into_iter().find(|id| id.as_str() == choice)
            }
            Self::NotFound => None,
        }
    }

    /// Candidate ids, empty when not found
    pub fn candidates(&self) -> &[PersonId] {
        match self {
            Self::Found(id) => std::slice::from_ref(id),
            Self::Ambiguous(candidates) => candidates,
            Self::NotFound => &[],
        }
    }

    /// Convert into a single id, reporting ambiguity and absence as errors
    pub fn into_unique(self, name: &str) -> Result<PersonId, Error> {
        match self {
            Self::Found(id) => Ok(id),
            Self::Ambiguous(candidates) => Err(Error::AmbiguousName {
                name: name.to_string(),
                candidates,
            }),
            Self::NotFound => Err(Error::PersonNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambiguous() -> Resolution {
        Resolution::Ambiguous(vec![PersonId::from("1"), PersonId::from("2")])
    }

    #[test]
    fn test_disambiguate_valid_choice() {
        assert_eq!(ambiguous().disambiguate(" 2 "), Some(PersonId::from("2")));
    }

    #[test]
    fn test_disambiguate_invalid_choice_is_not_found() {
        assert_eq!(ambiguous().disambiguate("3"), None);
        assert_eq!(ambiguous().disambiguate(""), None);
    }

    #[test]
    fn test_found_ignores_choice() {
        let resolution = Resolution::Found(PersonId::from("7"));
        assert_eq!(resolution.disambiguate("whatever"), Some(PersonId::from("7")));
    }

    #[test]
    fn test_into_unique_errors() {
        assert!(matches!(
            ambiguous().into_unique("Chris"),
            Err(Error::AmbiguousName { ref candidates, .. }) if candidates.len() == 2
        ));
        assert_eq!(
            Resolution::NotFound.into_unique("Dave"),
            Err(Error::PersonNotFound("Dave".to_string()))
        );
    }
}
