//! Input validation limits for name lookups and search budgets

/// Maximum length for a name query (256 bytes)
pub const MAX_NAME_QUERY_LEN: usize = 256;

/// Upper bound accepted for a search expansion budget (50 million nodes)
pub const MAX_EXPANSION_BUDGET: usize = 50_000_000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyName,
    NameTooLong { len: usize, max: usize },
    ZeroBudget,
    BudgetTooLarge { budget: usize, max: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong { len, max } => {
                write!(f, "Name too long: {} bytes (max {})", len, max)
            }
            Self::ZeroBudget => write!(f, "Expansion budget must be at least 1"),
            Self::BudgetTooLarge { budget, max } => {
                write!(f, "Expansion budget too large: {} (max {})", budget, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a name typed by the user
pub fn validate_name_query(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_QUERY_LEN {
        return Err(ValidationError::NameTooLong {
            len: name.len(),
            max: MAX_NAME_QUERY_LEN,
        });
    }
    Ok(())
}

/// Validate an expansion budget
pub fn validate_expansion_budget(budget: usize) -> Result<(), ValidationError> {
    if budget == 0 {
        return Err(ValidationError::ZeroBudget);
    }
    if budget > MAX_EXPANSION_BUDGET {
        return Err(ValidationError::BudgetTooLarge {
            budget,
            max: MAX_EXPANSION_BUDGET,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_query() {
        assert!(validate_name_query("Kevin Bacon").is_ok());
        assert_eq!(validate_name_query(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_name_query("   "), Err(ValidationError::EmptyName));
        assert!(validate_name_query(&"x".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_expansion_budget() {
        assert!(validate_expansion_budget(1).is_ok());
        assert_eq!(validate_expansion_budget(0), Err(ValidationError::ZeroBudget));
        assert!(validate_expansion_budget(MAX_EXPANSION_BUDGET + 1).is_err());
    }
}
