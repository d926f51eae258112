//! Planets listing query

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Query for one page of the planets listing.
///
/// Page identifiers are strings because that is how the API echoes them
/// back in its `next`/`previous` links.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanetsQuery {
    /// Page identifier, `"1"` for the first page
    pub page: String,
}

impl PlanetsQuery {
    /// Creates a query for the given page.
    #[must_use]
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }

    /// Creates a query for the first page.
    #[must_use]
    pub fn first_page() -> Self {
        Self::new("1")
    }

    /// Creates a query after checking the page identifier is not blank.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPage` if `page` is empty or whitespace.
    pub fn parse(page: &str) -> DomainResult<Self> {
        let page = page.trim();
        if page.is_empty() {
            return Err(DomainError::InvalidPage("page must not be empty".to_string()));
        }
        Ok(Self::new(page))
    }
}

impl Default for PlanetsQuery {
    fn default() -> Self {
        Self::first_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_default() {
        assert_eq!(PlanetsQuery::default().page, "1");
    }

    #[test]
    fn parse_trims_page() {
        assert_eq!(PlanetsQuery::parse(" 3 "), Ok(PlanetsQuery::new("3")));
    }

    #[test]
    fn parse_rejects_blank_page() {
        assert!(matches!(
            PlanetsQuery::parse("  "),
            Err(DomainError::InvalidPage(_))
        ));
    }
}
