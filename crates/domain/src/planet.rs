//! Planet domain types
//!
//! A `PlanetsPage` is one page of the paginated planets listing. All planet
//! attributes are kept as the strings the remote API reports (`"unknown"`
//! is a legitimate value for most of them).

use serde::{Deserialize, Serialize};
use url::Url;

/// A single planet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Planet {
    /// Planet name
    pub name: String,
    /// Hours for one rotation around its axis
    pub rotation_period: String,
    /// Days for one orbit around its star
    pub orbital_period: String,
    /// Diameter in kilometers
    pub diameter: String,
    /// Climate description
    pub climate: String,
    /// Gravity relative to standard
    pub gravity: String,
    /// Terrain description
    pub terrain: String,
    /// Percentage of the surface covered by water
    pub surface_water: String,
    /// Population count
    pub population: String,
    /// Creation timestamp of the record
    pub created: String,
    /// Last edit timestamp of the record
    pub edited: String,
    /// Canonical resource URL
    pub url: String,
}

/// One page of the planets listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetsPage {
    /// Total number of planets across all pages
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Planets on this page, in server order
    pub results: Vec<Planet>,
}

impl PlanetsPage {
    /// Returns true if the server reported a following page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Extracts the `page` query value of the next page URL.
    ///
    /// Returns `None` when there is no next page or the URL carries no
    /// `page` parameter.
    #[must_use]
    pub fn next_page(&self) -> Option<String> {
        let next = Url::parse(self.next.as_deref()?).ok()?;
        next.query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tatooine() -> Planet {
        Planet {
            name: "Tatooine".to_string(),
            rotation_period: "23".to_string(),
            orbital_period: "304".to_string(),
            diameter: "10465".to_string(),
            climate: "arid".to_string(),
            gravity: "1 standard".to_string(),
            terrain: "desert".to_string(),
            surface_water: "1".to_string(),
            population: "200000".to_string(),
            created: "2014-12-09T13:50:49.641000Z".to_string(),
            edited: "2014-12-20T20:58:18.411000Z".to_string(),
            url: "https://swapi.dev/api/planets/1/".to_string(),
        }
    }

    #[test]
    fn planets_compare_structurally() {
        let mut other = tatooine();
        assert_eq!(tatooine(), other);

        other.population = "unknown".to_string();
        assert_ne!(tatooine(), other);
    }

    #[test]
    fn next_page_is_read_from_next_url() {
        let page = PlanetsPage {
            count: 60,
            next: Some("https://swapi.dev/api/planets/?page=2".to_string()),
            previous: None,
            results: vec![tatooine()],
        };

        assert!(page.has_next());
        assert_eq!(page.next_page(), Some("2".to_string()));
    }

    #[test]
    fn last_page_has_no_next_page() {
        let page = PlanetsPage {
            count: 60,
            next: None,
            previous: Some("https://swapi.dev/api/planets/?page=5".to_string()),
            results: Vec::new(),
        };

        assert!(!page.has_next());
        assert_eq!(page.next_page(), None);
    }

    #[test]
    fn next_url_without_page_parameter_yields_none() {
        let page = PlanetsPage {
            count: 1,
            next: Some("https://swapi.dev/api/planets/".to_string()),
            previous: None,
            results: Vec::new(),
        };

        assert_eq!(page.next_page(), None);
    }
}
