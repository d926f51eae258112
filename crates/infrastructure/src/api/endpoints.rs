//! Endpoint catalogue of the planets API.

use planets_application::Endpoint;
use planets_domain::HttpMethod;

use super::{PlanetsRequestDto, PlanetsResponseDto};

/// Factory for every endpoint the client calls.
pub struct APIEndpoints;

impl APIEndpoints {
    /// `GET planets/` with the request DTO as query parameters.
    #[must_use]
    pub fn planets_list(request: &PlanetsRequestDto) -> Endpoint<PlanetsResponseDto> {
        Endpoint::new("planets/", HttpMethod::Get).query_parameters_encodable(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planets_application::{NetworkConfig, Requestable};
    use pretty_assertions::assert_eq;
    use url::Url;

    #[test]
    fn planets_list_targets_page_of_listing() {
        let config = NetworkConfig::new(Url::parse("https://swapi.dev/api").unwrap());
        let endpoint = APIEndpoints::planets_list(&PlanetsRequestDto {
            page: "2".to_string(),
        });

        let request = endpoint.url_request(&config).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), "https://swapi.dev/api/planets/?page=2");
        assert_eq!(request.body, None);
    }
}
