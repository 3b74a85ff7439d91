use std::time::Duration;

use serde::Deserialize;

use crate::{
    model::place::PlaceCandidateDto,
    server::error::{external::ExternalError, Error},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mapping API types that identify a food-related place
static FOOD_TYPES: &[&str] = &[
    "restaurant",
    "cafe",
    "bakery",
    "bar",
    "meal_takeaway",
    "meal_delivery",
    "food",
];

/// Client for the external mapping API.
///
/// Searches are scoped to a fixed geographic radius around a fixed reference
/// point and filtered server-side to food-related place types and to
/// addresses matching the target region.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    center: (f64, f64),
    radius_m: u32,
    region: String,
}

#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
    center: Option<(f64, f64)>,
    radius_m: Option<u32>,
    region: Option<String>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn search_center(mut self, lat: f64, lng: f64) -> Self {
        self.center = Some((lat, lng));
        self
    }

    pub fn search_radius_m(mut self, radius_m: u32) -> Self {
        self.radius_m = Some(radius_m);
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let mut http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT);

        if let Some(user_agent) = &self.user_agent {
            http = http.user_agent(user_agent);
        }

        let missing = |field: &str| {
            Error::InternalError(format!("Maps client builder missing field: {}", field))
        };

        Ok(Client {
            http: http.build()?,
            base_url: self.base_url.ok_or_else(|| missing("base_url"))?,
            api_key: self.api_key.ok_or_else(|| missing("api_key"))?,
            center: self.center.ok_or_else(|| missing("search_center"))?,
            radius_m: self.radius_m.ok_or_else(|| missing("search_radius_m"))?,
            region: self.region.ok_or_else(|| missing("region"))?,
        })
    }
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct SearchResult {
    place_id: String,
    name: String,
    formatted_address: String,
    location: Location,
    #[serde(default)]
    types: Vec<String>,
    phone: Option<String>,
    website: Option<String>,
}

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct DetailsResponse {
    result: SearchResult,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Text search scoped to the configured center/radius, filtered to
    /// food-related places inside the configured region
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidateDto>, Error> {
        let url = format!("{}/maps/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .query(&[("lat", self.center.0), ("lng", self.center.1)])
            .query(&[("radius", self.radius_m)])
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ExternalError::MapsUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExternalError::MapsUnavailable(e.to_string()))?;

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| ExternalError::UnexpectedResponse(e.to_string()))?;

        let candidates = search
            .results
            .into_iter()
            .filter(|result| is_food_place(&result.types))
            .filter(|result| in_region(&result.formatted_address, &self.region))
            .map(candidate_from_result)
            .collect();

        Ok(candidates)
    }

    /// Details lookup by the mapping API's stable place identifier
    pub async fn place_details(&self, external_id: &str) -> Result<PlaceCandidateDto, Error> {
        let url = format!("{}/maps/details/{}", self.base_url, external_id);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ExternalError::MapsUnavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| ExternalError::MapsUnavailable(e.to_string()))?;

        let details: DetailsResponse = response
            .json()
            .await
            .map_err(|e| ExternalError::UnexpectedResponse(e.to_string()))?;

        Ok(candidate_from_result(details.result))
    }
}

fn candidate_from_result(result: SearchResult) -> PlaceCandidateDto {
    PlaceCandidateDto {
        external_id: result.place_id,
        name: result.name,
        address: result.formatted_address,
        latitude: result.location.lat,
        longitude: result.location.lng,
        phone: result.phone,
        website: result.website,
    }
}

fn is_food_place(types: &[String]) -> bool {
    types
        .iter()
        .any(|t| FOOD_TYPES.contains(&t.to_lowercase().as_str()))
}

fn in_region(address: &str, region: &str) -> bool {
    address.to_lowercase().contains(&region.to_lowercase())
}

#[cfg(test)]
mod tests {
    use savora_test_utils::prelude::*;

    use super::*;

    fn test_client(base_url: &str) -> Client {
        Client::builder()
            .base_url(base_url)
            .api_key("test-maps-api-key")
            .search_center(39.92, 32.85)
            .search_radius_m(15_000)
            .region("Ankara")
            .build()
            .unwrap()
    }

    mod filters {
        use super::*;

        #[test]
        fn accepts_food_types() {
            assert!(is_food_place(&["restaurant".to_string()]));
            assert!(is_food_place(&[
                "point_of_interest".to_string(),
                "cafe".to_string()
            ]));
        }

        #[test]
        fn rejects_non_food_types() {
            assert!(!is_food_place(&["lodging".to_string()]));
            assert!(!is_food_place(&[]));
        }

        #[test]
        fn region_match_is_case_insensitive() {
            assert!(in_region("1 Main St, ANKARA", "Ankara"));
            assert!(!in_region("1 Main St, Istanbul", "Ankara"));
        }
    }

    mod text_search {
        use super::*;

        /// Expect non-food and out-of-region results to be dropped
        #[tokio::test]
        async fn filters_search_results() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!()?;
            let body = factory::search_response(vec![
                factory::search_result(
                    "ext-1",
                    "Kebabistan",
                    "1 Main St, Ankara",
                    39.9,
                    32.8,
                    &["restaurant"],
                ),
                factory::search_result(
                    "ext-2",
                    "Grand Hotel",
                    "2 Main St, Ankara",
                    39.9,
                    32.8,
                    &["lodging"],
                ),
                factory::search_result(
                    "ext-3",
                    "Pideci",
                    "3 Main St, Istanbul",
                    41.0,
                    28.9,
                    &["restaurant"],
                ),
            ]);
            let endpoint = test.maps().with_search_endpoint(&body);

            let client = test_client(&test.base_url());
            let results = client.text_search("kebab").await;

            assert!(results.is_ok());
            let candidates = results.unwrap();

            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates[0].external_id, "ext-1");
            endpoint.assert();

            Ok(())
        }

        /// Expect MapsUnavailable when the endpoint returns a server error
        #[tokio::test]
        async fn fails_when_maps_unavailable() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!()?;
            let _endpoint = test.maps().with_failing_search_endpoint();

            let client = test_client(&test.base_url());
            let result = client.text_search("kebab").await;

            assert!(matches!(
                result,
                Err(Error::ExternalError(ExternalError::MapsUnavailable(_)))
            ));

            Ok(())
        }
    }

    mod place_details {
        use super::*;

        #[tokio::test]
        async fn fetches_details_by_external_id() -> Result<(), TestError> {
            let mut test = test_setup_with_tables!()?;
            let body = factory::details_response(factory::search_result(
                "ext-1",
                "Kebabistan",
                "1 Main St, Ankara",
                39.9,
                32.8,
                &["restaurant"],
            ));
            let endpoint = test.maps().with_details_endpoint("ext-1", &body);

            let client = test_client(&test.base_url());
            let result = client.place_details("ext-1").await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().name, "Kebabistan");
            endpoint.assert();

            Ok(())
        }
    }
}
