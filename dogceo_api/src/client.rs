//! Blocking HTTP client for the dog.ceo breed API.

use std::time::Duration;

use url::Url;

use crate::{
    types::ApiResponse,
    BreedFetcher, Error,
};

/// Production base URL of the dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Request timeout. Matches reqwest's own blocking default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("dogceo/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the dog.ceo breed API.
///
/// Holds nothing but the base URL. Each lookup builds a fresh
/// `reqwest::blocking::Client`, so a `Client` can be shared freely.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://dog.ceo/api`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production dog.ceo API.
    pub fn new() -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn sub_breeds_url(&self, breed: &str) -> Result<Url, Error> {
        let url = format!("{}/breed/{}/list", self.base_api_url, breed);
        Url::parse(&url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::breed_not_found(breed)
        })
    }

    /// Fetches the sub-breeds of `breed`.
    ///
    /// The breed is lower-cased before it goes into the request path, so
    /// `"Hound"` and `"hound"` hit the same resource.
    pub fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        let breed = breed.to_lowercase();
        let url = self.sub_breeds_url(&breed)?;
        tracing::debug!(%url, "fetching sub-breeds");

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::breed_not_found(&breed)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .map_err(|e| {
                tracing::error!("Failed to get sub-breeds of {}: {}", breed, e);
                Error::breed_not_found(&breed)
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::breed_not_found(&breed)
        })?;

        parse_sub_breeds(&breed, status, &body)
    }
}

impl BreedFetcher for Client {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        Client::get_sub_breeds(self, breed)
    }
}

/// Turns a raw sub-breed response into the list it carries.
///
/// dog.ceo answers unknown breeds with a 404 and an `"error"` envelope, so
/// the envelope is inspected before the HTTP status to log the API's own
/// message. Both paths end in the same error.
fn parse_sub_breeds(
    breed: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> Result<Vec<String>, Error> {
    let envelope = serde_json::from_str::<ApiResponse<serde_json::Value>>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse response: {} | status: {} | body: {}",
            e,
            status,
            truncate_body(body)
        );
        Error::breed_not_found(breed)
    })?;

    if !envelope.is_success() {
        tracing::error!(
            "API reported {} for breed {}: {}",
            envelope.status,
            breed,
            envelope.message
        );
        return Err(Error::breed_not_found(breed));
    }

    if !status.is_success() {
        tracing::error!(
            "Request failed with status {}: {}",
            status,
            truncate_body(body)
        );
        return Err(Error::breed_not_found(breed));
    }

    serde_json::from_value::<Vec<String>>(envelope.message).map_err(|e| {
        tracing::error!("Sub-breed list is not an array of strings: {}", e);
        Error::breed_not_found(breed)
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
