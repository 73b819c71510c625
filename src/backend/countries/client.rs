/**
 * Countries API Client
 *
 * Translates country queries into GET requests against the external
 * countries REST service.
 *
 * # Endpoints
 *
 * - `GET {base}/name/{query}` - single or fuzzy name lookup
 * - `GET {base}/all` - full listing
 *
 * Each operation issues at most one request and never retries. Blank
 * inputs are rejected before any request is made.
 */

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::backend::countries::details::{common_name, RawCountry};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::AppConfig;

/// Client for the external countries service
#[derive(Debug, Clone)]
pub struct CountriesClient {
    base_url: Url,
    client: Client,
}

impl CountriesClient {
    /// Create a client against `config.countries_api_url`
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(config.countries_api_url.clone(), Client::new())
    }

    /// Create a client from an explicit base URL and HTTP client
    pub fn with_client(base_url: Url, client: Client) -> Self {
        Self { base_url, client }
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the country whose common name equals `name`, ignoring case
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - `name` is blank
    /// * `NotFound` - no candidate's common name matches
    /// * `Transport` - the request failed
    pub async fn get_country(&self, name: &str) -> BackendResult<RawCountry> {
        let name = require_non_blank("name", name, "Country name is required.")?;
        let context = format!("Failed to fetch country \"{}\"", name);

        let candidates = match self.fetch_json::<Vec<RawCountry>>(&["name", name]).await {
            Ok(candidates) => candidates.unwrap_or_default(),
            Err(FetchError::NotFound(_)) => Vec::new(),
            Err(FetchError::Other(source)) => {
                tracing::warn!("{}: {}", context, source);
                return Err(BackendError::transport(context, source));
            }
        };

        let wanted = name.to_lowercase();
        let country = candidates
            .into_iter()
            .find(|candidate| {
                common_name(candidate).is_some_and(|common| common.to_lowercase() == wanted)
            });

        match country {
            Some(country) => {
                tracing::info!("Exact match found for {:?}", name);
                Ok(country)
            }
            None => {
                tracing::warn!("No exact match found for {:?}", name);
                Err(BackendError::not_found(name))
            }
        }
    }

    /// Fetch the full country listing
    ///
    /// An empty or `null` body yields an empty list.
    pub async fn get_all_countries(&self) -> BackendResult<Vec<RawCountry>> {
        let context = "Failed to fetch all countries";

        match self.fetch_json::<Vec<RawCountry>>(&["all"]).await {
            Ok(countries) => Ok(countries.unwrap_or_default()),
            Err(err) => {
                let source = err.into_cause();
                tracing::warn!("{}: {}", context, source);
                Err(BackendError::transport(context, source))
            }
        }
    }

    /// Fetch whatever the service returns for a partial name
    ///
    /// No filtering is applied on top of the service's own matching. Any
    /// non-2xx status, 404 included, is a transport failure.
    pub async fn search_countries(&self, partial: &str) -> BackendResult<Vec<RawCountry>> {
        let partial = require_non_blank("partial", partial, "Partial country name is required.")?;
        let context = format!("Failed to fetch countries matching \"{}\"", partial);

        match self.fetch_json::<Vec<RawCountry>>(&["name", partial]).await {
            Ok(countries) => Ok(countries.unwrap_or_default()),
            Err(err) => {
                let source = err.into_cause();
                tracing::warn!("{}: {}", context, source);
                Err(BackendError::transport(context, source))
            }
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Other(format!("invalid base URL: {}", self.base_url).into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `segments` and decode the body; `Ok(None)` for an empty or `null` body
    async fn fetch_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<T>, FetchError> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Other(e.into()))?;

        let response = response.error_for_status().map_err(|e| {
            if e.status() == Some(StatusCode::NOT_FOUND) {
                FetchError::NotFound(e)
            } else {
                FetchError::Other(e.into())
            }
        })?;

        let body = response.bytes().await.map_err(|e| FetchError::Other(e.into()))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<T>>(&body).map_err(|e| FetchError::Other(e.into()))
    }
}

/// Failure of a single fetch, before the operation adds its context
#[derive(Debug)]
enum FetchError {
    NotFound(reqwest::Error),
    Other(crate::backend::error::TransportCause),
}

impl FetchError {
    fn into_cause(self) -> crate::backend::error::TransportCause {
        match self {
            Self::NotFound(err) => err.into(),
            Self::Other(cause) => cause,
        }
    }
}

fn require_non_blank<'a>(field: &str, value: &'a str, message: &str) -> BackendResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BackendError::invalid_argument(field, message));
    }
    Ok(trimmed)
}
