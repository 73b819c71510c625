//! Common test utilities and helpers
//!
//! - A stubbed countries service built on `wiremock`
//! - Country record fixtures shaped like the real service's responses
//! - Assertion helpers

#![allow(dead_code, unused_macros)]

use globetrotter::backend::CountriesClient;
use globetrotter::shared::AppConfig;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Path prefix the stubbed service is mounted under
pub const API_PREFIX: &str = "/v3.1";

/// Stubbed countries service plus a client pointed at it
pub struct StubCountriesApi {
    pub server: MockServer,
    pub client: CountriesClient,
}

impl StubCountriesApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = AppConfig::builder()
            .countries_api_url(format!("{}{}", server.uri(), API_PREFIX))
            .build()
            .expect("stub server URL is valid");
        let client = CountriesClient::new(&config);
        Self { server, client }
    }

    /// Number of requests the stub has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

/// Client pointed at a local port nothing listens on
pub fn unreachable_client() -> CountriesClient {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr").port()
    };
    let config = AppConfig::builder()
        .countries_api_url(format!("http://127.0.0.1:{}{}", port, API_PREFIX))
        .build()
        .expect("valid URL");
    CountriesClient::new(&config)
}

/// Minimal country record with the given common name
pub fn country(common: &str) -> Value {
    json!({
        "name": { "common": common, "official": format!("Republic of {}", common) },
        "independent": true,
        "unMember": true,
        "region": "Africa",
        "population": 1000
    })
}

pub fn niger() -> Value {
    json!({
        "name": { "common": "Niger", "official": "Republic of Niger" },
        "independent": true,
        "unMember": true,
        "currencies": { "XOF": { "name": "West African CFA franc", "symbol": "Fr" } },
        "capital": ["Niamey"],
        "altSpellings": ["NE", "Nijar"],
        "region": "Africa",
        "subregion": "Western Africa",
        "languages": { "eng": "English" },
        "borders": ["DZA", "BEN", "BFA", "TCD", "LBY", "MLI", "NGA"],
        "population": 24206636,
        "car": { "signs": ["RN"], "side": "right" },
        "maps": { "googleMaps": "https://goo.gl/maps/VKNU2TLsZcgxM49c8" },
        "flags": { "svg": "https://flagcdn.com/ne.svg" }
    })
}

pub fn nigeria() -> Value {
    json!({
        "name": { "common": "Nigeria", "official": "Federal Republic of Nigeria" },
        "independent": true,
        "unMember": true,
        "currencies": { "NGN": { "name": "Nigerian naira", "symbol": "₦" } },
        "capital": ["Abuja"],
        "region": "Africa",
        "subregion": "Western Africa",
        "population": 206139587
    })
}

/// Assert that a string contains a substring
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected {:?} to contain {:?}",
            $haystack,
            $needle
        );
    };
}
