/**
 * Country Details
 *
 * Flattens a raw country record from the external service into the shape
 * the persistence layer stores.
 *
 * The raw record is kept as untyped JSON: the upstream schema is not owned
 * by this crate and may change without notice. Every lookup here degrades
 * to a default instead of failing, so `CountryDetails::from_raw` is total.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A country record exactly as returned by the external service
pub type RawCountry = Value;

/// Normalized, flat country record suited for storage
///
/// Field names match the database columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub common_name: Option<String>,
    pub official_name: Option<String>,
    pub capital_city: Option<String>,
    pub independent: bool,
    pub un_member: bool,
    /// e.g. `"US Dollar ($), Euro (€)"`
    pub currencies: String,
    pub alt_spellings: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub languages: Vec<String>,
    /// Border country codes (cca3)
    pub borders: Vec<String>,
    pub population: u64,
    pub car_signs: Vec<String>,
    pub car_side: Option<String>,
    pub google_maps: Option<String>,
    pub flag: Option<String>,
}

impl CountryDetails {
    /// Normalize a raw country record
    ///
    /// # Example
    ///
    /// ```rust
    /// use globetrotter::backend::countries::CountryDetails;
    /// use serde_json::json;
    ///
    /// let raw = json!({
    ///     "name": { "common": "Canada", "official": "Canada" },
    ///     "capital": ["Ottawa"],
    ///     "currencies": { "CAD": { "name": "Canadian dollar", "symbol": "$" } },
    /// });
    /// let details = CountryDetails::from_raw(&raw);
    /// assert_eq!(details.capital_city.as_deref(), Some("Ottawa"));
    /// assert_eq!(details.currencies, "Canadian dollar ($)");
    /// assert_eq!(details.population, 0);
    /// ```
    pub fn from_raw(country: &RawCountry) -> Self {
        Self {
            common_name: text_at(country, "/name/common"),
            official_name: text_at(country, "/name/official"),
            capital_city: text_at(country, "/capital/0"),
            independent: flag_at(country, "/independent"),
            un_member: flag_at(country, "/unMember"),
            currencies: format_currencies(country.get("currencies")),
            alt_spellings: strings_at(country, "/altSpellings"),
            region: text_at(country, "/region"),
            subregion: text_at(country, "/subregion"),
            languages: language_names(country.get("languages")),
            borders: strings_at(country, "/borders"),
            population: population(country.get("population")),
            car_signs: strings_at(country, "/car/signs"),
            car_side: text_at(country, "/car/side"),
            google_maps: text_at(country, "/maps/googleMaps"),
            flag: text_at(country, "/flags/svg"),
        }
    }
}

/// Free-function form of [`CountryDetails::from_raw`]
pub fn prepare_country_details(country: &RawCountry) -> CountryDetails {
    CountryDetails::from_raw(country)
}

/// Common name of a raw record, if present
pub(crate) fn common_name(country: &RawCountry) -> Option<&str> {
    country.pointer("/name/common").and_then(Value::as_str)
}

// Empty strings count as absent.
fn text_at(country: &Value, pointer: &str) -> Option<String> {
    country
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn flag_at(country: &Value, pointer: &str) -> bool {
    country.pointer(pointer).and_then(Value::as_bool).unwrap_or(false)
}

fn strings_at(country: &Value, pointer: &str) -> Vec<String> {
    country
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// `{"USD": {"name": "US Dollar", "symbol": "$"}}` -> `"US Dollar ($)"`
///
/// Entries keep upstream order. A missing symbol falls back to the code,
/// a missing name to the code as well.
fn format_currencies(currencies: Option<&Value>) -> String {
    let Some(currencies) = currencies.and_then(Value::as_object) else {
        return String::new();
    };

    currencies
        .iter()
        .map(|(code, currency)| {
            let name = non_empty_str(currency, "name").unwrap_or(code);
            let symbol = non_empty_str(currency, "symbol").unwrap_or(code);
            format!("{} ({})", name, symbol)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty_str<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Non-negative whole number, also when serialized as a float (`38005238.0`)
fn population(value: Option<&Value>) -> u64 {
    let Some(value) = value else {
        return 0;
    };
    if let Some(count) = value.as_u64() {
        return count;
    }
    match value.as_f64() {
        Some(count)
            if count.is_finite() && count >= 0.0 && count.fract() == 0.0 && count < u64::MAX as f64 =>
        {
            count as u64
        }
        _ => 0,
    }
}

fn language_names(languages: Option<&Value>) -> Vec<String> {
    languages
        .and_then(Value::as_object)
        .map(Map::values)
        .map(|names| names.filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}
