//! OpenWeather current-conditions client

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::ProviderConfig;
use crate::icons::WeatherIcon;
use crate::state::WeatherSnapshot;

// ============================================================================
// Errors
// ============================================================================

/// Ways a city query can fail
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("empty city query")]
    EmptyQuery,
    #[error("city not found: {0}")]
    CityNotFound(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response parse error: {0}")]
    Parse(String),
}

impl QueryError {
    /// Whether the failure is surfaced as "city not found" rather than the
    /// generic fetch error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::EmptyQuery | QueryError::CityNotFound(_))
    }
}

// ============================================================================
// Query
// ============================================================================

/// A non-blank, trimmed city name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Source of current conditions for a city
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &CityQuery) -> Result<WeatherSnapshot, QueryError>;
}

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: ProviderConfig,
}

impl OpenWeatherClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn current_url(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &CityQuery) -> Result<WeatherSnapshot, QueryError> {
        let response = self
            .http
            .get(self.current_url())
            .query(&[
                ("units", "metric"),
                ("q", city.as_str()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QueryError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Request(e.without_url().to_string()))?;

        tracing::debug!(%city, status = status.as_u16(), bytes = body.len(), "provider responded");
        parse_current(city, status, &body)
    }
}

// ============================================================================
// Wire model
// ============================================================================

/// `cod` arrives as a number on success and usually as a string on errors
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    fn is_not_found(&self) -> bool {
        match self {
            ResponseCode::Number(code) => *code == 404,
            ResponseCode::Text(code) => code.trim() == "404",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    cod: Option<ResponseCode>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(data: OwCurrentResponse) -> Self {
        let icon_code = data.weather.first().map(|w| w.icon.as_str()).unwrap_or("");
        WeatherSnapshot {
            temperature_celsius: data.main.temp.floor() as i32,
            city_name: data.name,
            country_code: data.sys.country,
            latitude: data.coord.lat,
            longitude: data.coord.lon,
            humidity_percent: data.main.humidity.clamp(0.0, 100.0) as u8,
            wind_speed_kmh: data.wind.speed,
            icon: WeatherIcon::from_code(icon_code),
        }
    }
}

/// Map a raw provider response onto a snapshot or a query error.
///
/// The not-found signal lives in the body's `cod`, so it is checked before
/// the transport status.
pub fn parse_current(
    city: &CityQuery,
    status: StatusCode,
    body: &str,
) -> Result<WeatherSnapshot, QueryError> {
    if let Ok(Envelope { cod: Some(cod) }) = serde_json::from_str::<Envelope>(body) {
        if cod.is_not_found() {
            return Err(QueryError::CityNotFound(city.to_string()));
        }
    }

    if !status.is_success() {
        return Err(QueryError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        });
    }

    let data: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| QueryError::Parse(e.to_string()))?;
    Ok(data.into())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CHENNAI: &str = r#"{
        "coord": {"lon": 80.27, "lat": 13.08},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 31.9, "feels_like": 38.2, "humidity": 66},
        "wind": {"speed": 4.12, "deg": 120},
        "sys": {"country": "IN"},
        "name": "Chennai",
        "cod": 200
    }"#;

    fn city(name: &str) -> CityQuery {
        CityQuery::parse(name).unwrap()
    }

    #[test]
    fn test_city_query_trims() {
        assert_eq!(city("  Chennai \n").as_str(), "Chennai");
        assert_eq!(CityQuery::parse(""), Err(QueryError::EmptyQuery));
        assert_eq!(CityQuery::parse(" \t "), Err(QueryError::EmptyQuery));
    }

    #[test]
    fn test_parse_success() {
        let snapshot = parse_current(&city("chennai"), StatusCode::OK, CHENNAI).unwrap();
        assert_eq!(
            snapshot,
            WeatherSnapshot {
                temperature_celsius: 31,
                city_name: "Chennai".into(),
                country_code: "IN".into(),
                latitude: 13.08,
                longitude: 80.27,
                humidity_percent: 66,
                wind_speed_kmh: 4.12,
                icon: WeatherIcon::Clear,
            }
        );
    }

    #[test]
    fn test_temperature_is_floored() {
        let body = CHENNAI.replace("31.9", "-0.4");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.temperature_celsius, -1);

        let body = CHENNAI.replace("31.9", "12.999");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.temperature_celsius, 12);
    }

    #[test]
    fn test_fractional_humidity_is_truncated() {
        let body = CHENNAI.replace("\"humidity\": 66", "\"humidity\": 66.7");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.humidity_percent, 66);

        let body = CHENNAI.replace("\"humidity\": 66", "\"humidity\": 140");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.humidity_percent, 100);
    }

    #[test]
    fn test_not_found_string_and_numeric_cod() {
        for body in [
            r#"{"cod":"404","message":"city not found"}"#,
            r#"{"cod":404,"message":"city not found"}"#,
        ] {
            for status in [StatusCode::NOT_FOUND, StatusCode::OK] {
                assert_eq!(
                    parse_current(&city("Nonexistentville"), status, body),
                    Err(QueryError::CityNotFound("Nonexistentville".into()))
                );
            }
        }
    }

    #[test]
    fn test_non_ok_status_without_not_found_code() {
        let body = r#"{"cod":401,"message":"Invalid API key"}"#;
        let err = parse_current(&city("Chennai"), StatusCode::UNAUTHORIZED, body).unwrap_err();
        assert!(matches!(err, QueryError::Status { status: 401, .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_malformed_body() {
        let err = parse_current(&city("Chennai"), StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));

        let err = parse_current(&city("Chennai"), StatusCode::OK, r#"{"cod":200}"#).unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }

    #[test]
    fn test_missing_weather_entry_uses_fallback_icon() {
        let body = CHENNAI.replace(
            r#"[{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]"#,
            "[]",
        );
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.icon, WeatherIcon::Clear);

        let body = CHENNAI.replace("\"01d\"", "\"50d\"");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.icon, WeatherIcon::Clear);

        let body = CHENNAI.replace("\"01d\"", "\"10n\"");
        let snapshot = parse_current(&city("x"), StatusCode::OK, &body).unwrap();
        assert_eq!(snapshot.icon, WeatherIcon::Rain);
    }

    #[test]
    fn test_truncate_body() {
        let long = "é".repeat(300);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
