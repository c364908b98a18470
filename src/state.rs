//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::icons::WeatherIcon;

/// City queried at startup when none is configured.
pub const DEFAULT_CITY: &str = "Chennai";

/// Banner text for an empty query or an unknown city.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

/// Banner text for transport and parse failures.
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching data";

/// Current conditions for one city, as resolved from a single provider response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    /// Floored, never rounded
    pub temperature_celsius: i32,
    /// Name as spelled by the provider
    pub city_name: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub humidity_percent: u8,
    pub wind_speed_kmh: f64,
    pub icon: WeatherIcon,
}

impl WeatherSnapshot {
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Live text of the search input (not yet submitted)
    #[debug(section = "Search", label = "Input")]
    pub search_input: String,

    /// Last successfully resolved conditions
    #[debug(section = "Weather", label = "Snapshot", debug_fmt)]
    pub snapshot: WeatherSnapshot,

    /// Set by an empty query or the provider's not-found signal
    #[debug(section = "Flags", label = "City not found")]
    pub city_not_found: bool,

    /// Transport or parse failure detail
    #[debug(section = "Flags", label = "Error", debug_fmt)]
    pub error: Option<String>,

    /// Whether the newest query is still unresolved
    #[debug(section = "Requests", label = "Loading")]
    pub loading: bool,

    /// Sequence number of the newest dispatched query
    #[debug(section = "Requests", label = "Dispatched")]
    pub request_seq: u64,

    /// Sequence number of the newest applied result
    #[debug(section = "Requests", label = "Applied")]
    pub applied_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next query sequence number.
    pub fn next_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Record a resolved query. Returns `false` for results older than the
    /// newest one already applied, which must be dropped.
    pub fn accept_result(&mut self, seq: u64) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if seq >= self.request_seq {
            self.loading = false;
        }
        true
    }

    /// Banners to show, in display order.
    pub fn banners(&self) -> Vec<&'static str> {
        let mut banners = Vec::with_capacity(2);
        if self.city_not_found {
            banners.push(CITY_NOT_FOUND_MESSAGE);
        }
        if self.error.is_some() {
            banners.push(FETCH_ERROR_MESSAGE);
        }
        banners
    }
}
