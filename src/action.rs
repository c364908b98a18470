//! Actions: user intents and async query results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed (not submitted)
    SearchInputChange(String),

    // ===== Weather category =====
    /// Intent: look up current conditions for a city (triggers async task)
    WeatherQuery(String),

    /// Result: provider returned conditions for query `seq`
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Result: provider does not know the city of query `seq`
    WeatherDidNotFind { seq: u64 },

    /// Result: query `seq` failed in transport or parsing
    WeatherDidError { seq: u64, error: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Exit the application
    Quit,
}

/// The one action dispatched before any input: a query for the configured city.
pub fn initial_action(city: String) -> Action {
    Action::WeatherQuery(city)
}
