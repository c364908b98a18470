//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::api::CityQuery;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(text) => {
            if state.search_input == text {
                return DispatchResult::unchanged();
            }
            state.search_input = text;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherQuery(raw) => match CityQuery::parse(&raw) {
            Ok(city) => {
                let seq = state.next_request();
                DispatchResult::changed_with(Effect::FetchWeather {
                    seq,
                    city: city.as_str().to_string(),
                })
            }
            Err(_) => {
                state.city_not_found = true;
                DispatchResult::changed()
            }
        },

        Action::WeatherDidLoad { seq, snapshot } => {
            if !state.accept_result(seq) {
                return DispatchResult::unchanged();
            }
            state.city_not_found = false;
            state.error = None;
            state.snapshot = snapshot;
            DispatchResult::changed()
        }

        Action::WeatherDidNotFind { seq } => {
            if !state.accept_result(seq) {
                return DispatchResult::unchanged();
            }
            state.city_not_found = true;
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, error } => {
            if !state.accept_result(seq) {
                return DispatchResult::unchanged();
            }
            state.error = Some(error);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}
