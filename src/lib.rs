//! City weather lookup TUI
//!
//! The library holds everything except terminal setup so it can be exercised
//! without a terminal: state, actions, the reducer and its effects, the
//! OpenWeather client, the icon map and the view components.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
