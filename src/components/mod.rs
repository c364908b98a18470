pub mod error_banner;
pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use error_banner::{ErrorBanner, ErrorBannerProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SEARCH_PLACEHOLDER, SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
