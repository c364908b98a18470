//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::{CityQuery, QueryError, WeatherProvider};

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for `city`, tagged with its query sequence number
    FetchWeather { seq: u64, city: String },
}

/// Run one provider lookup and turn its outcome into the result action.
///
/// Never fails: every error becomes a `WeatherDid*` action.
pub async fn fetch_weather(provider: &dyn WeatherProvider, seq: u64, city: String) -> Action {
    let outcome = match CityQuery::parse(&city) {
        Ok(query) => provider.current(&query).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(snapshot) => {
            tracing::info!(seq, city = %snapshot.city_name, "weather loaded");
            Action::WeatherDidLoad { seq, snapshot }
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!(seq, %city, "city not found");
            Action::WeatherDidNotFind { seq }
        }
        Err(e) => {
            tracing::error!(seq, %city, error = %e, "weather fetch failed");
            Action::WeatherDidError {
                seq,
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherSnapshot;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Scripted {
        outcome: Result<WeatherSnapshot, QueryError>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl WeatherProvider for Scripted {
        async fn current(&self, city: &CityQuery) -> Result<WeatherSnapshot, QueryError> {
            self.calls.lock().unwrap().push(city.to_string());
            self.outcome.clone()
        }
    }

    fn scripted(outcome: Result<WeatherSnapshot, QueryError>) -> Scripted {
        Scripted {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[tokio::test]
    async fn test_success_maps_to_did_load() {
        let snapshot = WeatherSnapshot {
            city_name: "Chennai".into(),
            ..Default::default()
        };
        let provider = scripted(Ok(snapshot.clone()));

        let action = fetch_weather(&provider, 3, "Chennai".into()).await;

        assert_eq!(action, Action::WeatherDidLoad { seq: 3, snapshot });
        assert_eq!(*provider.calls.lock().unwrap(), vec!["Chennai".to_string()]);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_did_not_find() {
        let provider = scripted(Err(QueryError::CityNotFound("Nowhere".into())));

        let action = fetch_weather(&provider, 1, "Nowhere".into()).await;

        assert_eq!(action, Action::WeatherDidNotFind { seq: 1 });
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_did_error() {
        let provider = scripted(Err(QueryError::Request("connection refused".into())));

        let action = fetch_weather(&provider, 7, "Chennai".into()).await;

        assert_eq!(
            action,
            Action::WeatherDidError {
                seq: 7,
                error: "request failed: connection refused".into()
            }
        );
    }

    #[tokio::test]
    async fn test_blank_city_never_reaches_provider() {
        let provider = scripted(Ok(WeatherSnapshot::default()));

        let action = fetch_weather(&provider, 1, "   ".into()).await;

        assert_eq!(action, Action::WeatherDidNotFind { seq: 1 });
        assert!(provider.calls.lock().unwrap().is_empty());
    }
}
