use crate::{
    config::Config,
    model::{ForecastEntry, Units, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the core and whatever supplies weather snapshots.
///
/// The core makes no assumption about how a snapshot was obtained; the
/// presentation side only ever sees the parsed model types.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city.
    async fn current(&self, city: &str, units: Units) -> anyhow::Result<WeatherSnapshot>;

    /// Upcoming forecast slots for a city, soonest first.
    async fn forecast(&self, city: &str, units: Units) -> anyhow::Result<Vec<ForecastEntry>>;
}

/// Construct the provider from configuration. Fails when no usable API key
/// is configured.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn provider_from_config_errors_without_api_key() {
        let cfg = Config::from_toml_str("", Path::new("/tmp/config.toml")).unwrap();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("api.key"));
    }

    #[test]
    fn provider_from_config_works_with_api_key() {
        let cfg = Config::from_toml_str("[api]\nkey = \"KEY\"\n", Path::new("/tmp/config.toml"))
            .unwrap();
        assert!(provider_from_config(&cfg).is_ok());
    }
}
