//! Where "use my location" gets its coordinates from.

use restofind_core::{AppConfig, HomeLocation};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Failures surfaced to the user as an alert. The landing page does not
/// navigate when one occurs.
#[derive(Debug, Error)]
pub(crate) enum GeolocationError {
    #[error(
        "Geolocation is not supported by this client. \
         Set RESTOFIND_HOME_LAT and RESTOFIND_HOME_LNG to enable it."
    )]
    Unsupported,

    #[error("Unable to retrieve your location. Please grant location access.")]
    Unavailable { reason: String },
}

pub(crate) trait Geolocator {
    async fn current_position(&self) -> Result<Position, GeolocationError>;
}

/// Reports the fixed home coordinates from configuration.
pub(crate) struct ConfiguredLocation {
    home: Option<HomeLocation>,
}

impl ConfiguredLocation {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            home: config.home_location,
        }
    }
}

impl Geolocator for ConfiguredLocation {
    async fn current_position(&self) -> Result<Position, GeolocationError> {
        let home = self.home.ok_or(GeolocationError::Unsupported)?;

        if !(-90.0..=90.0).contains(&home.latitude) || !(-180.0..=180.0).contains(&home.longitude)
        {
            return Err(GeolocationError::Unavailable {
                reason: format!(
                    "configured position ({}, {}) is out of range",
                    home.latitude, home.longitude
                ),
            });
        }

        Ok(Position {
            latitude: home.latitude,
            longitude: home.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(home: Option<(f64, f64)>) -> ConfiguredLocation {
        ConfiguredLocation {
            home: home.map(|(latitude, longitude)| HomeLocation {
                latitude,
                longitude,
            }),
        }
    }

    #[tokio::test]
    async fn reports_configured_position() {
        let pos = locator(Some((12.9716, 77.5946)))
            .current_position()
            .await
            .expect("position should resolve");
        assert!((pos.latitude - 12.9716).abs() < 1e-9);
        assert!((pos.longitude - 77.5946).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unconfigured_is_unsupported() {
        let err = locator(None).current_position().await.unwrap_err();
        assert!(matches!(err, GeolocationError::Unsupported));
    }

    #[tokio::test]
    async fn out_of_range_is_unavailable() {
        let err = locator(Some((123.0, 77.0)))
            .current_position()
            .await
            .unwrap_err();
        assert!(matches!(err, GeolocationError::Unavailable { .. }));
        assert_eq!(
            err.to_string(),
            "Unable to retrieve your location. Please grant location access."
        );
    }
}
