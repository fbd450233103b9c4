//! Coarse device location, resolved over the network. The service geolocates
//! the caller's public IP, which is plenty accurate for sunrise math.

use anyhow::{anyhow, Context};
use log::info;
use serde::Deserialize;

/// Device position in floating-point degrees
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Anything that can answer "where are we right now?". A single attempt per
/// call; callers decide what a failure means.
pub trait Locate {
    fn current_position(&self) -> anyhow::Result<Coordinates>;
}

/// Locator backed by the ip-api.com geolocation service
#[derive(Debug)]
pub struct IpLocator {
    url: String,
}

impl IpLocator {
    const API_HOST: &'static str = "http://ip-api.com";

    pub fn new() -> Self {
        Self {
            url: format!(
                "{}/json?fields=status,message,lat,lon",
                Self::API_HOST
            ),
        }
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl Locate for IpLocator {
    fn current_position(&self) -> anyhow::Result<Coordinates> {
        info!("Requesting position from {}", self.url);
        let response = ureq::get(&self.url).call().with_context(|| {
            format!("Error fetching position from {}", Self::API_HOST)
        })?;
        let position: PositionResponse = response
            .into_json()
            .context("Error parsing position as JSON")?;
        position.into_coordinates()
    }
}

/// https://ip-api.com/docs/api:json
#[derive(Clone, Debug, Deserialize)]
struct PositionResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl PositionResponse {
    /// The service reports failure in-band, with a 200 status
    fn into_coordinates(self) -> anyhow::Result<Coordinates> {
        if self.status != "success" {
            return Err(anyhow!(
                "Position lookup failed: {}",
                self.message.unwrap_or_else(|| self.status.clone())
            ));
        }
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(anyhow!("Position response missing coordinates")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_payload() {
        let response: PositionResponse = serde_json::from_str(
            "{\"status\": \"success\", \"lat\": 52.52, \"lon\": 13.405}",
        )
        .unwrap();
        assert_eq!(
            response.into_coordinates().unwrap(),
            Coordinates {
                latitude: 52.52,
                longitude: 13.405,
            }
        );
    }

    #[test]
    fn test_fail_payload() {
        let response: PositionResponse = serde_json::from_str(
            "{\"status\": \"fail\", \"message\": \"private range\"}",
        )
        .unwrap();
        assert!(response.into_coordinates().is_err());
    }

    #[test]
    fn test_missing_coordinates() {
        let response: PositionResponse =
            serde_json::from_str("{\"status\": \"success\"}").unwrap();
        assert!(response.into_coordinates().is_err());
    }
}
