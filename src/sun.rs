//! Sunrise/sunset times for a position, fetched from the public
//! sunrise-sunset.org API. Nothing here is cached; every resolution asks
//! again.

use crate::geo::Coordinates;
use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;

/// Today's sun schedule at some position. The seam exists so the resolution
/// logic can be driven with a canned schedule.
pub trait SunSchedule {
    fn sun_times(&self, position: Coordinates) -> anyhow::Result<SunTimes>;
}

/// Client for the sunrise-sunset.org times API
#[derive(Debug, Default)]
pub struct SunApi;

impl SunApi {
    const API_HOST: &'static str = "https://api.sunrise-sunset.org";

    pub fn new() -> Self {
        Self
    }
}

impl SunSchedule for SunApi {
    fn sun_times(&self, position: Coordinates) -> anyhow::Result<SunTimes> {
        // formatted=0 asks for ISO 8601 timestamps instead of localized
        // 12-hour strings
        let url = format!(
            "{}/json?lat={}&lng={}&formatted=0",
            Self::API_HOST,
            position.latitude,
            position.longitude
        );
        info!("Fetching sun times from {url}");
        let response = ureq::get(&url).call().with_context(|| {
            format!("Error fetching sun times from {}", Self::API_HOST)
        })?;
        let response: SunResponse = response
            .into_json()
            .context("Error parsing sun times as JSON")?;
        response.into_times()
    }
}

/// https://sunrise-sunset.org/api
#[derive(Clone, Debug, Deserialize)]
struct SunResponse {
    status: String,
    results: Option<SunTimes>,
}

impl SunResponse {
    fn into_times(self) -> anyhow::Result<SunTimes> {
        if self.status != "OK" {
            return Err(anyhow!(
                "Sun times lookup failed with status {}",
                self.status
            ));
        }
        self.results
            .ok_or_else(|| anyhow!("Sun times response missing results"))
    }
}

/// Sunrise and sunset for the current day at one position
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Whether `now` falls outside the daylight window. Sunrise and sunset
    /// themselves count as day.
    pub fn is_night(&self, now: DateTime<Utc>) -> bool {
        now > self.sunset || now < self.sunrise
    }
}
