//! Glue between the saved preference, the network lookups, and the display.
//! Decides which theme to show and keeps everything agreeing on it.

use crate::{
    display::ThemeDisplay,
    geo::Locate,
    store::PreferenceStore,
    sun::SunSchedule,
    theme::Theme,
};
use chrono::{DateTime, Utc};
use log::{error, info, warn};

/// Drives the display's theme. Owns the store and display it manipulates;
/// the locator and sun schedule only feed the automatic fallback. Explicit
/// construction is the only initialization path.
pub struct ThemeController<S, D> {
    store: S,
    display: D,
    locator: Option<Box<dyn Locate>>,
    schedule: Box<dyn SunSchedule>,
    /// Last theme we applied, so the display and toggle always agree
    current: Option<Theme>,
}

impl<S: PreferenceStore, D: ThemeDisplay> ThemeController<S, D> {
    /// A controller with no locator treats geolocation as unavailable and
    /// will always fall back to light.
    pub fn new(
        store: S,
        display: D,
        locator: Option<Box<dyn Locate>>,
        schedule: Box<dyn SunSchedule>,
    ) -> Self {
        Self {
            store,
            display,
            locator,
            schedule,
            current: None,
        }
    }

    /// The last applied theme, if any has been applied yet
    pub fn theme(&self) -> Option<Theme> {
        self.current
    }

    /// Resolve the startup theme and show it. A saved preference wins
    /// outright; otherwise we infer one from the clock and the sky. The
    /// inferred theme is shown but never saved, so inference runs again on
    /// every start until the user picks a side.
    pub fn resolve_and_apply(&mut self) {
        if let Some(theme) = self.store.load() {
            info!("Applying saved preference: {theme}");
            self.apply(theme);
            return;
        }
        let theme = self.automatic_theme(Utc::now());
        info!("No saved preference, inferred: {theme}");
        self.apply(theme);
    }

    /// The user flipped the toggle. Checked means dark. The explicit choice
    /// is saved so it sticks across restarts.
    pub fn handle_toggle(&mut self, checked: bool) {
        let theme = Theme::from_toggle(checked);
        self.apply(theme);
        if let Err(err) = self.store.save(theme) {
            // The theme is already showing; losing the write only costs
            // persistence across restarts
            error!("Error saving preference: {err:?}");
        }
    }

    /// Show a theme. Idempotent and infallible; the display and the toggle
    /// indicator move together.
    pub fn apply(&mut self, theme: Theme) {
        self.current = Some(theme);
        self.display.set_dark(theme.is_dark());
        self.display.set_toggle(theme.toggle_checked());
    }

    /// Pick a theme from the device's position and today's sun times. Every
    /// failure along the way resolves to light; this never returns an error.
    fn automatic_theme(&self, now: DateTime<Utc>) -> Theme {
        let Some(locator) = &self.locator else {
            info!("Geolocation unavailable, defaulting to light");
            return Theme::Light;
        };
        let position = match locator.current_position() {
            Ok(position) => position,
            Err(err) => {
                warn!("Error getting position: {err:?}");
                return Theme::Light;
            }
        };
        let times = match self.schedule.sun_times(position) {
            Ok(times) => times,
            Err(err) => {
                warn!("Error fetching sun times: {err:?}");
                return Theme::Light;
            }
        };
        if times.is_night(now) {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
