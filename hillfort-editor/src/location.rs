//! Location acquisition and manual location edits.

use crate::session::EditorSession;
use hillfort_core::{HillfortResult, Location, LocationError, LocationResult};
use tracing::{debug, info, warn};

/// What a one-shot location lookup did to the draft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationOutcome {
    /// The fix was written to a new record's draft.
    Applied(Location),
    /// A fix arrived but the draft's location is already settled.
    Ignored(Location),
    /// No fix: permission denied, provider failure, or nothing cached.
    Unavailable(Option<LocationError>),
}

impl EditorSession {
    /// Ask the provider for the last known device position once.
    ///
    /// Failures are not errors: the draft is left alone and the outcome says
    /// why. Only a closed session returns `Err`.
    pub async fn acquire_current_location(&mut self) -> HillfortResult<LocationOutcome> {
        self.ensure_open()?;

        let outcome = match self.ctx.location.last_known_location().await {
            Ok(Some(location)) => {
                if self.draft.offer_location(location) {
                    info!(lat = location.lat, lng = location.lng, "Applied device location");
                    self.ctx.callbacks.show_record(self.draft.record());
                    LocationOutcome::Applied(location)
                } else {
                    debug!("Device location ignored, draft location already settled");
                    LocationOutcome::Ignored(location)
                }
            }
            Ok(None) => {
                debug!("No last known device location");
                LocationOutcome::Unavailable(None)
            }
            Err(err) => {
                warn!(error = %err, "Device location unavailable");
                LocationOutcome::Unavailable(Some(err))
            }
        };

        Ok(outcome)
    }

    /// Store a location the user picked explicitly.
    pub fn set_location(&mut self, location: Location) -> HillfortResult<()> {
        self.ensure_open()?;
        self.draft.set_location(location);
        debug!(lat = location.lat, lng = location.lng, "Location set by user");
        self.ctx.callbacks.show_location(location);
        Ok(())
    }

    /// Apply the payload returned by the map editor.
    pub fn apply_location_result(&mut self, result: LocationResult) -> HillfortResult<Location> {
        let location = result.required()?;
        self.set_location(location)?;
        Ok(location)
    }
}
