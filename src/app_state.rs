//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{Database, Error, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The handle used to open a database connection for each request.
    pub database: Database,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Decides which month is the current month for the statistics endpoint.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn new(database: Database, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            database,
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
