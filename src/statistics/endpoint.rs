use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Database, Error,
    statistics::aggregation::{get_monthly_total, get_total, get_totals_by_category},
    timezone::current_year_month,
};

/// The state needed to summarise the ledger.
#[derive(Debug, Clone)]
pub struct StatisticsState {
    /// The database to read expenses from.
    pub database: Database,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for StatisticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            database: state.database.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The summary of the ledger sent to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// The sum of all amounts, rounded to cents.
    pub total: f64,
    /// The sum of the amounts dated in the current month, rounded to cents.
    pub monthly_total: f64,
    /// The unrounded sum of amounts for each category.
    pub categories: BTreeMap<String, f64>,
}

/// Round `amount` to two decimal places.
///
/// Rounding works on the exact binary value of `amount` and breaks exact ties
/// to the even digit, so 0.125 becomes 0.12 and 2.675 (stored just below
/// 2.675) becomes 2.67.
fn round_to_cents(amount: f64) -> f64 {
    format!("{amount:.2}").parse().unwrap_or(amount)
}

/// A route handler that responds with the running total, the total for the
/// current month and the total for each category.
pub async fn get_statistics_endpoint(
    State(state): State<StatisticsState>,
) -> Result<Json<Statistics>, Error> {
    let Some(year_month) = current_year_month(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Err(Error::InvalidTimezone(state.local_timezone));
    };

    let connection = state.database.connect()?;
    let total = get_total(&connection)?;
    let monthly_total = get_monthly_total(&year_month, &connection)?;
    let categories = get_totals_by_category(&connection)?;

    Ok(Json(Statistics {
        total: round_to_cents(total),
        monthly_total: round_to_cents(monthly_total),
        categories,
    }))
}
