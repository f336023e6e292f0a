//! Deterministic time and fare fallbacks.

use crate::domain::Cost;

/// Base travel time for any route (minutes).
pub const BASE_TIME_MINS: u32 = 30;

/// Added travel time per allowed transfer (minutes).
pub const TRANSFER_TIME_MINS: u32 = 15;

/// Added travel time per leg (minutes).
pub const LEG_TIME_MINS: u32 = 20;

/// Base fare for any route.
pub const BASE_FARE: Cost = Cost::from_units(15);

/// Added fare per allowed transfer.
pub const TRANSFER_FARE: Cost = Cost::from_units(5);

/// Estimated travel time: base + per-transfer penalty + per-leg penalty.
pub fn fallback_minutes(transfers: u32, legs: usize) -> u32 {
    let legs = u32::try_from(legs).unwrap_or(u32::MAX);
    BASE_TIME_MINS
        .saturating_add(transfers.saturating_mul(TRANSFER_TIME_MINS))
        .saturating_add(legs.saturating_mul(LEG_TIME_MINS))
}

/// Estimated fare: base + per-transfer surcharge.
pub fn fallback_cost(transfers: u32) -> Cost {
    let surcharge = TRANSFER_FARE.cents().saturating_mul(u64::from(transfers));
    Cost::from_cents(BASE_FARE.cents().saturating_add(surcharge))
}
