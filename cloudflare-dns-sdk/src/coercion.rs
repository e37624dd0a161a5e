//! Numeric truncation applied to LOC payloads.
//!
//! Values are truncated toward negative infinity, never rounded, so a
//! validated value never crosses its upper bound (59.9999 s stays below 60).
//! A value that already fits the precision comes back unchanged: the scaled
//! value is snapped to the integer it sits on when the only difference is
//! binary representation error (`8.2 * 100.0` is `819.999…`).

/// Relative slack, in units of `f64::EPSILON`, treated as representation error.
const SNAP_ULPS: f64 = 16.0;

/// Largest seconds value a truncated LOC coordinate may hold.
const MAX_LOC_SECONDS: f64 = 59.999;

/// Truncate LOC seconds to three decimal places.
pub fn truncate_loc_seconds(seconds: f64) -> f64 {
    truncate_to(seconds, 1000.0).min(MAX_LOC_SECONDS)
}

/// Truncate LOC altitude to two decimal places.
pub fn truncate_altitude(altitude: f64) -> f64 {
    truncate_to(altitude, 100.0)
}

fn truncate_to(value: f64, scale: f64) -> f64 {
    let scaled = value * scale;
    let nearest = scaled.round();
    let slack = nearest.abs().max(1.0) * f64::EPSILON * SNAP_ULPS;
    if (scaled - nearest).abs() <= slack {
        nearest / scale
    } else {
        scaled.floor() / scale
    }
}
