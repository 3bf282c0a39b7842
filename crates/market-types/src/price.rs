//! Octas ↔ APT conversion.
//!
//! The contract stores every amount as an integer octa count; the
//! presentation layer shows decimal APT. The scale is a protocol constant,
//! not configuration.

/// Octas per APT (10^8).
pub const OCTAS_PER_APT: u64 = 100_000_000;

/// Raw on-chain octas → human-scale APT.
pub fn to_human(raw: u64) -> f64 {
    raw as f64 / OCTAS_PER_APT as f64
}

/// Human-scale APT → raw octas, rounded to the nearest octa to absorb
/// float noise from the presentation layer.
pub fn to_raw(human: f64) -> u64 {
    (human * OCTAS_PER_APT as f64).round() as u64
}

/// Total rental cost in octas for `hours` at a human-scale hourly rate.
///
/// The multiply happens in integer space; `None` on overflow.
pub fn rent_total_octas(rate_per_hour: f64, hours: u64) -> Option<u64> {
    to_raw(rate_per_hour).checked_mul(hours)
}
