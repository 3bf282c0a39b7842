use crate::price::{rent_total_octas, to_human, to_raw, OCTAS_PER_APT};

#[test]
fn one_apt_is_ten_to_the_eight_octas() {
    assert_eq!(to_raw(1.0), OCTAS_PER_APT);
    assert_eq!(to_human(OCTAS_PER_APT), 1.0);
}

#[test]
fn fractional_apt_round_trips() {
    let x = 0.005;
    assert_eq!(to_raw(x), 500_000);
    assert!((to_human(to_raw(x)) - x).abs() < 1e-9);
}

#[test]
fn rounding_absorbs_float_noise() {
    // 0.1 + 0.2 style representation error must not lose an octa
    assert_eq!(to_raw(0.1 + 0.2), 30_000_000);
}

#[test]
fn zero_is_zero_both_ways() {
    assert_eq!(to_raw(0.0), 0);
    assert_eq!(to_human(0), 0.0);
}

// --- Rent totals ---

#[test]
fn rent_total_multiplies_in_octa_space() {
    // 0.5 APT/hr for 3 hours = 150_000_000 octas
    assert_eq!(rent_total_octas(0.5, 3), Some(150_000_000));
}

#[test]
fn rent_total_overflow_is_none() {
    assert_eq!(rent_total_octas(f64::MAX.min(1e10), u64::MAX), None);
}

#[test]
fn rent_total_zero_hours_is_zero() {
    assert_eq!(rent_total_octas(0.5, 0), Some(0));
}
