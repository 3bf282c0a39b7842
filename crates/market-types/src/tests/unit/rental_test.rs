use crate::rental::remaining_hours;

#[test]
fn expired_rental_is_zero() {
    assert_eq!(remaining_hours(1_000, 2_000), 0);
}

#[test]
fn end_time_equal_to_now_is_zero() {
    assert_eq!(remaining_hours(5_000, 5_000), 0);
}

#[test]
fn partial_hour_rounds_up() {
    assert_eq!(remaining_hours(3_601, 0), 2);
    assert_eq!(remaining_hours(1, 0), 1);
}

#[test]
fn exact_hours_do_not_round() {
    assert_eq!(remaining_hours(7_200, 0), 2);
}

#[test]
fn hours_are_human_scale_already() {
    // 24h from now must render as 24, not 24 / 10^8.
    let now = 1_700_000_000;
    assert_eq!(remaining_hours(now + 24 * 3600, now), 24);
}
