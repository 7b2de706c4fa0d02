// src/services/pricing.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// A stay is valid only when check-out is strictly after check-in.
pub fn validate_stay(check_in: NaiveDateTime, check_out: NaiveDateTime) -> bool {
    check_in < check_out
}

/// Whole days between the two instants, never less than one (day use is
/// billed as a night).
pub fn nights_between(check_in: NaiveDateTime, check_out: NaiveDateTime) -> i64 {
    (check_out - check_in).num_days().max(1)
}

pub fn room_price(base_price: Decimal, check_in: NaiveDateTime, check_out: NaiveDateTime) -> Decimal {
    base_price * Decimal::from(nights_between(check_in, check_out))
}

pub fn total_price(room_total: Decimal, service_prices: &[Decimal]) -> Decimal {
    room_total + service_prices.iter().copied().sum::<Decimal>()
}
