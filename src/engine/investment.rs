//! Investment profit/loss and value simulation
//!
//! The simulator is a toy random walk, not a market model. Each investment
//! name maps to a fixed drift profile so different holdings behave
//! differently but consistently.

use chrono::{Local, NaiveDate};

use crate::models::{round_to_cents, Investment};

use super::random::RandomSource;

/// The walk never drops below this fraction of the initial value
pub const VALUE_FLOOR_RATIO: f64 = 0.1;

/// Current value minus initial amount
pub fn calculate_investment_profit_loss(investment: &Investment) -> f64 {
    investment.current_value - investment.initial_amount
}

/// Daily trend and volatility derived from an investment's name
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftProfile {
    /// In `[0, 0.99]`
    pub seed_factor: f64,
    /// Between -0.01% and about +0.05% per day
    pub daily_trend: f64,
    /// Maximum daily swing, between 0.5% and about 1.5%
    pub volatility: f64,
}

impl DriftProfile {
    pub fn for_name(name: &str) -> Self {
        // UTF-16 code units, so names behave the same as in browser clients
        let seed: u64 = name.encode_utf16().map(u64::from).sum();
        let seed_factor = (seed % 100) as f64 / 100.0;

        Self {
            seed_factor,
            daily_trend: seed_factor * 0.0006 - 0.0001,
            volatility: 0.005 + seed_factor * 0.01,
        }
    }
}

/// Simulate the value of an investment as of today
pub fn simulate_investment_current_value<R: RandomSource + ?Sized>(
    initial_value: f64,
    start_date: NaiveDate,
    name: &str,
    rng: &mut R,
) -> f64 {
    let today = Local::now().date_naive();
    simulate_investment_value_at(initial_value, start_date, name, today, rng)
}

/// Simulate the value of an investment as of `as_of`
///
/// Walks one step per whole day held. Each step multiplies the value by
/// `1 + trend + (r - 0.5) * 2 * volatility` with `r` drawn from `rng`.
pub fn simulate_investment_value_at<R: RandomSource + ?Sized>(
    initial_value: f64,
    start_date: NaiveDate,
    name: &str,
    as_of: NaiveDate,
    rng: &mut R,
) -> f64 {
    if initial_value.is_nan() || initial_value <= 0.0 {
        return 0.0;
    }

    let days_held = (as_of - start_date).num_days().max(0);
    if days_held == 0 {
        // Started today or in the future
        return initial_value;
    }

    let profile = DriftProfile::for_name(name);
    let floor = initial_value * VALUE_FLOOR_RATIO;
    let mut value = initial_value;

    for _ in 0..days_held {
        let fluctuation = (rng.next_unit() - 0.5) * 2.0 * profile.volatility;
        value *= 1.0 + profile.daily_trend + fluctuation;
        value = value.max(floor);
    }

    round_to_cents(value).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::{FixedRandom, SeededRandom, ThreadRandom};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn investment(initial: f64, current: f64) -> Investment {
        let mut inv = Investment::new("Test Stock", initial, date(2024, 1, 1));
        inv.current_value = current;
        inv
    }

    #[test]
    fn test_profit_loss() {
        assert_eq!(calculate_investment_profit_loss(&investment(100.0, 150.0)), 50.0);
        assert_eq!(calculate_investment_profit_loss(&investment(100.0, 70.0)), -30.0);
        assert_eq!(calculate_investment_profit_loss(&investment(100.0, 100.0)), 0.0);
    }

    #[test]
    fn test_profit_loss_with_negative_current_value() {
        assert_eq!(calculate_investment_profit_loss(&investment(100.0, -10.0)), -110.0);
    }

    #[test]
    fn test_drift_profile_ranges() {
        let flat = DriftProfile::for_name("");
        assert_eq!(flat.seed_factor, 0.0);
        assert!((flat.daily_trend - -0.0001).abs() < 1e-12);
        assert!((flat.volatility - 0.005).abs() < 1e-12);

        // 'c' is code 99, the largest factor
        let wild = DriftProfile::for_name("c");
        assert_eq!(wild.seed_factor, 0.99);
        assert!((wild.daily_trend - 0.000494).abs() < 1e-12);
        assert!((wild.volatility - 0.0149).abs() < 1e-12);

        // "SimStock" sums past 100 and wraps
        let wrapped = DriftProfile::for_name("SimStock");
        assert!(wrapped.seed_factor < 1.0);
    }

    #[test]
    fn test_non_positive_initial_returns_zero() {
        let mut rng = ThreadRandom;
        assert_eq!(simulate_investment_current_value(0.0, date(2023, 1, 1), "Zero", &mut rng), 0.0);
        assert_eq!(simulate_investment_current_value(-50.0, date(2023, 1, 1), "Neg", &mut rng), 0.0);
        assert_eq!(simulate_investment_current_value(f64::NAN, date(2023, 1, 1), "NaN", &mut rng), 0.0);
    }

    #[test]
    fn test_today_or_future_returns_initial() {
        let mut rng = ThreadRandom;
        let today = Local::now().date_naive();

        assert_eq!(simulate_investment_current_value(100.0, today, "SimStockToday", &mut rng), 100.0);
        assert_eq!(
            simulate_investment_current_value(100.0, today + Duration::days(365), "SimStockFuture", &mut rng),
            100.0
        );
        assert_eq!(
            simulate_investment_current_value(123.456, today, "Unrounded", &mut rng),
            123.456
        );
    }

    #[test]
    fn test_midpoint_source_follows_trend_only() {
        let mut rng = FixedRandom::midpoint();
        let value = simulate_investment_value_at(100.0, date(2024, 1, 1), "", date(2024, 1, 11), &mut rng);
        // 100 * 0.9999^10
        assert_eq!(value, 99.9);

        let profile = DriftProfile::for_name("A");
        let mut rng = FixedRandom::midpoint();
        let value = simulate_investment_value_at(1000.0, date(2023, 1, 1), "A", date(2024, 1, 1), &mut rng);
        let expected = round_to_cents(1000.0 * (1.0 + profile.daily_trend).powi(365));
        assert_eq!(value, expected);
        assert!((value - 1111.64).abs() < 0.01);
    }

    #[test]
    fn test_value_is_floored_at_ten_percent() {
        // Lowest draw every day with the most volatile profile
        let mut rng = FixedRandom::new(0.0);
        let value = simulate_investment_value_at(100.0, date(2020, 1, 1), "c", date(2022, 9, 27), &mut rng);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let start = date(2023, 3, 1);
        let as_of = date(2024, 3, 1);
        let a = simulate_investment_value_at(1000.0, start, "SimStock", as_of, &mut SeededRandom::new(42));
        let b = simulate_investment_value_at(1000.0, start, "SimStock", as_of, &mut SeededRandom::new(42));
        assert_eq!(a, b);
        assert!(a >= 100.0);
    }

    #[test]
    fn test_random_walk_stays_within_bounds() {
        let start = date(2023, 1, 1);
        let as_of = date(2023, 4, 11);
        let days = (as_of - start).num_days() as i32;
        let profile = DriftProfile::for_name("SimStock");
        let upper = 1000.0 * (1.0 + profile.daily_trend + profile.volatility).powi(days);

        for seed in 0..20 {
            let value = simulate_investment_value_at(1000.0, start, "SimStock", as_of, &mut SeededRandom::new(seed));
            assert!(value >= 100.0);
            assert!(value <= upper + 0.01);
        }
    }

    #[test]
    fn test_result_is_rounded_to_cents() {
        let mut rng = SeededRandom::new(3);
        let value = simulate_investment_value_at(777.77, date(2022, 6, 1), "Fund", date(2023, 6, 1), &mut rng);
        assert_eq!(round_to_cents(value), value);
    }
}
