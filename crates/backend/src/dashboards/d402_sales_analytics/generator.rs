use chrono::NaiveDate;
use contracts::dashboards::d402_sales_analytics::DailySalesRecord;

use super::date_range::DateRange;
use super::random::RandomSource;
use crate::shared::format::round_cents;

pub const MIN_DAILY_REVENUE: f64 = 500.0;
pub const MAX_DAILY_REVENUE: f64 = 2500.0;
pub const MIN_DAILY_ORDERS: u32 = 5;
pub const MAX_DAILY_ORDERS: u32 = 30;

/// One record per calendar day of `range`, ascending, end date included.
pub fn generate_daily_series<R>(range: &DateRange, rng: &mut R) -> Vec<DailySalesRecord>
where
    R: RandomSource + ?Sized,
{
    range.days().map(|date| daily_record(date, &mut *rng)).collect()
}

fn daily_record<R>(date: NaiveDate, rng: &mut R) -> DailySalesRecord
where
    R: RandomSource + ?Sized,
{
    // Rounding may push a draw just under the cap onto it
    let revenue =
        round_cents(rng.uniform(MIN_DAILY_REVENUE, MAX_DAILY_REVENUE)).min(MAX_DAILY_REVENUE - 0.01);
    let orders = rng.uniform_int(MIN_DAILY_ORDERS, MAX_DAILY_ORDERS);

    DailySalesRecord {
        date,
        revenue,
        orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_analytics::random::{RngSource, ScriptedSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(Some(start), Some(end)).unwrap()
    }

    fn has_at_most_two_decimals(value: f64) -> bool {
        ((value * 100.0).round() - value * 100.0).abs() < 1e-6
    }

    #[test]
    fn test_single_day_yields_one_record() {
        let mut rng = ScriptedSource::constant(0.5);
        let series = generate_daily_series(&range("2024-01-01", "2024-01-01"), &mut rng);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_thirty_day_range_covers_every_day() {
        let mut rng = RngSource(StdRng::seed_from_u64(1));
        let series = generate_daily_series(&range("2024-01-01", "2024-01-30"), &mut rng);
        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date.to_string(), "2024-01-01");
        assert_eq!(series[29].date.to_string(), "2024-01-30");
        for pair in series.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_exact_values_from_scripted_draws() {
        // draws alternate revenue, orders for each day
        let mut rng = ScriptedSource::new(vec![0.25, 0.6, 0.123456, 0.1]);
        let series = generate_daily_series(&range("2024-02-28", "2024-02-29"), &mut rng);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].revenue, 1000.0);
        assert_eq!(series[0].orders, 20);
        assert_eq!(series[1].revenue, 746.91);
        assert_eq!(series[1].orders, 7);
    }

    #[test]
    fn test_lowest_draws_hit_lower_bounds() {
        let mut rng = ScriptedSource::constant(0.0);
        let series = generate_daily_series(&range("2024-01-01", "2024-01-03"), &mut rng);
        assert!(series
            .iter()
            .all(|r| r.revenue == MIN_DAILY_REVENUE && r.orders == MIN_DAILY_ORDERS));
    }

    #[test]
    fn test_highest_draws_stay_below_upper_bounds() {
        let mut rng = ScriptedSource::constant(0.999_999_999);
        let series = generate_daily_series(&range("2024-01-01", "2024-01-01"), &mut rng);
        assert_eq!(series[0].revenue, 2499.99);
        assert_eq!(series[0].orders, MAX_DAILY_ORDERS - 1);
    }

    #[test]
    fn test_random_values_respect_bounds_and_rounding() {
        let mut rng = RngSource(StdRng::seed_from_u64(2024));
        let series = generate_daily_series(&range("2023-01-01", "2024-12-31"), &mut rng);
        assert_eq!(series.len(), 731);

        for record in &series {
            assert!(
                (MIN_DAILY_REVENUE..MAX_DAILY_REVENUE).contains(&record.revenue),
                "revenue {} out of range",
                record.revenue
            );
            assert!(has_at_most_two_decimals(record.revenue));
            assert!((MIN_DAILY_ORDERS..MAX_DAILY_ORDERS).contains(&record.orders));
        }
    }
}
