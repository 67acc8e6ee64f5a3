//! Property tests for the series invariants.
//!
//! Uses proptest to verify:
//! 1. Cumulative profit is the running prefix sum in date order
//! 2. The trend is the mean of a trailing window of at most 3 points
//! 3. The padded axis always contains the cumulative series
//! 4. Windowing never exceeds the timeframe and preserves the tail

use proptest::prelude::*;

use chrono::{Days, NaiveDate};
use pnldash_core::{series::pnl_axis, DerivedSeries, ReportRow, Timeframe};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_profit() -> impl Strategy<Value = f64> {
    (-1000.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_rows(max_len: usize) -> impl Strategy<Value = Vec<ReportRow>> {
    prop::collection::vec((arb_profit(), 0u32..20, 0u32..20), 1..max_len).prop_map(|entries| {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (profit, wins, losses))| ReportRow {
                date: base + Days::new(i as u64),
                profit_total: profit,
                win_count: wins,
                loss_count: losses,
            })
            .collect()
    })
}

fn arb_timeframe() -> impl Strategy<Value = Timeframe> {
    prop_oneof![
        Just(Timeframe::Week),
        Just(Timeframe::Month),
        Just(Timeframe::Quarter),
    ]
}

// ── 1. Prefix sum ────────────────────────────────────────────────────

proptest! {
    /// cumulative_profit[last] equals the sum of all profits in the window,
    /// and each step advances by exactly that row's profit.
    #[test]
    fn cumulative_is_running_prefix_sum(rows in arb_rows(120), tf in arb_timeframe()) {
        let series = DerivedSeries::derive(&rows, tf).unwrap();
        let window = &rows[rows.len().saturating_sub(tf.window())..];

        let mut running = 0.0;
        for (i, row) in window.iter().enumerate() {
            running += row.profit_total;
            prop_assert!((series.cumulative_profit[i] - running).abs() < 1e-9);
        }
        let total: f64 = window.iter().map(|r| r.profit_total).sum();
        prop_assert!((series.final_pnl() - total).abs() < 1e-9);
    }

    /// smooth_profit[i] is the mean of cumulative_profit[max(0, i-2)..=i].
    #[test]
    fn trend_is_trailing_mean_of_three(rows in arb_rows(120), tf in arb_timeframe()) {
        let series = DerivedSeries::derive(&rows, tf).unwrap();
        for i in 0..series.len() {
            let start = i.saturating_sub(2);
            let slice = &series.cumulative_profit[start..=i];
            let mean = slice.iter().sum::<f64>() / slice.len() as f64;
            prop_assert!((series.smooth_profit[i] - mean).abs() < 1e-9);
        }
    }

    /// The padded axis contains every cumulative point, and the tick follows
    /// round(((max-min)/5)/10)*10 exactly.
    #[test]
    fn axis_contains_series(rows in arb_rows(120), tf in arb_timeframe()) {
        let series = DerivedSeries::derive(&rows, tf).unwrap();
        let scale = pnl_axis(&series.cumulative_profit);

        for &v in &series.cumulative_profit {
            prop_assert!(scale.min <= v + 1e-9);
            prop_assert!(scale.max >= v - 1e-9);
        }

        let expected_tick = (((scale.max - scale.min) / 5.0 / 10.0).round() * 10.0) as i64;
        prop_assert_eq!(scale.tick, expected_tick);
    }

    /// The window never exceeds the timeframe and always keeps the most
    /// recent rows.
    #[test]
    fn window_is_bounded_tail(rows in arb_rows(120), tf in arb_timeframe()) {
        let series = DerivedSeries::derive(&rows, tf).unwrap();
        prop_assert!(series.len() <= tf.window());
        prop_assert_eq!(series.len(), rows.len().min(tf.window()));
        prop_assert_eq!(*series.dates.last().unwrap(), rows.last().unwrap().date);
    }

    /// win_ratio never returns NaN or infinity: it either succeeds with a
    /// value in [0, 1] or fails on zero trades.
    #[test]
    fn win_ratio_is_finite_or_error(rows in arb_rows(120), tf in arb_timeframe()) {
        let series = DerivedSeries::derive(&rows, tf).unwrap();
        match series.win_ratio() {
            Ok(ratio) => {
                prop_assert!(ratio.is_finite());
                prop_assert!((0.0..=1.0).contains(&ratio));
            }
            Err(_) => prop_assert_eq!(series.total_trades(), 0),
        }
    }
}
