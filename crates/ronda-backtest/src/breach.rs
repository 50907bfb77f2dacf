//! Breach detection for VaR forecasts.

use ronda_traits::{BreachRecord, Date, VaRForecast};

/// Whether a realized return breaches a VaR forecast.
///
/// Uses the loss convention fixed in `ronda-traits`: the forecast is a
/// positive loss magnitude, and the comparison is strict —
/// `realized_return < -forecast.value`. A return exactly at the threshold
/// is not a breach; the choice shifts counts at threshold boundaries, so it
/// is fixed here and used everywhere.
#[must_use]
pub fn is_breach(realized_return: f64, forecast: &VaRForecast) -> bool {
    realized_return < -forecast.value
}

/// Builds the out-of-sample record for one test date.
///
/// The forecast must have been computed from data strictly before `date`;
/// the rolling harness guarantees this alignment.
#[must_use]
pub fn evaluate(date: Date, realized_return: f64, forecast: &VaRForecast) -> BreachRecord {
    BreachRecord {
        date,
        realized_return,
        var: forecast.value,
        breached: is_breach(realized_return, forecast),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(value: f64) -> VaRForecast {
        VaRForecast {
            value,
            expected_shortfall: None,
            confidence: 0.99,
            horizon: 1,
        }
    }

    #[test]
    fn test_loss_beyond_var_breaches() {
        assert!(is_breach(-0.03, &forecast(0.02)));
    }

    #[test]
    fn test_loss_within_var_does_not_breach() {
        assert!(!is_breach(-0.01, &forecast(0.02)));
        assert!(!is_breach(0.01, &forecast(0.02)));
    }

    #[test]
    fn test_threshold_is_strict() {
        // A return exactly at -VaR is not a breach.
        assert!(!is_breach(-0.02, &forecast(0.02)));
    }

    #[test]
    fn test_evaluate_builds_record() {
        let date = Date::from_ymd_opt(2024, 3, 15).unwrap();
        let record = evaluate(date, -0.05, &forecast(0.02));
        assert_eq!(record.date, date);
        assert_eq!(record.realized_return, -0.05);
        assert_eq!(record.var, 0.02);
        assert!(record.breached);
    }
}
