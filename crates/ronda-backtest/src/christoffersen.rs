//! Christoffersen independence test and conditional-coverage composition.

use ronda_traits::{BreachSeries, Result, RondaError, TestResult};
use serde::{Deserialize, Serialize};

use crate::kupiec::{DEFAULT_SIGNIFICANCE, KupiecTest, chi_squared_p_value, validate_probability};

/// 2x2 first-order transition counts over a binary breach sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCounts {
    /// No-breach followed by no-breach.
    pub n00: usize,
    /// No-breach followed by breach.
    pub n01: usize,
    /// Breach followed by no-breach.
    pub n10: usize,
    /// Breach followed by breach.
    pub n11: usize,
}

impl TransitionCounts {
    /// Total number of transitions.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.n00 + self.n01 + self.n10 + self.n11
    }

    /// Transitions leaving the no-breach state.
    #[must_use]
    pub const fn from_calm(&self) -> usize {
        self.n00 + self.n01
    }

    /// Transitions leaving the breach state.
    #[must_use]
    pub const fn from_breach(&self) -> usize {
        self.n10 + self.n11
    }
}

/// Counts consecutive-pair transitions among {no-breach, breach} states.
#[must_use]
pub fn transition_counts(flags: &[bool]) -> TransitionCounts {
    let mut counts = TransitionCounts {
        n00: 0,
        n01: 0,
        n10: 0,
        n11: 0,
    };
    for pair in flags.windows(2) {
        match (pair[0], pair[1]) {
            (false, false) => counts.n00 += 1,
            (false, true) => counts.n01 += 1,
            (true, false) => counts.n10 += 1,
            (true, true) => counts.n11 += 1,
        }
    }
    counts
}

/// `n * ln(p)` with the `0 * ln(0) = 0` convention.
fn xlogy(n: f64, p: f64) -> f64 {
    if n == 0.0 { 0.0 } else { n * p.ln() }
}

/// Christoffersen test of breach independence.
///
/// Compares a first-order Markov model of the breach sequence (transition
/// probabilities `pi01`, `pi11`) against the independence restriction of a
/// single pooled breach probability `pi`:
///
/// ```text
/// LR_Ind = -2 (ll_ind - ll_markov) ~ chi2(1)
/// ```
///
/// Degenerate transition probabilities are handled with the `0 ln 0 = 0`
/// convention; the test fails with `InsufficientData` only when a whole
/// transition row is impossible to estimate (no transitions out of one of
/// the states — in particular, a sequence with no breach ever followed by
/// another observation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChristoffersenTest {
    significance: f64,
}

impl ChristoffersenTest {
    /// Creates a test with the given significance threshold.
    #[must_use]
    pub const fn new(significance: f64) -> Self {
        Self { significance }
    }

    /// The significance threshold.
    #[must_use]
    pub const fn significance(&self) -> f64 {
        self.significance
    }

    /// Runs the independence test on a breach series.
    ///
    /// # Errors
    ///
    /// - [`RondaError::InsufficientData`] for fewer than 2 observations, or
    ///   when a transition row cannot be estimated
    /// - [`RondaError::InvalidParameter`] when the significance threshold is
    ///   outside `(0, 1)`
    pub fn evaluate(&self, breaches: &BreachSeries) -> Result<TestResult> {
        validate_probability(self.significance, "significance threshold")?;
        if breaches.len() < 2 {
            return Err(RondaError::InsufficientData(format!(
                "independence test needs at least 2 observations, got {}",
                breaches.len()
            )));
        }

        let counts = transition_counts(&breaches.flags());
        if counts.from_calm() == 0 || counts.from_breach() == 0 {
            return Err(RondaError::InsufficientData(format!(
                "transition row cannot be estimated (n00+n01 = {}, n10+n11 = {}); \
                 independence is untestable",
                counts.from_calm(),
                counts.from_breach()
            )));
        }

        let statistic = independence_statistic(&counts);
        let p_value = chi_squared_p_value(statistic, 1.0)?;
        Ok(TestResult {
            statistic,
            df: 1,
            p_value,
            reject_null: p_value < self.significance,
            significance: self.significance,
        })
    }

    /// Runs Kupiec and independence tests and composes the joint
    /// conditional-coverage statistic `LR_POF + LR_Ind ~ chi2(2)`.
    ///
    /// # Errors
    ///
    /// Any failure of the two component tests.
    pub fn conditional_coverage(
        &self,
        breaches: &BreachSeries,
        alpha: f64,
    ) -> Result<ConditionalCoverage> {
        let kupiec = KupiecTest::new(self.significance).evaluate(breaches, alpha)?;
        let independence = self.evaluate(breaches)?;

        let statistic = kupiec.statistic + independence.statistic;
        let p_value = chi_squared_p_value(statistic, 2.0)?;
        let combined = TestResult {
            statistic,
            df: 2,
            p_value,
            reject_null: p_value < self.significance,
            significance: self.significance,
        };

        Ok(ConditionalCoverage {
            kupiec,
            independence,
            combined,
        })
    }
}

impl Default for ChristoffersenTest {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANCE)
    }
}

fn independence_statistic(counts: &TransitionCounts) -> f64 {
    let (n00, n01) = (counts.n00 as f64, counts.n01 as f64);
    let (n10, n11) = (counts.n10 as f64, counts.n11 as f64);

    let pi01 = n01 / (n00 + n01);
    let pi11 = n11 / (n10 + n11);
    let pi = (n01 + n11) / counts.total() as f64;

    let ll_ind = xlogy(n00 + n10, 1.0 - pi) + xlogy(n01 + n11, pi);
    let ll_markov = xlogy(n00, 1.0 - pi01)
        + xlogy(n01, pi01)
        + xlogy(n10, 1.0 - pi11)
        + xlogy(n11, pi11);

    (-2.0 * (ll_ind - ll_markov)).max(0.0)
}

/// Joint conditional-coverage result: the two component tests plus their
/// chi-squared(2) composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalCoverage {
    /// Unconditional-coverage component.
    pub kupiec: TestResult,
    /// Independence component.
    pub independence: TestResult,
    /// Joint statistic, `chi2(2)`.
    pub combined: TestResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ronda_traits::{BreachRecord, Date};

    fn series(flags: &[bool]) -> BreachSeries {
        let base = Date::from_ymd_opt(2024, 1, 1).unwrap();
        let records = flags
            .iter()
            .enumerate()
            .map(|(i, &breached)| BreachRecord {
                date: base + chrono::Days::new(i as u64),
                realized_return: if breached { -0.05 } else { 0.001 },
                var: 0.02,
                breached,
            })
            .collect();
        BreachSeries::new(records).unwrap()
    }

    #[test]
    fn test_transition_counts() {
        // Matches the worked example from the reference implementation.
        let counts = transition_counts(&[false, false, true, false, true, true]);
        assert_eq!(counts.n00, 1);
        assert_eq!(counts.n01, 2);
        assert_eq!(counts.n10, 1);
        assert_eq!(counts.n11, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_finite_statistic_on_mixed_sequence() {
        let result = ChristoffersenTest::default()
            .evaluate(&series(&[false, false, true, false, true, true]))
            .unwrap();
        assert!(result.statistic.is_finite());
        assert!(result.statistic >= 0.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn test_alternating_beats_iid_pattern() {
        // Strict alternation is maximally dependent; a TTFF cycle has the
        // same breach count but transition rates close to the pooled rate.
        let alternating: Vec<bool> = (0..40).map(|i| i % 2 == 0).collect();
        let blocky: Vec<bool> = (0..40).map(|i| i % 4 < 2).collect();

        let test = ChristoffersenTest::default();
        let dependent = test.evaluate(&series(&alternating)).unwrap();
        let independent = test.evaluate(&series(&blocky)).unwrap();

        assert!(dependent.statistic > independent.statistic);
        assert!(dependent.reject_null);
    }

    #[test]
    fn test_clustered_breaches_reject() {
        let mut flags = vec![false; 60];
        for flag in flags.iter_mut().take(48).skip(40) {
            *flag = true;
        }
        let result = ChristoffersenTest::default().evaluate(&series(&flags)).unwrap();
        assert!(result.reject_null, "clustered breaches should reject independence");
    }

    #[test]
    fn test_no_breaches_is_untestable() {
        let err = ChristoffersenTest::default()
            .evaluate(&series(&[false; 50]))
            .unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_single_trailing_breach_is_untestable() {
        // The only breach is the last observation: no transitions leave the
        // breach state.
        let mut flags = vec![false; 20];
        flags[19] = true;
        let err = ChristoffersenTest::default()
            .evaluate(&series(&flags))
            .unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_too_short_fails() {
        let err = ChristoffersenTest::default()
            .evaluate(&series(&[true]))
            .unwrap_err();
        assert!(matches!(err, RondaError::InsufficientData(_)));
    }

    #[test]
    fn test_conditional_coverage_combines_statistics() {
        let flags = [false, false, true, false, false, true, false, false, true, false];
        let cc = ChristoffersenTest::default()
            .conditional_coverage(&series(&flags), 0.95)
            .unwrap();

        assert_relative_eq!(
            cc.combined.statistic,
            cc.kupiec.statistic + cc.independence.statistic,
            epsilon = 1e-12
        );
        assert_eq!(cc.kupiec.df, 1);
        assert_eq!(cc.independence.df, 1);
        assert_eq!(cc.combined.df, 2);
    }
}
