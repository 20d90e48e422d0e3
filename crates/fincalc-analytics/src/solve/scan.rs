//! Sampling the residual for signs of multiple roots.

use crate::valuation::Valuation;

/// Rates at which the residual is sampled.
pub const SAMPLE_RATES: [f64; 7] = [-0.9, -0.5, 0.0, 0.1, 0.5, 1.0, 2.0];

/// Warning attached when the sampled residual changes sign more than once.
pub const MULTIPLE_ROOTS_WARNING: &str =
    "Multiple sign changes in NPV over sample rates; multiple IRRs may exist.";

/// Counts sign changes of the residual across [`SAMPLE_RATES`].
///
/// Zero and non-finite samples are skipped.
#[must_use]
pub fn count_sign_changes(valuation: &dyn Valuation) -> usize {
    let signs: Vec<bool> = SAMPLE_RATES
        .iter()
        .map(|&rate| valuation.residual(rate))
        .filter(|value| value.is_finite() && *value != 0.0)
        .map(|value| value > 0.0)
        .collect();

    signs.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

/// Returns the advisory warnings for a residual, empty when it looks single-rooted.
#[must_use]
pub fn multiple_root_warnings(valuation: &dyn Valuation) -> Vec<String> {
    let changes = count_sign_changes(valuation);
    if changes > 1 {
        log::debug!("residual changes sign {changes} times over sample rates");
        vec![MULTIPLE_ROOTS_WARNING.to_string()]
    } else {
        Vec::new()
    }
}
