//! Score aggregation.

/// Upper bound of a match score.
pub const MAX_SCORE: u8 = 100;

/// Combine the three dimension scores into a 0-100 integer.
///
/// The sum is clamped to `[0, 100]` and rounded half away from zero. A
/// non-finite sum yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn aggregate_score(inventory: f64, preference: f64, constraint: f64) -> u8 {
    let sum = inventory + preference + constraint;
    if !sum.is_finite() {
        return 0;
    }
    // Clamped to [0, 100] so the cast cannot truncate.
    sum.clamp(0.0, f64::from(MAX_SCORE)).round() as u8
}
