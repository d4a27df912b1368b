use super::domain::Decision;
use super::tables::DECISION_BANDS;

/// Lowest normalization ceiling; keeps an all-zero weight set from dividing by zero.
pub const MIN_NORMALIZATION_CEILING: f64 = 1.0;

/// Clamp `raw_total` into `[observed_min, observed_max]` and rescale to 0-100.
pub fn normalize(raw_total: f64, observed_min: f64, observed_max: f64) -> f64 {
    if raw_total <= observed_min {
        return 0.0;
    }
    if raw_total >= observed_max {
        return 100.0;
    }
    100.0 * (raw_total - observed_min) / (observed_max - observed_min)
}

/// Map a normalized score onto its decision band.
///
/// Bands are half-open; the top band also accepts its upper bound.
pub fn classify(score: f64) -> Decision {
    let top = DECISION_BANDS.len() - 1;
    DECISION_BANDS
        .iter()
        .enumerate()
        .find(|(index, band)| band.contains(score) || (*index == top && score == band.high))
        .map(|(_, band)| band.decision)
        .unwrap_or(Decision::Reject)
}
