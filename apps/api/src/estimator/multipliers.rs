//! Factor-multiplier curves: experience, skills, and market demand.
//!
//! Each curve is a pure function producing a positive factor applied
//! multiplicatively to the baseline salary.

use crate::estimator::tables::MarketDemand;

/// Three-band experience curve with per-band caps.
///
/// Bands: entry (< 3 years), mid (3–8 years), senior (8+ years). The entry
/// and mid formulas deliberately disagree at the 3-year boundary (0.95 vs
/// 1.0) — a step up at the band transition, not a smoothing bug. The senior
/// band caps at 1.8 no matter how large `years` grows.
pub fn experience_multiplier(years: f64) -> f64 {
    if years < 3.0 {
        (0.8 + years * 0.05).min(1.0)
    } else if years < 8.0 {
        (1.0 + (years - 3.0) * 0.06).min(1.3)
    } else {
        (1.3 + (years - 8.0) * 0.05).min(1.8)
    }
}

/// Diminishing-returns skill bonus: +5% per listed skill, capped at 1.3.
///
/// Only the count matters; duplicates are counted as-is. The cap is reached
/// at 6 skills, so additional entries have zero marginal effect.
pub fn skills_multiplier(skill_count: usize) -> f64 {
    (1.0 + skill_count as f64 * 0.05).min(1.3)
}

/// Blends growth rate and demand score into one adjustment.
///
/// Both inputs are in [0, 1] by table construction, so the result is
/// bounded to [1.0, 1.5].
pub fn market_demand_multiplier(demand: &MarketDemand) -> f64 {
    1.0 + (demand.growth_rate * 0.5 + demand.demand_score * 0.5)
}
