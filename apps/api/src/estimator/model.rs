//! Wire-level data model for the compensation estimator.
//!
//! `CandidateProfile` is the request body; `Prediction` is the response.
//! Both are request-scoped values — nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Structured description of a candidate, as submitted by the salary form.
///
/// Categorical fields (`role`, `industry`, `location`, `education`) are
/// matched against the reference tables by exact, case-sensitive string
/// equality; anything unmatched resolves to a documented default rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub role: String,
    pub industry: String,
    pub location: String,
    pub education: String,
    pub experience_years: f64,
    /// Only the count matters to the model; entries are not deduplicated.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Accepted for forward compatibility but currently overridden by the
    /// location-derived currency.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Point estimate ±10%, both ends rounded independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

/// One short explanation string per input factor, chosen by threshold
/// ladders over the corresponding input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorNarratives {
    pub experience: String,
    pub education: String,
    pub location: String,
    pub skills: String,
}

/// Entry/median/senior reference bands at fixed 0.7×/1.0×/1.5× ratios of
/// the resolved baseline. Independent of the experience-multiplier bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBands {
    pub entry: i64,
    pub median: i64,
    pub senior: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub growth_rate: f64,
    pub demand_level: String,
    pub future_outlook: String,
    pub competition_level: String,
    pub salary_bands: SalaryBands,
    pub location_note: String,
    pub career_progression: Vec<String>,
}

/// Full estimator output. Deterministic: identical profiles always yield
/// identical predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub point_estimate: i64,
    pub range: SalaryRange,
    /// Hard-coded model confidence — not derived from match quality.
    pub confidence: f64,
    pub currency: String,
    pub factors: FactorNarratives,
    pub market_insights: MarketInsights,
}
