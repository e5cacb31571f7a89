//! Prediction orchestration — composes table lookups, factor multipliers,
//! and narrative selection into a single `Prediction`.
//!
//! `predict` is a pure function: no I/O, no randomness, no shared mutable
//! state. Unmatched inputs resolve through the table fallbacks, so it
//! cannot fail. The `SalaryEstimator` trait wraps it behind `AppState`'s
//! `Arc<dyn SalaryEstimator>`, leaving room for other backends.

use async_trait::async_trait;

use crate::currency;
use crate::errors::AppError;
use crate::estimator::model::{
    CandidateProfile, FactorNarratives, MarketInsights, Prediction, SalaryBands, SalaryRange,
};
use crate::estimator::{multipliers, narratives, tables};

/// Reported with every prediction regardless of how well the inputs
/// matched their tables. A placeholder, not a confidence model.
pub const CONFIDENCE: f64 = 0.85;

/// Salary-band ratios relative to the resolved baseline. These bands are
/// independent of the experience-multiplier curve and use their own notion
/// of entry/senior; the two are intentionally not reconciled.
const BAND_ENTRY_RATIO: f64 = 0.7;
const BAND_SENIOR_RATIO: f64 = 1.5;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Estimation backend. Implement this to swap backends without touching
/// the handlers. Carried in `AppState` as `Arc<dyn SalaryEstimator>`.
#[async_trait]
pub trait SalaryEstimator: Send + Sync {
    async fn estimate(&self, profile: &CandidateProfile) -> Result<Prediction, AppError>;
}

/// Default backend: the rule-based heuristic model below.
pub struct HeuristicEstimator;

#[async_trait]
impl SalaryEstimator for HeuristicEstimator {
    async fn estimate(&self, profile: &CandidateProfile) -> Result<Prediction, AppError> {
        Ok(predict(profile))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core prediction
// ────────────────────────────────────────────────────────────────────────────

/// Produces a point estimate, a ±10% range, per-factor narratives, and the
/// market-insight bundle for a candidate profile.
pub fn predict(profile: &CandidateProfile) -> Prediction {
    let location = tables::lookup_location(&profile.location);
    let baseline = tables::lookup_baseline(&profile.industry, &profile.role);
    let base_amount = currency::select_amount(baseline, location.currency);

    let education_mult = tables::education_multiplier(&profile.education);
    let experience_mult = multipliers::experience_multiplier(profile.experience_years);
    let skills_mult = multipliers::skills_multiplier(profile.skills.len());
    let demand = tables::lookup_market_demand(&profile.industry, &profile.role);
    let demand_mult = multipliers::market_demand_multiplier(demand);

    let point_estimate = (base_amount
        * location.multiplier
        * education_mult
        * experience_mult
        * skills_mult
        * demand_mult)
        .round() as i64;

    Prediction {
        point_estimate,
        range: SalaryRange {
            min: (point_estimate as f64 * 0.9).round() as i64,
            max: (point_estimate as f64 * 1.1).round() as i64,
        },
        confidence: CONFIDENCE,
        currency: location.currency.to_string(),
        factors: FactorNarratives {
            experience: narratives::experience_narrative(profile.experience_years).to_string(),
            education: narratives::education_narrative(&profile.education).to_string(),
            location: narratives::location_narrative(location.multiplier).to_string(),
            skills: narratives::skills_narrative(profile.skills.len()).to_string(),
        },
        market_insights: MarketInsights {
            growth_rate: demand.growth_rate,
            demand_level: narratives::demand_level(demand.demand_score).to_string(),
            future_outlook: narratives::future_outlook(demand.growth_rate).to_string(),
            competition_level: narratives::competition_level(location.multiplier).to_string(),
            salary_bands: SalaryBands {
                entry: (base_amount * BAND_ENTRY_RATIO).round() as i64,
                median: base_amount.round() as i64,
                senior: (base_amount * BAND_SENIOR_RATIO).round() as i64,
            },
            location_note: location.narrative.to_string(),
            career_progression: tables::career_progression(&profile.role)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn bangalore_engineer() -> CandidateProfile {
        CandidateProfile {
            role: "Software Engineer".to_string(),
            industry: "Technology".to_string(),
            location: "Bangalore".to_string(),
            education: "Bachelor".to_string(),
            experience_years: 5.0,
            skills: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            currency: None,
        }
    }

    #[test]
    fn test_bangalore_engineer_reference_scenario() {
        // 1,500,000 × 1.3 × 1.0 × 1.12 × 1.15 × 1.525 = 3,830,190
        let prediction = predict(&bangalore_engineer());
        assert_eq!(prediction.point_estimate, 3_830_190);
        assert_eq!(prediction.currency, "INR");
        assert_eq!(prediction.range.min, 3_447_171);
        assert_eq!(prediction.range.max, 4_213_209);
        assert_eq!(prediction.confidence, 0.85);
    }

    #[test]
    fn test_determinism() {
        let profile = bangalore_engineer();
        assert_eq!(predict(&profile), predict(&profile));
    }

    #[test]
    fn test_full_fallback_profile_still_predicts() {
        let profile = CandidateProfile {
            role: "Chief Vibes Officer".to_string(),
            industry: "Hospitality".to_string(),
            location: "Atlantis".to_string(),
            education: "School of Life".to_string(),
            experience_years: 0.0,
            skills: vec![],
            currency: None,
        };
        let prediction = predict(&profile);
        // 80,000 × 1.0 × 1.0 × 0.8 × 1.0 × 1.275 = 81,600
        assert_eq!(prediction.point_estimate, 81_600);
        assert_eq!(prediction.currency, "USD");
        assert_eq!(
            prediction.market_insights.location_note,
            "Location data not available"
        );
        assert!(prediction.market_insights.career_progression.is_empty());
    }

    #[test]
    fn test_unmatched_industry_role_uses_default_baseline_in_local_currency() {
        let profile = CandidateProfile {
            role: "Unknown".to_string(),
            industry: "Unknown".to_string(),
            location: "Berlin".to_string(),
            education: "Bachelor".to_string(),
            experience_years: 3.0,
            skills: vec![],
            currency: None,
        };
        let prediction = predict(&profile);
        assert_eq!(prediction.currency, "EUR");
        // Default baseline carries an explicit EUR figure of 65,000.
        assert_eq!(prediction.market_insights.salary_bands.median, 65_000);
    }

    #[test]
    fn test_range_brackets_point_estimate() {
        let profiles = [
            bangalore_engineer(),
            CandidateProfile {
                role: "Accountant".to_string(),
                industry: "Finance".to_string(),
                location: "London".to_string(),
                education: "MBA".to_string(),
                experience_years: 20.0,
                skills: vec!["x".to_string(); 9],
                currency: None,
            },
        ];
        for profile in profiles {
            let p = predict(&profile);
            assert!(p.range.min <= p.point_estimate);
            assert!(p.point_estimate <= p.range.max);
            assert_eq!(p.range.min, (p.point_estimate as f64 * 0.9).round() as i64);
            assert_eq!(p.range.max, (p.point_estimate as f64 * 1.1).round() as i64);
        }
    }

    #[test]
    fn test_salary_bands_fixed_ratios_of_baseline() {
        let prediction = predict(&bangalore_engineer());
        let bands = &prediction.market_insights.salary_bands;
        assert_eq!(bands.entry, 1_050_000);
        assert_eq!(bands.median, 1_500_000);
        assert_eq!(bands.senior, 2_250_000);
    }

    #[test]
    fn test_market_insight_labels_for_bangalore_engineer() {
        let prediction = predict(&bangalore_engineer());
        let insights = &prediction.market_insights;
        // demand_score 0.9 > 0.7; growth 0.15 is NOT > 0.15; multiplier 1.3 is NOT > 1.3.
        assert_eq!(insights.demand_level, "High");
        assert!(insights.future_outlook.contains("Good"));
        assert_eq!(insights.competition_level, "Medium");
        assert_eq!(insights.growth_rate, 0.15);
        assert_eq!(insights.career_progression.len(), 5);
    }

    #[test]
    fn test_currency_hint_is_ignored() {
        let mut profile = bangalore_engineer();
        profile.currency = Some("USD".to_string());
        let prediction = predict(&profile);
        // Location-derived currency wins over the hint.
        assert_eq!(prediction.currency, "INR");
        assert_eq!(prediction.point_estimate, 3_830_190);
    }

    #[test]
    fn test_duplicate_skills_are_counted_as_is() {
        let mut profile = bangalore_engineer();
        profile.skills = vec!["rust".to_string(); 3];
        assert_eq!(predict(&profile).point_estimate, 3_830_190);
    }

    #[tokio::test]
    async fn test_heuristic_estimator_matches_predict() {
        let profile = bangalore_engineer();
        let via_trait = HeuristicEstimator.estimate(&profile).await.unwrap();
        assert_eq!(via_trait, predict(&profile));
    }
}
