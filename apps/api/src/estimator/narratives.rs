//! Fixed narrative text selected by threshold ladders over the inputs.
//!
//! These strings explain each factor's contribution in the response. They
//! are not data-driven beyond the threshold comparisons — no templating,
//! no interpolation.

/// Per-factor explanation for experience, keyed by the same 3/8-year
/// breakpoints as the multiplier curve.
pub fn experience_narrative(years: f64) -> &'static str {
    if years < 3.0 {
        "Early-career profile; compensation sits below the market median until the 3-year mark."
    } else if years < 8.0 {
        "Mid-level experience adds a meaningful premium over entry-level compensation."
    } else {
        "Senior experience commands a substantial premium, capped at roughly 1.8x entry pay."
    }
}

/// Per-level explanation for education. Unknown levels get a neutral note.
pub fn education_narrative(education: &str) -> &'static str {
    match education {
        "High School" => "Without a degree, compensation trails the market median for most roles.",
        "Associate" => "An associate degree closes most of the gap to the bachelor's baseline.",
        "Bachelor" => "A bachelor's degree is the baseline expectation; no premium or penalty applied.",
        "Master" => "A master's degree adds a moderate premium, strongest in technical roles.",
        "PhD" => "A PhD commands a premium in research-adjacent roles.",
        "MBA" => "An MBA carries the largest education premium, especially in management tracks.",
        _ => "Education level not recognized; no adjustment applied.",
    }
}

/// Per-factor explanation for location, keyed by multiplier magnitude.
pub fn location_narrative(multiplier: f64) -> &'static str {
    if multiplier > 1.3 {
        "Major-hub location with a significant pay premium over the base market."
    } else if multiplier > 1.1 {
        "Above-average market; local pay runs ahead of the national baseline."
    } else {
        "Average or below-average market; location contributes little premium."
    }
}

/// Per-factor explanation for the skill list, keyed by count.
pub fn skills_narrative(skill_count: usize) -> &'static str {
    if skill_count >= 6 {
        "Broad skill set at the maximum bonus; further breadth adds no premium."
    } else if skill_count >= 3 {
        "Solid skill coverage; each additional listed skill still adds a small premium."
    } else {
        "Narrow skill list; listing more relevant skills would raise the estimate."
    }
}

/// "High" / "Medium" / "Low" label for a demand score in [0, 1].
pub fn demand_level(demand_score: f64) -> &'static str {
    if demand_score > 0.7 {
        "High"
    } else if demand_score > 0.4 {
        "Medium"
    } else {
        "Low"
    }
}

/// Outlook note keyed by annual growth rate.
pub fn future_outlook(growth_rate: f64) -> &'static str {
    if growth_rate > 0.15 {
        "Excellent growth prospects; demand is expanding well ahead of the labor market."
    } else if growth_rate > 0.08 {
        "Good growth prospects; demand is expanding steadily."
    } else {
        "Stable outlook; demand is expected to track the broader market."
    }
}

/// Competition label keyed by the location multiplier.
pub fn competition_level(location_multiplier: f64) -> &'static str {
    if location_multiplier > 1.3 {
        "High"
    } else if location_multiplier > 1.1 {
        "Medium"
    } else {
        "Low"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_narrative_bands() {
        assert!(experience_narrative(1.0).contains("Early-career"));
        assert!(experience_narrative(5.0).contains("Mid-level"));
        assert!(experience_narrative(12.0).contains("Senior"));
    }

    #[test]
    fn test_education_narrative_unknown_level() {
        assert!(education_narrative("Bootcamp").contains("not recognized"));
    }

    #[test]
    fn test_demand_level_thresholds_are_strict() {
        // Thresholds are strict greater-than comparisons.
        assert_eq!(demand_level(0.71), "High");
        assert_eq!(demand_level(0.7), "Medium");
        assert_eq!(demand_level(0.41), "Medium");
        assert_eq!(demand_level(0.4), "Low");
    }

    #[test]
    fn test_future_outlook_thresholds() {
        assert!(future_outlook(0.16).contains("Excellent"));
        // Exactly 0.15 is NOT above the top threshold.
        assert!(future_outlook(0.15).contains("Good"));
        assert!(future_outlook(0.08).contains("Stable"));
    }

    #[test]
    fn test_competition_level_thresholds() {
        assert_eq!(competition_level(1.5), "High");
        // Exactly 1.3 (Bangalore, London) lands in Medium.
        assert_eq!(competition_level(1.3), "Medium");
        assert_eq!(competition_level(1.0), "Low");
    }

    #[test]
    fn test_skills_narrative_bands() {
        assert!(skills_narrative(0).contains("Narrow"));
        assert!(skills_narrative(3).contains("Solid"));
        assert!(skills_narrative(6).contains("maximum"));
    }
}
