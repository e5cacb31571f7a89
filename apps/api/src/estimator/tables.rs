//! Static reference tables backing the compensation estimator.
//!
//! All tables are hand-authored, process-wide constants. Lookups are exact,
//! case-sensitive string matches — no normalization, no fuzzy matching —
//! so identical inputs always resolve identically. Every lookup has a
//! documented fallback; the estimator never fails on an unmatched key.

// ────────────────────────────────────────────────────────────────────────────
// Record types
// ────────────────────────────────────────────────────────────────────────────

/// Reference compensation for an (industry, role) pair, per currency.
/// `usd` is always present; the others fall back to a fixed approximate
/// conversion from USD (see `currency::select_amount`).
#[derive(Debug, Clone, Copy)]
pub struct BaselineSalary {
    pub usd: f64,
    pub inr: Option<f64>,
    pub eur: Option<f64>,
    pub gbp: Option<f64>,
}

/// Market profile for a known location: a pay multiplier, the currency
/// estimates are quoted in, and a one-line market note.
#[derive(Debug, Clone, Copy)]
pub struct LocationProfile {
    pub multiplier: f64,
    pub currency: &'static str,
    pub narrative: &'static str,
}

/// Growth and demand signals for an (industry, role) pair. Both values are
/// in [0, 1] by construction.
#[derive(Debug, Clone, Copy)]
pub struct MarketDemand {
    pub growth_rate: f64,
    pub demand_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Baseline salaries  (industry → role → per-currency record)
// ────────────────────────────────────────────────────────────────────────────

macro_rules! baseline {
    ($usd:expr, $inr:expr, $eur:expr, $gbp:expr) => {
        BaselineSalary {
            usd: $usd,
            inr: Some($inr),
            eur: Some($eur),
            gbp: Some($gbp),
        }
    };
}

#[rustfmt::skip]
static BASELINES: &[(&str, &[(&str, BaselineSalary)])] = &[
    (
        "Technology",
        &[
            ("Software Engineer", baseline!(110_000.0, 1_500_000.0, 85_000.0, 75_000.0)),
            ("Data Scientist", baseline!(120_000.0, 1_650_000.0, 90_000.0, 80_000.0)),
            ("Product Manager", baseline!(125_000.0, 1_800_000.0, 95_000.0, 85_000.0)),
            ("DevOps Engineer", baseline!(115_000.0, 1_550_000.0, 88_000.0, 78_000.0)),
            ("UI/UX Designer", baseline!(95_000.0, 1_200_000.0, 72_000.0, 62_000.0)),
        ],
    ),
    (
        "Finance",
        &[
            ("Financial Analyst", baseline!(85_000.0, 1_100_000.0, 68_000.0, 58_000.0)),
            ("Investment Banker", baseline!(150_000.0, 2_500_000.0, 120_000.0, 110_000.0)),
            ("Accountant", baseline!(65_000.0, 800_000.0, 52_000.0, 45_000.0)),
        ],
    ),
    (
        "Healthcare",
        &[
            ("Registered Nurse", baseline!(75_000.0, 600_000.0, 55_000.0, 48_000.0)),
            ("Physician", baseline!(220_000.0, 2_400_000.0, 160_000.0, 140_000.0)),
            ("Pharmacist", baseline!(120_000.0, 900_000.0, 85_000.0, 72_000.0)),
        ],
    ),
    (
        "Marketing",
        &[
            ("Marketing Manager", baseline!(95_000.0, 1_400_000.0, 72_000.0, 62_000.0)),
            // EUR/GBP figures not yet sourced — resolved via USD conversion.
            (
                "Content Strategist",
                BaselineSalary {
                    usd: 70_000.0,
                    inr: Some(900_000.0),
                    eur: None,
                    gbp: None,
                },
            ),
        ],
    ),
    (
        "Education",
        &[
            ("Teacher", baseline!(55_000.0, 500_000.0, 45_000.0, 38_000.0)),
            ("Professor", baseline!(100_000.0, 1_300_000.0, 78_000.0, 68_000.0)),
        ],
    ),
];

/// Substituted when either the industry or the role has no table entry.
pub static DEFAULT_BASELINE: BaselineSalary =
    baseline!(80_000.0, 1_200_000.0, 65_000.0, 55_000.0);

/// Resolves the baseline record for an (industry, role) pair.
/// The table is two-level: a miss on either level returns the default.
pub fn lookup_baseline(industry: &str, role: &str) -> &'static BaselineSalary {
    BASELINES
        .iter()
        .find(|(name, _)| *name == industry)
        .and_then(|(_, roles)| roles.iter().find(|(name, _)| *name == role))
        .map(|(_, record)| record)
        .unwrap_or(&DEFAULT_BASELINE)
}

// ────────────────────────────────────────────────────────────────────────────
// Locations
// ────────────────────────────────────────────────────────────────────────────

static LOCATIONS: &[(&str, LocationProfile)] = &[
    (
        "Bangalore",
        LocationProfile {
            multiplier: 1.3,
            currency: "INR",
            narrative: "India's largest tech hub with strong demand across product and services companies.",
        },
    ),
    (
        "Mumbai",
        LocationProfile {
            multiplier: 1.25,
            currency: "INR",
            narrative: "Financial capital with a premium driven by finance and media employers.",
        },
    ),
    (
        "Delhi",
        LocationProfile {
            multiplier: 1.2,
            currency: "INR",
            narrative: "Large mixed market spanning government, startups, and enterprise IT.",
        },
    ),
    (
        "Hyderabad",
        LocationProfile {
            multiplier: 1.15,
            currency: "INR",
            narrative: "Growing tech corridor anchored by large multinational campuses.",
        },
    ),
    (
        "Pune",
        LocationProfile {
            multiplier: 1.1,
            currency: "INR",
            narrative: "Engineering and services hub with a moderate cost of living.",
        },
    ),
    (
        "San Francisco",
        LocationProfile {
            multiplier: 1.5,
            currency: "USD",
            narrative: "Highest-paying market in the dataset, offset by extreme living costs.",
        },
    ),
    (
        "New York",
        LocationProfile {
            multiplier: 1.4,
            currency: "USD",
            narrative: "Deep finance and tech market with strong senior-level demand.",
        },
    ),
    (
        "Seattle",
        LocationProfile {
            multiplier: 1.35,
            currency: "USD",
            narrative: "Cloud and big-tech anchored market with sustained hiring.",
        },
    ),
    (
        "Austin",
        LocationProfile {
            multiplier: 1.15,
            currency: "USD",
            narrative: "Fast-growing secondary hub with no state income tax.",
        },
    ),
    (
        "Singapore",
        LocationProfile {
            multiplier: 1.35,
            currency: "USD",
            narrative: "Regional headquarters market with a strong multinational presence.",
        },
    ),
    (
        "London",
        LocationProfile {
            multiplier: 1.3,
            currency: "GBP",
            narrative: "Europe's largest tech and finance market.",
        },
    ),
    (
        "Berlin",
        LocationProfile {
            multiplier: 1.1,
            currency: "EUR",
            narrative: "Startup-dense market with salaries below the European top end.",
        },
    ),
    (
        "Amsterdam",
        LocationProfile {
            multiplier: 1.15,
            currency: "EUR",
            narrative: "International hub with a strong English-speaking employer base.",
        },
    ),
    (
        "Remote",
        LocationProfile {
            multiplier: 1.0,
            currency: "USD",
            narrative: "Remote compensation typically tracks the employer's market rather than yours.",
        },
    ),
];

/// Substituted for any unmatched location string.
pub static DEFAULT_LOCATION: LocationProfile = LocationProfile {
    multiplier: 1.0,
    currency: "USD",
    narrative: "Location data not available",
};

pub fn lookup_location(location: &str) -> &'static LocationProfile {
    LOCATIONS
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, profile)| profile)
        .unwrap_or(&DEFAULT_LOCATION)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

static EDUCATION_MULTIPLIERS: &[(&str, f64)] = &[
    ("High School", 0.85),
    ("Associate", 0.95),
    ("Bachelor", 1.0),
    ("Master", 1.15),
    ("PhD", 1.25),
    ("MBA", 1.3),
];

/// Returns the education multiplier, or 1.0 for an unknown level.
pub fn education_multiplier(education: &str) -> f64 {
    EDUCATION_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == education)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Market demand
// ────────────────────────────────────────────────────────────────────────────

static MARKET_DEMAND: &[(&str, &str, MarketDemand)] = &[
    ("Technology", "Software Engineer", MarketDemand { growth_rate: 0.15, demand_score: 0.9 }),
    ("Technology", "Data Scientist", MarketDemand { growth_rate: 0.2, demand_score: 0.85 }),
    ("Technology", "DevOps Engineer", MarketDemand { growth_rate: 0.18, demand_score: 0.8 }),
    ("Technology", "Product Manager", MarketDemand { growth_rate: 0.12, demand_score: 0.75 }),
    ("Technology", "UI/UX Designer", MarketDemand { growth_rate: 0.1, demand_score: 0.7 }),
    ("Finance", "Financial Analyst", MarketDemand { growth_rate: 0.08, demand_score: 0.6 }),
    ("Finance", "Investment Banker", MarketDemand { growth_rate: 0.06, demand_score: 0.65 }),
    ("Healthcare", "Registered Nurse", MarketDemand { growth_rate: 0.12, demand_score: 0.85 }),
    ("Healthcare", "Physician", MarketDemand { growth_rate: 0.07, demand_score: 0.8 }),
    ("Marketing", "Marketing Manager", MarketDemand { growth_rate: 0.09, demand_score: 0.55 }),
];

/// Substituted when the (industry, role) pair has no demand entry.
pub static DEFAULT_MARKET_DEMAND: MarketDemand = MarketDemand {
    growth_rate: 0.05,
    demand_score: 0.5,
};

pub fn lookup_market_demand(industry: &str, role: &str) -> &'static MarketDemand {
    MARKET_DEMAND
        .iter()
        .find(|(i, r, _)| *i == industry && *r == role)
        .map(|(_, _, demand)| demand)
        .unwrap_or(&DEFAULT_MARKET_DEMAND)
}

// ────────────────────────────────────────────────────────────────────────────
// Career progression
// ────────────────────────────────────────────────────────────────────────────

// Only Software Engineer has a curated ladder so far; other roles resolve
// to an empty path. Populating this table is a content task, not a code one.
static CAREER_PATHS: &[(&str, &[&str])] = &[(
    "Software Engineer",
    &[
        "Junior Software Engineer",
        "Software Engineer",
        "Senior Software Engineer",
        "Staff Engineer",
        "Principal Engineer / Engineering Manager",
    ],
)];

pub fn career_progression(role: &str) -> &'static [&'static str] {
    CAREER_PATHS
        .iter()
        .find(|(name, _)| *name == role)
        .map(|(_, path)| *path)
        .unwrap_or(&[])
}

// ────────────────────────────────────────────────────────────────────────────
// Enumeration accessors (reference metadata endpoint)
// ────────────────────────────────────────────────────────────────────────────

pub fn industries() -> Vec<&'static str> {
    BASELINES.iter().map(|(name, _)| *name).collect()
}

pub fn roles_for(industry: &str) -> Vec<&'static str> {
    BASELINES
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, roles)| roles.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

pub fn locations() -> Vec<&'static str> {
    LOCATIONS.iter().map(|(name, _)| *name).collect()
}

pub fn education_levels() -> Vec<&'static str> {
    EDUCATION_MULTIPLIERS.iter().map(|(name, _)| *name).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_baseline_lookup() {
        let record = lookup_baseline("Technology", "Software Engineer");
        assert_eq!(record.usd, 110_000.0);
        assert_eq!(record.inr, Some(1_500_000.0));
    }

    #[test]
    fn test_unknown_industry_falls_back_to_default() {
        let record = lookup_baseline("Astrology", "Software Engineer");
        assert_eq!(record.usd, DEFAULT_BASELINE.usd);
    }

    #[test]
    fn test_unknown_role_falls_back_to_default() {
        let record = lookup_baseline("Technology", "Dragon Tamer");
        assert_eq!(record.usd, DEFAULT_BASELINE.usd);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // "technology" must NOT match "Technology" — exact equality only.
        let record = lookup_baseline("technology", "Software Engineer");
        assert_eq!(record.usd, DEFAULT_BASELINE.usd);
        let location = lookup_location("bangalore");
        assert_eq!(location.currency, "USD");
    }

    #[test]
    fn test_known_location_lookup() {
        let location = lookup_location("Bangalore");
        assert_eq!(location.multiplier, 1.3);
        assert_eq!(location.currency, "INR");
    }

    #[test]
    fn test_unknown_location_default() {
        let location = lookup_location("Atlantis");
        assert_eq!(location.multiplier, 1.0);
        assert_eq!(location.currency, "USD");
        assert_eq!(location.narrative, "Location data not available");
    }

    #[test]
    fn test_education_multiplier_known_levels() {
        assert_eq!(education_multiplier("Bachelor"), 1.0);
        assert_eq!(education_multiplier("PhD"), 1.25);
        assert_eq!(education_multiplier("MBA"), 1.3);
    }

    #[test]
    fn test_education_multiplier_unknown_is_one() {
        assert_eq!(education_multiplier("Bootcamp"), 1.0);
    }

    #[test]
    fn test_market_demand_known_pair() {
        let demand = lookup_market_demand("Technology", "Software Engineer");
        assert_eq!(demand.growth_rate, 0.15);
        assert_eq!(demand.demand_score, 0.9);
    }

    #[test]
    fn test_market_demand_default() {
        let demand = lookup_market_demand("Unknown", "Unknown");
        assert_eq!(demand.growth_rate, 0.05);
        assert_eq!(demand.demand_score, 0.5);
    }

    #[test]
    fn test_market_demand_values_in_unit_interval() {
        for (_, _, demand) in MARKET_DEMAND {
            assert!((0.0..=1.0).contains(&demand.growth_rate));
            assert!((0.0..=1.0).contains(&demand.demand_score));
        }
    }

    #[test]
    fn test_location_multipliers_positive() {
        for (_, profile) in LOCATIONS {
            assert!(profile.multiplier > 0.0);
        }
    }

    #[test]
    fn test_career_progression_populated_for_software_engineer() {
        let path = career_progression("Software Engineer");
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], "Junior Software Engineer");
    }

    #[test]
    fn test_career_progression_empty_for_other_roles() {
        assert!(career_progression("Data Scientist").is_empty());
        assert!(career_progression("Dragon Tamer").is_empty());
    }

    #[test]
    fn test_enumeration_accessors_non_empty() {
        assert!(industries().contains(&"Technology"));
        assert!(roles_for("Technology").contains(&"Software Engineer"));
        assert!(roles_for("Astrology").is_empty());
        assert!(locations().contains(&"Bangalore"));
        assert_eq!(education_levels().len(), 6);
    }
}
