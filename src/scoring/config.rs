/// Scoring policy.
///
/// Every number that shapes an assessment result lives here so the engine
/// stays free of literals. `Default` is the production policy; tests build
/// variants to exercise the edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringConfig {
    /// Blend of the overall score
    pub weights: OverallWeights,

    /// Overall-score bands for the recommendation tier
    pub thresholds: RecommendationThresholds,

    /// Category/construct cut-offs for strength and improvement statements
    pub insights: InsightThresholds,

    /// Scores used when a question has no explicit rule
    pub fallback: FallbackScores,
}

/// `overall = psychometric * p + technical * t + construct_average * c`
#[derive(Debug, Clone, PartialEq)]
pub struct OverallWeights {
    pub psychometric: f64,
    pub technical: f64,
    pub constructs: f64,
}

impl OverallWeights {
    pub fn sum(&self) -> f64 {
        self.psychometric + self.technical + self.constructs
    }
}

impl Default for OverallWeights {
    fn default() -> Self {
        Self {
            psychometric: 0.3,
            technical: 0.4,
            constructs: 0.3,
        }
    }
}

/// Lower bounds (inclusive) of the "yes" and "maybe" tiers. Anything below
/// `maybe` is "no".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationThresholds {
    pub yes: u8,
    pub maybe: u8,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self { yes: 75, maybe: 50 }
    }
}

/// Strength cut-offs are inclusive lower bounds, improvement cut-offs are
/// exclusive upper bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightThresholds {
    pub psychometric_strength: u8,
    pub technical_strength: u8,
    pub will_strength: u8,
    pub interest_strength: u8,
    pub skill_strength: u8,
    pub psychometric_improvement: u8,
    pub technical_improvement: u8,
    pub cognitive_improvement: u8,
    pub real_world_improvement: u8,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            psychometric_strength: 75,
            technical_strength: 75,
            will_strength: 80,
            interest_strength: 80,
            skill_strength: 75,
            psychometric_improvement: 60,
            technical_improvement: 60,
            cognitive_improvement: 60,
            real_world_improvement: 60,
        }
    }
}

// Lenient defaults for questions added without a scoring rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackScores {
    /// Untabulated choice question answered with index 0
    pub first_choice: f64,
    /// Untabulated choice question answered with any other index
    pub other_choice: f64,
    /// Numeric question without an expected value
    pub unknown_numeric: f64,
}

impl Default for FallbackScores {
    fn default() -> Self {
        Self {
            first_choice: 100.0,
            other_choice: 50.0,
            unknown_numeric: 50.0,
        }
    }
}
