use serde::{Deserialize, Serialize};

use super::config::{InsightThresholds, RecommendationThresholds};
use super::engine::{CategoryScores, ConstructScores};

/// Recommendation tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub fn from_overall(overall: u8, thresholds: &RecommendationThresholds) -> Self {
        if overall >= thresholds.yes {
            Recommendation::Yes
        } else if overall >= thresholds.maybe {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Yes => "yes",
            Recommendation::Maybe => "maybe",
            Recommendation::No => "no",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Yes => "Recommended: Pursue Pharmacy Technician Training",
            Recommendation::Maybe => "Consider: Build Skills First",
            Recommendation::No => "Consider Alternative Career Paths",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Recommendation::Yes => "You show excellent potential for a career as a Pharmacy Technician. Your profile indicates strong alignment with the role requirements.",
            Recommendation::Maybe => "You show potential but would benefit from skill development before pursuing pharmacy technician training.",
            Recommendation::No => "Your current profile suggests pharmacy technician work may not be the best fit. Consider exploring alternative healthcare careers.",
        }
    }

    pub fn next_steps(&self) -> Vec<String> {
        let steps: &[&str] = match self {
            Recommendation::Yes => &[
                "Enroll in a pharmacy technician training program",
                "Begin studying for PTCB certification",
                "Consider shadowing a pharmacy technician",
                "Start building pharmaceutical terminology knowledge",
            ],
            Recommendation::Maybe => &[
                "Take foundational math and science courses",
                "Gain customer service experience",
                "Research pharmacy work environment more thoroughly",
                "Consider entry-level healthcare positions first",
            ],
            Recommendation::No => &[
                "Explore alternative healthcare careers",
                "Consider healthcare administration roles",
                "Develop foundational skills through general courses",
                "Gain healthcare exposure through volunteering",
            ],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }

    /// Only the lowest tier suggests alternatives
    pub fn career_alternatives(&self) -> Option<Vec<String>> {
        match self {
            Recommendation::No => Some(
                [
                    "Medical Administrative Assistant",
                    "Healthcare Data Entry Clerk",
                    "Medical Insurance Specialist",
                    "Laboratory Support Technician",
                    "Medical Equipment Technician",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ),
            _ => None,
        }
    }
}

/// Strength and improvement statements. Independent of the tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

pub fn collect_insights(
    categories: &CategoryScores,
    constructs: &ConstructScores,
    thresholds: &InsightThresholds,
) -> Insights {
    let mut insights = Insights::default();

    let strengths = [
        (
            categories.psychometric >= thresholds.psychometric_strength,
            "Strong psychological fit for healthcare",
        ),
        (
            categories.technical >= thresholds.technical_strength,
            "Solid technical foundation",
        ),
        (
            constructs.will >= thresholds.will_strength,
            "High persistence and determination",
        ),
        (
            constructs.interest >= thresholds.interest_strength,
            "Genuine interest in pharmacy work",
        ),
        (
            constructs.skill >= thresholds.skill_strength,
            "Good interpersonal skills",
        ),
    ];
    let improvements = [
        (
            categories.psychometric < thresholds.psychometric_improvement,
            "Develop customer service and teamwork skills",
        ),
        (
            categories.technical < thresholds.technical_improvement,
            "Strengthen math and science fundamentals",
        ),
        (
            constructs.cognitive < thresholds.cognitive_improvement,
            "Improve analytical thinking abilities",
        ),
        (
            constructs.real_world_alignment < thresholds.real_world_improvement,
            "Learn more about pharmacy work environment",
        ),
    ];

    for (hit, text) in strengths {
        if hit {
            insights.strengths.push(text.to_string());
        }
    }
    for (hit, text) in improvements {
        if hit {
            insights.improvements.push(text.to_string());
        }
    }
    insights
}

/// Qualitative label for a single 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    NeedsWork,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Moderate,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Moderate => "Moderate",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}
