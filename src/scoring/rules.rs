use std::collections::HashMap;
use std::sync::LazyLock;

use super::config::ScoringConfig;
use crate::answers::AnswerValue;
use crate::catalog::{AnswerType, Question};

/// Tolerance for numeric answers that must match exactly
pub const EXACT_TOLERANCE: f64 = 1e-6;

const MAX_POINTS: f64 = 100.0;
const RATING_MULTIPLIER: f64 = 20.0;

static BUILTIN: LazyLock<ScoringTables> = LazyLock::new(ScoringTables::default);

/// Expected value for a numeric question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRule {
    pub expected: f64,
    pub tolerance: f64,
}

impl NumericRule {
    pub fn exact(expected: f64) -> Self {
        Self {
            expected,
            tolerance: EXACT_TOLERANCE,
        }
    }

    pub fn within(expected: f64, tolerance: f64) -> Self {
        Self {
            expected,
            tolerance,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        (value - self.expected).abs() <= self.tolerance
    }
}

/// Per-question scoring rules, keyed by question id.
///
/// Choice tables list the points for each choice index in order and must be
/// as long as the question's choice list (checked by
/// [`validate_scoring`](super::validate_scoring)).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    choices: HashMap<String, Vec<u8>>,
    numeric: HashMap<String, NumericRule>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::empty()
            // psychometric
            .with_choice_table("psych_3", [100, 40, 20, 60])
            .with_choice_table("psych_4", [100, 70, 50, 20])
            .with_choice_table("psych_6", [100, 80, 60, 70])
            .with_choice_table("psych_8", [100, 30, 70, 10])
            // technical
            .with_choice_table("tech_1", [0, 0, 100, 0])
            .with_choice_table("tech_2", [100, 0, 0, 0])
            .with_choice_table("tech_4", [0, 0, 100, 0])
            .with_choice_table("tech_5", [100, 40, 60, 30])
            .with_choice_table("tech_6", [100, 0, 0, 0])
            .with_choice_table("tech_7", [0, 100, 0, 0])
            // wiscar
            .with_choice_table("wiscar_will_2", [100, 80, 40, 20])
            .with_choice_table("wiscar_interest_2", [80, 70, 60, 30])
            .with_choice_table("wiscar_cognitive_1", [100, 60, 70, 80])
            .with_choice_table("wiscar_real_1", [100, 80, 60, 20])
            // aptitude
            .with_choice_table("apt_1", [0, 100, 0, 0])
            .with_choice_table("apt_2", [100, 0, 0, 0])
            .with_choice_table("apt_4", [0, 0, 0, 100])
            // 2000 mg -> 2 g
            .with_numeric_rule("tech_3", NumericRule::exact(2.0))
            // 20% of $120
            .with_numeric_rule("apt_3", NumericRule::within(24.0, 1.0))
    }
}

impl ScoringTables {
    pub fn empty() -> Self {
        Self {
            choices: HashMap::new(),
            numeric: HashMap::new(),
        }
    }

    /// The production tables, built on first use
    pub fn builtin() -> &'static ScoringTables {
        &BUILTIN
    }

    pub fn with_choice_table(
        mut self,
        question_id: impl Into<String>,
        points: impl IntoIterator<Item = u8>,
    ) -> Self {
        self.choices
            .insert(question_id.into(), points.into_iter().collect());
        self
    }

    pub fn with_numeric_rule(mut self, question_id: impl Into<String>, rule: NumericRule) -> Self {
        self.numeric.insert(question_id.into(), rule);
        self
    }

    pub fn choice_table(&self, question_id: &str) -> Option<&[u8]> {
        self.choices.get(question_id).map(Vec::as_slice)
    }

    pub fn numeric_rule(&self, question_id: &str) -> Option<&NumericRule> {
        self.numeric.get(question_id)
    }

    pub fn choice_tables(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.choices
            .iter()
            .map(|(id, points)| (id.as_str(), points.as_slice()))
    }

    pub fn numeric_rules(&self) -> impl Iterator<Item = (&str, &NumericRule)> {
        self.numeric.iter().map(|(id, rule)| (id.as_str(), rule))
    }
}

/// Score one answered question on the 0-100 scale.
///
/// * rating-scale: value x 20
/// * choice: table lookup by index, 0 on a miss; untabulated questions use
///   the fallback scores
/// * numeric: 100 within tolerance of the expected value, else 0; questions
///   without a rule use the fallback score
pub fn question_score(
    question: &Question,
    value: &AnswerValue,
    tables: &ScoringTables,
    config: &ScoringConfig,
) -> f64 {
    let points = match question.answer_type {
        AnswerType::RatingScale => value
            .as_number()
            .map(|n| n * RATING_MULTIPLIER)
            .unwrap_or(0.0),
        AnswerType::MultipleChoice | AnswerType::Scenario => {
            choice_score(question.id, value, tables, config)
        }
        AnswerType::Numeric => match tables.numeric_rule(question.id) {
            Some(rule) => match value.as_number() {
                Some(n) if rule.matches(n) => MAX_POINTS,
                _ => 0.0,
            },
            None => config.fallback.unknown_numeric,
        },
    };
    points.clamp(0.0, MAX_POINTS)
}

fn choice_score(
    question_id: &str,
    value: &AnswerValue,
    tables: &ScoringTables,
    config: &ScoringConfig,
) -> f64 {
    match tables.choice_table(question_id) {
        Some(points) => value
            .as_index()
            .and_then(|i| points.get(i))
            .map(|&p| p as f64)
            .unwrap_or(0.0),
        None => {
            if value.as_number() == Some(0.0) {
                config.fallback.first_choice
            } else {
                config.fallback.other_choice
            }
        }
    }
}
