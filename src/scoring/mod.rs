pub mod config;
pub mod engine;
pub mod recommendation;
pub mod rules;
pub mod validation;

pub use config::*;
pub use engine::{calculate_scores, score, AssessmentResults, CategoryScores, ConstructScores};
pub use recommendation::{Recommendation, ScoreBand};
pub use rules::{question_score, NumericRule, ScoringTables};
pub use validation::validate_scoring;
