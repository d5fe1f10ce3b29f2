use std::collections::HashSet;

use super::config::ScoringConfig;
use super::rules::ScoringTables;
use crate::catalog::{AnswerType, Catalog};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate the catalog, scoring tables and policy at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(
    catalog: &Catalog,
    tables: &ScoringTables,
    config: &ScoringConfig,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Catalog
    let mut seen = HashSet::new();
    for question in catalog.questions() {
        if !seen.insert(question.id) {
            errors.push(format!("catalog.{}: duplicate question id", question.id));
        }
        if question.weight.is_nan() || question.weight <= 0.0 {
            errors.push(format!(
                "catalog.{}.weight: must be positive, got {}",
                question.id, question.weight
            ));
        }
        if question.answer_type.is_choice() && question.choices.is_empty() {
            errors.push(format!("catalog.{}.choices: choice question has no choices", question.id));
        }
    }

    // Choice tables
    let mut choice_ids: Vec<_> = tables.choice_tables().collect();
    choice_ids.sort_by_key(|(id, _)| *id);
    for (id, points) in choice_ids {
        let Some(question) = catalog.get(id) else {
            errors.push(format!("tables.choices.{}: unknown question", id));
            continue;
        };
        if !question.answer_type.is_choice() {
            errors.push(format!(
                "tables.choices.{}: question is {}, not a choice question",
                id,
                question.answer_type.key()
            ));
            continue;
        }
        if points.len() != question.choices.len() {
            errors.push(format!(
                "tables.choices.{}: {} point values for {} choices",
                id,
                points.len(),
                question.choices.len()
            ));
        }
        if let Some(p) = points.iter().find(|&&p| p > 100) {
            errors.push(format!("tables.choices.{}: {} exceeds 100 points", id, p));
        }
    }

    // Numeric rules
    let mut numeric_ids: Vec<_> = tables.numeric_rules().collect();
    numeric_ids.sort_by_key(|(id, _)| *id);
    for (id, rule) in numeric_ids {
        match catalog.get(id) {
            None => errors.push(format!("tables.numeric.{}: unknown question", id)),
            Some(q) if q.answer_type != AnswerType::Numeric => errors.push(format!(
                "tables.numeric.{}: question is {}, not numeric",
                id,
                q.answer_type.key()
            )),
            Some(_) => {}
        }
        if !rule.expected.is_finite() || rule.tolerance.is_nan() || rule.tolerance < 0.0 {
            errors.push(format!(
                "tables.numeric.{}: expected value must be finite and tolerance non-negative",
                id
            ));
        }
    }

    // Policy
    let weights = &config.weights;
    if [weights.psychometric, weights.technical, weights.constructs]
        .iter()
        .any(|w| *w < 0.0)
    {
        errors.push("scoring.weights: must be non-negative".to_string());
    }
    if (weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!(
            "scoring.weights: must sum to 1.0, got {}",
            weights.sum()
        ));
    }

    let thresholds = &config.thresholds;
    if thresholds.yes > 100 {
        errors.push("scoring.thresholds.yes: must be at most 100".to_string());
    }
    if thresholds.maybe > thresholds.yes {
        errors.push(format!(
            "scoring.thresholds: maybe ({}) must not exceed yes ({})",
            thresholds.maybe, thresholds.yes
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
