use serde::Serialize;

use super::config::{OverallWeights, ScoringConfig};
use super::recommendation::{collect_insights, Recommendation};
use super::rules::{question_score, ScoringTables};
use crate::answers::{Answer, AnswerSheet};
use crate::catalog::{AnswerType, Catalog, Category, Construct};

/// Weighted 0-100 score per section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: u8,
    pub aptitude: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Psychometric => self.psychometric,
            Category::Technical => self.technical,
            Category::Wiscar => self.wiscar,
            Category::Aptitude => self.aptitude,
        }
    }
}

/// Unweighted 0-100 score per readiness construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConstructScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl ConstructScores {
    pub fn get(&self, construct: Construct) -> u8 {
        match construct {
            Construct::Will => self.will,
            Construct::Interest => self.interest,
            Construct::Skill => self.skill,
            Construct::Cognitive => self.cognitive,
            Construct::AbilityToLearn => self.ability_to_learn,
            Construct::RealWorldAlignment => self.real_world_alignment,
        }
    }

    fn set(&mut self, construct: Construct, score: u8) {
        let slot = match construct {
            Construct::Will => &mut self.will,
            Construct::Interest => &mut self.interest,
            Construct::Skill => &mut self.skill,
            Construct::Cognitive => &mut self.cognitive,
            Construct::AbilityToLearn => &mut self.ability_to_learn,
            Construct::RealWorldAlignment => &mut self.real_world_alignment,
        };
        *slot = score;
    }

    /// Mean of all six scores, unrounded
    pub fn average(&self) -> f64 {
        let total: u32 = Construct::ALL.iter().map(|&c| self.get(c) as u32).sum();
        total as f64 / Construct::ALL.len() as f64
    }
}

/// Score of one answered catalog question, kept for transparent output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionScore {
    pub question_id: String,
    pub category: Category,
    pub score: f64,
    pub weight: f64,
}

/// Fully populated assessment outcome, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResults {
    pub category_scores: CategoryScores,
    pub construct_scores: ConstructScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub recommendation_text: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_alternatives: Option<Vec<String>>,
    pub breakdown: Vec<QuestionScore>,
}

impl AssessmentResults {
    pub fn psychometric_score(&self) -> u8 {
        self.category_scores.psychometric
    }

    pub fn technical_score(&self) -> u8 {
        self.category_scores.technical
    }
}

/// Score a finished list of answers against the builtin catalog and policy.
///
/// Duplicate question ids keep the last value; unknown ids are ignored.
pub fn score(answers: &[Answer]) -> AssessmentResults {
    let sheet = AnswerSheet::from_answers(answers.iter().cloned());
    calculate_scores(
        &sheet,
        Catalog::builtin(),
        ScoringTables::builtin(),
        &ScoringConfig::default(),
    )
}

pub fn calculate_scores(
    answers: &AnswerSheet,
    catalog: &Catalog,
    tables: &ScoringTables,
    config: &ScoringConfig,
) -> AssessmentResults {
    for id in answers.ids() {
        if catalog.get(id).is_none() {
            tracing::warn!(question_id = id, "ignoring answer for unknown question");
        }
    }

    let mut category_scores = CategoryScores::default();
    for category in Category::ALL {
        let score = category_score(answers, catalog, tables, config, category);
        match category {
            Category::Psychometric => category_scores.psychometric = score,
            Category::Technical => category_scores.technical = score,
            Category::Wiscar => category_scores.wiscar = score,
            Category::Aptitude => category_scores.aptitude = score,
        }
    }

    let mut construct_scores = ConstructScores::default();
    for construct in Construct::ALL {
        let score = construct_score(answers, catalog, tables, config, construct);
        construct_scores.set(construct, score);
    }

    let overall_score = overall_score(
        category_scores.psychometric,
        category_scores.technical,
        &construct_scores,
        &config.weights,
    );
    let recommendation = Recommendation::from_overall(overall_score, &config.thresholds);
    let insights = collect_insights(&category_scores, &construct_scores, &config.insights);

    tracing::debug!(
        ?category_scores,
        ?construct_scores,
        overall_score,
        recommendation = recommendation.as_str(),
        "assessment scored"
    );

    let breakdown = catalog
        .questions()
        .iter()
        .filter_map(|q| {
            answers.get(q.id).map(|value| QuestionScore {
                question_id: q.id.to_string(),
                category: q.category,
                score: question_score(q, value, tables, config),
                weight: q.weight,
            })
        })
        .collect();

    AssessmentResults {
        category_scores,
        construct_scores,
        overall_score,
        recommendation,
        recommendation_text: recommendation.text().to_string(),
        strengths: insights.strengths,
        improvements: insights.improvements,
        next_steps: recommendation.next_steps(),
        career_alternatives: recommendation.career_alternatives(),
        breakdown,
    }
}

/// Weighted mean over the answered questions of one category.
/// Unanswered questions do not count; no answers at all scores 0.
pub fn category_score(
    answers: &AnswerSheet,
    catalog: &Catalog,
    tables: &ScoringTables,
    config: &ScoringConfig,
    category: Category,
) -> u8 {
    let mut total = 0.0;
    let mut total_weight = 0.0;

    for question in catalog.in_category(category) {
        if let Some(value) = answers.get(question.id) {
            total += question_score(question, value, tables, config) * question.weight;
            total_weight += question.weight;
        }
    }

    if total_weight > 0.0 {
        round_score(total / total_weight)
    } else {
        0
    }
}

/// Plain mean over the answered rating and choice questions tagged with
/// `construct`. Numeric questions never contribute.
pub fn construct_score(
    answers: &AnswerSheet,
    catalog: &Catalog,
    tables: &ScoringTables,
    config: &ScoringConfig,
    construct: Construct,
) -> u8 {
    let mut total = 0.0;
    let mut count = 0u32;

    for question in catalog.with_construct(construct) {
        if question.answer_type == AnswerType::Numeric {
            continue;
        }
        if let Some(value) = answers.get(question.id) {
            total += question_score(question, value, tables, config);
            count += 1;
        }
    }

    if count > 0 {
        round_score(total / count as f64)
    } else {
        0
    }
}

pub fn overall_score(
    psychometric: u8,
    technical: u8,
    constructs: &ConstructScores,
    weights: &OverallWeights,
) -> u8 {
    round_score(
        psychometric as f64 * weights.psychometric
            + technical as f64 * weights.technical
            + constructs.average() * weights.constructs,
    )
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Question;

    fn builtin(answers: &AnswerSheet) -> AssessmentResults {
        calculate_scores(
            answers,
            Catalog::builtin(),
            ScoringTables::builtin(),
            &ScoringConfig::default(),
        )
    }

    fn sheet(pairs: &[(&str, f64)]) -> AssessmentResults {
        let answers: AnswerSheet = pairs.iter().map(|&(id, v)| Answer::new(id, v)).collect();
        builtin(&answers)
    }

    #[test]
    fn test_empty_answers() {
        let results = builtin(&AnswerSheet::new());
        assert_eq!(results.category_scores, CategoryScores::default());
        assert_eq!(results.construct_scores, ConstructScores::default());
        assert_eq!(results.overall_score, 0);
        assert_eq!(results.recommendation, Recommendation::No);
        assert!(results.career_alternatives.is_some());
        assert!(results.breakdown.is_empty());
    }

    #[test]
    fn test_category_weighted_average() {
        // psych_1 (w=1.2) rated 5 -> 100, psych_5 (w=1.5) rated 1 -> 20
        // (120 + 30) / 2.7 = 55.56 -> 56
        let results = sheet(&[("psych_1", 5.0), ("psych_5", 1.0)]);
        assert_eq!(results.category_scores.psychometric, 56);
    }

    #[test]
    fn test_unanswered_questions_do_not_count_as_zero() {
        let results = sheet(&[("tech_2", 0.0)]);
        assert_eq!(results.category_scores.technical, 100);
    }

    #[test]
    fn test_construct_is_unweighted() {
        // wiscar_will_1 rated 3 -> 60, wiscar_will_2 choice 2 -> 40
        let results = sheet(&[("wiscar_will_1", 3.0), ("wiscar_will_2", 2.0)]);
        assert_eq!(results.construct_scores.will, 50);
        // weighted category: (60*1.0 + 40*1.1) / 2.1 = 49.52 -> 50
        assert_eq!(results.category_scores.wiscar, 50);
    }

    #[test]
    fn test_numeric_question_never_feeds_construct() {
        let catalog = Catalog::new(vec![
            Question {
                id: "n1",
                answer_type: AnswerType::Numeric,
                category: Category::Wiscar,
                tag: Some("will"),
                prompt: "?",
                choices: &[],
                weight: 1.0,
            },
            Question {
                id: "r1",
                answer_type: AnswerType::RatingScale,
                category: Category::Wiscar,
                tag: Some("will"),
                prompt: "?",
                choices: &[],
                weight: 1.0,
            },
        ]);
        let answers: AnswerSheet = vec![Answer::new("n1", 7.0), Answer::new("r1", 4.0)]
            .into_iter()
            .collect();
        let config = ScoringConfig::default();
        let tables = ScoringTables::empty();

        let score = construct_score(&answers, &catalog, &tables, &config, Construct::Will);
        assert_eq!(score, 80);
        // numeric fallback 50 still counts toward the category
        let category = category_score(&answers, &catalog, &tables, &config, Category::Wiscar);
        assert_eq!(category, 65);
    }

    #[test]
    fn test_overall_formula() {
        let constructs = ConstructScores {
            will: 60,
            interest: 60,
            skill: 60,
            cognitive: 60,
            ability_to_learn: 60,
            real_world_alignment: 60,
        };
        // 0.3*80 + 0.4*70 + 0.3*60 = 24 + 28 + 18 = 70
        let overall = overall_score(80, 70, &constructs, &OverallWeights::default());
        assert_eq!(overall, 70);
    }

    #[test]
    fn test_overall_rounds_construct_average() {
        let constructs = ConstructScores {
            will: 100,
            ..Default::default()
        };
        // 0.3 * 16.67 = 5.0
        let overall = overall_score(0, 0, &constructs, &OverallWeights::default());
        assert_eq!(overall, 5);
    }

    #[test]
    fn test_aptitude_does_not_move_overall() {
        let with_aptitude = sheet(&[
            ("psych_1", 4.0),
            ("apt_1", 1.0),
            ("apt_2", 0.0),
            ("apt_3", 24.0),
            ("apt_4", 3.0),
        ]);
        let without = sheet(&[("psych_1", 4.0)]);
        assert_eq!(with_aptitude.category_scores.aptitude, 100);
        assert_eq!(with_aptitude.overall_score, without.overall_score);
    }

    #[test]
    fn test_unknown_question_ignored() {
        let results = sheet(&[("not_a_question", 5.0)]);
        assert_eq!(results.overall_score, 0);
        assert!(results.breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_in_catalog_order() {
        let results = sheet(&[("tech_3", 2.0), ("psych_2", 4.0)]);
        let ids: Vec<&str> = results
            .breakdown
            .iter()
            .map(|s| s.question_id.as_str())
            .collect();
        assert_eq!(ids, vec!["psych_2", "tech_3"]);
        assert_eq!(results.breakdown[1].score, 100.0);
    }

    #[test]
    fn test_best_answers_recommend_yes() {
        let tables = ScoringTables::builtin();
        let mut answers = AnswerSheet::new();
        for q in Catalog::builtin().questions() {
            let value = match q.answer_type {
                AnswerType::RatingScale => 5.0,
                AnswerType::Numeric => tables.numeric_rule(q.id).unwrap().expected,
                AnswerType::MultipleChoice | AnswerType::Scenario => {
                    let points = tables.choice_table(q.id).unwrap();
                    let best = points.iter().enumerate().max_by_key(|(_, p)| **p).unwrap();
                    best.0 as f64
                }
            };
            answers.record(q.id, value);
        }

        let results = builtin(&answers);
        assert_eq!(results.category_scores.psychometric, 100);
        assert_eq!(results.category_scores.technical, 100);
        // wiscar_interest_2 tops out at 80: interest = (100 + 80) / 2
        assert_eq!(results.construct_scores.interest, 90);
        assert_eq!(results.recommendation, Recommendation::Yes);
        assert!(results.career_alternatives.is_none());
        assert_eq!(results.strengths.len(), 5);
        assert!(results.improvements.is_empty());
    }

    #[test]
    fn test_json_omits_alternatives_when_absent() {
        let results = sheet(&[
            ("psych_1", 5.0),
            ("psych_2", 5.0),
            ("tech_2", 0.0),
            ("wiscar_will_1", 5.0),
            ("wiscar_interest_1", 5.0),
            ("wiscar_skill_1", 5.0),
            ("wiscar_cognitive_1", 0.0),
            ("wiscar_ability_1", 5.0),
            ("wiscar_real_1", 0.0),
        ]);
        assert_eq!(results.recommendation, Recommendation::Yes);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.get("career_alternatives").is_none());
        assert_eq!(json["recommendation"], "yes");
        assert_eq!(json["construct_scores"]["real-world-alignment"], 100);
    }
}
