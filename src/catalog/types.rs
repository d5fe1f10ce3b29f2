use serde::Serialize;

/// Top-level assessment section. Declaration order is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
    Aptitude,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Psychometric,
        Category::Technical,
        Category::Wiscar,
        Category::Aptitude,
    ];

    /// Short name shown in progress lines and the results table
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Psychometric => "Psychological Fit",
            Category::Technical => "Technical Knowledge",
            Category::Wiscar => "WISCAR Analysis",
            Category::Aptitude => "General Aptitude",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Psychometric => "psychometric",
            Category::Technical => "technical",
            Category::Wiscar => "wiscar",
            Category::Aptitude => "aptitude",
        }
    }
}

/// How a question is answered and, by extension, how it is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerType {
    /// 1-5 agreement scale
    RatingScale,
    MultipleChoice,
    Scenario,
    Numeric,
}

impl AnswerType {
    /// Multiple-choice and scenario questions are both answered by choice index
    pub fn is_choice(&self) -> bool {
        matches!(self, AnswerType::MultipleChoice | AnswerType::Scenario)
    }

    pub fn key(&self) -> &'static str {
        match self {
            AnswerType::RatingScale => "rating",
            AnswerType::MultipleChoice => "choice",
            AnswerType::Scenario => "scenario",
            AnswerType::Numeric => "numeric",
        }
    }
}

/// One of the six readiness constructs of the WISCAR breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Construct {
    Will,
    Interest,
    Skill,
    Cognitive,
    AbilityToLearn,
    RealWorldAlignment,
}

impl Construct {
    pub const ALL: [Construct; 6] = [
        Construct::Will,
        Construct::Interest,
        Construct::Skill,
        Construct::Cognitive,
        Construct::AbilityToLearn,
        Construct::RealWorldAlignment,
    ];

    /// Map a catalog tag to a readiness construct.
    ///
    /// Only the six readiness tags resolve; trait tags such as
    /// `conscientiousness` or `pattern_recognition` return `None` and never
    /// feed the construct breakdown.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "will" => Some(Construct::Will),
            "interest" => Some(Construct::Interest),
            "skill" => Some(Construct::Skill),
            "cognitive" => Some(Construct::Cognitive),
            "ability" => Some(Construct::AbilityToLearn),
            "real_world" => Some(Construct::RealWorldAlignment),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Construct::Will => "Will",
            Construct::Interest => "Interest",
            Construct::Skill => "Skill",
            Construct::Cognitive => "Cognitive",
            Construct::AbilityToLearn => "Ability to Learn",
            Construct::RealWorldAlignment => "Real-world Alignment",
        }
    }
}

/// A single catalog entry. Built once with the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub answer_type: AnswerType,
    pub category: Category,
    /// Free-form trait tag; see [`Construct::from_tag`]
    pub tag: Option<&'static str>,
    pub prompt: &'static str,
    /// Ordered choice labels; empty for rating-scale and numeric questions
    pub choices: &'static [&'static str],
    pub weight: f64,
}

impl Question {
    pub fn construct(&self) -> Option<Construct> {
        self.tag.and_then(Construct::from_tag)
    }
}

/// Agreement labels for rating-scale questions, index 0 is a rating of 1
pub const RATING_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_from_readiness_tags() {
        assert_eq!(Construct::from_tag("will"), Some(Construct::Will));
        assert_eq!(Construct::from_tag("ability"), Some(Construct::AbilityToLearn));
        assert_eq!(
            Construct::from_tag("real_world"),
            Some(Construct::RealWorldAlignment)
        );
    }

    #[test]
    fn test_construct_from_trait_tag_is_none() {
        assert_eq!(Construct::from_tag("conscientiousness"), None);
        assert_eq!(Construct::from_tag("pattern_recognition"), None);
        assert_eq!(Construct::from_tag("Will"), None);
    }

    #[test]
    fn test_choice_types() {
        assert!(AnswerType::MultipleChoice.is_choice());
        assert!(AnswerType::Scenario.is_choice());
        assert!(!AnswerType::RatingScale.is_choice());
        assert!(!AnswerType::Numeric.is_choice());
    }

    #[test]
    fn test_category_serializes_kebab_case() {
        let json = serde_json::to_string(&Category::Psychometric).unwrap();
        assert_eq!(json, "\"psychometric\"");
        let json = serde_json::to_string(&Construct::RealWorldAlignment).unwrap();
        assert_eq!(json, "\"real-world-alignment\"");
    }
}
