mod file;

pub use file::{load_answers, parse_answers};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw answer value as collected from the user or an answer file.
///
/// Rating and choice answers are whole numbers, numeric answers may be
/// fractional. Text is accepted and parsed on use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Numeric reading of the value; `None` when text does not parse or the
    /// number is not finite
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            AnswerValue::Number(n) => *n,
            AnswerValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Zero-based choice index; `None` for negative or fractional values
    pub fn as_index(&self) -> Option<usize> {
        let n = self.as_number()?;
        if n >= 0.0 && n.fract() == 0.0 {
            Some(n as usize)
        } else {
            None
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<u32> for AnswerValue {
    fn from(n: u32) -> Self {
        AnswerValue::Number(n as f64)
    }
}

impl From<usize> for AnswerValue {
    fn from(n: usize) -> Self {
        AnswerValue::Number(n as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId", alias = "id")]
    pub question_id: String,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Answers indexed by question id. Recording an id twice keeps the later value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    values: HashMap<String, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_answers<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Answer>,
    {
        let mut sheet = Self::new();
        for answer in answers {
            sheet.record(answer.question_id, answer.value);
        }
        sheet
    }

    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.values.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl FromIterator<Answer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        Self::from_answers(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_answer_wins() {
        let sheet = AnswerSheet::from_answers(vec![
            Answer::new("psych_1", 2u32),
            Answer::new("psych_2", 4u32),
            Answer::new("psych_1", 5u32),
        ]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("psych_1"), Some(&AnswerValue::Number(5.0)));
    }

    #[test]
    fn test_text_value_parses() {
        let value = AnswerValue::Text(" 2.5 ".to_string());
        assert_eq!(value.as_number(), Some(2.5));
        assert_eq!(value.as_index(), None);
    }

    #[test]
    fn test_unparseable_text() {
        let value = AnswerValue::Text("two".to_string());
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_index(), None);
    }

    #[test]
    fn test_index_rejects_negative_and_fractional() {
        assert_eq!(AnswerValue::Number(3.0).as_index(), Some(3));
        assert_eq!(AnswerValue::Number(-1.0).as_index(), None);
        assert_eq!(AnswerValue::Number(1.5).as_index(), None);
    }

    #[test]
    fn test_non_finite_is_not_a_number() {
        assert_eq!(AnswerValue::Number(f64::NAN).as_number(), None);
        assert_eq!(AnswerValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut sheet: AnswerSheet = vec![Answer::new("apt_1", 1u32)].into_iter().collect();
        assert!(!sheet.is_empty());
        sheet.clear();
        assert!(sheet.is_empty());
    }
}
