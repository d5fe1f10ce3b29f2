use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{Answer, AnswerSheet, AnswerValue};

/// Accepted answer file layouts.
///
/// ```yaml
/// - { question_id: psych_1, value: 4 }
/// - { question_id: tech_3, value: 2 }
/// ```
/// or
/// ```yaml
/// psych_1: 4
/// tech_3: 2
/// ```
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    List(Vec<Answer>),
    Map(BTreeMap<String, AnswerValue>),
}

impl AnswerFile {
    fn into_sheet(self) -> AnswerSheet {
        match self {
            AnswerFile::List(answers) => AnswerSheet::from_answers(answers),
            AnswerFile::Map(map) => map
                .into_iter()
                .map(|(question_id, value)| Answer { question_id, value })
                .collect(),
        }
    }
}

/// Parse answers from text. `json` selects JSON, otherwise YAML.
pub fn parse_answers(content: &str, json: bool) -> Result<AnswerSheet> {
    let file: AnswerFile = if json {
        serde_json::from_str(content).context("Failed to parse answers: invalid JSON")?
    } else {
        serde_saphyr::from_str(content).context("Failed to parse answers: invalid YAML")?
    };
    Ok(file.into_sheet())
}

/// Load an answer sheet from a `.json`, `.yaml` or `.yml` file.
pub fn load_answers(path: &Path) -> Result<AnswerSheet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file at {}", path.display()))?;

    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let sheet = parse_answers(&content, json)
        .with_context(|| format!("Invalid answers file {}", path.display()))?;
    tracing::debug!(count = sheet.len(), path = %path.display(), "loaded answers");
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_yaml_list() {
        let yaml = r#"
- question_id: psych_1
  value: 4
- question_id: tech_3
  value: 2
- question_id: psych_1
  value: 5
"#;
        let sheet = parse_answers(yaml, false).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("psych_1"), Some(&AnswerValue::Number(5.0)));
    }

    #[test]
    fn test_parse_yaml_map() {
        let yaml = r#"
psych_1: 4
apt_3: 24
"#;
        let sheet = parse_answers(yaml, false).unwrap();
        assert_eq!(sheet.get("apt_3").and_then(|v| v.as_number()), Some(24.0));
    }

    #[test]
    fn test_parse_json_camel_case_ids() {
        let json = r#"[{"questionId": "tech_1", "value": 2}, {"questionId": "tech_3", "value": "2"}]"#;
        let sheet = parse_answers(json, true).unwrap();
        assert_eq!(sheet.get("tech_1").and_then(|v| v.as_index()), Some(2));
        assert_eq!(
            sheet.get("tech_3"),
            Some(&AnswerValue::Text("2".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_answers("[{", true).is_err());
    }

    #[test]
    fn test_load_answers_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"wiscar_will_1": 5}}"#).unwrap();
        let sheet = load_answers(file.path()).unwrap();
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_answers(Path::new("/nonexistent/answers.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }
}
