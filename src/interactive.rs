use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::answers::AnswerValue;
use crate::catalog::{section_info, AnswerType, Question, RATING_LABELS};
use crate::config::OutputFormat;
use crate::output::{format_elapsed, format_question, format_results, format_results_json, format_section_intro};
use crate::session::{AssessmentSession, Phase};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Input closed before the assessment finished");
    }
    Ok(input.trim().to_string())
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Turn typed input into an answer value for `question`.
///
/// Choices are entered 1-based and stored as zero-based indices.
pub fn parse_response(question: &Question, input: &str) -> Result<AnswerValue, String> {
    let input = input.trim();
    match question.answer_type {
        AnswerType::RatingScale => match input.parse::<u32>() {
            Ok(n) if (1..=RATING_LABELS.len() as u32).contains(&n) => Ok(AnswerValue::from(n)),
            _ => Err(format!("enter a number from 1 to {}", RATING_LABELS.len())),
        },
        AnswerType::MultipleChoice | AnswerType::Scenario => {
            let count = question.choices.len();
            match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= count => Ok(AnswerValue::from(n - 1)),
                _ => Err(format!("enter a number from 1 to {}", count)),
            }
        }
        AnswerType::Numeric => match input.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(AnswerValue::from(n)),
            _ => Err("enter a number".to_string()),
        },
    }
}

/// Run the assessment on stdin/stdout until the user declines a restart.
pub fn run_assessment(use_colors: bool, verbose: bool, format: OutputFormat) -> Result<()> {
    let mut session = AssessmentSession::builtin();

    loop {
        match session.phase() {
            Phase::Welcome => {
                println!();
                println!("Pharmacy Technician Career Assessment");
                println!("=====================================");
                println!("Four short sections covering fit, knowledge, readiness and aptitude.");
                println!();
                prompt("Press Enter to begin...")?;
                session.start()?;
            }
            Phase::SectionIntro(category) => {
                println!();
                println!("{}", format_section_intro(&section_info(category), use_colors));
                println!();
                prompt("Press Enter to continue...")?;
                session.begin_section()?;
            }
            Phase::Question => {
                let (Some(question), Some(progress)) =
                    (session.current_question(), session.progress())
                else {
                    anyhow::bail!("Assessment has no current question");
                };
                println!();
                println!("{}", format_question(question, &progress, use_colors));
                let value = loop {
                    let input = prompt("> ")?;
                    match parse_response(question, &input) {
                        Ok(value) => break value,
                        Err(hint) => println!("  Invalid: {}. Try again.", hint),
                    }
                };
                session.answer(value)?;
            }
            Phase::Results => {
                let Some(results) = session.results() else {
                    anyhow::bail!("Assessment finished without results");
                };
                println!();
                match format {
                    OutputFormat::Text => println!("{}", format_results(results, use_colors, verbose)),
                    OutputFormat::Json => println!("{}", format_results_json(results)?),
                }
                if let Some(elapsed) = session.elapsed() {
                    println!();
                    println!("Completed in {}", format_elapsed(elapsed));
                }
                println!();
                if prompt_yes_no("Retake the assessment?", false)? {
                    session.restart();
                } else {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn q(id: &str) -> &'static Question {
        Catalog::builtin().get(id).unwrap()
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_response(q("psych_1"), "4"), Ok(AnswerValue::Number(4.0)));
        assert!(parse_response(q("psych_1"), "0").is_err());
        assert!(parse_response(q("psych_1"), "6").is_err());
        assert!(parse_response(q("psych_1"), "agree").is_err());
    }

    #[test]
    fn test_parse_choice_is_one_based() {
        assert_eq!(parse_response(q("tech_1"), "3"), Ok(AnswerValue::Number(2.0)));
        assert_eq!(parse_response(q("psych_4"), " 1 "), Ok(AnswerValue::Number(0.0)));
        let err = parse_response(q("tech_1"), "5").unwrap_err();
        assert_eq!(err, "enter a number from 1 to 4");
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_response(q("tech_3"), "2"), Ok(AnswerValue::Number(2.0)));
        assert_eq!(parse_response(q("apt_3"), "23.5"), Ok(AnswerValue::Number(23.5)));
        assert!(parse_response(q("apt_3"), "$24").is_err());
        assert!(parse_response(q("apt_3"), "NaN").is_err());
    }
}
