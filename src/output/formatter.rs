use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::catalog::{AnswerType, Catalog, Category, Construct, Question, SectionInfo, RATING_LABELS};
use crate::config::ColorMode;
use crate::scoring::{AssessmentResults, Recommendation, ScoreBand};
use crate::session::Progress;

const DEFAULT_BAR_WIDTH: usize = 20;
const MAX_BAR_WIDTH: usize = 40;
// Label column + score column + band label
const BAR_ROW_OVERHEAD: usize = 24 + 5 + 14;

/// Decide whether to emit ANSI colours for stdout
pub fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn bar_width() -> usize {
    match get_terminal_width() {
        Some(w) if w > BAR_ROW_OVERHEAD + 10 => (w - BAR_ROW_OVERHEAD).min(MAX_BAR_WIDTH),
        Some(_) => 10,
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render a 0-100 score as a fixed-width bar: "██████░░░░"
pub fn format_score_bar(score: u8, width: usize) -> String {
    let filled = (score.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn colorize_by_band(text: &str, score: u8, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match ScoreBand::for_score(score) {
        ScoreBand::Excellent => text.green().to_string(),
        ScoreBand::Good => text.cyan().to_string(),
        ScoreBand::Moderate => text.yellow().to_string(),
        ScoreBand::NeedsWork => text.red().to_string(),
    }
}

fn score_row(label: &str, score: u8, width: usize, use_colors: bool) -> String {
    let bar = format_score_bar(score, width);
    format!(
        "  {:<22} {:>3}  {}  {}",
        label,
        score,
        colorize_by_band(&bar, score, use_colors),
        ScoreBand::for_score(score).label()
    )
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the full results report.
///
/// `verbose` appends the per-question breakdown.
pub fn format_results(results: &AssessmentResults, use_colors: bool, verbose: bool) -> String {
    let width = bar_width();
    let mut sections = Vec::new();

    let headline = results.recommendation.headline();
    let headline = if use_colors {
        match results.recommendation {
            Recommendation::Yes => headline.green().bold().to_string(),
            Recommendation::Maybe => headline.yellow().bold().to_string(),
            Recommendation::No => headline.red().bold().to_string(),
        }
    } else {
        headline.to_string()
    };
    sections.push(format!(
        "{}\n{}\n\n  Overall score: {}/100 ({})",
        headline,
        results.recommendation_text,
        colorize_by_band(&results.overall_score.to_string(), results.overall_score, use_colors),
        ScoreBand::for_score(results.overall_score).label()
    ));

    let categories = Category::ALL
        .iter()
        .map(|&c| score_row(c.display_name(), results.category_scores.get(c), width, use_colors))
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!("{}\n{}", heading("Sections", use_colors), categories));

    let constructs = Construct::ALL
        .iter()
        .map(|&c| score_row(c.display_name(), results.construct_scores.get(c), width, use_colors))
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!(
        "{}\n{}\n  {:<22} {:>5.1}",
        heading("WISCAR Framework", use_colors),
        constructs,
        "Average",
        results.construct_scores.average()
    ));

    if !results.strengths.is_empty() {
        sections.push(format!(
            "{}\n{}",
            heading("Your Strengths", use_colors),
            bullet_list(&results.strengths)
        ));
    }
    if !results.improvements.is_empty() {
        sections.push(format!(
            "{}\n{}",
            heading("Areas for Improvement", use_colors),
            bullet_list(&results.improvements)
        ));
    }

    let steps = results
        .next_steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n");
    sections.push(format!("{}\n{}", heading("Recommended Next Steps", use_colors), steps));

    if let Some(ref alternatives) = results.career_alternatives {
        sections.push(format!(
            "{}\n{}",
            heading("Alternative Healthcare Career Paths", use_colors),
            bullet_list(alternatives)
        ));
    }

    if verbose && !results.breakdown.is_empty() {
        let rows = results
            .breakdown
            .iter()
            .map(|q| {
                format!(
                    "  {:<20} {:<12} {:>5.1}  x{}",
                    q.question_id,
                    q.category.key(),
                    q.score,
                    q.weight
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!("{}\n{}", heading("Question Breakdown", use_colors), rows));
    }

    sections.join("\n\n")
}

/// Pretty-printed JSON of the results
pub fn format_results_json(results: &AssessmentResults) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// One line per question: index, id, category, type, weight, prompt
pub fn format_catalog(catalog: &Catalog, use_colors: bool) -> String {
    if catalog.is_empty() {
        return "No questions in catalog.".to_string();
    }

    let term_width = get_terminal_width();
    // "99. " + id(20) + category(13) + type(9) + weight(5) + spacing
    let fixed_width = 4 + 20 + 13 + 9 + 5 + 4;

    catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(idx, q)| {
            let index_str = format!("{:>2}.", idx + 1);
            let prompt = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(q.prompt, width - fixed_width),
                Some(_) => truncate_text(q.prompt, 20),
                None => q.prompt.to_string(),
            };
            let line = format!(
                "{:<20} {:<13}{:<9}{:>4} {}",
                q.id,
                q.category.key(),
                q.answer_type.key(),
                q.weight,
                prompt
            );
            if use_colors {
                format!("{} {}", index_str.dimmed(), line)
            } else {
                format!("{} {}", index_str, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_section_intro(info: &SectionInfo, use_colors: bool) -> String {
    let measures = info
        .measures
        .iter()
        .map(|m| format!("  - {}", m))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n{}\nEstimated time: {}\n\nWhat we'll measure:\n{}",
        heading(info.title, use_colors),
        info.description,
        info.duration,
        measures
    )
}

/// Question prompt with its numbered choices and progress line
pub fn format_question(question: &Question, progress: &Progress, use_colors: bool) -> String {
    let status = format!(
        "Question {} of {} | {} ({}/{}) | {}%",
        progress.completed + 1,
        progress.total,
        progress.section.display_name(),
        progress.section_position,
        progress.section_len,
        progress.percent()
    );
    let status = if use_colors {
        status.dimmed().to_string()
    } else {
        status
    };

    let options: Vec<String> = if question.answer_type.is_choice() {
        question
            .choices
            .iter()
            .enumerate()
            .map(|(i, c)| format!("  {}) {}", i + 1, c))
            .collect()
    } else if question.answer_type == AnswerType::RatingScale {
        RATING_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| format!("  {}) {}", i + 1, label))
            .collect()
    } else {
        Vec::new()
    };

    let mut out = format!("{}\n{}", status, heading(question.prompt, use_colors));
    if !options.is_empty() {
        out.push('\n');
        out.push_str(&options.join("\n"));
    }
    out
}

/// Human-friendly elapsed time, whole seconds only ("4m 12s")
pub fn format_elapsed(elapsed: chrono::Duration) -> String {
    let secs = elapsed.num_seconds().max(0) as u64;
    humantime::format_duration(std::time::Duration::from_secs(secs)).to_string()
}
