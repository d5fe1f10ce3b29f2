//! Answer collection for one assessment run.
//!
//! The session walks the catalog in order, pausing at each section intro, and
//! scores exactly once after the final answer. Restarting discards every
//! collected answer.

use chrono::{DateTime, Utc};

use crate::answers::{AnswerSheet, AnswerValue};
use crate::catalog::{Catalog, Category, Question};
use crate::scoring::{calculate_scores, AssessmentResults, ScoringConfig, ScoringTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    SectionIntro(Category),
    Question,
    Results,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("cannot {action} while in {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },
}

/// Position of the current question, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub section: Category,
    /// 1-based position within the section
    pub section_position: usize,
    pub section_len: usize,
}

impl Progress {
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

pub struct AssessmentSession<'a> {
    catalog: &'a Catalog,
    tables: &'a ScoringTables,
    config: ScoringConfig,
    phase: Phase,
    cursor: usize,
    answers: AnswerSheet,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    results: Option<AssessmentResults>,
}

impl AssessmentSession<'static> {
    pub fn builtin() -> Self {
        Self::new(
            Catalog::builtin(),
            ScoringTables::builtin(),
            ScoringConfig::default(),
        )
    }
}

impl<'a> AssessmentSession<'a> {
    pub fn new(catalog: &'a Catalog, tables: &'a ScoringTables, config: ScoringConfig) -> Self {
        Self {
            catalog,
            tables,
            config,
            phase: Phase::Welcome,
            cursor: 0,
            answers: AnswerSheet::new(),
            started_at: None,
            finished_at: None,
            results: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Leave the welcome screen for the first section intro
    pub fn start(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Welcome, "start")?;
        self.started_at = Some(Utc::now());
        tracing::info!(questions = self.catalog.len(), "assessment started");
        self.advance_to_cursor();
        Ok(self.phase)
    }

    /// Leave a section intro for its first question
    pub fn begin_section(&mut self) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::SectionIntro(_) => {
                self.phase = Phase::Question;
                Ok(self.phase)
            }
            phase => Err(SessionError::WrongPhase {
                action: "begin a section",
                phase,
            }),
        }
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        match self.phase {
            Phase::Question => self.catalog.questions().get(self.cursor),
            _ => None,
        }
    }

    /// Record an answer for the current question and move on.
    ///
    /// Crossing into a new category stops at its intro; answering the last
    /// question scores the run.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::Question, "answer")?;
        let catalog = self.catalog;
        let Some(question) = catalog.questions().get(self.cursor) else {
            return Err(SessionError::WrongPhase {
                action: "answer",
                phase: self.phase,
            });
        };

        self.answers.record(question.id, value);
        self.cursor += 1;

        match catalog.questions().get(self.cursor) {
            Some(next) if next.category != question.category => {
                self.phase = Phase::SectionIntro(next.category);
            }
            Some(_) => {}
            None => self.finish(),
        }
        Ok(self.phase)
    }

    pub fn progress(&self) -> Option<Progress> {
        let questions = self.catalog.questions();
        let section = match self.phase {
            Phase::SectionIntro(category) => category,
            Phase::Question => questions.get(self.cursor)?.category,
            _ => return None,
        };
        Some(Progress {
            completed: self.cursor,
            total: questions.len(),
            section,
            section_position: questions[..self.cursor]
                .iter()
                .filter(|q| q.category == section)
                .count()
                + 1,
            section_len: self.catalog.in_category(section).count(),
        })
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    /// Time from `start` to the final answer, or to now while in progress
    pub fn elapsed(&self) -> Option<chrono::Duration> {
        let started = self.started_at?;
        Some(self.finished_at.unwrap_or_else(Utc::now) - started)
    }

    /// Discard every answer and return to the welcome screen
    pub fn restart(&mut self) {
        tracing::info!(discarded = self.answers.len(), "assessment restarted");
        self.phase = Phase::Welcome;
        self.cursor = 0;
        self.answers.clear();
        self.started_at = None;
        self.finished_at = None;
        self.results = None;
    }

    fn advance_to_cursor(&mut self) {
        match self.catalog.questions().get(self.cursor) {
            Some(q) => self.phase = Phase::SectionIntro(q.category),
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        let results = calculate_scores(&self.answers, self.catalog, self.tables, &self.config);
        tracing::info!(
            overall = results.overall_score,
            recommendation = results.recommendation.as_str(),
            "assessment complete"
        );
        self.finished_at = Some(Utc::now());
        self.results = Some(results);
        self.phase = Phase::Results;
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AnswerType;
    use crate::scoring::Recommendation;

    fn answer_all(session: &mut AssessmentSession<'_>, rating: f64) {
        while session.phase() != Phase::Results {
            match session.phase() {
                Phase::SectionIntro(_) => {
                    session.begin_section().unwrap();
                }
                Phase::Question => {
                    let q = session.current_question().unwrap();
                    let value = match q.answer_type {
                        AnswerType::RatingScale => rating,
                        _ => 0.0,
                    };
                    session.answer(value).unwrap();
                }
                Phase::Welcome => {
                    session.start().unwrap();
                }
                Phase::Results => unreachable!(),
            }
        }
    }

    #[test]
    fn test_start_enters_first_section() {
        let mut session = AssessmentSession::builtin();
        assert_eq!(session.phase(), Phase::Welcome);
        assert_eq!(
            session.start().unwrap(),
            Phase::SectionIntro(Category::Psychometric)
        );
        assert!(session.current_question().is_none());
        assert_eq!(session.begin_section().unwrap(), Phase::Question);
        assert_eq!(session.current_question().unwrap().id, "psych_1");
    }

    #[test]
    fn test_section_boundary_stops_at_intro() {
        let mut session = AssessmentSession::builtin();
        session.start().unwrap();
        session.begin_section().unwrap();
        for _ in 0..7 {
            assert_eq!(session.answer(4u32).unwrap(), Phase::Question);
        }
        assert_eq!(
            session.answer(4u32).unwrap(),
            Phase::SectionIntro(Category::Technical)
        );
        let progress = session.progress().unwrap();
        assert_eq!(progress.completed, 8);
        assert_eq!(progress.section, Category::Technical);
        assert_eq!(progress.section_position, 1);
        assert_eq!(progress.section_len, 7);
    }

    #[test]
    fn test_answer_outside_question_phase() {
        let mut session = AssessmentSession::builtin();
        let err = session.answer(3u32).unwrap_err();
        assert_eq!(
            err,
            SessionError::WrongPhase {
                action: "answer",
                phase: Phase::Welcome
            }
        );
        assert!(err.to_string().contains("cannot answer"));
        assert!(session.begin_section().is_err());
    }

    #[test]
    fn test_full_run_scores_once() {
        let mut session = AssessmentSession::builtin();
        answer_all(&mut session, 5.0);
        assert_eq!(session.answers().len(), 27);
        let results = session.results().unwrap();
        assert_eq!(results.category_scores.psychometric, 100);
        assert!(session.elapsed().is_some());
        assert!(session.progress().is_none());
    }

    #[test]
    fn test_restart_discards_answers() {
        let mut session = AssessmentSession::builtin();
        answer_all(&mut session, 1.0);
        session.restart();
        assert_eq!(session.phase(), Phase::Welcome);
        assert!(session.answers().is_empty());
        assert!(session.results().is_none());
        assert!(session.elapsed().is_none());

        answer_all(&mut session, 5.0);
        assert_eq!(session.results().unwrap().category_scores.psychometric, 100);
    }

    #[test]
    fn test_empty_catalog_goes_straight_to_results() {
        let catalog = Catalog::new(vec![]);
        let tables = ScoringTables::empty();
        let mut session = AssessmentSession::new(&catalog, &tables, ScoringConfig::default());
        assert_eq!(session.start().unwrap(), Phase::Results);
        assert_eq!(
            session.results().unwrap().recommendation,
            Recommendation::No
        );
    }

    #[test]
    fn test_progress_percent() {
        let progress = Progress {
            completed: 9,
            total: 27,
            section: Category::Technical,
            section_position: 2,
            section_len: 7,
        };
        assert_eq!(progress.percent(), 33);
    }
}
