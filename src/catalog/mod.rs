mod questions;
mod sections;
mod types;

pub use sections::{section_info, SectionInfo};
pub use types::{AnswerType, Category, Construct, Question, RATING_LABELS};

use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let mut all = questions::psychometric();
    all.extend(questions::technical());
    all.extend(questions::wiscar());
    all.extend(questions::aptitude());
    Catalog::new(all)
});

/// Ordered, read-only question set with an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog from questions in presentation order.
    ///
    /// If an id repeats, lookups resolve to its first occurrence; startup
    /// validation reports the duplicate.
    pub fn new(questions: Vec<Question>) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (i, q) in questions.iter().enumerate() {
            index.entry(q.id).or_insert(i);
        }
        Self { questions, index }
    }

    /// The production catalog, built on first use
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.category == category)
    }

    /// Questions carrying a tag that resolves to `construct`
    pub fn with_construct(&self, construct: Construct) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.construct() == Some(construct))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
