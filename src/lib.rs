pub mod answers;
pub mod catalog;
pub mod config;
pub mod interactive;
pub mod output;
pub mod scoring;
pub mod session;
pub mod telemetry;

pub use answers::{Answer, AnswerSheet, AnswerValue};
pub use catalog::{AnswerType, Catalog, Category, Construct, Question};
pub use scoring::{score, AssessmentResults, Recommendation};
