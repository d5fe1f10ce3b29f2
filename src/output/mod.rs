pub mod formatter;

pub use formatter::{
    format_catalog, format_elapsed, format_question, format_results, format_results_json,
    format_score_bar, format_section_intro, should_use_colors,
};
