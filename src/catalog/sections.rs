use super::types::Category;

/// Introductory copy shown before each section starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub measures: &'static [&'static str],
}

pub fn section_info(category: Category) -> SectionInfo {
    match category {
        Category::Psychometric => SectionInfo {
            title: "Psychological Fit Assessment",
            description: "Evaluate your personality traits, work preferences, and psychological alignment with pharmacy technician work.",
            duration: "8-10 minutes",
            measures: &[
                "Conscientiousness and attention to detail",
                "Agreeableness and customer service orientation",
                "Stress tolerance and emotional stability",
                "Team collaboration preferences",
                "Ethical decision-making approach",
            ],
        },
        Category::Technical => SectionInfo {
            title: "Technical & Knowledge Assessment",
            description: "Test your foundational skills in mathematics, science, and pharmacy-related knowledge.",
            duration: "10-12 minutes",
            measures: &[
                "Mathematical calculation abilities",
                "Basic science and anatomy knowledge",
                "Pharmacy terminology understanding",
                "Safety and regulation awareness",
                "Problem-solving with technical scenarios",
            ],
        },
        Category::Wiscar => SectionInfo {
            title: "WISCAR Framework Analysis",
            description: "Multi-dimensional evaluation of your readiness across six key areas for career success.",
            duration: "6-8 minutes",
            measures: &[
                "Will - Persistence and determination",
                "Interest - Genuine engagement with pharmacy work",
                "Skill - Current interpersonal and communication abilities",
                "Cognitive - Analytical thinking and learning approach",
                "Ability to Learn - Metacognition and feedback receptivity",
                "Real-world Alignment - Understanding of actual work environment",
            ],
        },
        Category::Aptitude => SectionInfo {
            title: "General Aptitude Assessment",
            description: "Evaluate your logical reasoning, pattern recognition, and general problem-solving abilities.",
            duration: "5-7 minutes",
            measures: &[
                "Pattern recognition and sequencing",
                "Logical reasoning abilities",
                "Numerical problem-solving",
                "Spatial reasoning skills",
                "Critical thinking application",
            ],
        },
    }
}
