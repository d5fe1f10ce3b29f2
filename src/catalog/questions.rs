use super::types::{AnswerType, Category, Question};

fn rating(
    id: &'static str,
    category: Category,
    tag: &'static str,
    prompt: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        answer_type: AnswerType::RatingScale,
        category,
        tag: Some(tag),
        prompt,
        choices: &[],
        weight,
    }
}

fn choice(
    id: &'static str,
    answer_type: AnswerType,
    category: Category,
    tag: &'static str,
    prompt: &'static str,
    choices: &'static [&'static str],
    weight: f64,
) -> Question {
    Question {
        id,
        answer_type,
        category,
        tag: Some(tag),
        prompt,
        choices,
        weight,
    }
}

fn numeric(
    id: &'static str,
    category: Category,
    tag: &'static str,
    prompt: &'static str,
    weight: f64,
) -> Question {
    Question {
        id,
        answer_type: AnswerType::Numeric,
        category,
        tag: Some(tag),
        prompt,
        choices: &[],
        weight,
    }
}

pub(super) fn psychometric() -> Vec<Question> {
    use AnswerType::{MultipleChoice, Scenario};
    let c = Category::Psychometric;
    vec![
        rating(
            "psych_1",
            c,
            "conscientiousness",
            "I prefer working in highly organized, structured environments.",
            1.2,
        ),
        rating(
            "psych_2",
            c,
            "agreeableness",
            "I enjoy helping people and making a positive impact on their health.",
            1.3,
        ),
        choice(
            "psych_3",
            MultipleChoice,
            c,
            "holland_conventional",
            "Which work environment appeals to you most?",
            &[
                "Structured, rule-based environment with clear procedures",
                "Creative, flexible environment with minimal constraints",
                "High-energy, unpredictable environment with constant change",
                "Independent environment where I work mostly alone",
            ],
            1.1,
        ),
        choice(
            "psych_4",
            Scenario,
            c,
            "stress_tolerance",
            "A customer is upset because their prescription isn't ready. How would you handle this?",
            &[
                "Calmly explain the delay and offer solutions",
                "Get the pharmacist immediately",
                "Apologize repeatedly until they calm down",
                "Explain it's not your fault and there's nothing you can do",
            ],
            1.4,
        ),
        rating(
            "psych_5",
            c,
            "attention_detail",
            "I naturally notice small details that others might miss.",
            1.5,
        ),
        choice(
            "psych_6",
            MultipleChoice,
            c,
            "motivation",
            "What motivates you most about working in healthcare?",
            &[
                "Helping people feel better and supporting their health",
                "Working with advanced technology and systems",
                "Having job security and stable income",
                "Being part of a respected profession",
            ],
            1.2,
        ),
        rating(
            "psych_7",
            c,
            "teamwork",
            "I work well as part of a healthcare team.",
            1.1,
        ),
        choice(
            "psych_8",
            Scenario,
            c,
            "ethics",
            "You notice a coworker made an error in medication dispensing. What do you do?",
            &[
                "Report it immediately to prevent patient harm",
                "Fix it quietly without mentioning it",
                "Ask the coworker about it privately first",
                "Wait to see if someone else notices",
            ],
            1.6,
        ),
    ]
}

pub(super) fn technical() -> Vec<Question> {
    use AnswerType::MultipleChoice;
    let c = Category::Technical;
    vec![
        choice(
            "tech_1",
            MultipleChoice,
            c,
            "math_skills",
            "If a patient needs 2.5 mg of medication and each tablet contains 0.5 mg, how many tablets should they take?",
            &["2 tablets", "3 tablets", "5 tablets", "6 tablets"],
            1.3,
        ),
        choice(
            "tech_2",
            MultipleChoice,
            c,
            "pharmacy_knowledge",
            "What does \"PRN\" mean on a prescription?",
            &[
                "Take as needed",
                "Take with food",
                "Take at bedtime",
                "Take three times daily",
            ],
            1.2,
        ),
        numeric("tech_3", c, "calculations", "Convert 2000 mg to grams:", 1.1),
        choice(
            "tech_4",
            MultipleChoice,
            c,
            "anatomy",
            "Which organ is primarily responsible for filtering medications from the blood?",
            &["Heart", "Liver", "Kidneys", "Lungs"],
            1.0,
        ),
        choice(
            "tech_5",
            MultipleChoice,
            c,
            "safety",
            "What is the most important step before dispensing any medication?",
            &[
                "Verify patient identity and prescription accuracy",
                "Count the pills",
                "Check insurance coverage",
                "Print the label",
            ],
            1.4,
        ),
        choice(
            "tech_6",
            MultipleChoice,
            c,
            "terminology",
            "What does \"QID\" mean?",
            &[
                "Four times a day",
                "Every four hours",
                "Twice daily",
                "Once daily",
            ],
            1.1,
        ),
        choice(
            "tech_7",
            MultipleChoice,
            c,
            "regulations",
            "Controlled substances are regulated by which agency?",
            &["FDA", "DEA", "CDC", "OSHA"],
            1.2,
        ),
    ]
}

pub(super) fn wiscar() -> Vec<Question> {
    use AnswerType::{MultipleChoice, Scenario};
    let c = Category::Wiscar;
    vec![
        rating(
            "wiscar_will_1",
            c,
            "will",
            "I persist through challenges even when progress is slow.",
            1.0,
        ),
        choice(
            "wiscar_will_2",
            Scenario,
            c,
            "will",
            "You're struggling with a complex pharmacy calculation. What do you do?",
            &[
                "Keep practicing until I master it",
                "Ask for help and practice more",
                "Focus on easier tasks for now",
                "Consider if this is right for me",
            ],
            1.1,
        ),
        rating(
            "wiscar_interest_1",
            c,
            "interest",
            "I find pharmaceutical science and drug interactions fascinating.",
            1.2,
        ),
        choice(
            "wiscar_interest_2",
            MultipleChoice,
            c,
            "interest",
            "In your free time, you prefer:",
            &[
                "Reading about health and science topics",
                "Organizing and planning activities",
                "Helping friends and family with problems",
                "Watching TV or relaxing",
            ],
            1.0,
        ),
        rating(
            "wiscar_skill_1",
            c,
            "skill",
            "I have strong communication skills and can explain complex information simply.",
            1.1,
        ),
        choice(
            "wiscar_cognitive_1",
            MultipleChoice,
            c,
            "cognitive",
            "When learning something new, I prefer to:",
            &[
                "Break it down into steps and practice systematically",
                "Jump in and learn through trial and error",
                "Watch others do it first",
                "Read about it thoroughly before trying",
            ],
            1.1,
        ),
        rating(
            "wiscar_ability_1",
            c,
            "ability",
            "I actively seek feedback to improve my performance.",
            1.0,
        ),
        choice(
            "wiscar_real_1",
            Scenario,
            c,
            "real_world",
            "Pharmacy techs often work weekends, holidays, and handle insurance issues. How does this sound to you?",
            &[
                "Acceptable - healthcare is essential",
                "Challenging but manageable",
                "Concerning but worth it for the career",
                "This might not be for me",
            ],
            1.3,
        ),
    ]
}

pub(super) fn aptitude() -> Vec<Question> {
    use AnswerType::MultipleChoice;
    let c = Category::Aptitude;
    vec![
        choice(
            "apt_1",
            MultipleChoice,
            c,
            "pattern_recognition",
            "Which number comes next in this sequence: 2, 6, 18, 54, ?",
            &["108", "162", "216", "270"],
            1.0,
        ),
        choice(
            "apt_2",
            MultipleChoice,
            c,
            "logical_reasoning",
            "If all pharmacy technicians must be certified, and Sarah is a pharmacy technician, then:",
            &[
                "Sarah must be certified",
                "Sarah might be certified",
                "Sarah is probably certified",
                "We cannot determine if Sarah is certified",
            ],
            1.1,
        ),
        numeric(
            "apt_3",
            c,
            "numerical_ability",
            "A prescription costs $120. Insurance covers 80%. What is the patient's copay?",
            1.2,
        ),
        choice(
            "apt_4",
            MultipleChoice,
            c,
            "spatial_reasoning",
            "How many different ways can you arrange 4 different medications on a shelf?",
            &["12", "16", "20", "24"],
            1.0,
        ),
    ]
}
