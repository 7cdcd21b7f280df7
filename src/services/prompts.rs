//! Fixed prompt templates for question generation and scoring.
//!
//! Pure string assembly; nothing here talks to the network.

use crate::models::answer::Answer;
use crate::models::user::UserProfile;

pub const QUESTION_GENERATION: &str = r#"Generate 8 IQ test questions that assess logical reasoning, pattern recognition, and problem-solving abilities.
Include a mix of multiple choice (with 4 options each) and short answer questions.
For multiple choice questions, include the options as an array.
For short answer questions, don't include options.
Format the response as a JSON array of objects with the following structure:
[
  {
    "id": "unique-id",
    "type": "multiple_choice",
    "question": "question text",
    "options": ["option 1", "option 2", "option 3", "option 4"]
  },
  {
    "id": "unique-id",
    "type": "short_answer",
    "question": "question text"
  }
]
Ensure each question id is unique. Make sure each question is challenging but fair, suitable for an adult IQ assessment."#;

/// The question-generation prompt takes no per-user input.
pub fn question_generation_prompt() -> &'static str {
    QUESTION_GENERATION
}

/// Build the scoring prompt from the profile and the answer set.
///
/// Unanswered entries are rendered as "No answer provided" so the model
/// always sees one block per submitted answer.
pub fn scoring_prompt(profile: &UserProfile, answers: &[Answer]) -> String {
    let qa_block = answers
        .iter()
        .map(|a| {
            let answer = if a.answer.is_empty() {
                "No answer provided"
            } else {
                a.answer.as_str()
            };
            format!("Question: {}\nUser's Answer: {}", a.question_id, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"You're an IQ assessment expert. Given a user's answers to IQ test questions, calculate an estimated IQ score, provide an analysis, and generate a detailed explanation.

User Information:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Country: {country}
- Education: {school}

Questions and Answers:
{qa_block}

Based on this information, please:
1. Calculate an estimated IQ score (between 85-145)
2. Determine the IQ category based on the score
3. Calculate the percentile (what percentage of the population has a lower score)
4. Provide performance percentages for different cognitive categories (Logical Reasoning, Pattern Recognition, Spatial Reasoning, Mathematical Ability)
5. Write a detailed explanation of the results (3-4 paragraphs)

Format your response as a JSON object with this structure:
{{
  "iqScore": 123,
  "iqCategory": "Superior Intelligence",
  "percentile": 92,
  "performance": [
    {{"category": "Logical Reasoning", "percentage": 88}},
    {{"category": "Pattern Recognition", "percentage": 92}},
    {{"category": "Spatial Reasoning", "percentage": 85}},
    {{"category": "Mathematical Ability", "percentage": 90}}
  ],
  "explanation": "Detailed multi-paragraph explanation of the results."
}}

Ensure the explanation is personalized based on the user's information and performance."#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender.as_deref().unwrap_or("Not specified"),
        country = profile.country,
        school = profile.school,
    )
}
