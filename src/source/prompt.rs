use serde_json::{json, Value};

use crate::models::QuizConfig;

pub fn build_prompt(config: &QuizConfig) -> String {
    format!(
        "You are a senior exam setter for the Rajasthan REET Mains (Grade 3 Teacher Recruitment) Exam.
Create a multiple-choice quiz in HINDI (Devanagari script) with the following specifications:

Target Subject/Paper: {topic}
Difficulty Level: {difficulty}
Number of Questions: {count}

Instructions:
1. All Text MUST BE IN HINDI. (English terms allowed in brackets where necessary).
2. Strictly follow the REET Mains Syllabus (RSMSSB Pattern).
3. For 'Level 1', cover Rajasthan GK, Current Affairs, Math, General Science, and Psychology.
4. For 'Rajasthan GK Special', focus deeply on History, Art, Culture, Geography, and Rajasthani Language Literature.
5. For Subject papers (Science/Math, SST, Hindi, etc.), focus on the specific subject content + Teaching Methods (Reet style).
6. Ensure options are confusing and realistic (high quality distractors).
7. Provide a detailed explanation in Hindi for the correct answer.
8. Return exactly {count} questions, each with exactly 4 options.",
        topic = config.topic,
        difficulty = config.difficulty.prompt_label(),
        count = config.question_count.get(),
    )
}

/// Structured-output schema sent with the request.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": {
                            "type": "STRING",
                            "description": "The question text in Hindi"
                        },
                        "options": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "An array of 4 multiple choice options in Hindi"
                        },
                        "correctAnswerIndex": {
                            "type": "INTEGER",
                            "description": "The zero-based index of the correct option (0-3)"
                        },
                        "explanation": {
                            "type": "STRING",
                            "description": "Explanation in Hindi of why the answer is correct"
                        }
                    },
                    "required": ["text", "options", "correctAnswerIndex", "explanation"]
                }
            }
        },
        "required": ["questions"]
    })
}
