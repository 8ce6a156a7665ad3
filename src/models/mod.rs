mod answer;
mod question;
mod quiz_config;
mod topic;

pub use answer::{AnswerSheet, OptionIndex, Selection, SelectionError, SKIP_OPTION_INDEX};
pub use question::{Question, NUM_OPTIONS};
pub use quiz_config::{ConfigChange, Difficulty, QuestionCount, QuizConfig};
pub use topic::{find_topic, Topic, TOPICS};
