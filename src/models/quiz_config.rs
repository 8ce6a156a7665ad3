//! User-editable quiz settings.

use std::fmt;
use std::str::FromStr;

use super::topic::TOPICS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Label sent to the question generator, which writes in Hindi.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Difficulty::Easy => "आसान",
            Difficulty::Medium => "मध्यम",
            Difficulty::Hard => "कठिन",
            Difficulty::Expert => "विशेषज्ञ",
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let pos = Self::ALL.iter().position(|d| *d == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!("unknown difficulty '{}'", other)),
        }
    }
}

/// Allowed quiz lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionCount {
    Ten,
    #[default]
    Twenty,
    Thirty,
    Fifty,
}

impl QuestionCount {
    pub const ALL: [QuestionCount; 4] = [
        QuestionCount::Ten,
        QuestionCount::Twenty,
        QuestionCount::Thirty,
        QuestionCount::Fifty,
    ];

    pub fn get(self) -> usize {
        match self {
            QuestionCount::Ten => 10,
            QuestionCount::Twenty => 20,
            QuestionCount::Thirty => 30,
            QuestionCount::Fifty => 50,
        }
    }

    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl TryFrom<usize> for QuestionCount {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.get() == value)
            .ok_or_else(|| format!("question count must be one of 10, 20, 30, 50 (got {})", value))
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_count: QuestionCount,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            topic: TOPICS[0].name.to_string(),
            difficulty: Difficulty::default(),
            question_count: QuestionCount::default(),
        }
    }
}

/// A single edit to the configuration, applied only while idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigChange {
    Topic(String),
    Difficulty(Difficulty),
    QuestionCount(QuestionCount),
}

impl QuizConfig {
    pub fn apply(&mut self, change: ConfigChange) {
        match change {
            ConfigChange::Topic(topic) => self.topic = topic,
            ConfigChange::Difficulty(difficulty) => self.difficulty = difficulty,
            ConfigChange::QuestionCount(count) => self.question_count = count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_setup_screen() {
        let config = QuizConfig::default();
        assert_eq!(config.topic, "REET Level 1 (Common)");
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.question_count.get(), 20);
    }

    #[test]
    fn test_question_count_rejects_other_sizes() {
        assert_eq!(QuestionCount::try_from(30), Ok(QuestionCount::Thirty));
        assert!(QuestionCount::try_from(25).is_err());
        assert!(QuestionCount::try_from(0).is_err());
    }

    #[test]
    fn test_difficulty_cycles() {
        assert_eq!(Difficulty::Expert.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Expert);
        assert_eq!(QuestionCount::Fifty.next(), QuestionCount::Ten);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Hard.prompt_label(), "कठिन");
    }

    #[test]
    fn test_apply_change() {
        let mut config = QuizConfig::default();
        config.apply(ConfigChange::QuestionCount(QuestionCount::Ten));
        config.apply(ConfigChange::Topic("Psychology & IT".to_string()));

        assert_eq!(config.question_count, QuestionCount::Ten);
        assert_eq!(config.topic, "Psychology & IT");
    }
}
