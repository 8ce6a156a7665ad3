use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::errors::SourceError;
use crate::models::{Question, QuizConfig};

use super::QuestionSource;
use super::parse::parse_questions;
use super::prompt::{build_prompt, response_schema};

/// Question source backed by the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
    }
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl QuestionSource for GeminiClient {
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, SourceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(SourceError::MissingCredential("GEMINI_API_KEY"))?;

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(config) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        log::info!(
            "Requesting {} questions on '{}' ({}) from {}",
            config.question_count,
            config.topic,
            config.difficulty,
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let questions = read_questions(status, &body, config.question_count.get())?;
        log::debug!("Accepted {} generated questions", questions.len());
        Ok(questions)
    }
}

/// Turn a `generateContent` reply into validated questions.
fn read_questions(
    status: StatusCode,
    body: &str,
    expected: usize,
) -> Result<Vec<Question>, SourceError> {
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let payload: GenerateResponse = serde_json::from_str(body)?;
    let text = payload.into_text().ok_or(SourceError::EmptyResponse)?;
    parse_questions(&text, expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_model_and_trims_base() {
        let mut config = Config::test_config();
        config.base_url = "https://example.test/".to_string();
        config.model = "gemini-test".to_string();

        let client = GeminiClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"questions\":[]}"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("{\"questions\":[]}"));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(empty.into_text().is_none());

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(blocked.into_text().is_none());
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let mut config = Config::test_config();
        config.api_key = None;
        let client = GeminiClient::new(&config).unwrap();

        let err = client.generate(&QuizConfig::default()).await.unwrap_err();

        assert!(matches!(err, SourceError::MissingCredential("GEMINI_API_KEY")));
    }

    fn reply(quiz: serde_json::Value) -> String {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": quiz.to_string() }] } }]
        })
        .to_string()
    }

    fn item(correct: i64) -> serde_json::Value {
        json!({
            "text": "प्रश्न",
            "options": ["क", "ख", "ग", "घ"],
            "correctAnswerIndex": correct,
            "explanation": "व्याख्या"
        })
    }

    #[test]
    fn test_error_status_keeps_body() {
        let err = read_questions(StatusCode::TOO_MANY_REQUESTS, "quota exceeded", 2).unwrap_err();

        match err {
            SourceError::Status { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_successful_reply_is_parsed_and_validated() {
        let body = reply(json!({ "questions": [item(1), item(2)] }));

        let questions = read_questions(StatusCode::OK, &body, 2).unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_answer_index, 1);
        assert_eq!(questions[1].options[3], "घ");
        assert_ne!(questions[0].id, questions[1].id);
    }

    #[test]
    fn test_successful_reply_with_wrong_count_is_rejected() {
        let body = reply(json!({ "questions": [item(0)] }));

        let err = read_questions(StatusCode::OK, &body, 2).unwrap_err();

        assert!(matches!(err, SourceError::Shape(_)));
    }

    #[test]
    fn test_reply_without_text_or_json_fails() {
        let err = read_questions(StatusCode::OK, r#"{"candidates":[]}"#, 1).unwrap_err();
        assert!(matches!(err, SourceError::EmptyResponse));

        let err = read_questions(StatusCode::OK, "<html>oops</html>", 1).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }
}

