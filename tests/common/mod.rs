#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use reet_mock::session::Phase;
use reet_mock::{Driver, Question, QuestionSource, QuizConfig, SourceError};

/// In-memory question source that answers each call from a script,
/// optionally after a delay.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<VecDeque<(Duration, Result<Vec<Question>, SourceError>)>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, delay: Duration, outcome: Result<Vec<Question>, SourceError>) -> Self {
        self.replies
            .lock()
            .expect("script lock")
            .push_back((delay, outcome));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionSource for ScriptedSource {
    async fn generate(&self, _config: &QuizConfig) -> Result<Vec<Question>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.replies.lock().expect("script lock").pop_front();
        match next {
            Some((delay, outcome)) => {
                tokio::time::sleep(delay).await;
                outcome
            }
            None => Err(SourceError::EmptyResponse),
        }
    }
}

/// `n` questions whose correct answer cycles through A-D. Ids carry `tag`
/// so tests can tell batches apart.
pub fn questions(tag: &str, n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            id: format!("{}-{}", tag, i),
            text: format!("{} question {}", tag, i),
            options: [
                "विकल्प 1".to_string(),
                "विकल्प 2".to_string(),
                "विकल्प 3".to_string(),
                "विकल्प 4".to_string(),
            ],
            correct_answer_index: i % 4,
            explanation: format!("Explanation {}", i),
        })
        .collect()
}

/// Pump driver events until the session reaches `phase`.
pub async fn wait_for_phase<S: QuestionSource + 'static>(driver: &mut Driver<S>, phase: Phase) {
    for _ in 0..1000 {
        if driver.session().state().phase() == phase {
            return;
        }
        driver.step().await;
    }
    panic!(
        "session never reached {:?}, stuck in {:?}",
        phase,
        driver.session().state().phase()
    );
}

/// Let spawned timer tasks run, then apply whatever they sent.
pub async fn settle<S: QuestionSource + 'static>(driver: &mut Driver<S>, wait: Duration) {
    tokio::time::sleep(wait).await;
    tokio::task::yield_now().await;
    driver.drain();
}
