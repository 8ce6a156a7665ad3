//! Runs a [`Session`] against a real clock and question source.
//!
//! The session decides; the driver spawns the fetch, the auto-advance
//! timer and the elapsed-time ticker, and feeds their results back in as
//! [`Event`]s.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::config::{Config, DEFAULT_ADVANCE_DELAY_MS, DEFAULT_CLOCK_TICK_MS};
use crate::session::{Command, Event, Intent, Session};
use crate::source::QuestionSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub advance_delay: Duration,
    pub clock_tick: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS),
            clock_tick: Duration::from_millis(DEFAULT_CLOCK_TICK_MS),
        }
    }
}

impl From<&Config> for Timing {
    fn from(config: &Config) -> Self {
        Self {
            advance_delay: config.advance_delay,
            clock_tick: config.clock_tick,
        }
    }
}

pub struct Driver<S: QuestionSource + 'static> {
    session: Session,
    source: Arc<S>,
    timing: Timing,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    fetch: Option<JoinHandle<()>>,
    advance: Option<JoinHandle<()>>,
    clock: Option<JoinHandle<()>>,
}

impl<S: QuestionSource + 'static> Driver<S> {
    pub fn new(session: Session, source: S, timing: Timing) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            session,
            source: Arc::new(source),
            timing,
            tx,
            rx,
            fetch: None,
            advance: None,
            clock: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Forward a presentation intent.
    pub fn dispatch(&mut self, intent: Intent) {
        self.process(Event::Intent(intent));
    }

    /// Wait for the next internal event and apply it.
    pub async fn step(&mut self) {
        if let Some(event) = self.rx.recv().await {
            self.process(event);
        }
    }

    /// Apply every internal event already queued. Returns how many ran.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.process(event);
            applied += 1;
        }
        applied
    }

    fn process(&mut self, event: Event) {
        let commands = self.session.handle(event);
        for command in commands {
            self.execute(command);
        }
        self.sync_clock();
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::FetchQuestions { request, config } => {
                abort(&mut self.fetch);
                let source = Arc::clone(&self.source);
                let tx = self.tx.clone();
                self.fetch = Some(tokio::spawn(async move {
                    let outcome = source.generate(&config).await;
                    let _ = tx.send(Event::QuestionsLoaded { request, outcome });
                }));
            }
            Command::CancelFetch => abort(&mut self.fetch),
            Command::ScheduleAdvance(token) => {
                abort(&mut self.advance);
                let tx = self.tx.clone();
                let delay = self.timing.advance_delay;
                self.advance = Some(tokio::spawn(async move {
                    time::sleep(delay).await;
                    let _ = tx.send(Event::AdvanceDue(token));
                }));
            }
        }
    }

    /// Keep the ticker alive exactly while the session's clock runs. A
    /// resumed clock starts a fresh period.
    fn sync_clock(&mut self) {
        match (self.session.clock_running(), self.clock.is_some()) {
            (true, false) => {
                let tx = self.tx.clone();
                let period = self.timing.clock_tick;
                self.clock = Some(tokio::spawn(async move {
                    let mut interval = time::interval_at(Instant::now() + period, period);
                    loop {
                        interval.tick().await;
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }));
            }
            (false, true) => abort(&mut self.clock),
            _ => {}
        }
    }
}

impl<S: QuestionSource + 'static> Drop for Driver<S> {
    fn drop(&mut self) {
        abort(&mut self.fetch);
        abort(&mut self.advance);
        abort(&mut self.clock);
    }
}

fn abort(task: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = task.take() {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_matches_config_defaults() {
        let timing = Timing::default();

        assert_eq!(timing, Timing::from(&Config::test_config()));
        assert_eq!(timing.advance_delay, Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS));
        assert_eq!(timing.clock_tick, Duration::from_millis(DEFAULT_CLOCK_TICK_MS));
    }
}
