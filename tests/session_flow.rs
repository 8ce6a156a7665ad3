mod common;

use std::time::Duration;

use common::{questions, settle, wait_for_phase, ScriptedSource};
use reet_mock::session::{Phase, SessionState, SOURCE_FAILURE_MESSAGE};
use reet_mock::{Driver, Intent, QuizConfig, Selection, Session, SourceError, Timing};

fn driver(source: ScriptedSource) -> Driver<ScriptedSource> {
    Driver::new(Session::new(QuizConfig::default()), source, Timing::default())
}

fn current_index(driver: &Driver<ScriptedSource>) -> usize {
    match driver.session().state() {
        SessionState::InProgress(attempt) => attempt.current_index(),
        other => panic!("expected InProgress, got {:?}", other.phase()),
    }
}

fn elapsed(driver: &Driver<ScriptedSource>) -> u64 {
    match driver.session().state() {
        SessionState::InProgress(attempt) => attempt.elapsed(),
        other => panic!("expected InProgress, got {:?}", other.phase()),
    }
}

#[tokio::test(start_paused = true)]
async fn test_newer_start_wins_over_slow_older_request() {
    let source = ScriptedSource::new()
        .reply(Duration::from_secs(5), Ok(questions("old", 10)))
        .reply(Duration::from_secs(1), Ok(questions("new", 20)));
    let mut driver = driver(source.clone());

    driver.dispatch(Intent::Start);
    settle(&mut driver, Duration::from_millis(10)).await;
    driver.dispatch(Intent::Start);

    wait_for_phase(&mut driver, Phase::InProgress).await;
    settle(&mut driver, Duration::from_secs(10)).await;

    match driver.session().state() {
        SessionState::InProgress(attempt) => {
            assert_eq!(attempt.questions().len(), 20);
            assert!(attempt.questions()[0].id.starts_with("new"));
        }
        other => panic!("expected InProgress, got {:?}", other.phase()),
    }
}

#[tokio::test(start_paused = true)]
async fn test_source_failure_shows_message_until_acknowledged() {
    let source = ScriptedSource::new().reply(
        Duration::from_millis(200),
        Err(SourceError::Status {
            status: 503,
            body: "unavailable".into(),
        }),
    );
    let mut driver = driver(source);

    driver.dispatch(Intent::Start);
    wait_for_phase(&mut driver, Phase::Error).await;

    assert_eq!(
        driver.session().state(),
        &SessionState::Error {
            message: SOURCE_FAILURE_MESSAGE.to_string()
        }
    );

    driver.dispatch(Intent::AcknowledgeError);
    assert_eq!(driver.session().state(), &SessionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_while_loading_drops_the_response() {
    let source = ScriptedSource::new().reply(Duration::from_secs(2), Ok(questions("q", 10)));
    let mut driver = driver(source.clone());

    driver.dispatch(Intent::Start);
    tokio::task::yield_now().await;
    driver.dispatch(Intent::GoHome);
    settle(&mut driver, Duration::from_secs(3)).await;

    assert_eq!(driver.session().state(), &SessionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_selection_advances_after_delay() {
    let source = ScriptedSource::new().reply(Duration::ZERO, Ok(questions("q", 10)));
    let mut driver = driver(source);
    driver.dispatch(Intent::Start);
    wait_for_phase(&mut driver, Phase::InProgress).await;

    driver.dispatch(Intent::SelectOption(0));
    settle(&mut driver, Duration::from_millis(250)).await;
    assert_eq!(current_index(&driver), 0);

    settle(&mut driver, Duration::from_millis(100)).await;
    assert_eq!(current_index(&driver), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_restarts_the_delay() {
    let source = ScriptedSource::new().reply(Duration::ZERO, Ok(questions("q", 10)));
    let mut driver = driver(source);
    driver.dispatch(Intent::Start);
    wait_for_phase(&mut driver, Phase::InProgress).await;

    driver.dispatch(Intent::SelectOption(1));
    settle(&mut driver, Duration::from_millis(200)).await;
    driver.dispatch(Intent::SelectOption(2));
    settle(&mut driver, Duration::from_millis(200)).await;

    assert_eq!(current_index(&driver), 0);

    settle(&mut driver, Duration::from_millis(150)).await;
    assert_eq!(current_index(&driver), 1);

    match driver.session().state() {
        SessionState::InProgress(attempt) => {
            assert_eq!(attempt.answers().len(), 1);
            assert_eq!(
                attempt.answers().selection_for("q-0"),
                Selection::try_from(2).ok()
            );
        }
        other => panic!("expected InProgress, got {:?}", other.phase()),
    }
}

#[tokio::test(start_paused = true)]
async fn test_clock_pauses_while_confirming() {
    let source = ScriptedSource::new().reply(Duration::ZERO, Ok(questions("q", 10)));
    let mut driver = driver(source);
    driver.dispatch(Intent::Start);
    wait_for_phase(&mut driver, Phase::InProgress).await;

    settle(&mut driver, Duration::from_millis(3500)).await;
    assert_eq!(elapsed(&driver), 3);

    driver.dispatch(Intent::RequestSubmit);
    settle(&mut driver, Duration::from_secs(10)).await;
    assert_eq!(elapsed(&driver), 3);

    driver.dispatch(Intent::CancelSubmit);
    settle(&mut driver, Duration::from_millis(1500)).await;
    assert_eq!(elapsed(&driver), 4);
}

#[tokio::test(start_paused = true)]
async fn test_full_attempt_then_retry() {
    let source = ScriptedSource::new()
        .reply(Duration::from_millis(500), Ok(questions("first", 10)))
        .reply(Duration::from_millis(500), Ok(questions("second", 10)));
    let mut driver = driver(source.clone());

    driver.dispatch(Intent::Start);
    wait_for_phase(&mut driver, Phase::InProgress).await;

    // Correct on 0-5, wrong on 6-7, explicit skip on 8, nothing on 9.
    for i in 0..9 {
        let choice = match i {
            0..=5 => i % 4,
            6 | 7 => (i + 1) % 4,
            _ => 4,
        };
        driver.dispatch(Intent::SelectOption(choice));
        settle(&mut driver, Duration::from_millis(350)).await;
    }
    assert_eq!(current_index(&driver), 9);

    settle(&mut driver, Duration::from_secs(2)).await;
    driver.dispatch(Intent::RequestSubmit);
    driver.dispatch(Intent::ConfirmSubmit);

    match driver.session().state() {
        SessionState::Results(completed) => {
            let result = &completed.result;
            assert_eq!(result.correct_count, 6);
            assert_eq!(result.wrong_count, 2);
            assert_eq!(result.skip_count, 2);
            assert_eq!(result.score, 10.67);
            assert_eq!(result.negative_marks, 1.33);
            assert_eq!(result.total, 20.0);
            assert_eq!(result.accuracy, 75);
            assert!(completed.elapsed >= 4);
        }
        other => panic!("expected Results, got {:?}", other.phase()),
    }

    driver.dispatch(Intent::Retry);
    assert_eq!(driver.session().state().phase(), Phase::Loading);
    wait_for_phase(&mut driver, Phase::InProgress).await;

    assert_eq!(source.calls(), 2);
    assert_eq!(elapsed(&driver), 0);
    assert_eq!(current_index(&driver), 0);
    match driver.session().state() {
        SessionState::InProgress(attempt) => {
            assert!(attempt.answers().is_empty());
            assert!(attempt.questions()[0].id.starts_with("second"));
        }
        other => panic!("expected InProgress, got {:?}", other.phase()),
    }
}
