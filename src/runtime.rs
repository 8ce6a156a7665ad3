//! Terminal event loop: draws the session, forwards keys as intents and
//! applies driver events between frames.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::app::App;
use crate::driver::Driver;
use crate::errors::ExamResult;
use crate::source::QuestionSource;
use crate::terminal::TerminalGuard;
use crate::ui;

const INPUT_POLL: Duration = Duration::from_millis(50);

pub async fn run<S: QuestionSource + 'static>(mut driver: Driver<S>) -> ExamResult<()> {
    let mut app = App::new(driver.session());
    let mut guard = TerminalGuard::enter()?;

    while !app.should_quit {
        driver.drain();

        guard
            .terminal()
            .draw(|frame| ui::render(frame, &app, driver.session()))?;

        if !event::poll(INPUT_POLL)? {
            // Give spawned fetch and timer tasks a chance on current-thread runtimes.
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(intent) = app.handle_key(driver.session(), key.code) {
                log::debug!("Intent {:?}", intent);
                driver.dispatch(intent);
            }
        }
    }

    log::info!("Exiting");
    Ok(())
}
