//! Runtime that drives the reducer.
//!
//! [`NotesController`] owns the [`AppState`] and the [`WorkerHandle`]. Each
//! event goes through [`handle_event`]; the returned actions are executed right
//! away, which for storage requests means posting them to the worker. Worker
//! completions are fed back in as [`Event::Worker`].

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::worker::{WorkerHandle, WorkerResponse};

/// Couples application state with the storage worker.
#[derive(Debug)]
pub struct NotesController {
    state: AppState,
    worker: WorkerHandle,
    in_flight: usize,
    quit: bool,
}

impl NotesController {
    #[must_use]
    pub const fn new(state: AppState, worker: WorkerHandle) -> Self {
        Self {
            state,
            worker,
            in_flight: 0,
            quit: false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether an executed action asked to leave.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Requests posted to the worker and not yet answered.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Runs one event through the reducer and executes the resulting actions.
    ///
    /// Returns whether the frame needs redrawing.
    ///
    /// # Errors
    ///
    /// Returns [`NotesError::Worker`](crate::NotesError::Worker) if the storage
    /// worker has stopped.
    pub fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let (should_render, actions) = handle_event(&mut self.state, event);

        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        for action in actions {
            self.execute_action(action)?;
        }

        Ok(should_render)
    }

    fn execute_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::PostToWorker(message) => {
                self.worker.post(message)?;
                self.in_flight += 1;
            }
            Action::Quit => {
                tracing::debug!("quit requested");
                self.quit = true;
            }
        }
        Ok(())
    }

    /// Waits for the next worker completion.
    ///
    /// Never resolves while nothing is in flight, so it can sit in a
    /// `select!` next to the terminal event stream. `None` means the worker
    /// has stopped.
    pub async fn next_response(&mut self) -> Option<WorkerResponse> {
        if self.in_flight == 0 {
            return std::future::pending().await;
        }
        let response = self.worker.recv().await;
        if response.is_some() {
            self.in_flight -= 1;
        }
        response
    }

    /// Feeds a completion back through the reducer.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub fn apply_response(&mut self, response: WorkerResponse) -> Result<bool> {
        self.dispatch(&Event::Worker(response))
    }

    /// Processes completions until no request is in flight, including any
    /// follow-up requests they trigger.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`dispatch`](Self::dispatch).
    pub async fn settle(&mut self) -> Result<()> {
        while self.in_flight > 0 {
            let Some(response) = self.worker.recv().await else {
                break;
            };
            self.in_flight -= 1;
            self.apply_response(response)?;
        }
        Ok(())
    }

    /// Renders the current state into a frame.
    #[must_use]
    pub fn render(&self, rows: usize, cols: usize) -> String {
        crate::ui::render(&self.state, rows, cols)
    }
}
