//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain (storage, browser hand-off,
//!   spawning network requests)
//! - Communication happens via channels
//!
//! Actions not consumed by middleware are forwarded to the main thread for
//! the reducer.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

const TICK_RATE: Duration = Duration::from_millis(150);

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create the Dispatcher handed to middleware
/// - `result_tx`: sends non-consumed actions to main thread for reducers
/// - `state`: shared state for middleware to read
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);
    let mut last_tick = Instant::now();

    loop {
        match action_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(action) => {
                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                let is_quit = matches!(action, Action::Global(GlobalAction::Quit));

                let mut should_forward = true;
                for mw in &mut middleware {
                    if !mw.handle(&action, &current_state, &dispatcher) {
                        should_forward = false;
                        break;
                    }
                }

                if should_forward && result_tx.send(action).is_err() {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }

                if is_quit {
                    log::info!("Background worker received shutdown signal");
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        // Ticks drive the spinner; they skip the middleware chain
        if last_tick.elapsed() >= TICK_RATE {
            if result_tx.send(Action::Global(GlobalAction::Tick)).is_err() {
                log::error!("Result channel disconnected during tick");
                break;
            }
            last_tick = Instant::now();
        }
    }

    log::info!("Background worker stopped");
}
