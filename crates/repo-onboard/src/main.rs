use anyhow::Result;
use clap::Parser;
use onboard_client::{
    ask_repository, HttpBackend, LaunchLocation, OnboardingBackend, RepoSubmission,
};
use onboard_config::{AppConfig, ClientStorage, PersistedStorage, StorageScope, SESSION_COOKIE_KEY};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::{mpsc, Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod cli;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod theme;
mod utils;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use cli::{Cli, Command};
use dispatcher::Dispatcher;
use middleware::{
    KeyboardMiddleware, LoggingMiddleware, Middleware, RepoFormMiddleware, SessionMiddleware,
    TranslationMiddleware,
};
use state::AppState;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting repo-onboard (log file {:?})", log_file);

    let config = AppConfig::load()
        .with_base_url_override(cli.base_url.clone())
        .with_location_override(cli.location.clone());
    match &config.base_url {
        Some(base_url) => log::info!("Backend base URL: {}", base_url),
        None => log::warn!("No backend base URL configured, requests will fail"),
    }

    let mut storage = PersistedStorage::open()?;
    if let Some(cookie) = &cli.session_cookie {
        storage.set(StorageScope::Local, SESSION_COOKIE_KEY, cookie)?;
    }
    let session_cookie = storage.get(StorageScope::Local, SESSION_COOKIE_KEY);

    let backend: Arc<dyn OnboardingBackend> = Arc::new(HttpBackend::new(
        config.base_url_or_empty(),
        session_cookie.as_deref(),
    )?);

    if let Some(Command::Query { repo, question }) = cli.command {
        let runtime = tokio::runtime::Runtime::new()?;
        let answer = runtime.block_on(ask_repository(
            backend.as_ref(),
            &repo,
            &question.join(" "),
        ));
        println!("{}", answer);
        return Ok(());
    }

    let location = LaunchLocation::new(&config.location);
    let final_state = run_tui(location, storage, backend)?;

    if let Some(url) = final_state.login_redirect {
        println!("Continue the GitHub login in your browser:\n  {}", url);
    }

    log::info!("Exiting repo-onboard");
    Ok(())
}

fn run_tui(
    location: LaunchLocation,
    storage: PersistedStorage,
    backend: Arc<dyn OnboardingBackend>,
) -> Result<AppState> {
    let submission: Arc<RepoSubmission<dyn OnboardingBackend>> =
        Arc::new(RepoSubmission::new(backend));

    // Middleware runs in this order on the background worker
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TranslationMiddleware::new()),
        Box::new(SessionMiddleware::new(
            location,
            Box::new(storage),
            Arc::clone(&submission),
        )),
        Box::new(RepoFormMiddleware::new(submission)?),
    ];

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, middleware);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Tui, middleware: Vec<Box<dyn Middleware>>) -> Result<AppState> {
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let mut state = AppState::default();
    let shared: SharedState = Arc::new(RwLock::new(state.clone()));

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );
    let dispatcher = Dispatcher::new(action_tx);
    dispatcher.dispatch(Action::Bootstrap(BootstrapAction::Start));

    loop {
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reducer::reduce(state, &action);
            changed = true;
        }

        if changed {
            match shared.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to publish state: {}", e),
            }
        }

        terminal.draw(|frame| views::render(&state, frame.area(), frame))?;

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    dispatcher.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    Ok(state)
}
