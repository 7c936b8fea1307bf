mod app;
mod ui;

use std::fs::File;
use std::time::Duration;

use fretboard_core::config::Config;
use fretboard_core::trainer::Trainer;

use app::App;
use ui::{FretboardView, RatatuiBackend};

fn init_logging(verbose: bool) {
    use simplelog::{LevelFilter, WriteLogger};

    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("fretboard")
        .join("fretboard.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = match File::create(&log_path)
        .or_else(|_| File::create(std::env::temp_dir().join("fretboard.log")))
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("fretboard: logging disabled, cannot create log file: {}", e);
            return;
        }
    };

    if let Err(e) = WriteLogger::init(log_level, simplelog::Config::default(), log_file) {
        eprintln!("fretboard: failed to initialize logger: {}", e);
        return;
    }

    log::info!("fretboard starting (log level: {:?})", log_level);
}

fn main() -> std::io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    let config = Config::load();
    let mut app = App::new(Trainer::from_config(&config));

    let mut backend = RatatuiBackend::new()?;
    ui::install_panic_hook();
    ui::with_session(&mut backend, |backend| run(backend, &mut app))
}

fn run(backend: &mut RatatuiBackend, app: &mut App) -> std::io::Result<()> {
    let mut view = rebuild_view(app);
    loop {
        backend.draw(|frame| ui::render(frame, app, &view))?;

        if let Some(key) = backend.poll_key(Duration::from_millis(250))? {
            let before = app.trainer.state().clone();
            app.handle_key(key);
            if app.quit {
                log::info!("fretboard exiting");
                return Ok(());
            }
            // Any selection change makes the cached view stale
            if *app.trainer.state() != before {
                view = rebuild_view(app);
            }
        }
    }
}

fn rebuild_view(app: &mut App) -> FretboardView {
    let view = FretboardView::build(&app.trainer);
    for err in &view.errors {
        log::error!("fretboard query failed: {}", err);
    }
    if let Some(err) = view.errors.first() {
        app.set_error(err.to_string());
    }
    view
}
