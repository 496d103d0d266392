use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use studbud_service::{
    BlockingPlanRequester, GeminiGenerator, GenerationConfig, PlanRequester, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
use studbud_tui::app::App;
use tracing::info;

#[derive(Parser)]
#[command(name = "studbud", about = "Studbud study planner: terminal form")]
struct Args {
    /// API key for the Google Generative Language API
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model used for every plan
    #[arg(long, env = "STUDBUD_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the generation API
    #[arg(long, env = "STUDBUD_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Directory the plan is saved into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Append logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.api_key.clone(), &self.model, &self.api_base_url)
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_file_logging(path)?;
    }

    let generation = args.generation_config();
    info!("model: {}", generation.model);
    let requester = PlanRequester::new(Arc::new(GeminiGenerator::new(generation)));
    let requester =
        BlockingPlanRequester::new(requester).context("failed to start async runtime")?;

    run_tui(App::new(requester, args.output_dir))
}

fn init_file_logging(path: &std::path::Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // The "Generating" popup is on screen; now make the blocking call.
        if app.is_generating() {
            app.finish_generation();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
            if app.should_quit {
                break;
            }
        }
    }

    Ok(())
}
