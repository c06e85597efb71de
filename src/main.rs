use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::{backend::CrosstermBackend, Terminal};

use chantier_backoffice::config::{self, Config};
use chantier_backoffice::data::DataSet;
use chantier_backoffice::summary;
use chantier_backoffice::ui::{self, App};

#[derive(Parser)]
#[command(name = "chantier-backoffice", about = "Back office for a construction business")]
struct Cli {
    /// JSON data set to use instead of the demo records
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Rows in the dashboard's recent tables
    #[arg(long, global = true)]
    recent: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal dashboard (default)
    Tui,
    /// Print the dashboard figures and exit
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, command line flags win over the environment
    let config = config::init()
        .and_then(|config| config.with_overrides(cli.data, cli.recent))
        .context("failed to load configuration")?;

    init_tracing(&config.log_file)?;
    info!(?config, "Configuration loaded");

    let data = load_data(&config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Summary => {
            let stdout = io::stdout();
            summary::write_summary(&mut stdout.lock(), &data)?;
        }
        Commands::Tui => run_tui(&data, config.recent_limit)?,
    }

    Ok(())
}

fn init_tracing(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn load_data(config: &Config) -> Result<DataSet> {
    match &config.data_file {
        Some(path) => DataSet::from_path(path)
            .with_context(|| format!("failed to load data set from {}", path.display())),
        None => {
            warn!("No data file configured, using demo records");
            Ok(DataSet::demo()?)
        }
    }
}

fn run_tui(data: &DataSet, recent_limit: usize) -> Result<()> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(data, recent_limit);
    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
