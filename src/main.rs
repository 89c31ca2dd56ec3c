use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod controller;
mod dataset;
mod domain;
mod inputter;
mod model;
mod ui;

use controller::Controller;
use domain::{PDConfig, PDError};
use model::{Model, Status};
use ui::TableUI;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Write a debug log to this file (the terminal belongs to the UI)
    #[arg(long)]
    log: Option<String>,

    /// Log filter, e.g. "debug" or "pdash=trace"
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Event poll timeout in milliseconds
    #[arg(long, default_value_t = 100)]
    poll: u64,
}

fn main() -> ExitCode {
    match run() {
        Err(e) => {
            ratatui::restore();
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
        Ok(_) => {
            ratatui::restore();
            ExitCode::SUCCESS
        }
    }
}

fn run() -> Result<(), PDError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let cfg = PDConfig::default().event_poll_time(cli.poll);

    let mut model = Model::new(dataset::seed());
    let mut ui = TableUI::new(&cfg);
    let controller = Controller::new(&cfg);

    info!("Starting pdash!");
    let mut terminal = ratatui::init();

    while model.status != Status::QUITTING {
        // Render the current view
        terminal.draw(|f| ui.draw(&model, f))?;

        // Handle events and map to a Message
        if let Some(message) = controller.handle_event(&model)? {
            model.update(message)?;
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), PDError> {
    let Some(path) = &cli.log else {
        return Ok(());
    };
    let path = shellexpand::full(path)
        .map_err(|e| PDError::LogSetup(e.to_string()))?
        .into_owned();
    let file = std::fs::File::create(&path)?;
    let filter =
        EnvFilter::try_new(&cli.log_level).map_err(|e| PDError::LogSetup(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .with(ErrorLayer::default())
        .init();
    Ok(())
}
