mod app;
mod data;
mod error;
mod state;
mod ui;

use std::process::ExitCode;

use app::WaveViewerApp;
use clap::Parser;
use eframe::egui;
use error::FatalError;

/// Display a raw binary file as an amplitude-vs-sample line plot.
///
/// Every byte of the file is interpreted as one unsigned 8-bit sample.
#[derive(Parser)]
#[command(name = "waveview")]
struct Cli {
    /// File to interpret as raw unsigned 8-bit samples.
    ///
    /// Hyphen-leading names are taken as filenames, not flags, and extra
    /// arguments are ignored; only the first file is displayed.
    #[arg(allow_hyphen_values = true)]
    file: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // The filename is kept exactly as passed: the plot title must be
    // "Wave: " + the literal argument, with no path normalization.
    let filename = match cli.file.into_iter().next() {
        Some(f) => f,
        None => {
            println!("{}", FatalError::MissingArgument);
            return ExitCode::FAILURE;
        }
    };

    let buffer = match data::loader::load_file(&filename) {
        Ok(buffer) => buffer,
        Err(e) => {
            log::error!("failed to load {filename}: {e:#}");
            println!("{}", FatalError::FileReadFailure);
            return ExitCode::FAILURE;
        }
    };

    log::info!("loaded {} samples from {filename}", buffer.len());

    let title = buffer.title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the user closes the window.
    match eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(WaveViewerApp::with_buffer(buffer)))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("display failed: {e}");
            ExitCode::FAILURE
        }
    }
}
