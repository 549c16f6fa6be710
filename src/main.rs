//! Red-Blue Nim
//!
//! Opens the game window, or plays in the terminal with `--console`.

use anyhow::Result;
use clap::Parser;
use nim::cli::Cli;
use nim::ui::NimApp;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.match_config()?;

    if cli.console {
        let stdin = std::io::stdin();
        nim::console::run(&config, stdin.lock(), std::io::stdout())?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 560.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Red-Blue Nim"),
        ..Default::default()
    };

    eframe::run_native(
        "Red-Blue Nim",
        options,
        Box::new(move |cc| Ok(Box::new(NimApp::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the game window: {err}"))
}
