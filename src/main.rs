mod app;
mod cli;
mod clipboard;
mod color;
mod contrast;
mod event;
mod layout;
mod palette;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let mut app = app::App::new(&cli_opts.seed, Box::new(clipboard::Osc52Clipboard));
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
