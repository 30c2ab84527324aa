use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::io::{stderr, stdout};

use connect4_match::game::{Game, RenderStyle};
use connect4_match::input::ConsoleInput;

#[derive(Parser)]
#[command(name = "connect4", about = "Two-player Connect 4 in the terminal")]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,

    /// Draw the board without colours
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // diagnostics go to stderr, the game itself owns stdout
    let filter = EnvFilter::builder()
        .with_default_directive(args.log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(stderr)
        .with_env_filter(filter)
        .init();

    let style = if args.no_color {
        RenderStyle::Plain
    } else {
        RenderStyle::Colored
    };

    let mut game = Game::setup(ConsoleInput::stdio(), stdout())?.with_style(style);
    game.launch()
}
