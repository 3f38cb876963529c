//! Terminal checkers.
//!
//! Squares are typed as `x,y`. Typing a square presses on it: the first
//! press picks a piece up, the next one moves it there. Capture chains keep
//! the piece in hand until the last hop.

mod command;
mod render;

use checkers_core::Coord;
use checkers_view::{Hand, InputController, PixelPos, ViewConfig};
use clap::Parser;
use command::Command;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Play English draughts in the terminal.
#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Play English draughts in the terminal")]
struct Args {
    /// Board size in pixels used for pointer geometry
    #[arg(long, default_value = "480")]
    board_size: u32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

const HELP: &str = "\
Type a square as `x,y` to pick up a piece, then another to move it there.
  cancel   put the held piece back
  reset    start a new game
  quit     leave";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ViewConfig::with_board_size(args.board_size)?;
    tracing::info!(board_size = config.board_size, "starting game");
    let mut ctl = InputController::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_state(&mut stdout, &ctl)?;

    for line in stdin.lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            Ok(Command::Reset) => ctl.reset(),
            Ok(Command::Cancel) => press(&mut ctl, PixelPos::new(-1, -1)),
            Ok(Command::Square(coord)) => press_square(&mut ctl, coord),
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        }

        print_state(&mut stdout, &ctl)?;
        if ctl.game().is_game_over() {
            break;
        }
    }

    Ok(())
}

fn press_square(ctl: &mut InputController, coord: Coord) {
    let at = ctl.geometry().center_of(coord);
    ctl.pointer_moved(at);
    press(ctl, at);
}

/// Presses at `at` and lets any snap animation finish.
fn press(ctl: &mut InputController, at: PixelPos) {
    ctl.pointer_down(at);
    while matches!(ctl.hand(), Hand::Snapping { .. }) {
        ctl.update();
    }
}

fn print_state(out: &mut impl Write, ctl: &InputController) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", render::board(ctl))?;
    if let Some(err) = ctl.rejected() {
        writeln!(out, "Not allowed: {}", err)?;
    }
    writeln!(out, "{}", render::status(ctl))?;
    out.flush()
}
