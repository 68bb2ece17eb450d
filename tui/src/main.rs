mod args;
mod config;
mod tui;

use std::process;

fn main() {
    let args = args::Args::parse();
    if let Err(e) = tui::run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
