//! git-overlay binary — print a directory listing annotated with git status
//! markers.

use clap::Parser;
use git_overlay::cli::{run, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
