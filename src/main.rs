mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::Cli;

fn main() {
    // Pick up MONGODB_* variables from a local .env if present
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    if let Err(e) = cli::commands::report::execute(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
