// Fri Oct 16 2026 - Alex

use algo_runner::ui::cli;
use colored::Colorize;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
