mod cli;
mod commands;
mod ico;
mod img;
mod png;

use clap::Parser;

fn main() {
    cli::Cli::parse().run();
}
