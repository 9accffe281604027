/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for aufbau-rs

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = aufbau_rs::cli::Cli::parse();
    aufbau_rs::cli::run(&cli)
}
