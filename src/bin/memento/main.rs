mod cli;
mod commands;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::Result;
use chrono::{Local, Utc};
use clap::Parser;
use memento::{FixedClock, SystemClock};

use crate::cli::{Cli, Command};
use crate::config::MementoConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = MementoConfig::load(cli.config.as_deref())?;

    // An explicit --now keeps its own offset; otherwise the local zone applies.
    match cli.command {
        Command::Grid(args) => match args.now {
            Some(now) => commands::grid(&config, &args, &now),
            None => commands::grid(&config, &args, &Local::now()),
        },
        Command::Stats(args) => match args.view.now {
            Some(now) => commands::stats(&config, &args, &now),
            None => commands::stats(&config, &args, &Local::now()),
        },
        Command::Day(args) => match args.view.now {
            Some(now) => commands::day(&config, &args, &now),
            None => commands::day(&config, &args, &Local::now()),
        },
        // A fixed --now also stands in for the device clock when measuring drift.
        Command::Clock(args) => match args.now {
            Some(now) => Ok(commands::clock(
                &args,
                &now,
                &FixedClock(now.with_timezone(&Utc)),
            )),
            None => Ok(commands::clock(&args, &Local::now(), &SystemClock)),
        },
    }
}
