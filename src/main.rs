/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use clap::Parser;
use colored::Colorize;

mod commands;
mod error;
mod utils;

use utils::git::GitCli;
use utils::prompt::CheckboxSelector;

#[derive(Parser)]
#[command(name = "cherry-pickaboo")]
#[command(about = "Interactively cherry-pick commits from one branch onto another")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: commands::pick::Args,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let git = GitCli::new(".");

    if let Err(err) = commands::pick::command(cli.args, &git, &CheckboxSelector) {
        eprintln!("{} {}", "💥 Error:".red(), err);
        std::process::exit(1);
    }
}
