/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use colored::Colorize;
use log::debug;

use crate::error::PickError;
use crate::utils::git::{CherryPickOutcome, Commit, Vcs};
use crate::utils::prompt::{CommitChoice, CommitSelector};

#[derive(clap::Args)]
pub struct Args {
    /// Branch to pick commits from
    pub source: String,

    /// Branch the picked commits are applied onto
    pub dest: String,

    /// Case-insensitive keyword matched against commit message, author and
    /// hash. Widens the candidate set to the full source history instead of
    /// the source-minus-destination range.
    pub keyword: Option<String>,

    /// Stage each picked commit without creating a commit
    #[arg(long = "no-commit")]
    pub no_commit: bool,
}

/// Handle the pick run: validate branches, build the candidate commit set,
/// let the user select, then cherry-pick the selection onto the destination.
pub fn command(
    args: Args,
    vcs: &dyn Vcs,
    selector: &dyn CommitSelector,
) -> Result<(), PickError> {
    // Fetch first so the branch-existence check sees up-to-date remote refs
    vcs.fetch()?;

    let branches = vcs.branches()?;
    for (role, name) in [("Source", &args.source), ("Destination", &args.dest)] {
        if !branches.iter().any(|b| b == name) {
            return Err(PickError::BranchNotFound {
                role,
                name: name.clone(),
            });
        }
    }

    let commits = match &args.keyword {
        Some(keyword) => filter_commits(vcs.log_all(&args.source)?, keyword),
        None => vcs.log_range(&args.dest, &args.source)?,
    };
    debug!("{} candidate commits", commits.len());

    if commits.is_empty() {
        println!(
            "✨ No commits to cherry-pick from {} to {}",
            args.source.cyan(),
            args.dest.cyan()
        );
        return Ok(());
    }

    let choices: Vec<CommitChoice> = commits
        .iter()
        .map(|c| CommitChoice::new(c, args.keyword.is_none()))
        .collect();

    let selected = selector.select_commits(&args.dest, &choices)?;
    if selected.is_empty() {
        println!("{}", "⚠️ No commits selected. Exiting.".yellow());
        return Ok(());
    }
    debug!("{} commits selected", selected.len());

    apply_selection(vcs, &args.dest, selected, args.no_commit)
}

/// Apply the selected commits onto `dest`. The selection arrives in display
/// order (newest first) and is reversed so that history replays oldest first.
/// The first conflict halts the batch; already-applied commits and the
/// checkout are left as-is for manual resolution.
fn apply_selection(
    vcs: &dyn Vcs,
    dest: &str,
    mut selection: Vec<String>,
    no_commit: bool,
) -> Result<(), PickError> {
    println!("\n📦 Switching to branch {}...", dest.magenta());
    vcs.checkout(dest)?;

    selection.reverse();
    for hash in &selection {
        println!("🍒 Cherry-picking {}...", short(hash).yellow());
        match vcs.cherry_pick(hash, no_commit)? {
            CherryPickOutcome::Applied => {}
            CherryPickOutcome::Conflict => {
                return Err(PickError::CherryPickConflict { hash: hash.clone() });
            }
        }
    }

    println!(
        "\n🎉 Success! Selected commits were cherry-picked into {} 🚀",
        dest.magenta()
    );
    Ok(())
}

/// Case-insensitive substring match over message, author and hash.
fn filter_commits(commits: Vec<Commit>, keyword: &str) -> Vec<Commit> {
    let needle = keyword.to_lowercase();
    commits
        .into_iter()
        .filter(|c| {
            c.message.to_lowercase().contains(&needle)
                || c.author.to_lowercase().contains(&needle)
                || c.hash.to_lowercase().contains(&needle)
        })
        .collect()
}

fn short(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}
