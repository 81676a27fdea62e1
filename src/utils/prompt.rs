/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;

use crate::utils::git::Commit;

const PAGE_SIZE: usize = 15;

/// A commit projected into a prompt entry. The label is presentation only;
/// the hash is the value carried through selection.
pub struct CommitChoice {
    pub label: String,
    pub hash: String,
}

impl CommitChoice {
    /// Build a choice label from a commit. The date is shown only when the
    /// commit came from the branch-diff range; keyword searches over full
    /// history leave it out.
    pub fn new(commit: &Commit, with_date: bool) -> Self {
        let mut label = format!(
            "{} - {}",
            commit.short_hash().yellow(),
            commit.message
        );
        if with_date {
            label.push_str(&format!(" {}", format!("({})", commit.date).bright_black()));
        }
        label.push_str(&format!(" {}", format!("({})", commit.author).bright_black()));

        Self {
            label,
            hash: commit.hash.clone(),
        }
    }
}

/// Interactive selection boundary, kept behind a trait so tests can supply
/// a fixed selection without a terminal.
pub trait CommitSelector {
    /// Present the choices and return the chosen hashes in the order they
    /// were displayed. An empty result means the user selected nothing.
    fn select_commits(
        &self,
        dest: &str,
        choices: &[CommitChoice],
    ) -> std::io::Result<Vec<String>>;
}

/// Checkbox prompt backed by dialoguer.
pub struct CheckboxSelector;

impl CommitSelector for CheckboxSelector {
    fn select_commits(
        &self,
        dest: &str,
        choices: &[CommitChoice],
    ) -> std::io::Result<Vec<String>> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "📋 Select commits to cherry-pick into {}",
                dest.magenta()
            ))
            .items(&labels)
            .max_length(PAGE_SIZE)
            .interact()
            .map_err(std::io::Error::other)?;

        Ok(picked
            .into_iter()
            .map(|index| choices[index].hash.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit() -> Commit {
        Commit {
            hash: "0123456789abcdef0123456789abcdef01234567".to_string(),
            message: "add a".to_string(),
            author: "Dev".to_string(),
            date: "2025-01-02 03:04".to_string(),
        }
    }

    #[test]
    fn label_includes_date_in_default_mode() {
        colored::control::set_override(false);

        let choice = CommitChoice::new(&commit(), true);
        assert_eq!(choice.label, "0123456 - add a (2025-01-02 03:04) (Dev)");
        assert_eq!(choice.hash, "0123456789abcdef0123456789abcdef01234567");
    }

    #[test]
    fn label_omits_date_in_keyword_mode() {
        colored::control::set_override(false);

        let choice = CommitChoice::new(&commit(), false);
        assert_eq!(choice.label, "0123456 - add a (Dev)");
    }
}
