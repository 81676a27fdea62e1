/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use std::path::PathBuf;
use std::process::{Command, Output};

use log::debug;

/// Field separator used in the `git log` format string. Commit subjects
/// cannot contain control characters, so this is safe to split on.
const LOG_FIELD_SEP: char = '\u{1f}';
const LOG_FORMAT: &str = "--format=%H\u{1f}%s\u{1f}%an\u{1f}%ad";
const LOG_DATE: &str = "--date=format:%Y-%m-%d %H:%M";

/// A commit as reported by `git log`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// Full SHA of the commit
    pub hash: String,
    /// Commit subject line
    pub message: String,
    /// Author name
    pub author: String,
    /// Author date, already formatted for display
    pub date: String,
}

impl Commit {
    /// Short hash used in labels and progress output
    pub fn short_hash(&self) -> &str {
        if self.hash.len() >= 7 {
            &self.hash[..7]
        } else {
            &self.hash
        }
    }
}

/// Result of a single cherry-pick invocation. A conflict is an expected
/// outcome, distinct from the git layer failing altogether.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CherryPickOutcome {
    Applied,
    Conflict,
}

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git is not installed or not in PATH")]
    GitNotInstalled,

    #[error("git {cmd} failed: {stderr}")]
    CommandFailed { cmd: String, stderr: String },

    #[error("unexpected git log output: {0}")]
    MalformedLog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The primitive capabilities this tool needs from the version-control
/// engine, kept behind a trait so commands can be tested with a double.
pub trait Vcs {
    /// Synchronize remote-tracking refs (`git fetch`)
    fn fetch(&self) -> Result<(), GitError>;

    /// All known branch names, local and remote-tracking
    fn branches(&self) -> Result<Vec<String>, GitError>;

    /// Commits reachable from `to` but not from `from`, newest first
    fn log_range(&self, from: &str, to: &str) -> Result<Vec<Commit>, GitError>;

    /// Full history reachable from `reference`, newest first
    fn log_all(&self, reference: &str) -> Result<Vec<Commit>, GitError>;

    /// Check out a named branch
    fn checkout(&self, branch: &str) -> Result<(), GitError>;

    /// Cherry-pick a single commit, optionally staging without committing
    fn cherry_pick(&self, hash: &str, no_commit: bool) -> Result<CherryPickOutcome, GitError>;
}

/// Vcs implementation that shells out to the `git` binary.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Spawn `git -C <workdir> <args>` and wait for it to finish
    fn output(&self, args: &[&str]) -> Result<Output, GitError> {
        debug!("running git -C {} {}", self.workdir.display(), args.join(" "));

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::GitNotInstalled
                } else {
                    GitError::Io(e)
                }
            })?;

        Ok(output)
    }

    /// Run a git command where a non-zero exit is an error, returning stdout
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.output(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed {
                cmd: args.first().copied().unwrap_or("git").to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn log(&self, spec: &str) -> Result<Vec<Commit>, GitError> {
        let stdout = self.run(&["log", LOG_FORMAT, LOG_DATE, spec])?;

        let mut commits = Vec::new();
        for line in stdout.lines() {
            if line.trim().is_empty() {
                continue;
            }
            commits.push(parse_log_line(line)?);
        }

        Ok(commits)
    }
}

impl Vcs for GitCli {
    fn fetch(&self) -> Result<(), GitError> {
        self.run(&["fetch"])?;
        Ok(())
    }

    fn branches(&self) -> Result<Vec<String>, GitError> {
        let stdout = self.run(&["branch", "--all", "--format=%(refname:short)"])?;

        let branches = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(branches)
    }

    fn log_range(&self, from: &str, to: &str) -> Result<Vec<Commit>, GitError> {
        self.log(&format!("{}..{}", from, to))
    }

    fn log_all(&self, reference: &str) -> Result<Vec<Commit>, GitError> {
        self.log(reference)
    }

    fn checkout(&self, branch: &str) -> Result<(), GitError> {
        self.run(&["checkout", branch])?;
        Ok(())
    }

    fn cherry_pick(&self, hash: &str, no_commit: bool) -> Result<CherryPickOutcome, GitError> {
        let mut args = vec!["cherry-pick"];
        if no_commit {
            args.push("--no-commit");
        }
        args.push(hash);

        let output = self.output(&args)?;

        if output.status.success() {
            Ok(CherryPickOutcome::Applied)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("cherry-pick {} failed: {}", hash, stderr.trim());
            Ok(CherryPickOutcome::Conflict)
        }
    }
}

fn parse_log_line(line: &str) -> Result<Commit, GitError> {
    let mut fields = line.splitn(4, LOG_FIELD_SEP);

    match (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) {
        (Some(hash), Some(message), Some(author), Some(date)) => Ok(Commit {
            hash: hash.to_string(),
            message: message.to_string(),
            author: author.to_string(),
            date: date.to_string(),
        }),
        _ => Err(GitError::MalformedLog(line.to_string())),
    }
}
