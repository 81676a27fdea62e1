/*
 * SPDX-FileCopyrightText: 2025 2025 Chen Linxuan <me@black-desk.cn>
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

use crate::utils::git::GitError;

/// Failures that abort a run. Soft outcomes (nothing to pick, nothing
/// selected) are not errors and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("{role} branch \"{name}\" not found")]
    BranchNotFound { role: &'static str, name: String },

    #[error("conflict while cherry-picking {hash}, please resolve manually")]
    CherryPickConflict { hash: String },

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
