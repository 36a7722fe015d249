// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Completions command - generates shell completion scripts

use anyhow::Result;
use clap_complete::{generate, Shell};

/// Run the completions command
pub fn run(shell: Shell, cmd: &mut clap::Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, &mut std::io::stdout());
    Ok(())
}
