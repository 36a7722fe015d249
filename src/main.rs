// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Pgnames CLI - procedural star-system name/coordinate codec

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use pgnames::commands;

#[derive(Parser)]
#[command(name = "pgnames")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Output in JSON format
    #[arg(long, env = "PGNAMES_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a system name to coordinates and uncertainty
    System {
        /// Full procedural system name, e.g. "Wregoe AC-D d12-0"
        name: String,

        /// Ignore hand-authored regions and resolve procedurally
        #[arg(long)]
        no_ha: bool,
    },

    /// Derive the boxel prototype name for a position
    Locate {
        /// Position as "x,y,z" in light years
        position: String,

        /// Mass code of the boxel size to use (a-h)
        #[arg(short, long, default_value = "d")]
        mcode: char,

        /// Ignore hand-authored regions and resolve procedurally
        #[arg(long)]
        no_ha: bool,
    },

    /// Resolve a sector by name or by a contained position
    Sector {
        /// Sector name (omit when using --at)
        name: Option<String>,

        /// Position as "x,y,z" to resolve instead of a name
        #[arg(long)]
        at: Option<String>,

        /// Ignore hand-authored regions and resolve procedurally
        #[arg(long)]
        no_ha: bool,
    },

    /// Decode an id64 (decimal or hex) into coordinates and indices
    Id64 {
        /// The id64 value
        value: String,
    },

    /// Encode a system name or position into its id64
    Encode {
        /// Full procedural system name (omit when using --at)
        name: Option<String>,

        /// Position as "x,y,z" to encode directly
        #[arg(long)]
        at: Option<String>,

        /// Mass code for --at (a-h)
        #[arg(short, long, default_value = "d")]
        mcode: char,

        /// System run index within the boxel, for --at
        #[arg(long, default_value_t = 0)]
        n2: u64,

        /// Body id (0 = the system itself), for --at
        #[arg(long, default_value_t = 0)]
        body: u64,
    },

    /// Split a sector name into its phoneme fragments
    Fragments {
        /// Sector name
        name: String,

        /// Allow names longer than four fragments
        #[arg(long)]
        allow_long: bool,
    },

    /// List hand-authored regions
    Regions {
        /// Order by distance from this "x,y,z" position
        #[arg(long)]
        near: Option<String>,

        /// Only regions within this distance of --near, in light years
        #[arg(long)]
        max_distance: Option<f64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr; stdout is reserved for command output so that
    // --json stays machine-parseable
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::System { name, no_ha } => commands::system::run(&name, !no_ha, cli.json),
        Commands::Locate {
            position,
            mcode,
            no_ha,
        } => commands::locate::run(&position, mcode, !no_ha, cli.json),
        Commands::Sector { name, at, no_ha } => {
            commands::sector::run(name.as_deref(), at.as_deref(), !no_ha, cli.json)
        }
        Commands::Id64 { value } => commands::id64::run(&value, cli.json),
        Commands::Encode {
            name,
            at,
            mcode,
            n2,
            body,
        } => commands::encode::run(name.as_deref(), at.as_deref(), mcode, n2, body, cli.json),
        Commands::Fragments { name, allow_long } => {
            commands::fragments::run(&name, allow_long, cli.json)
        }
        Commands::Regions { near, max_distance } => {
            commands::regions::run(near.as_deref(), max_distance, cli.json)
        }
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
