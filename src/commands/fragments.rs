// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Fragments command - splits a sector name into phoneme fragments

use anyhow::{anyhow, Result};
use tracing::info;

use crate::names;
use crate::tables::NameTables;

/// Run the fragments command
pub fn run(name: &str, allow_long: bool, json: bool) -> Result<()> {
    info!("Splitting '{}'", name);

    let tables = NameTables::new();
    let frags = names::get_sector_fragments(&tables, name, allow_long)
        .ok_or_else(|| anyhow!("'{}' does not split into known fragments", name))?;
    let valid = names::is_valid_sector_name(&tables, name);
    let class = names::get_sector_class(&tables, name);

    if json {
        let out = serde_json::json!({
            "name": names::format_sector_name(&tables, &frags),
            "fragments": frags,
            "valid": valid,
            "class": class,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Fragments: {}", frags.join(" | "));
        println!("Canonical: {}", names::format_sector_name(&tables, &frags));
        match class {
            Some(c) => println!("Class: {c}"),
            None => println!("Class: (not a procedural sector)"),
        }
        println!("Valid: {}", if valid { "yes" } else { "no" });
    }

    Ok(())
}
