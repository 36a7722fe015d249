// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! System command - resolves a system name to coordinates

use anyhow::{anyhow, Result};
use tracing::info;

use crate::names;
use crate::tables::NameTables;

/// Run the system command
pub fn run(name: &str, allow_ha: bool, json: bool) -> Result<()> {
    info!("Resolving system '{}'", name);

    let tables = NameTables::new();
    let system = names::get_system_from_name(&tables, name, allow_ha)
        .ok_or_else(|| anyhow!("'{}' is not a valid procedural system name", name))?;

    if json {
        let out = serde_json::json!({
            "name": system.name,
            "position": system.position,
            "uncertainty": system.uncertainty,
            "sector": {
                "name": system.sector.name(),
                "class": system.sector.class(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("System: {}", system.name);
        println!(
            "Position: ({:.2}, {:.2}, {:.2}) +/- {:.0} ly per axis",
            system.position.x, system.position.y, system.position.z, system.uncertainty
        );
        println!(
            "Sector: {} (class {})",
            system.sector.name().unwrap_or("(unnamed)"),
            system.sector.class()
        );
    }

    Ok(())
}
