// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Sector command - resolves a sector by name or by position

use anyhow::{anyhow, bail, Result};
use tracing::info;

use super::parse_position;
use crate::names;
use crate::sector::Sector;
use crate::tables::NameTables;

/// Run the sector command
pub fn run(name: Option<&str>, at: Option<&str>, allow_ha: bool, json: bool) -> Result<()> {
    let tables = NameTables::new();

    let sector = match (name, at) {
        (Some(name), None) => {
            info!("Resolving sector '{}'", name);
            names::get_sector_by_name(&tables, name, allow_ha)
                .ok_or_else(|| anyhow!("'{}' is not a known sector name", name))?
        }
        (None, Some(at)) => {
            let pos = parse_position(at)?;
            info!("Resolving sector containing {}", pos);
            names::get_sector(&tables, pos, allow_ha)
                .ok_or_else(|| anyhow!("position {} is outside the galaxy grid", pos))?
        }
        (Some(_), Some(_)) => bail!("give either a sector name or --at, not both"),
        (None, None) => bail!("give a sector name or --at \"x,y,z\""),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sector)?);
    } else {
        match &sector {
            Sector::Pg(s) => {
                println!(
                    "Sector: {} (class {})",
                    s.name.as_deref().unwrap_or("(beyond naming range)"),
                    s.class
                );
                println!("Index: [{}, {}, {}]", s.index[0], s.index[1], s.index[2]);
                let c = s.centre();
                println!("Centre: ({:.0}, {:.0}, {:.0})", c.x, c.y, c.z);
            }
            Sector::Ha(r) => {
                println!("Region: {} (hand-authored)", r.name);
                println!(
                    "Centre: ({:.2}, {:.2}, {:.2}), radius {} ly",
                    r.centre.x, r.centre.y, r.centre.z, r.radius
                );
            }
        }
    }

    Ok(())
}
