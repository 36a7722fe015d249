// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Locate command - derives the boxel prototype name for a position

use anyhow::{anyhow, Result};
use tracing::info;

use super::parse_position;
use crate::names;
use crate::sector::MassCode;
use crate::tables::NameTables;

/// Run the locate command
pub fn run(position: &str, mcode: char, allow_ha: bool, json: bool) -> Result<()> {
    let pos = parse_position(position)?;
    let mc = MassCode::from_char(mcode)
        .ok_or_else(|| anyhow!("invalid mass code '{}', expected a-h", mcode))?;
    info!("Locating boxel at {} with mass code {}", pos, mc);

    let tables = NameTables::new();
    let system = names::get_system_from_pos(&tables, pos, mc, allow_ha)
        .ok_or_else(|| anyhow!("position {} is outside the galaxy grid", pos))?;

    if json {
        let out = serde_json::json!({
            "name": system.name,
            "position": system.position,
            "uncertainty": system.uncertainty,
            "mcode": mc,
            "boxel_width": mc.cube_width(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Boxel: {}", system.name);
        println!(
            "Centre: ({:.2}, {:.2}, {:.2}), width {} ly",
            system.position.x,
            system.position.y,
            system.position.z,
            mc.cube_width()
        );
    }

    Ok(())
}
