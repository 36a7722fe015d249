// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Encode command - turns a system name or position into its id64

use anyhow::{anyhow, bail, Result};
use tracing::info;

use super::parse_position;
use crate::sector::MassCode;
use crate::system::{self, Id64Format};
use crate::tables::NameTables;

/// Run the encode command
pub fn run(
    name: Option<&str>,
    at: Option<&str>,
    mcode: char,
    n2: u64,
    body: u64,
    json: bool,
) -> Result<()> {
    let id64 = match (name, at) {
        (Some(name), None) => {
            info!("Encoding '{}'", name);
            let tables = NameTables::new();
            system::id64_from_name(&tables, name)
                .ok_or_else(|| anyhow!("'{}' does not resolve to a procedural system", name))?
        }
        (None, Some(at)) => {
            let pos = parse_position(at)?;
            let mc = MassCode::from_char(mcode)
                .ok_or_else(|| anyhow!("invalid mass code '{}', expected a-h", mcode))?;
            info!("Encoding {} at mass code {}", pos, mc);
            system::calculate_id64(pos, mc, n2, body)?
        }
        (Some(_), Some(_)) => bail!("give either a system name or --at, not both"),
        (None, None) => bail!("give a system name or --at \"x,y,z\""),
    };

    if json {
        let out = serde_json::json!({
            "id64": id64,
            "hex": system::pretty_id64(id64, Id64Format::Hex),
            "vsc": system::pretty_id64(id64, Id64Format::Vsc),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Id64: {id64}");
        println!("Hex: {}", system::pretty_id64(id64, Id64Format::Hex));
        println!("VSC: {}", system::pretty_id64(id64, Id64Format::Vsc));
    }

    Ok(())
}
