// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Id64 command - decodes a 64-bit system address

use anyhow::{anyhow, Result};
use tracing::info;

use crate::system::{self, Id64Format};
use crate::tables::NameTables;

/// Run the id64 command
pub fn run(value: &str, json: bool) -> Result<()> {
    let id64 = system::parse_id64(value)
        .ok_or_else(|| anyhow!("'{}' is not a valid id64 (decimal or hex)", value))?;
    info!("Decoding id64 {}", id64);

    let parts = system::calculate_from_id64(id64);
    let tables = NameTables::new();
    let resolved = system::system_from_id64(&tables, id64, true);

    if json {
        let out = serde_json::json!({
            "id64": id64,
            "hex": system::pretty_id64(id64, Id64Format::Hex),
            "name": resolved.as_ref().map(|s| s.name.as_str()),
            "coords": parts.coords,
            "mcode": parts.mcode,
            "n2": parts.n2,
            "body": parts.body,
            "boxel_size": parts.boxel_size(),
            "system_id64": system::mask_id64_as_system(id64),
            "boxel_id64": system::mask_id64_as_boxel(id64),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Id64: {}", system::pretty_id64(id64, Id64Format::Int));
        println!("Hex: {}", system::pretty_id64(id64, Id64Format::Hex));
        println!("VSC: {}", system::pretty_id64(id64, Id64Format::Vsc));
        if let Some(sys) = &resolved {
            println!("System: {}", sys.name);
        }
        println!(
            "Boxel centre: ({:.2}, {:.2}, {:.2}), width {} ly",
            parts.coords.x,
            parts.coords.y,
            parts.coords.z,
            parts.boxel_size()
        );
        println!(
            "Mass code: {}, n2: {}, body: {}",
            parts.mcode, parts.n2, parts.body
        );
        println!(
            "System id64: {}, boxel id64: {}",
            system::mask_id64_as_system(id64),
            system::mask_id64_as_boxel(id64)
        );
    }

    Ok(())
}
