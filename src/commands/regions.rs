// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Regions command - lists hand-authored regions

use anyhow::{Context, Result};
use tracing::info;

use super::parse_position;
use crate::names;
use crate::tables::NameTables;

/// Run the regions command
pub fn run(near: Option<&str>, max_distance: Option<f64>, json: bool) -> Result<()> {
    let reference = near.map(parse_position).transpose()?;
    info!("Listing hand-authored regions");

    let tables = NameTables::new();
    let regions = names::get_ha_regions(&tables, reference, max_distance)
        .context("failed to enumerate hand-authored regions")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&regions)?);
    } else {
        println!(
            "{} hand-authored region{}:",
            regions.len(),
            if regions.len() == 1 { "" } else { "s" }
        );
        for region in &regions {
            match reference {
                Some(refpos) => println!(
                    "  {} ({:.1} ly away, radius {} ly)",
                    region.name,
                    region.centre.distance_to(refpos),
                    region.radius
                ),
                None => println!(
                    "  {} at ({:.1}, {:.1}, {:.1}), radius {} ly",
                    region.name, region.centre.x, region.centre.y, region.centre.z, region.radius
                ),
            }
        }
    }

    Ok(())
}
