// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod encode;
pub mod fragments;
pub mod id64;
pub mod locate;
pub mod regions;
pub mod sector;
pub mod system;

use anyhow::{bail, Context, Result};

use crate::vector::Vector3;

/// Parses a position argument of the form `"x,y,z"`.
pub(crate) fn parse_position(arg: &str) -> Result<Vector3> {
    let parts: Vec<&str> = arg.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected position as \"x,y,z\", got '{}'", arg);
    }
    let x: f64 = parts[0]
        .parse()
        .with_context(|| format!("invalid x coordinate '{}'", parts[0]))?;
    let y: f64 = parts[1]
        .parse()
        .with_context(|| format!("invalid y coordinate '{}'", parts[1]))?;
    let z: f64 = parts[2]
        .parse()
        .with_context(|| format!("invalid z coordinate '{}'", parts[2]))?;
    Ok(Vector3::new(x, y, z))
}
