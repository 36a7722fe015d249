// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Pgnames library - procedural star-system name/coordinate codec
//!
//! This crate provides a deterministic bidirectional mapping between
//! procedurally generated system names (e.g. "Dryau Aowsy YZ-A d1-23"),
//! galactic coordinates, and the packed 64-bit system address ("id64").
//! Construct a [`NameTables`](tables::NameTables) once and share it by
//! reference; every codec function is pure after that.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod commands;
pub mod data;
pub mod names;
pub mod sector;
pub mod system;
pub mod tables;
pub mod util;
pub mod vector;

/// Errors for contract violations and ill-posed queries.
///
/// Ordinary lookup misses (unknown names, unmatched fragments) are `None`
/// returns, not errors; these variants mark calls that could never
/// succeed as posed.
pub mod error {
    use crate::vector::Vector3;
    use thiserror::Error;

    /// Codec error conditions
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum Error {
        /// `max_distance` filtering requested without a reference point
        #[error("max_distance requires a reference position")]
        MaxDistanceWithoutReference,
        /// Position falls outside the id64-addressable galaxy volume
        #[error("position {pos} is outside the addressable galaxy")]
        OutOfGalaxyBounds {
            /// The offending position
            pos: Vector3,
        },
        /// A numeric field does not fit its allotted id64 bits
        #[error("{field} value {value} does not fit its id64 field")]
        FieldOverflow {
            /// Name of the overflowing field
            field: &'static str,
            /// The rejected value
            value: u64,
        },
    }
}

/// Convenience re-exports of the types most callers need
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::names::{
        format_sector_name, format_system_name, get_canonical_name, get_ha_regions,
        get_sector, get_sector_by_name, get_sector_fragments, get_sector_name,
        get_system_fragments, get_system_from_name, get_system_from_pos, is_pg_system_name,
        is_valid_sector_name,
    };
    pub use crate::sector::{HaRegion, MassCode, PgSector, Sector, SectorClass};
    pub use crate::system::{
        calculate_from_id64, calculate_id64, combine_to_id64, id64_from_name, mask_id64_as_body,
        mask_id64_as_boxel, mask_id64_as_system, parse_id64, pretty_id64, system_from_id64,
        Id64Format, Id64Parts, PgSystem, SystemFragments,
    };
    pub use crate::tables::NameTables;
    pub use crate::vector::Vector3;
}
