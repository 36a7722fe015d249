// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! System value types and the packed 64-bit system identifier (id64)

use crate::error::Error;
use crate::names;
use crate::sector::{MassCode, Sector, INTERNAL_ORIGIN, SECTOR_SIZE};
use crate::tables::NameTables;
use crate::util::{pack_and_shift, unpack_and_shift};
use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Bits below the body-id field of an id64
const SYSTEM_BITS: u32 = 55;
/// Width of the body-id field
const BODY_BITS: u32 = 9;

/// The parsed components of a full procedural system name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemFragments {
    /// Canonical sector display name
    pub sector: String,
    /// First id letter
    pub l1: char,
    /// Second id letter
    pub l2: char,
    /// Third id letter
    pub l3: char,
    /// Mass code of the containing boxel
    pub mcode: MassCode,
    /// Boxel run index; zero is omitted from the rendered name
    pub n1: u64,
    /// System index within the boxel
    pub n2: u64,
}

impl std::fmt::Display for SystemFragments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.n1 != 0 {
            write!(
                f,
                "{} {}{}-{} {}{}-{}",
                self.sector, self.l1, self.l2, self.l3, self.mcode, self.n1, self.n2
            )
        } else {
            write!(
                f,
                "{} {}{}-{} {}{}",
                self.sector, self.l1, self.l2, self.l3, self.mcode, self.n2
            )
        }
    }
}

/// A resolved procedural system: a name, a boxel-derived position and the
/// positional uncertainty that comes with naming-level resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgSystem {
    /// Full system name (for boxel prototypes, without the trailing `N2`)
    pub name: String,
    /// Estimated position; the centre of the system's boxel
    pub position: Vector3,
    /// Sector or region the system falls within
    pub sector: Sector,
    /// Uncertainty per axis of the position, in light years
    pub uncertainty: f64,
}

impl PgSystem {
    /// Straight-line distance to another position
    #[must_use]
    pub fn distance_to(&self, other: Vector3) -> f64 {
        self.position.distance_to(other)
    }

    /// Maximum straight-line uncertainty of the position
    #[must_use]
    pub fn uncertainty_3d(&self) -> f64 {
        (self.uncertainty * self.uncertainty * 3.0).sqrt()
    }
}

impl std::fmt::Display for PgSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unpacked fields of an id64
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Id64Parts {
    /// Estimated position; the centre of the addressed boxel
    pub coords: Vector3,
    /// Mass code encoded in the low three bits
    pub mcode: MassCode,
    /// System index within the boxel
    pub n2: u64,
    /// Zero-indexed body id, zero for the system itself
    pub body: u64,
}

impl Id64Parts {
    /// Side length of the addressed boxel, in light years
    #[must_use]
    pub fn boxel_size(&self) -> f64 {
        self.mcode.cube_width()
    }
}

/// Rendering formats for an id64
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Id64Format {
    /// Plain decimal
    Int,
    /// Big-endian hex, zero-padded to 16 digits
    Hex,
    /// Little-endian hex bytes separated by spaces
    Vsc,
}

/// Parse an id64 from a string, accepting decimal or hex.
///
/// A `0x` prefix forces hex; a string of decimal digits parses as decimal;
/// anything else is tried as bare hex.
#[must_use]
pub fn parse_id64(input: &str) -> Option<u64> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).ok();
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }
    u64::from_str_radix(s, 16).ok()
}

/// Render an id64 in the given format
#[must_use]
pub fn pretty_id64(id64: u64, fmt: Id64Format) -> String {
    match fmt {
        Id64Format::Int => format!("{id64}"),
        Id64Format::Hex => format!("{id64:016X}"),
        Id64Format::Vsc => id64
            .to_le_bytes()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Zero the body id, leaving an id64 that refers to the system itself
#[must_use]
pub fn mask_id64_as_system(id64: u64) -> u64 {
    id64 & ((1 << SYSTEM_BITS) - 1)
}

/// Extract the body id from an id64
#[must_use]
pub fn mask_id64_as_body(id64: u64) -> u64 {
    (id64 >> SYSTEM_BITS) & ((1 << BODY_BITS) - 1)
}

/// Zero the `N2` and body fields, leaving an id64 that refers to the boxel
#[must_use]
pub fn mask_id64_as_boxel(id64: u64) -> u64 {
    let mc = id64 & 7;
    let bits = 44 - 3 * mc as u32;
    id64 & ((1 << bits) - 1)
}

/// Combine a system id64 with a body id into a body-level id64
#[must_use]
pub fn combine_to_id64(system: u64, body: u64) -> u64 {
    (system & ((1 << SYSTEM_BITS) - 1)) + ((body & ((1 << BODY_BITS) - 1)) << SYSTEM_BITS)
}

/// Unpack an id64 into its coordinates and indices.
///
/// Fields from the low bit up: mass code (3 bits), then per-axis boxel
/// offsets (`7 - mc` bits each) interleaved with the z/y/x sector indices
/// (7, 6 and 7 bits), then `N2` filling up to bit 55, then the body id.
#[must_use]
pub fn calculate_from_id64(id64: u64) -> Id64Parts {
    let (rest, mc) = unpack_and_shift(id64, 3);
    let boxel_bits = 7 - mc as u32;
    let (rest, boxel_z) = unpack_and_shift(rest, boxel_bits);
    let (rest, sector_z) = unpack_and_shift(rest, 7);
    let (rest, boxel_y) = unpack_and_shift(rest, boxel_bits);
    let (rest, sector_y) = unpack_and_shift(rest, 6);
    let (rest, boxel_x) = unpack_and_shift(rest, boxel_bits);
    let (rest, sector_x) = unpack_and_shift(rest, 7);
    let used = 3 + 3 * boxel_bits + 7 + 6 + 7;
    let (rest, n2) = unpack_and_shift(rest, SYSTEM_BITS - used);
    let (_, body) = unpack_and_shift(rest, BODY_BITS);

    // mc is three bits, so always lands on a valid mass code
    let mcode = MassCode::ALL[mc as usize];
    let cube = mcode.cube_width();
    let half = cube / 2.0;
    let coords = Vector3::new(
        sector_x as f64 * SECTOR_SIZE + boxel_x as f64 * cube + half,
        sector_y as f64 * SECTOR_SIZE + boxel_y as f64 * cube + half,
        sector_z as f64 * SECTOR_SIZE + boxel_z as f64 * cube + half,
    ) + INTERNAL_ORIGIN;
    Id64Parts {
        coords,
        mcode,
        n2,
        body,
    }
}

/// Pack a position, mass code and run index into an id64.
///
/// The position is snapped to its boxel origin; the sector and boxel
/// indices are packed with combined per-axis widths of `14 - mc`,
/// `13 - mc` and `14 - mc` bits.
///
/// # Errors
///
/// [`Error::OutOfGalaxyBounds`] when the position's boxel index does not
/// fit the per-axis field widths (outside the addressable galaxy);
/// [`Error::FieldOverflow`] when `n2` or `body` exceed their fields.
pub fn calculate_id64(pos: Vector3, mcode: MassCode, n2: u64, body: u64) -> Result<u64, Error> {
    let mc = u64::from(mcode.index());
    let cube = mcode.cube_width();
    let origin = names::get_boxel_origin(pos, mcode);
    let bx = (origin.x - INTERNAL_ORIGIN.x) / cube;
    let by = (origin.y - INTERNAL_ORIGIN.y) / cube;
    let bz = (origin.z - INTERNAL_ORIGIN.z) / cube;

    let x_bits = 14 - mc as u32;
    let y_bits = 13 - mc as u32;
    let z_bits = 14 - mc as u32;
    let in_field = |v: f64, bits: u32| v >= 0.0 && (v as u64) < (1 << bits);
    if !in_field(bx, x_bits) || !in_field(by, y_bits) || !in_field(bz, z_bits) {
        return Err(Error::OutOfGalaxyBounds { pos });
    }

    let n2_bits = 11 + 3 * mc as u32;
    if n2 >= (1 << n2_bits) {
        return Err(Error::FieldOverflow {
            field: "n2",
            value: n2,
        });
    }
    if body >= (1 << BODY_BITS) {
        return Err(Error::FieldOverflow {
            field: "body",
            value: body,
        });
    }

    let mut output = pack_and_shift(0, body, BODY_BITS);
    output = pack_and_shift(output, n2, n2_bits);
    output = pack_and_shift(output, bx as u64, x_bits);
    output = pack_and_shift(output, by as u64, y_bits);
    output = pack_and_shift(output, bz as u64, z_bits);
    output = pack_and_shift(output, mc, 3);
    Ok(output)
}

/// Derive the full procedural name of the system an id64 addresses.
///
/// The id64 pins the boxel and `N2`, which is everything a name needs.
#[must_use]
pub fn system_from_id64(tables: &NameTables, id64: u64, allow_ha: bool) -> Option<PgSystem> {
    let parts = calculate_from_id64(id64);
    let proto = names::get_system_from_pos(tables, parts.coords, parts.mcode, allow_ha)?;
    Some(PgSystem {
        name: format!("{}{}", proto.name, parts.n2),
        ..proto
    })
}

/// Derive a system's id64 from its procedural name
#[must_use]
pub fn id64_from_name(tables: &NameTables, name: &str) -> Option<u64> {
    let frags = names::get_system_fragments(tables, name)?;
    let system = names::get_system_from_name(tables, name, true)?;
    calculate_id64(system.position, frags.mcode, frags.n2, 0).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sol_id64_decodes() {
        // Sol's real system address
        let parts = calculate_from_id64(10_477_373_803);
        assert_eq!(parts.coords, Vector3::new(-25.0, 15.0, 15.0));
        assert_eq!(parts.mcode, MassCode::D);
        assert!((parts.boxel_size() - 80.0).abs() < f64::EPSILON);
        assert_eq!(parts.n2, 0);
        assert_eq!(parts.body, 0);
    }

    #[test]
    fn test_sol_id64_encodes() {
        // Any position inside Sol's boxel packs to the same address
        let id64 = calculate_id64(Vector3::new(0.0, 0.0, 0.0), MassCode::D, 0, 0).unwrap();
        assert_eq!(id64, 10_477_373_803);
    }

    #[test]
    fn test_id64_round_trip_all_mass_codes() {
        let pos = Vector3::new(-1048.3, 212.7, 5317.1);
        for (i, mcode) in MassCode::ALL.iter().enumerate() {
            let n2 = (37 * i as u64) % (1 << 11);
            let body = (i as u64 * 41) % (1 << 9);
            let id64 = calculate_id64(pos, *mcode, n2, body).unwrap();
            let parts = calculate_from_id64(id64);
            assert_eq!(parts.mcode, *mcode);
            assert_eq!(parts.n2, n2);
            assert_eq!(parts.body, body);
            // Decoded coords are the boxel centre, so within half a cube
            let half = mcode.cube_width() / 2.0;
            assert!((parts.coords.x - pos.x).abs() <= half);
            assert!((parts.coords.y - pos.y).abs() <= half);
            assert!((parts.coords.z - pos.z).abs() <= half);
        }
    }

    #[test]
    fn test_masks() {
        let system = calculate_id64(Vector3::new(120.0, -40.0, 755.0), MassCode::C, 99, 0).unwrap();
        let body = combine_to_id64(system, 5);
        assert_eq!(mask_id64_as_body(body), 5);
        assert_eq!(mask_id64_as_system(body), system);
        // Boxel mask zeroes n2 as well
        let boxel = mask_id64_as_boxel(body);
        let parts = calculate_from_id64(boxel);
        assert_eq!(parts.n2, 0);
        assert_eq!(parts.body, 0);
        assert_eq!(parts.mcode, MassCode::C);
    }

    #[test]
    fn test_field_overflow_rejected() {
        let pos = Vector3::new(0.0, 0.0, 0.0);
        // a-code n2 field is 11 bits
        assert!(matches!(
            calculate_id64(pos, MassCode::A, 1 << 11, 0),
            Err(Error::FieldOverflow { field: "n2", .. })
        ));
        assert!(matches!(
            calculate_id64(pos, MassCode::A, 0, 512),
            Err(Error::FieldOverflow { field: "body", .. })
        ));
    }

    #[test]
    fn test_out_of_galaxy_rejected() {
        assert!(matches!(
            calculate_id64(Vector3::new(-99_999.0, 0.0, 0.0), MassCode::D, 0, 0),
            Err(Error::OutOfGalaxyBounds { .. })
        ));
    }

    #[test]
    fn test_parse_id64() {
        assert_eq!(parse_id64("10477373803"), Some(10_477_373_803));
        assert_eq!(parse_id64("0x27080096B"), Some(10_477_373_803));
        assert_eq!(parse_id64("27080096B"), Some(0x2_7080_096B));
        assert_eq!(parse_id64("not an id"), None);
    }

    #[test]
    fn test_pretty_id64() {
        assert_eq!(pretty_id64(10_477_373_803, Id64Format::Int), "10477373803");
        assert_eq!(
            pretty_id64(10_477_373_803, Id64Format::Hex),
            "000000027080096B"
        );
        assert_eq!(
            pretty_id64(10_477_373_803, Id64Format::Vsc),
            "6B 09 80 70 02 00 00 00"
        );
    }

    #[test]
    fn test_system_from_id64() {
        let t = NameTables::new();
        let sys = system_from_id64(&t, 10_477_373_803, false).unwrap();
        assert!(sys.name.starts_with("Wregoe "));
        assert!(sys.name.ends_with('0'));
        assert_eq!(sys.sector.name(), Some("Wregoe"));
    }

    #[test]
    fn test_id64_name_round_trip() {
        let t = NameTables::new();
        let sys = system_from_id64(&t, 10_477_373_803, false).unwrap();
        assert_eq!(id64_from_name(&t, &sys.name), Some(10_477_373_803));
    }
}
