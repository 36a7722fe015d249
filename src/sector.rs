// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Galaxy grid constants, mass codes and sector value types

use crate::vector::Vector3;
use serde::{Deserialize, Serialize};

/// Side length of one sector cube, in light years
pub const SECTOR_SIZE: f64 = 1280.0;

/// Size of the galaxy bounding box, in sectors per axis (x, y, z)
pub const GALAXY_SIZE: [i64; 3] = [128, 128, 128];

/// Bottom-left-back corner of the galaxy bounding box
pub const INTERNAL_ORIGIN: Vector3 = Vector3::new(-49985.0, -40985.0, -24105.0);

/// Grid index of the sector containing Sol, counted from [`INTERNAL_ORIGIN`]
pub const BASE_SECTOR_INDEX: [i64; 3] = [39, 32, 18];

/// Origin of Sol's sector: `INTERNAL_ORIGIN + BASE_SECTOR_INDEX * SECTOR_SIZE`
pub const BASE_COORDS: Vector3 = Vector3::new(-65.0, -25.0, -1065.0);

/// Mass code of a boxel: the letter 'a'..'h' denoting its cube size.
///
/// Smaller letters mean smaller cubes; the cube width doubles per step,
/// from 10 LY ('a') to 1280 LY ('h', a whole sector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassCode {
    /// 10 LY boxel
    A,
    /// 20 LY boxel
    B,
    /// 40 LY boxel
    C,
    /// 80 LY boxel
    D,
    /// 160 LY boxel
    E,
    /// 320 LY boxel
    F,
    /// 640 LY boxel
    G,
    /// 1280 LY boxel (whole sector)
    H,
}

impl MassCode {
    /// All mass codes, smallest cube first
    pub const ALL: [MassCode; 8] = [
        MassCode::A,
        MassCode::B,
        MassCode::C,
        MassCode::D,
        MassCode::E,
        MassCode::F,
        MassCode::G,
        MassCode::H,
    ];

    /// Parse from the letter 'a'..'h' (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let idx = (c.to_ascii_lowercase() as i32) - ('a' as i32);
        if (0..8).contains(&idx) {
            Some(Self::ALL[idx as usize])
        } else {
            None
        }
    }

    /// Parse from a cube side length in light years (10, 20, ... 1280)
    #[must_use]
    pub fn from_cube_width(width: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mc| (mc.cube_width() - width).abs() < f64::EPSILON)
    }

    /// The lowercase letter for this mass code
    #[must_use]
    pub fn as_char(&self) -> char {
        (b'a' + self.index()) as char
    }

    /// Zero-based index: 'a' => 0 ... 'h' => 7
    #[must_use]
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Side length of a boxel at this mass code, in light years
    #[must_use]
    pub fn cube_width(&self) -> f64 {
        10.0 * f64::from(1u32 << self.index())
    }
}

impl std::fmt::Display for MassCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The three disjoint sector naming schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorClass {
    /// Prefix + infix(es) + suffix
    C1,
    /// Two prefix+suffix pairs
    C2,
    /// Hand-authored region
    Ha,
}

impl std::fmt::Display for SectorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SectorClass::C1 => "c1",
            SectorClass::C2 => "c2",
            SectorClass::Ha => "ha",
        };
        write!(f, "{s}")
    }
}

/// A procedurally-named sector cell on the galaxy grid.
///
/// The index is relative to [`BASE_SECTOR_INDEX`], so Sol's sector is
/// `[0, 0, 0]`. By-name and by-position resolution of the same cell must
/// produce equal values; the codec tests enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PgSector {
    /// Grid index (ix, iy, iz) relative to Sol's sector
    pub index: [i64; 3],
    /// Formatted sector name, when it has been derived
    pub name: Option<String>,
    /// Which naming scheme the cell uses
    pub class: SectorClass,
}

impl PgSector {
    /// Create a sector from its grid index
    #[must_use]
    pub fn new(index: [i64; 3], name: Option<String>, class: SectorClass) -> Self {
        Self { index, name, class }
    }

    /// Bottom-left-back corner of this sector
    #[must_use]
    pub fn origin(&self) -> Vector3 {
        BASE_COORDS
            + Vector3::new(
                self.index[0] as f64 * SECTOR_SIZE,
                self.index[1] as f64 * SECTOR_SIZE,
                self.index[2] as f64 * SECTOR_SIZE,
            )
    }

    /// Centre of this sector
    #[must_use]
    pub fn centre(&self) -> Vector3 {
        self.origin() + Vector3::new(SECTOR_SIZE / 2.0, SECTOR_SIZE / 2.0, SECTOR_SIZE / 2.0)
    }

    /// Whether a position falls inside this sector cube
    #[must_use]
    pub fn contains(&self, pos: Vector3) -> bool {
        let o = self.origin();
        pos.x >= o.x
            && pos.x < o.x + SECTOR_SIZE
            && pos.y >= o.y
            && pos.y < o.y + SECTOR_SIZE
            && pos.z >= o.z
            && pos.z < o.z + SECTOR_SIZE
    }
}

/// A hand-authored region: a named sphere that outranks procedural naming
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HaRegion {
    /// Designer-chosen display name
    pub name: String,
    /// Centre of the region
    pub centre: Vector3,
    /// Radius of the region, in light years
    pub radius: f64,
}

impl HaRegion {
    /// Whether a position falls inside this region
    #[must_use]
    pub fn contains(&self, pos: Vector3) -> bool {
        (self.centre - pos).length() <= self.radius
    }

    /// Origin for boxel addressing inside this region: the bounding-box
    /// minimum, snapped down onto the boxel grid anchored at
    /// [`INTERNAL_ORIGIN`].
    #[must_use]
    pub fn origin(&self, cube_width: f64) -> Vector3 {
        let min = self.centre - Vector3::new(self.radius, self.radius, self.radius);
        Vector3::new(
            min.x - (min.x - INTERNAL_ORIGIN.x).rem_euclid(cube_width),
            min.y - (min.y - INTERNAL_ORIGIN.y).rem_euclid(cube_width),
            min.z - (min.z - INTERNAL_ORIGIN.z).rem_euclid(cube_width),
        )
    }
}

/// A sector of either kind, as returned by the resolution functions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Sector {
    /// Procedurally-named grid cell
    Pg(PgSector),
    /// Hand-authored region
    Ha(HaRegion),
}

impl Sector {
    /// The sector's display name, when known
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Sector::Pg(s) => s.name.as_deref(),
            Sector::Ha(r) => Some(&r.name),
        }
    }

    /// Naming scheme of this sector
    #[must_use]
    pub fn class(&self) -> SectorClass {
        match self {
            Sector::Pg(s) => s.class,
            Sector::Ha(_) => SectorClass::Ha,
        }
    }

    /// Centre position of the sector or region
    #[must_use]
    pub fn centre(&self) -> Vector3 {
        match self {
            Sector::Pg(s) => s.centre(),
            Sector::Ha(r) => r.centre,
        }
    }

    /// Origin used as the base for boxel addressing at the given cube width
    #[must_use]
    pub fn origin(&self, cube_width: f64) -> Vector3 {
        match self {
            Sector::Pg(s) => s.origin(),
            Sector::Ha(r) => r.origin(cube_width),
        }
    }

    /// Whether a position falls inside the sector or region
    #[must_use]
    pub fn contains(&self, pos: Vector3) -> bool {
        match self {
            Sector::Pg(s) => s.contains(pos),
            Sector::Ha(r) => r.contains(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_coords_derivation() {
        let derived = INTERNAL_ORIGIN
            + Vector3::new(
                BASE_SECTOR_INDEX[0] as f64 * SECTOR_SIZE,
                BASE_SECTOR_INDEX[1] as f64 * SECTOR_SIZE,
                BASE_SECTOR_INDEX[2] as f64 * SECTOR_SIZE,
            );
        assert_eq!(derived, BASE_COORDS);
    }

    #[test]
    fn test_mass_code_widths() {
        assert_eq!(MassCode::from_char('a'), Some(MassCode::A));
        assert_eq!(MassCode::A.cube_width(), 10.0);
        assert_eq!(MassCode::D.cube_width(), 80.0);
        assert_eq!(MassCode::H.cube_width(), 1280.0);
        assert_eq!(MassCode::from_cube_width(640.0), Some(MassCode::G));
        assert_eq!(MassCode::from_char('z'), None);
        assert_eq!(MassCode::from_cube_width(15.0), None);
    }

    #[test]
    fn test_sol_sector_geometry() {
        let sol = PgSector::new([0, 0, 0], None, SectorClass::C1);
        assert_eq!(sol.origin(), BASE_COORDS);
        assert!(sol.contains(Vector3::new(0.0, 0.0, 0.0)));
        assert!(!sol.contains(Vector3::new(0.0, 0.0, 300.0)));
    }

    #[test]
    fn test_ha_origin_snaps_to_boxel_grid() {
        let r = HaRegion {
            name: "Test Sector".into(),
            centre: Vector3::new(0.0, 0.0, 0.0),
            radius: 50.0,
        };
        let o = r.origin(80.0);
        // Snapped onto the mass-code-d grid anchored at the internal origin
        assert_eq!((o.x - INTERNAL_ORIGIN.x).rem_euclid(80.0), 0.0);
        assert!(o.x <= -50.0 && o.x > -130.0);
    }
}
