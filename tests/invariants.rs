// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the pgnames codec
//!
//! These tests verify critical invariants:
//! 1. Determinism - the same input always resolves to the same output
//! 2. Round trips - names, positions and id64s survive each direction
//! 3. Priority - hand-authored regions outrank procedural cells

use pgnames::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Test Helpers
// =============================================================================

fn tables() -> NameTables {
    NameTables::new()
}

/// Sol's id64 (body 0), the best-known fixed point of the codec
const SOL_ID64: u64 = 10_477_373_803;

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_sector_resolution_deterministic() {
    let t = tables();
    let pos = Vector3::new(375.0, 255.0, -865.0);

    let a = get_sector(&t, pos, false).unwrap();
    let b = get_sector(&t, pos, false).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.name(), Some("Wregoe"));
}

#[test]
fn test_sector_class_consistent_with_name() {
    let t = tables();

    for pos in [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(-2000.0, 300.0, 4100.0),
        Vector3::new(1500.0, -700.0, -2600.0),
    ] {
        let sector = get_sector(&t, pos, false).unwrap();
        let name = sector.name().expect("sectors near Sol are nameable");
        let by_name = get_sector_by_name(&t, name, false).unwrap();
        assert_eq!(sector.class(), by_name.class(), "class mismatch for {name}");
    }
}

#[test]
fn test_canonicalization_idempotent() {
    let t = tables();

    let first = get_canonical_name(&t, "wregoe ab-c d1-23", false).unwrap();
    assert_eq!(first, "Wregoe AB-C d1-23");

    let second = get_canonical_name(&t, &first, false).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_sector_name_position_round_trip() {
    let t = tables();

    // Sol's cell
    let sector = get_sector_by_name(&t, "Wregoe", false).unwrap();
    assert!(sector.contains(Vector3::new(0.0, 0.0, 0.0)));
    assert_eq!(
        get_sector_name(&t, sector.centre(), false).as_deref(),
        Some("Wregoe")
    );

    // A class 2 cell further out
    let sector = get_sector_by_name(&t, "Dryau Aowsy", false).unwrap();
    assert_eq!(sector.class(), SectorClass::C2);
    assert_eq!(
        get_sector_name(&t, sector.centre(), false).as_deref(),
        Some("Dryau Aowsy")
    );
}

#[test]
fn test_system_name_to_position() {
    let t = tables();

    let system = get_system_from_name(&t, "Wregoe HB-X d1-23", true).unwrap();
    assert_eq!(system.position, Vector3::new(375.0, 255.0, -865.0));
    assert_eq!(system.uncertainty, 40.0);
    assert_eq!(system.sector.name(), Some("Wregoe"));
}

#[test]
fn test_position_back_to_boxel_prototype() {
    let t = tables();

    let system = get_system_from_name(&t, "Wregoe HB-X d1-23", true).unwrap();
    let proto = get_system_from_pos(&t, system.position, MassCode::D, false).unwrap();

    // Position resolution cannot recover N2, only the boxel prototype
    assert_eq!(proto.name, "Wregoe HB-X d1-");
    assert!(system.name.starts_with(&proto.name));
    assert_eq!(proto.position, system.position);
}

#[test]
fn test_id64_name_round_trip() {
    let t = tables();

    let system = system_from_id64(&t, SOL_ID64, false).unwrap();
    assert!(system.name.starts_with("Wregoe "));
    assert_eq!(id64_from_name(&t, &system.name), Some(SOL_ID64));
}

#[test]
fn test_id64_field_round_trip_across_mass_codes() {
    let pos = Vector3::new(-1048.3, 212.7, 5317.1);

    for mc in MassCode::ALL {
        let id64 = calculate_id64(pos, mc, 7, 3).unwrap();
        let parts = calculate_from_id64(id64);

        assert_eq!(parts.mcode, mc);
        assert_eq!(parts.n2, 7);
        assert_eq!(parts.body, 3);

        // Decoded coords are the centre of the boxel containing the input
        let half = mc.cube_width() / 2.0;
        assert!((parts.coords.x - pos.x).abs() <= half);
        assert!((parts.coords.y - pos.y).abs() <= half);
        assert!((parts.coords.z - pos.z).abs() <= half);
    }
}

#[test]
fn test_id64_parse_formats_agree() {
    let hex = pretty_id64(SOL_ID64, Id64Format::Hex);
    assert_eq!(parse_id64(&hex), Some(SOL_ID64));
    assert_eq!(parse_id64("10477373803"), Some(SOL_ID64));
}

// =============================================================================
// Hand-Authored Priority Tests
// =============================================================================

#[test]
fn test_ha_region_outranks_procedural_cell() {
    let t = tables();
    let sol = Vector3::new(0.0, 0.0, 0.0);

    let with_ha = get_sector(&t, sol, true).unwrap();
    assert_eq!(with_ha.class(), SectorClass::Ha);
    assert_eq!(with_ha.name(), Some("Core Sys Sector"));

    let without_ha = get_sector(&t, sol, false).unwrap();
    assert_eq!(without_ha.name(), Some("Wregoe"));
}

#[test]
fn test_ha_regions_sorted_by_distance() {
    let t = tables();
    let regions = get_ha_regions(&t, Some(Vector3::new(0.0, 0.0, 0.0)), None).unwrap();

    assert!(!regions.is_empty());
    assert_eq!(regions[0].name, "Core Sys Sector");
    for pair in regions.windows(2) {
        let d0 = pair[0].centre.length();
        let d1 = pair[1].centre.length();
        assert!(d0 <= d1, "{} should sort before {}", pair[0].name, pair[1].name);
    }
}

#[test]
fn test_ha_max_distance_requires_reference() {
    let t = tables();
    assert_eq!(
        get_ha_regions(&t, None, Some(100.0)),
        Err(Error::MaxDistanceWithoutReference)
    );
}

#[test]
fn test_real_galaxy_ground_truths() {
    let t = tables();

    // Sagittarius A* and Beagle Point fall in well-known sectors
    assert_eq!(
        get_sector_name(&t, Vector3::new(25.21875, -20.90625, 25899.96875), false).as_deref(),
        Some("Stuemeae")
    );
    assert_eq!(
        get_sector_name(&t, Vector3::new(-1111.5625, -134.21875, 65269.75), false).as_deref(),
        Some("Ceeckia")
    );
}

// =============================================================================
// Grammar Tests
// =============================================================================

#[test]
fn test_system_name_grammar() {
    let t = tables();

    assert!(is_pg_system_name(&t, "Dryau Aowsy YZ-A d1-23", false));
    assert!(is_pg_system_name(&t, "Wregoe HB-X d1-23", true));
    assert!(!is_pg_system_name(&t, "Sol", false));
    assert!(!is_pg_system_name(&t, "Wregoe d1-23", false));
}

#[test]
fn test_shouty_input_reformats_exactly() {
    let t = tables();
    assert_eq!(
        get_canonical_name(&t, "DRYAU AOWSY YZ-A D1-23", false).as_deref(),
        Some("Dryau Aowsy YZ-A d1-23")
    );
}

#[test]
fn test_oddly_spaced_name_accepted() {
    let t = tables();

    // Fragment matching strips spaces first, so the historical spacing
    // quirk "Synoo kio" validates like "Syn oo K io" would
    assert_eq!(
        get_sector_fragments(&t, "Synoo kio", false),
        Some(vec!["Syn", "oo", "K", "io"])
    );
    assert!(is_valid_sector_name(&t, "Synoo kio"));
}

#[test]
fn test_well_formed_name_outside_cube_rejected() {
    let t = tables();

    // Grammar accepts it, but the encoded in-sector offset lands outside
    // the 8x8x8 d-code cube grid, so no such system exists.
    assert!(is_pg_system_name(&t, "Dryau Aowsy YZ-A d1-23", true));
    assert_eq!(get_system_from_name(&t, "Dryau Aowsy YZ-A d1-23", true), None);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_sector_contains_its_position(
        x in -5000.0f64..5000.0,
        y in -3000.0f64..3000.0,
        z in -5000.0f64..5000.0,
    ) {
        let t = tables();
        let pos = Vector3::new(x, y, z);
        let sector = get_sector(&t, pos, false).unwrap();
        prop_assert!(sector.contains(pos));
    }

    #[test]
    fn prop_sector_name_round_trips(
        x in -5000.0f64..5000.0,
        y in -3000.0f64..3000.0,
        z in -5000.0f64..5000.0,
    ) {
        let t = tables();
        let pos = Vector3::new(x, y, z);
        let sector = get_sector(&t, pos, false).unwrap();
        let name = sector.name().expect("cells near Sol are nameable");
        let back = get_sector_by_name(&t, name, false).unwrap();
        prop_assert_eq!(sector, back);
    }

    #[test]
    fn prop_id64_fields_survive(
        n2 in 0u64..2048,
        body in 0u64..512,
        x in -5000.0f64..5000.0,
        y in -3000.0f64..3000.0,
        z in -5000.0f64..5000.0,
    ) {
        let pos = Vector3::new(x, y, z);
        let id64 = calculate_id64(pos, MassCode::D, n2, body).unwrap();
        let parts = calculate_from_id64(id64);
        prop_assert_eq!(parts.mcode, MassCode::D);
        prop_assert_eq!(parts.n2, n2);
        prop_assert_eq!(parts.body, body);
    }
}
