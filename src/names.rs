// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The name codec: sector names ⇄ grid cells, system names ⇄ positions.
//!
//! Both directions are pure functions over a shared [`NameTables`] instance.
//! Bad user input (unrecognized fragments, out-of-range offsets) yields
//! `None`; contract violations surface as [`Error`](crate::error::Error)
//! from the few functions that can hit one.

use crate::data;
use crate::error::Error;
use crate::sector::{
    HaRegion, MassCode, PgSector, Sector, SectorClass, BASE_COORDS, BASE_SECTOR_INDEX,
    GALAXY_SIZE, INTERNAL_ORIGIN, SECTOR_SIZE,
};
use crate::system::{PgSystem, SystemFragments};
use crate::tables::{prefix_run_length, InfixSequence, NameTables};
use crate::util::{deinterleave, interleave, jenkins32, title_case};
use crate::vector::Vector3;
use tracing::trace;

/// Names longer than this many fragments are rejected unless explicitly
/// allowed
const FRAGMENT_LIMIT: usize = 4;

/// Divisor for the first system-id letter
const SRP_DIVISOR1: u64 = 26;
/// Divisor for the second system-id letter
const SRP_DIVISOR2: u64 = SRP_DIVISOR1 * SRP_DIVISOR1;
/// Divisor for the third system-id letter
const SRP_DIVISOR3: u64 = SRP_DIVISOR2 * SRP_DIVISOR1;
/// Boxels per row within a sector slice
const SRP_ROWLENGTH: u64 = 128;
/// Boxels per horizontal slice of a sector
const SRP_SIDELENGTH: u64 = SRP_ROWLENGTH * SRP_ROWLENGTH;

// ---------------------------------------------------------------------------
// Fragment parsing and formatting
// ---------------------------------------------------------------------------

/// Split a sector name into its phoneme fragments.
///
/// The input is title-cased and has its spaces stripped before greedy
/// longest-first matching, so `"Dryau Aowsy"` yields
/// `["Dry", "au", "Ao", "wsy"]`. Returns `None` when any remainder fails
/// to match, or when more than four fragments result and `allow_long` is
/// not set.
#[must_use]
pub fn get_sector_fragments(
    tables: &NameTables,
    name: &str,
    allow_long: bool,
) -> Option<Vec<&'static str>> {
    let cleaned = title_case(name).replace(' ', "");
    let mut segments = Vec::new();
    let mut rest = cleaned.as_str();
    'outer: while !rest.is_empty() {
        for frag in &tables.fragments {
            if let Some(tail) = rest.strip_prefix(frag) {
                segments.push(*frag);
                rest = tail;
                continue 'outer;
            }
        }
        break;
    }
    if rest.is_empty() && (allow_long || segments.len() <= FRAGMENT_LIMIT) {
        Some(segments)
    } else {
        None
    }
}

/// Check whether a sector name is a well-formed procedural name.
///
/// Known quirk carried over from the original scheme: fragment matching
/// strips all spaces first, so oddly-spaced names like `"Synoo kio"` are
/// accepted.
#[must_use]
pub fn is_valid_sector_name(tables: &NameTables, name: &str) -> bool {
    let Some(frags) = get_sector_fragments(tables, name, false) else {
        return false;
    };
    if frags.is_empty() || !tables.is_prefix(frags[0]) {
        return false;
    }
    if frags.len() == 4 && tables.is_prefix(frags[2]) {
        let list0 = c2_suffix_list(tables, frags[0]);
        let list1 = c2_suffix_list(tables, frags[2]);
        return list0.contains(&frags[1]) && list1.contains(&frags[3]);
    }
    if frags.len() == 3 || frags.len() == 4 {
        let mut seq = if data::C1_PREFIX_INFIX_OVERRIDES.contains(&frags[0]) {
            InfixSequence::S2
        } else {
            InfixSequence::S1
        };
        if !seq.members().contains(&frags[1]) {
            return false;
        }
        if frags.len() == 4 {
            seq = seq.other();
            if !seq.members().contains(&frags[2]) {
                return false;
            }
        }
        // The suffix list alternates against the last infix's sequence
        let suffix_list = match seq {
            InfixSequence::S1 => data::C1_SUFFIXES_S2,
            InfixSequence::S2 => data::CX_SUFFIXES_S1,
        };
        return suffix_list.contains(&frags[frags.len() - 1]);
    }
    false
}

/// Join fragments back into a display name.
///
/// Class-2 names get a space between their two prefix+suffix pairs;
/// everything else is plain concatenation.
#[must_use]
pub fn format_sector_name(tables: &NameTables, frags: &[&str]) -> String {
    if frags.len() == 4 && tables.is_prefix(frags[2]) {
        format!("{}{} {}{}", frags[0], frags[1], frags[2], frags[3])
    } else {
        frags.concat()
    }
}

/// Structural class of a fragment list, ignoring hand-authored regions
fn fragment_class(tables: &NameTables, frags: &[&str]) -> Option<SectorClass> {
    if frags.len() == 4 && tables.is_prefix(frags[0]) && tables.is_prefix(frags[2]) {
        Some(SectorClass::C2)
    } else if (frags.len() == 3 || frags.len() == 4) && tables.is_prefix(frags[0]) {
        Some(SectorClass::C1)
    } else {
        None
    }
}

/// Classify a sector name as hand-authored, class 1, or class 2
#[must_use]
pub fn get_sector_class(tables: &NameTables, name: &str) -> Option<SectorClass> {
    if tables.ha_region_by_name(name).is_some() {
        return Some(SectorClass::Ha);
    }
    let frags = get_sector_fragments(tables, name, false)?;
    fragment_class(tables, &frags)
}

// ---------------------------------------------------------------------------
// Suffix / infix list selection
// ---------------------------------------------------------------------------

/// Class-2 suffix list for a prefix, honouring the override map
fn c2_suffix_list<'t>(tables: &'t NameTables, prefix: &str) -> &'t [&'static str] {
    if data::C2_PREFIX_SUFFIX_OVERRIDES.contains(&prefix) {
        tables.c2_suffixes_s2
    } else {
        data::CX_SUFFIXES_S1
    }
}

/// Suffix candidates that may follow the given fragments.
///
/// When the last fragment is a prefix the class-2 lists apply; otherwise
/// the class-1 list for the opposite sequence of the last infix. The
/// truncated form is capped at the word-start prefix's run length.
fn suffixes_for<'t>(
    tables: &'t NameTables,
    frags: &[&str],
    get_all: bool,
) -> Option<&'t [&'static str]> {
    let last = *frags.last()?;
    let (list, wordstart): (&'t [&'static str], &str) = if tables.is_prefix(last) {
        (c2_suffix_list(tables, last), last)
    } else if data::C1_INFIXES_S2.contains(&last) {
        (data::CX_SUFFIXES_S1, frags[0])
    } else {
        (data::C1_SUFFIXES_S2, frags[0])
    };
    if get_all {
        Some(list)
    } else {
        let cap = usize::try_from(prefix_run_length(wordstart)).ok()?;
        Some(&list[..cap.min(list.len())])
    }
}

/// Infix candidates that may follow the given fragments
fn infixes_for(tables: &NameTables, frags: &[&str]) -> Option<&'static [&'static str]> {
    let last = *frags.last()?;
    if tables.is_prefix(last) {
        let seq = if data::C1_PREFIX_INFIX_OVERRIDES.contains(&last) {
            InfixSequence::S2
        } else {
            InfixSequence::S1
        };
        Some(seq.members())
    } else {
        InfixSequence::of(last).map(|seq| seq.other().members())
    }
}

// ---------------------------------------------------------------------------
// Class 1 codec
// ---------------------------------------------------------------------------

/// Encode a class-1 fragment list into its galaxy-wide grid offset.
///
/// The fragments form a mixed-radix number: the suffix's local index is
/// folded through the infix runs (honouring per-fragment run-length
/// overrides at every fold) and finally through the prefix run.
fn c1_offset_from_fragments(tables: &NameTables, frags: &[&str]) -> Option<u64> {
    if frags.len() != 3 && frags.len() != 4 {
        return None;
    }
    let sufs = suffixes_for(tables, &frags[..frags.len() - 1], true)?;
    let last = frags[frags.len() - 1];
    let suf_idx = sufs.iter().position(|s| *s == last)? as u64;

    let mut f3_offset = suf_idx;
    if frags.len() == 4 {
        let f3_span = tables.infix_span(frags[2])?;
        let f3_total = tables.infix_total_run_length(InfixSequence::of(frags[2])?);
        // Jump over completed suffix runs before changing radix
        let adjusted = suf_idx + (suf_idx / f3_span.length) * f3_total;
        f3_offset = (adjusted / f3_span.length) * f3_total
            + adjusted % f3_span.length
            + f3_span.start;
    }

    let f2_span = tables.infix_span(frags[1])?;
    let f2_total = tables.infix_total_run_length(InfixSequence::of(frags[1])?);
    let f2_offset =
        (f3_offset / f2_span.length) * f2_total + f3_offset % f2_span.length + f2_span.start;

    let p_span = tables.prefix_span(frags[0])?;
    Some(
        (f2_offset / p_span.length) * tables.prefix_total_run_length
            + f2_offset % p_span.length
            + p_span.start,
    )
}

/// Decode a grid offset into a class-1 fragment list.
///
/// The inverse of [`c1_offset_from_fragments`], with the one asymmetry of
/// the scheme: when the suffix index runs past the available suffix list a
/// second infix is introduced, producing a four-fragment name. Offsets
/// beyond the enumerable namespace return `None`.
fn c1_fragments_from_offset(tables: &NameTables, offset: u64) -> Option<Vec<&'static str>> {
    let prefix_cnt = offset / tables.prefix_total_run_length;
    let mut cur = offset % tables.prefix_total_run_length;
    let prefix = tables.prefix_for_offset(cur)?;
    let p_span = tables.prefix_span(prefix)?;
    cur -= p_span.start;

    let infix1s = infixes_for(tables, &[prefix])?;
    let seq1 = InfixSequence::of(infix1s[0])?;
    let i1_total = tables.infix_total_run_length(seq1);
    let linear = prefix_cnt * p_span.length + cur;
    let infix1_cnt = linear / i1_total;
    cur = linear % i1_total;
    let infix1 = tables.infix_for_offset(seq1, cur)?;
    let i1_span = tables.infix_span(infix1)?;
    cur -= i1_span.start;

    let mut sufs = suffixes_for(tables, &[prefix, infix1], true)?;
    let mut next_idx = i1_span.length * infix1_cnt + cur;
    let mut frags = vec![prefix, infix1];

    if next_idx as usize >= sufs.len() {
        // Past the three-fragment names; insert a second infix
        let infix2s = infixes_for(tables, &frags)?;
        let seq2 = InfixSequence::of(infix2s[0])?;
        let i2_total = tables.infix_total_run_length(seq2);
        let linear = infix1_cnt * i1_span.length + cur;
        let infix2_cnt = linear / i2_total;
        cur = linear % i2_total;
        let infix2 = tables.infix_for_offset(seq2, cur)?;
        let i2_span = tables.infix_span(infix2)?;
        cur -= i2_span.start;

        sufs = suffixes_for(tables, &[prefix, infix1, infix2], true)?;
        next_idx = i2_span.length * infix2_cnt + cur;
        frags.push(infix2);
    }

    frags.push(*sufs.get(usize::try_from(next_idx).ok()?)?);
    Some(frags)
}

// ---------------------------------------------------------------------------
// Class 2 codec
// ---------------------------------------------------------------------------

/// Width of the class-2 interleave. The largest prefix-run index is 3036
/// (12 bits), so the interleaved pair needs at most 24 bits; 32 leaves
/// headroom.
const C2_INTERLEAVE_BITS: u32 = 32;

fn c2_offset_from_fragments(tables: &NameTables, frags: &[&str]) -> Option<u64> {
    if frags.len() != 4 {
        return None;
    }
    let span0 = tables.prefix_span(frags[0])?;
    let span1 = tables.prefix_span(frags[2])?;
    let idx0 = span0.start
        + suffixes_for(tables, &frags[..1], false)?
            .iter()
            .position(|s| *s == frags[1])? as u64;
    let idx1 = span1.start
        + suffixes_for(tables, &frags[2..3], false)?
            .iter()
            .position(|s| *s == frags[3])? as u64;
    Some(interleave(idx0, idx1, C2_INTERLEAVE_BITS))
}

fn c2_fragments_from_offset(tables: &NameTables, offset: u64) -> Option<Vec<&'static str>> {
    let (idx0, idx1) = deinterleave(offset, C2_INTERLEAVE_BITS);
    let p0 = tables.prefix_for_offset(idx0)?;
    let p1 = tables.prefix_for_offset(idx1)?;
    let s0 = *suffixes_for(tables, &[p0], false)?
        .get(usize::try_from(idx0 - tables.prefix_span(p0)?.start).ok()?)?;
    let s1 = *suffixes_for(tables, &[p1], false)?
        .get(usize::try_from(idx1 - tables.prefix_span(p1)?.start).ok()?)?;
    Some(vec![p0, s0, p1, s1])
}

// ---------------------------------------------------------------------------
// Grid addressing and the cell classifier
// ---------------------------------------------------------------------------

/// Which procedural naming scheme a grid cell uses.
///
/// The parity of the Jenkins hash of the cell's galaxy-wide offset decides
/// the class, so it is re-derivable from position alone and never stored.
#[must_use]
pub fn cell_class(offset: u64) -> SectorClass {
    if jenkins32(offset as u32) % 2 == 0 {
        SectorClass::C1
    } else {
        SectorClass::C2
    }
}

/// Sector grid index (relative to Sol's sector) containing a position
fn grid_index_for_pos(pos: Vector3) -> [i64; 3] {
    [
        ((pos.x - BASE_COORDS.x) / SECTOR_SIZE).floor() as i64,
        ((pos.y - BASE_COORDS.y) / SECTOR_SIZE).floor() as i64,
        ((pos.z - BASE_COORDS.z) / SECTOR_SIZE).floor() as i64,
    ]
}

/// Linearize a relative grid index into the galaxy-wide cell offset.
/// Returns `None` outside the galaxy bounding box.
fn grid_offset_from_index(index: [i64; 3]) -> Option<u64> {
    let mut global = [0u64; 3];
    for axis in 0..3 {
        let g = index[axis] + BASE_SECTOR_INDEX[axis];
        if g < 0 || g >= GALAXY_SIZE[axis] {
            return None;
        }
        global[axis] = g as u64;
    }
    let width = GALAXY_SIZE[0] as u64;
    let height = GALAXY_SIZE[1] as u64;
    Some(global[2] * height * width + global[1] * width + global[0])
}

/// Inverse of [`grid_offset_from_index`], back into the relative convention
fn index_from_grid_offset(offset: u64) -> [i64; 3] {
    let width = GALAXY_SIZE[0] as u64;
    let height = GALAXY_SIZE[1] as u64;
    [
        (offset % width) as i64 - BASE_SECTOR_INDEX[0],
        ((offset / width) % height) as i64 - BASE_SECTOR_INDEX[1],
        (offset / (width * height)) as i64 - BASE_SECTOR_INDEX[2],
    ]
}

/// Decode a cell offset into fragments via whichever class the cell uses
fn pg_fragments_from_offset(tables: &NameTables, offset: u64) -> Option<Vec<&'static str>> {
    match cell_class(offset) {
        SectorClass::C1 => c1_fragments_from_offset(tables, offset),
        SectorClass::C2 => c2_fragments_from_offset(tables, offset),
        SectorClass::Ha => None,
    }
}

// ---------------------------------------------------------------------------
// Sector resolution
// ---------------------------------------------------------------------------

/// First hand-authored region containing a position, if any
fn ha_region_for_pos<'t>(tables: &'t NameTables, pos: Vector3) -> Option<&'t HaRegion> {
    tables.ha_regions().iter().find(|r| r.contains(pos))
}

/// Resolve the sector containing a position.
///
/// Hand-authored regions win when `allow_ha` is set; otherwise the cell's
/// procedural name is derived from its hashed class. The returned
/// procedural sector carries `name: None` when the cell offset falls
/// outside the enumerable class-1 namespace.
#[must_use]
pub fn get_sector(tables: &NameTables, pos: Vector3, allow_ha: bool) -> Option<Sector> {
    if allow_ha {
        if let Some(region) = ha_region_for_pos(tables, pos) {
            return Some(Sector::Ha(region.clone()));
        }
    }
    let index = grid_index_for_pos(pos);
    let offset = grid_offset_from_index(index)?;
    let name =
        pg_fragments_from_offset(tables, offset).map(|frags| format_sector_name(tables, &frags));
    trace!(?index, offset, ?name, "resolved sector from position");
    Some(Sector::Pg(PgSector::new(index, name, cell_class(offset))))
}

/// Name of the sector containing a position
#[must_use]
pub fn get_sector_name(tables: &NameTables, pos: Vector3, allow_ha: bool) -> Option<String> {
    get_sector(tables, pos, allow_ha).and_then(|s| s.name().map(str::to_owned))
}

/// Resolve a sector from its name.
///
/// The name is canonicalized first, then matched against hand-authored
/// regions (when `allow_ha`) before the procedural codecs run.
#[must_use]
pub fn get_sector_by_name(tables: &NameTables, name: &str, allow_ha: bool) -> Option<Sector> {
    let canonical = get_canonical_name(tables, name, true)?;
    if allow_ha {
        if let Some(region) = tables.ha_region_by_name(&canonical) {
            return Some(Sector::Ha(region.clone()));
        }
    }
    let frags = get_sector_fragments(tables, &canonical, false)?;
    let class = fragment_class(tables, &frags)?;
    let offset = match class {
        SectorClass::C1 => c1_offset_from_fragments(tables, &frags),
        SectorClass::C2 => c2_offset_from_fragments(tables, &frags),
        SectorClass::Ha => None,
    }?;
    Some(Sector::Pg(PgSector::new(
        index_from_grid_offset(offset),
        Some(format_sector_name(tables, &frags)),
        class,
    )))
}

// ---------------------------------------------------------------------------
// Canonical naming
// ---------------------------------------------------------------------------

/// Canonical display form of a raw sector name: the hand-authored name
/// when one matches, else re-formatted fragments
fn canonical_sector_name(tables: &NameTables, raw: &str) -> Option<String> {
    if let Some(region) = tables.ha_region_by_name(raw) {
        return Some(region.name.clone());
    }
    let frags = get_sector_fragments(tables, raw, false)?;
    Some(format_sector_name(tables, &frags))
}

/// Correct the casing of a sector or system name.
///
/// With `sector_only` the input may be a bare sector name; otherwise it
/// must be a full system name.
#[must_use]
pub fn get_canonical_name(tables: &NameTables, name: &str, sector_only: bool) -> Option<String> {
    if let Some(caps) = tables.system_regex.captures(name) {
        let sectname = canonical_sector_name(tables, caps.name("sector")?.as_str())?;
        if sector_only {
            return Some(sectname);
        }
        let frags = fragments_from_captures(&caps, sectname)?;
        return Some(frags.to_string());
    }
    if sector_only {
        return canonical_sector_name(tables, name);
    }
    None
}

/// Check whether a string looks like a procedural system name.
///
/// `strict` additionally requires the sector portion to resolve to a real
/// sector (hand-authored or procedural).
#[must_use]
pub fn is_pg_system_name(tables: &NameTables, name: &str, strict: bool) -> bool {
    let Some(caps) = tables.system_regex.captures(name.trim()) else {
        return false;
    };
    if !strict {
        return true;
    }
    caps.name("sector")
        .is_some_and(|m| get_sector_by_name(tables, m.as_str(), true).is_some())
}

fn fragments_from_captures(
    caps: &regex::Captures<'_>,
    sector_name: String,
) -> Option<SystemFragments> {
    let letter = |group: &str| -> Option<char> {
        caps.name(group)?.as_str().chars().next().map(|c| c.to_ascii_uppercase())
    };
    let mcode_char = caps.name("mcode")?.as_str().chars().next()?.to_ascii_lowercase();
    Some(SystemFragments {
        sector: sector_name,
        l1: letter("l1")?,
        l2: letter("l2")?,
        l3: letter("l3")?,
        mcode: MassCode::from_char(mcode_char)?,
        n1: caps.name("n1").map_or(Some(0), |m| m.as_str().parse().ok())?,
        n2: caps.name("n2")?.as_str().parse().ok()?,
    })
}

/// Decompose a full system name into its canonical components.
///
/// The sector portion is canonicalized (hand-authored display name or
/// re-cased fragments); letters are uppercased and the mass code
/// lowercased. Returns `None` when the grammar does not match or the
/// sector is not recognisable.
#[must_use]
pub fn get_system_fragments(tables: &NameTables, name: &str) -> Option<SystemFragments> {
    let caps = tables.system_regex.captures(name)?;
    let sectname = canonical_sector_name(tables, caps.name("sector")?.as_str())?;
    fragments_from_captures(&caps, sectname)
}

/// Format system components back into a full name.
///
/// Inverse of [`get_system_fragments`]: `N1` is omitted when zero.
#[must_use]
pub fn format_system_name(frags: &SystemFragments) -> String {
    frags.to_string()
}

// ---------------------------------------------------------------------------
// System-in-sector positional codec
// ---------------------------------------------------------------------------

/// Linear boxel offset for a system id `(L1, L2, L3, N1)`
fn soffset_from_sysid(l1: char, l2: char, l3: char, n1: u64) -> u64 {
    let digit = |c: char| u64::from(c.to_ascii_uppercase() as u8 - b'A');
    SRP_DIVISOR3 * n1 + SRP_DIVISOR2 * digit(l3) + SRP_DIVISOR1 * digit(l2) + digit(l1)
}

/// Boxel-centre position (relative to the sector origin) and uncertainty
/// radius for a linear boxel offset
fn relpos_from_soffset(soffset: u64, mcode: MassCode) -> (Vector3, f64) {
    let row = soffset / SRP_SIDELENGTH;
    let rem = soffset % SRP_SIDELENGTH;
    let stack = rem / SRP_ROWLENGTH;
    let column = rem % SRP_ROWLENGTH;
    let cube = mcode.cube_width();
    let half = cube / 2.0;
    (
        Vector3::new(
            column as f64 * cube + half,
            stack as f64 * cube + half,
            row as f64 * cube + half,
        ),
        half,
    )
}

/// Linear boxel offset of a position relative to its sector origin
fn soffset_from_relpos(rel: Vector3, mcode: MassCode) -> Option<u64> {
    let cube = mcode.cube_width();
    let column = (rel.x / cube).floor();
    let stack = (rel.y / cube).floor();
    let row = (rel.z / cube).floor();
    if column < 0.0 || stack < 0.0 || row < 0.0 {
        return None;
    }
    Some(column as u64 + SRP_ROWLENGTH * stack as u64 + SRP_SIDELENGTH * row as u64)
}

/// Render the system-id prefix (`"AB-C d"` or `"AB-C d1-"`) for a boxel
/// offset; the caller appends `N2` when it is known
fn sysid_prefix(soffset: u64, mcode: MassCode) -> String {
    let letter = |n: u64| char::from(b'A' + (n % SRP_DIVISOR1) as u8);
    let l1 = letter(soffset);
    let l2 = letter(soffset / SRP_DIVISOR1);
    let l3 = letter(soffset / SRP_DIVISOR2);
    let n1 = soffset / SRP_DIVISOR3;
    if n1 == 0 {
        format!("{l1}{l2}-{l3} {mcode}")
    } else {
        format!("{l1}{l2}-{l3} {mcode}{n1}-")
    }
}

/// Resolve a full system name to a position and uncertainty radius.
///
/// The position is the centre of the named boxel; the uncertainty is half
/// the boxel's cube width. With `allow_ha` unset, systems whose sector is
/// hand-authored are renamed to the underlying procedural sector's system
/// id instead.
#[must_use]
pub fn get_system_from_name(
    tables: &NameTables,
    name: &str,
    allow_ha: bool,
) -> Option<PgSystem> {
    let frags = get_system_fragments(tables, name)?;
    let sect = get_sector_by_name(tables, &frags.sector, true)?;
    let soffset = soffset_from_sysid(frags.l1, frags.l2, frags.l3, frags.n1);
    let (rel, uncertainty) = relpos_from_soffset(soffset, frags.mcode);
    let cube = frags.mcode.cube_width();

    // A sysid can address beyond its sector; only hand-authored regions may
    // legitimately spill past the base cube, and then only by their own
    // positional leeway
    let leeway = if sect.class() == SectorClass::Ha {
        uncertainty
    } else {
        0.0
    };
    if rel.x > SECTOR_SIZE + leeway || rel.y > SECTOR_SIZE + leeway || rel.z > SECTOR_SIZE + leeway
    {
        return None;
    }

    let position = sect.origin(cube) + rel;
    if allow_ha {
        Some(PgSystem {
            name: frags.to_string(),
            position,
            sector: sect,
            uncertainty,
        })
    } else {
        let pg_sect = get_sector(tables, position, false)?;
        let pg_soffset = soffset_from_relpos(position - pg_sect.origin(cube), frags.mcode)?;
        let name = format!(
            "{} {}{}",
            pg_sect.name()?,
            sysid_prefix(pg_soffset, frags.mcode),
            frags.n2
        );
        Some(PgSystem {
            name,
            position,
            sector: pg_sect,
            uncertainty,
        })
    }
}

/// Derive the boxel-prototype system for a position at a mass code.
///
/// The returned name carries the sector, letters and `N1` but no `N2`
/// (ending `"... d"` or `"... d1-"`), since the run index within a boxel
/// is not derivable from position.
#[must_use]
pub fn get_system_from_pos(
    tables: &NameTables,
    pos: Vector3,
    mcode: MassCode,
    allow_ha: bool,
) -> Option<PgSystem> {
    let sect = get_sector(tables, pos, allow_ha)?;
    let cube = mcode.cube_width();
    let soffset = soffset_from_relpos(pos - sect.origin(cube), mcode)?;
    let name = format!("{} {}", sect.name()?, sysid_prefix(soffset, mcode));
    Some(PgSystem {
        name,
        position: pos,
        sector: sect,
        uncertainty: cube / 2.0,
    })
}

// ---------------------------------------------------------------------------
// Boxels and the fine position grid
// ---------------------------------------------------------------------------

/// Origin of the boxel containing a position at the given mass code
#[must_use]
pub fn get_boxel_origin(pos: Vector3, mcode: MassCode) -> Vector3 {
    let cube = mcode.cube_width();
    Vector3::new(
        pos.x - (pos.x - INTERNAL_ORIGIN.x).rem_euclid(cube),
        pos.y - (pos.y - INTERNAL_ORIGIN.y).rem_euclid(cube),
        pos.z - (pos.z - INTERNAL_ORIGIN.z).rem_euclid(cube),
    )
}

/// Coordinates of a position on the fine (1/32 ly) grid, relative to the
/// galaxy origin, or to the containing boxel when a mass code is given
#[must_use]
pub fn get_grid_coords(pos: Vector3, mcode: Option<MassCode>) -> (i64, i64, i64) {
    let origin = match mcode {
        Some(mc) => get_boxel_origin(pos, mc),
        None => INTERNAL_ORIGIN,
    };
    (
        ((pos.x - origin.x) * 32.0).round() as i64,
        ((pos.y - origin.y) * 32.0).round() as i64,
        ((pos.z - origin.z) * 32.0).round() as i64,
    )
}

/// Closest representable point on the fine (1/32 ly) position grid
#[must_use]
pub fn get_closest_grid_position(pos: Vector3) -> Vector3 {
    let (mx, my, mz) = get_grid_coords(pos, None);
    INTERNAL_ORIGIN + Vector3::new(mx as f64 / 32.0, my as f64 / 32.0, mz as f64 / 32.0)
}

// ---------------------------------------------------------------------------
// Hand-authored region enumeration
// ---------------------------------------------------------------------------

/// Enumerate hand-authored regions, optionally ordered by distance from a
/// reference point and limited to a maximum distance.
///
/// # Errors
///
/// Returns [`Error::MaxDistanceWithoutReference`] when `max_distance` is
/// given without `reference`, an ill-posed query rather than a lookup miss.
pub fn get_ha_regions<'t>(
    tables: &'t NameTables,
    reference: Option<Vector3>,
    max_distance: Option<f64>,
) -> Result<Vec<&'t HaRegion>, Error> {
    match reference {
        Some(refpos) => {
            let mut result: Vec<&HaRegion> = tables
                .ha_regions()
                .iter()
                .filter(|r| {
                    max_distance.map_or(true, |max| (refpos - r.centre).length() < max)
                })
                .collect();
            result.sort_by(|a, b| {
                let da = (refpos - a.centre).length();
                let db = (refpos - b.centre).length();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            });
            Ok(result)
        }
        None => {
            if max_distance.is_some() {
                return Err(Error::MaxDistanceWithoutReference);
            }
            Ok(tables.ha_regions().iter().collect())
        }
    }
}
