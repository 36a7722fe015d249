// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Static phoneme and region tables for procedural sector names
//!
//! These lists are order-significant: run offsets are accumulated in table
//! order, and the first 111 fragments double as the prefix vocabulary.
//! Changing any entry silently renames swathes of the galaxy, so the data
//! is kept verbatim and the derived totals are recomputed at startup
//! rather than hardcoded.

/// Hopefully-complete list of valid name fragments / phonemes.
///
/// The first [`PREFIX_COUNT`] entries are the prefixes, in enumeration
/// order; the remainder are the infix/suffix fragments.
pub const CX_RAW_FRAGMENTS: &[&str] = &[
    "Th", "Eo", "Oo", "Eu", "Tr", "Sly", "Dry", "Ou",
    "Tz", "Phl", "Ae", "Sch", "Hyp", "Syst", "Ai", "Kyl",
    "Phr", "Eae", "Ph", "Fl", "Ao", "Scr", "Shr", "Fly",
    "Pl", "Fr", "Au", "Pry", "Pr", "Hyph", "Py", "Chr",
    "Phyl", "Tyr", "Bl", "Cry", "Gl", "Br", "Gr", "By",
    "Aae", "Myc", "Gyr", "Ly", "Myl", "Lych", "Myn", "Ch",
    "Myr", "Cl", "Rh", "Wh", "Pyr", "Cr", "Syn", "Str",
    "Syr", "Cy", "Wr", "Hy", "My", "Sty", "Sc", "Sph",
    "Spl", "A", "Sh", "B", "C", "D", "Sk", "Io",
    "Dr", "E", "Sl", "F", "Sm", "G", "H", "I",
    "Sp", "J", "Sq", "K", "L", "Pyth", "M", "St",
    "N", "O", "Ny", "Lyr", "P", "Sw", "Thr", "Lys",
    "Q", "R", "S", "T", "Ea", "U", "V", "W",
    "Schr", "X", "Ee", "Y", "Z", "Ei", "Oe",

    "ll", "ss", "b", "c", "d", "f", "dg", "g", "ng", "h", "j", "k", "l", "m", "n",
    "mb", "p", "q", "gn", "th", "r", "s", "t", "ch", "tch", "v", "w", "wh",
    "ck", "x", "y", "z", "ph", "sh", "ct", "wr", "o", "ai", "a", "oi", "ea",
    "ie", "u", "e", "ee", "oo", "ue", "i", "oa", "au", "ae", "oe", "scs",
    "wsy", "vsky", "sms", "dst", "rb", "nts", "rd", "rld", "lls", "rgh",
    "rg", "hm", "hn", "rk", "rl", "rm", "cs", "wyg", "rn", "hs", "rbs", "rp",
    "tts", "wn", "ms", "rr", "mt", "rs", "cy", "rt", "ws", "lch", "my", "ry",
    "nks", "nd", "sc", "nk", "sk", "nn", "ds", "sm", "sp", "ns", "nt", "dy",
    "st", "rrs", "xt", "nz", "sy", "xy", "rsch", "rphs", "sts", "sys", "sty",
    "tl", "tls", "rds", "nch", "rns", "ts", "wls", "rnt", "tt", "rdy", "rst",
    "pps", "tz", "sks", "ppy", "ff", "sps", "kh", "sky", "lts", "wnst", "rth",
    "ths", "fs", "pp", "ft", "ks", "pr", "ps", "pt", "fy", "rts", "ky",
    "rshch", "mly", "py", "bb", "nds", "wry", "zz", "nns", "ld", "lf",
    "gh", "lks", "sly", "lk", "rph", "ln", "bs", "rsts", "gs", "ls", "vvy",
    "lt", "rks", "qs", "rps", "gy", "wns", "lz", "nth", "phs", "io", "oea",
    "aa", "ua", "eia", "ooe", "iae", "oae", "ou", "uae", "ao", "eae", "aea",
    "ia", "eou", "aei", "uia", "aae", "eau",
];

/// Number of leading entries of [`CX_RAW_FRAGMENTS`] that are prefixes
pub const PREFIX_COUNT: usize = 111;

/// Vowel-ish infixes (sequence 1)
pub const C1_INFIXES_S1: &[&str] = &[
    "o", "ai", "a", "oi", "ea", "ie", "u", "e",
    "ee", "oo", "ue", "i", "oa", "au", "ae", "oe",
];

/// Consonant-ish infixes (sequence 2)
pub const C1_INFIXES_S2: &[&str] = &[
    "ll", "ss", "b", "c", "d", "f", "dg", "g",
    "ng", "h", "j", "k", "l", "m", "n", "mb",
    "p", "q", "gn", "th", "r", "s", "t", "ch",
    "tch", "v", "w", "wh", "ck", "x", "y", "z",
    "ph", "sh", "ct", "wr",
];

/// Suffixes, sequence 1 (vowel-ish; shared by class 1 and class 2)
pub const CX_SUFFIXES_S1: &[&str] = &[
    "oe", "io", "oea", "oi", "aa", "ua", "eia", "ae",
    "ooe", "oo", "a", "ue", "ai", "e", "iae", "oae",
    "ou", "uae", "i", "ao", "au", "o", "eae", "u",
    "aea", "ia", "ie", "eou", "aei", "ea", "uia", "oa",
    "aae", "eau", "ee",
];

/// Suffixes, sequence 2 (consonant-ish, class 1; class 2 uses a prefix of
/// this list the same length as [`CX_SUFFIXES_S1`])
pub const C1_SUFFIXES_S2: &[&str] = &[
    "b", "scs", "wsy", "c", "d", "vsky", "f", "sms",
    "dst", "g", "rb", "h", "nts", "ch", "rd", "rld",
    "k", "lls", "ck", "rgh", "l", "rg", "m", "n",
    "hm", "p", "hn", "rk", "q", "rl", "r", "rm",
    "s", "cs", "wyg", "rn", "ct", "t", "hs", "rbs",
    "rp", "tts", "v", "wn", "ms", "w", "rr", "mt",
    "x", "rs", "cy", "y", "rt", "z", "ws", "lch",
    "my", "ry", "nks", "nd", "sc", "ng", "sh", "nk",
    "sk", "nn", "ds", "sm", "sp", "ns", "nt", "dy",
    "ss", "st", "rrs", "xt", "nz", "sy", "xy", "rsch",
    "rphs", "sts", "sys", "sty", "th", "tl", "tls", "rds",
    "nch", "rns", "ts", "wls", "rnt", "tt", "rdy", "rst",
    "pps", "tz", "tch", "sks", "ppy", "ff", "sps", "kh",
    "sky", "ph", "lts", "wnst", "rth", "ths", "fs", "pp",
    "ft", "ks", "pr", "ps", "pt", "fy", "rts", "ky",
    "rshch", "mly", "py", "bb", "nds", "wry", "zz", "nns",
    "ld", "lf", "gh", "lks", "sly", "lk", "ll", "rph",
    "ln", "bs", "rsts", "gs", "ls", "vvy", "lt", "rks",
    "qs", "rps", "gy", "wns", "lz", "nth", "phs",
];

/// Prefixes whose class-2 suffix run draws from sequence 2 instead of 1
pub const C2_PREFIX_SUFFIX_OVERRIDES: &[&str] = &[
    "Eo", "Oo", "Eu", "Ou", "Ae", "Ai", "Eae", "Ao", "Au", "Aae",
];

/// Prefixes whose class-1 first infix draws from sequence 2 instead of 1
pub const C1_PREFIX_INFIX_OVERRIDES: &[&str] = &[
    "Eo", "Oo", "Eu", "Ou", "Ae", "Ai", "Eae", "Ao",
    "Au", "Aae", "A", "Io", "E", "I", "O", "Ea",
    "U", "Ee", "Ei", "Oe",
];

/// The default run length for most prefixes
pub const CX_PREFIX_LENGTH_DEFAULT: u64 = 35;

/// Prefixes with a non-default run length
pub const CX_PREFIX_LENGTH_OVERRIDES: &[(&str, u64)] = &[
    ("Eu", 31), ("Sly", 4), ("Tz", 1), ("Phl", 13),
    ("Ae", 12), ("Hyp", 25), ("Kyl", 30), ("Phr", 10),
    ("Eae", 4), ("Ao", 5), ("Scr", 24), ("Shr", 11),
    ("Fly", 20), ("Pry", 3), ("Hyph", 14), ("Py", 12),
    ("Phyl", 8), ("Tyr", 25), ("Cry", 5), ("Aae", 5),
    ("Myc", 2), ("Gyr", 10), ("Myl", 12), ("Lych", 3),
    ("Myn", 10), ("Myr", 4), ("Rh", 15), ("Wr", 31),
    ("Sty", 4), ("Spl", 16), ("Sk", 27), ("Sq", 7),
    ("Pyth", 1), ("Lyr", 10), ("Sw", 24), ("Thr", 32),
    ("Lys", 10), ("Schr", 3), ("Z", 34),
];

/// Infixes with a non-default run length (both sequences share the map)
pub const C1_INFIX_LENGTH_OVERRIDES: &[(&str, u64)] = &[
    // Sequence 1
    ("oi", 88), ("ue", 147), ("oa", 57),
    ("au", 119), ("ae", 12), ("oe", 39),
    // Sequence 2
    ("dg", 31), ("tch", 20), ("wr", 31),
];

/// Hand-authored (designer-named) regions: display name, centre, radius.
///
/// Curated from the well-known nebula and bubble sectors; table order is
/// the enumeration order reported by region queries. Every entry is a
/// sphere; positions inside one of these take the region's name in
/// preference to the procedural sector name.
pub const HA_REGIONS: &[(&str, [f64; 3], f64)] = &[
    ("Core Sys Sector", [0.0, 0.0, 0.0], 50.0),
    ("Hyades Sector", [0.0, -60.0, -110.0], 100.0),
    ("Pleiades Sector", [-80.0, -150.0, -340.0], 100.0),
    ("California Sector", [-340.0, -220.0, -920.0], 100.0),
    ("Col 70 Sector", [420.0, -120.0, -330.0], 150.0),
    ("Witch Head Sector", [360.0, -390.0, -700.0], 100.0),
    ("Orion Sector", [600.0, -420.0, -1310.0], 150.0),
    ("Horsehead Sector", [610.0, -390.0, -900.0], 150.0),
    ("Barnard's Loop Sector", [740.0, -360.0, -1290.0], 200.0),
    ("Rosette Sector", [1650.0, -180.0, -4750.0], 150.0),
    ("Cone Sector", [850.0, 100.0, -2300.0], 100.0),
    ("NGC 2264 Sector", [830.0, 50.0, -2410.0], 100.0),
    ("Jellyfish Sector", [800.0, 210.0, -4950.0], 100.0),
    ("IC 443 Sector", [840.0, 250.0, -4910.0], 100.0),
    ("Crab Sector", [550.0, -410.0, -6700.0], 100.0),
    ("Elephant's Trunk Sector", [-2690.0, 150.0, -2400.0], 100.0),
    ("NGC 7822 Sector", [-2460.0, 310.0, -1500.0], 150.0),
    ("Heart Sector", [-5320.0, 130.0, -5630.0], 150.0),
    ("Soul Sector", [-5100.0, 100.0, -5420.0], 150.0),
    ("North America Sector", [-300.0, 250.0, 1800.0], 100.0),
    ("Pelican Sector", [-350.0, 260.0, 1860.0], 100.0),
    ("Veil West Sector", [-1400.0, 200.0, 1350.0], 100.0),
    ("Veil East Sector", [-1200.0, 280.0, 1400.0], 100.0),
    ("Lagoon Sector", [-470.0, -90.0, 4450.0], 100.0),
    ("Trifid Sector", [-630.0, -20.0, 5200.0], 100.0),
    ("Omega Sector", [-1440.0, -80.0, 5480.0], 100.0),
    ("Eagle Sector", [-2040.0, 80.0, 6600.0], 100.0),
];
