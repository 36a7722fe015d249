// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! One-time construction of the run-offset tables shared by both codecs

use crate::data;
use crate::sector::HaRegion;
use crate::vector::Vector3;
use regex::Regex;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// System name grammar: `<sector> <L1><L2>-<L3> <mcode>[<n1>-]<n2>`
const PG_SYSTEM_PATTERN: &str = r"^(?P<sector>[\w\s'.()/-]+) (?P<l1>[A-Za-z])(?P<l2>[A-Za-z])-(?P<l3>[A-Za-z]) (?P<mcode>[A-Za-z])(?:(?P<n1>\d+)-)?(?P<n2>\d+)$";

/// Run placement of a fragment: cumulative start offset and run length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Offset of the first run member over the whole enumeration
    pub start: u64,
    /// Number of members in this fragment's run
    pub length: u64,
}

impl RunSpan {
    fn covers(&self, offset: u64) -> bool {
        offset >= self.start && offset < self.start + self.length
    }
}

/// Immutable lookup tables for the name codecs.
///
/// Built once at startup and then only read; share it by reference (it is
/// `Sync`, so `&NameTables` may cross threads freely).
pub struct NameTables {
    /// Master fragment vocabulary sorted longest-first for greedy matching
    pub(crate) fragments: Vec<&'static str>,
    /// Prefixes in enumeration order
    pub(crate) prefixes: &'static [&'static str],
    pub(crate) prefix_spans: HashMap<&'static str, RunSpan>,
    /// Total run length over all prefixes (the prefix-space modulus)
    pub(crate) prefix_total_run_length: u64,
    pub(crate) infix_spans: HashMap<&'static str, RunSpan>,
    pub(crate) infix_s1_total_run_length: u64,
    pub(crate) infix_s2_total_run_length: u64,
    /// Class-2 sequence-2 suffixes (a prefix of the class-1 list)
    pub(crate) c2_suffixes_s2: &'static [&'static str],
    pub(crate) system_regex: Regex,
    pub(crate) ha_regions: Vec<HaRegion>,
    /// Case-folded region name -> index into `ha_regions`
    pub(crate) ha_index: HashMap<String, usize>,
}

impl Default for NameTables {
    fn default() -> Self {
        Self::new()
    }
}

impl NameTables {
    /// Build every lookup table from the static data.
    ///
    /// # Panics
    ///
    /// Panics if the built-in system name pattern fails to compile, which
    /// cannot happen for the shipped constant.
    #[must_use]
    pub fn new() -> Self {
        let started = Instant::now();

        let mut fragments: Vec<&'static str> = data::CX_RAW_FRAGMENTS.to_vec();
        // Stable sort: equal-length fragments keep their table order
        fragments.sort_by_key(|f| std::cmp::Reverse(f.len()));

        let prefixes = &data::CX_RAW_FRAGMENTS[..data::PREFIX_COUNT];

        let mut prefix_spans = HashMap::new();
        let mut cursor = 0u64;
        for p in prefixes {
            let length = prefix_run_length(p);
            prefix_spans.insert(*p, RunSpan { start: cursor, length });
            cursor += length;
        }
        let prefix_total_run_length = cursor;

        let mut infix_spans = HashMap::new();
        let mut s1_cursor = 0u64;
        for i in data::C1_INFIXES_S1 {
            let length = infix_run_length_in(i, InfixSequence::S1);
            infix_spans.insert(*i, RunSpan { start: s1_cursor, length });
            s1_cursor += length;
        }
        let mut s2_cursor = 0u64;
        for i in data::C1_INFIXES_S2 {
            let length = infix_run_length_in(i, InfixSequence::S2);
            infix_spans.insert(*i, RunSpan { start: s2_cursor, length });
            s2_cursor += length;
        }

        let system_regex =
            Regex::new(PG_SYSTEM_PATTERN).expect("built-in system name pattern must compile");

        let mut ha_regions = Vec::with_capacity(data::HA_REGIONS.len());
        let mut ha_index = HashMap::new();
        for (name, [x, y, z], radius) in data::HA_REGIONS {
            ha_index.insert(name.to_lowercase(), ha_regions.len());
            ha_regions.push(HaRegion {
                name: (*name).to_string(),
                centre: Vector3::new(*x, *y, *z),
                radius: *radius,
            });
        }

        let tables = Self {
            fragments,
            prefixes,
            prefix_spans,
            prefix_total_run_length,
            infix_spans,
            infix_s1_total_run_length: s1_cursor,
            infix_s2_total_run_length: s2_cursor,
            c2_suffixes_s2: &data::C1_SUFFIXES_S2[..data::CX_SUFFIXES_S1.len()],
            system_regex,
            ha_regions,
            ha_index,
        };
        debug!(elapsed = ?started.elapsed(), "name tables constructed");
        tables
    }

    /// Whether the fragment is one of the 111 prefixes
    #[must_use]
    pub fn is_prefix(&self, frag: &str) -> bool {
        self.prefix_spans.contains_key(frag)
    }

    /// Run placement of a prefix
    pub(crate) fn prefix_span(&self, frag: &str) -> Option<RunSpan> {
        self.prefix_spans.get(frag).copied()
    }

    /// Run placement of a class-1 infix
    pub(crate) fn infix_span(&self, frag: &str) -> Option<RunSpan> {
        self.infix_spans.get(frag).copied()
    }

    /// Find the prefix whose run covers a prefix-space offset
    pub(crate) fn prefix_for_offset(&self, offset: u64) -> Option<&'static str> {
        self.prefixes
            .iter()
            .find(|p| self.prefix_spans[*p].covers(offset))
            .copied()
    }

    /// Find, within one infix sequence, the infix whose run covers an offset
    pub(crate) fn infix_for_offset(
        &self,
        sequence: InfixSequence,
        offset: u64,
    ) -> Option<&'static str> {
        sequence
            .members()
            .iter()
            .find(|i| self.infix_spans[*i].covers(offset))
            .copied()
    }

    /// Total run length of the given infix sequence
    pub(crate) fn infix_total_run_length(&self, sequence: InfixSequence) -> u64 {
        match sequence {
            InfixSequence::S1 => self.infix_s1_total_run_length,
            InfixSequence::S2 => self.infix_s2_total_run_length,
        }
    }

    /// The hand-authored regions, in table order
    #[must_use]
    pub fn ha_regions(&self) -> &[HaRegion] {
        &self.ha_regions
    }

    /// Look up a hand-authored region by (case-insensitive) name
    #[must_use]
    pub fn ha_region_by_name(&self, name: &str) -> Option<&HaRegion> {
        self.ha_index
            .get(&name.to_lowercase())
            .map(|&idx| &self.ha_regions[idx])
    }
}

/// The two infix sequences of class-1 names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixSequence {
    /// Vowel-ish
    S1,
    /// Consonant-ish
    S2,
}

impl InfixSequence {
    /// The fragments making up this sequence, in enumeration order
    #[must_use]
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            InfixSequence::S1 => data::C1_INFIXES_S1,
            InfixSequence::S2 => data::C1_INFIXES_S2,
        }
    }

    /// The other sequence
    #[must_use]
    pub fn other(&self) -> InfixSequence {
        match self {
            InfixSequence::S1 => InfixSequence::S2,
            InfixSequence::S2 => InfixSequence::S1,
        }
    }

    /// Which sequence a fragment belongs to, if either
    #[must_use]
    pub fn of(frag: &str) -> Option<InfixSequence> {
        if data::C1_INFIXES_S1.contains(&frag) {
            Some(InfixSequence::S1)
        } else if data::C1_INFIXES_S2.contains(&frag) {
            Some(InfixSequence::S2)
        } else {
            None
        }
    }
}

/// Run length of a prefix (e.g. `Th` => 35, `Tz` => 1)
#[must_use]
pub fn prefix_run_length(frag: &str) -> u64 {
    data::CX_PREFIX_LENGTH_OVERRIDES
        .iter()
        .find(|(f, _)| *f == frag)
        .map_or(data::CX_PREFIX_LENGTH_DEFAULT, |(_, len)| *len)
}

fn infix_run_length_in(frag: &str, sequence: InfixSequence) -> u64 {
    let default = match sequence {
        // S1 infixes run over the sequence-2 suffixes and vice versa
        InfixSequence::S1 => data::C1_SUFFIXES_S2.len() as u64,
        InfixSequence::S2 => data::CX_SUFFIXES_S1.len() as u64,
    };
    data::C1_INFIX_LENGTH_OVERRIDES
        .iter()
        .find(|(f, _)| *f == frag)
        .map_or(default, |(_, len)| *len)
}

/// Run length of a class-1 infix, honouring the override table
#[must_use]
pub fn infix_run_length(frag: &str) -> u64 {
    match InfixSequence::of(frag) {
        Some(seq) => infix_run_length_in(frag, seq),
        None => 0,
    }
}
