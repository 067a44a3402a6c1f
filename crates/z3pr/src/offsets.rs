//! Offset tables: which ROM offsets hold which palette subsets.
//!
//! Each subset lives in `<stem>.json`, a JSON array of offset collections.
//! A collection is an array of signed offsets; negative values address OAM
//! color entries at the absolute offset.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use snes_color::Slot;
use tracing::debug;

use crate::Error;

/// Palette subsets that can be randomized independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subset {
    Dungeon,
    Hud,
    LinkSprite,
    Sword,
    Shield,
    Overworld,
}

impl Subset {
    /// Every subset, in processing order.
    pub const ALL: [Self; 6] = [
        Self::Dungeon,
        Self::Hud,
        Self::LinkSprite,
        Self::Sword,
        Self::Shield,
        Self::Overworld,
    ];

    /// File stem of the subset's offset table.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Dungeon => "dungeon",
            Self::Hud => "hud",
            Self::LinkSprite => "link_sprite",
            Self::Sword => "sword",
            Self::Shield => "shield",
            Self::Overworld => "overworld",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.stem())
    }
}

impl FromStr for Subset {
    type Err = String;

    /// Accepts the file stem with either `_` or `-` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|subset| subset.stem() == name)
            .ok_or_else(|| format!("unknown palette subset {s:?}"))
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

fn parse_collections(json: &str) -> Result<Vec<Vec<Slot>>, Error> {
    let raw: Vec<Vec<i64>> = serde_json::from_str(json)?;
    Ok(to_slots(raw))
}

fn to_slots(raw: Vec<Vec<i64>>) -> Vec<Vec<Slot>> {
    raw.into_iter()
        .map(|offsets| offsets.into_iter().map(Slot::from_signed).collect())
        .collect()
}

/// Offset collections keyed by subset.
///
/// Load once with [`OffsetTable::load_all`] to reuse across many ROMs.
#[derive(Debug, Clone, Default)]
pub struct OffsetTable {
    subsets: BTreeMap<Subset, Vec<Vec<Slot>>>,
}

impl OffsetTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding a single subset parsed from in-memory JSON.
    pub fn from_json_str(subset: Subset, json: &str) -> Result<Self, Error> {
        let mut table = Self::new();
        table.insert_json_str(subset, json)?;
        Ok(table)
    }

    /// Parse `json` and insert it as `subset`, replacing any previous entry.
    pub fn insert_json_str(&mut self, subset: Subset, json: &str) -> Result<(), Error> {
        let collections = parse_collections(json)?;
        debug!(%subset, collections = collections.len(), "parsed offset table");
        self.insert(subset, collections);
        Ok(())
    }

    /// Read the tables for `subsets` from `dir`.
    pub fn load(dir: &Path, subsets: &[Subset]) -> Result<Self, Error> {
        let mut table = Self::new();
        for &subset in subsets {
            let path = dir.join(subset.file_name());
            let text = fs::read_to_string(&path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            let raw: Vec<Vec<i64>> =
                serde_json::from_str(&text).map_err(|source| Error::Json { path, source })?;
            let collections = to_slots(raw);
            debug!(%subset, collections = collections.len(), "loaded offset table");
            table.insert(subset, collections);
        }
        Ok(table)
    }

    /// Read every subset's table from `dir`.
    pub fn load_all(dir: &Path) -> Result<Self, Error> {
        Self::load(dir, &Subset::ALL)
    }

    pub fn insert(&mut self, subset: Subset, collections: Vec<Vec<Slot>>) {
        self.subsets.insert(subset, collections);
    }

    #[must_use]
    pub fn contains(&self, subset: Subset) -> bool {
        self.subsets.contains_key(&subset)
    }

    /// Collections of the requested subsets, in subset processing order.
    ///
    /// Subsets missing from the table contribute nothing.
    pub fn collections<'a>(&'a self, subsets: &[Subset]) -> impl Iterator<Item = &'a [Slot]> {
        self.subsets
            .iter()
            .filter(|&(subset, _)| subsets.contains(subset))
            .flat_map(|(_, collections)| collections.iter().map(Vec::as_slice))
    }
}
