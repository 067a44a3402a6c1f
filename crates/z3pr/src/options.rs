//! Run options, loaded from a JSON config file and/or the command line.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::{Error, Subset};

/// Directory searched for offset tables when none is configured.
pub const DEFAULT_JSON_DIR: &str = "data";

/// Inserted before the extension of the input file to name the output.
pub const OUTPUT_SUFFIX: &str = "-rand-pal";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub json_dir: Option<PathBuf>,
    /// Seed for the color generator. Unseeded runs draw from OS entropy.
    ///
    /// Config files may spell "unseeded" as any negative number, `-1` by
    /// convention.
    #[serde(deserialize_with = "seed_or_unseeded")]
    pub seed: Option<u64>,
    pub mode: String,
    pub randomize_dungeon: bool,
    pub randomize_hud: bool,
    pub randomize_link_sprite: bool,
    pub randomize_sword: bool,
    pub randomize_shield: bool,
    pub randomize_overworld: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: None,
            json_dir: None,
            seed: None,
            mode: "default".to_string(),
            randomize_dungeon: false,
            randomize_hud: false,
            randomize_link_sprite: false,
            randomize_sword: false,
            randomize_shield: false,
            randomize_overworld: false,
        }
    }
}

impl Options {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_config_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn is_enabled(&self, subset: Subset) -> bool {
        match subset {
            Subset::Dungeon => self.randomize_dungeon,
            Subset::Hud => self.randomize_hud,
            Subset::LinkSprite => self.randomize_link_sprite,
            Subset::Sword => self.randomize_sword,
            Subset::Shield => self.randomize_shield,
            Subset::Overworld => self.randomize_overworld,
        }
    }

    pub fn set_enabled(&mut self, subset: Subset, enabled: bool) {
        let flag = match subset {
            Subset::Dungeon => &mut self.randomize_dungeon,
            Subset::Hud => &mut self.randomize_hud,
            Subset::LinkSprite => &mut self.randomize_link_sprite,
            Subset::Sword => &mut self.randomize_sword,
            Subset::Shield => &mut self.randomize_shield,
            Subset::Overworld => &mut self.randomize_overworld,
        };
        *flag = enabled;
    }

    /// Enabled subsets in processing order.
    #[must_use]
    pub fn subsets(&self) -> Vec<Subset> {
        Subset::ALL
            .into_iter()
            .filter(|&subset| self.is_enabled(subset))
            .collect()
    }

    #[must_use]
    pub fn json_dir(&self) -> PathBuf {
        self.json_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_DIR))
    }

    /// Explicit output file, or the input file with [`OUTPUT_SUFFIX`] added.
    #[must_use]
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_file.clone().or_else(|| {
            self.input_file
                .as_deref()
                .map(|input| append_to_file_name(input, OUTPUT_SUFFIX))
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Seed(u64),
    Unseeded(i64),
}

fn seed_or_unseeded<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Option::<RawSeed>::deserialize(deserializer)? {
        Some(RawSeed::Seed(seed)) => Some(seed),
        Some(RawSeed::Unseeded(_)) | None => None,
    })
}

/// Append `suffix` to the file stem, keeping the extension.
#[must_use]
pub fn append_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.file_stem().unwrap_or_default());
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}
