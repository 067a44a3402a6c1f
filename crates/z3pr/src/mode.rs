//! Palette modes and their dispatch table.

use std::fmt;
use std::str::FromStr;

use snes_color::{BlendFn, ColorF, acid_blend, hue_blend, luma_blend, maseya_blend};

use crate::Error;

/// How an editor spends generated colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One generated color shared by every slot in a collection.
    Uniform,
    /// A fresh generated color for each slot.
    PerSlot,
}

/// Where the generated colors for a mode come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceKind {
    /// The caller's source (random generator or replayed list).
    Generator,
    /// A constant color; the caller's source is left untouched.
    Fixed(ColorF),
}

/// Resolved behaviour of a mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeEntry {
    pub transform: BlendFn,
    pub source: SourceKind,
    pub strategy: Strategy,
}

impl ModeEntry {
    const fn new(transform: BlendFn, source: SourceKind, strategy: Strategy) -> Self {
        Self {
            transform,
            source,
            strategy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    None,
    Maseya,
    Grayscale,
    Negative,
    Blackout,
    Classic,
    Dizzy,
    Sick,
    Puke,
}

fn grayscale(color: ColorF, _: ColorF) -> ColorF {
    color.grayscale()
}

fn negative(color: ColorF, _: ColorF) -> ColorF {
    color.inverse()
}

fn generated(_: ColorF, changes: ColorF) -> ColorF {
    changes
}

// Generated color supplies hue and chroma; the ROM color keeps its luma.
fn sick(color: ColorF, changes: ColorF) -> ColorF {
    luma_blend(changes, color)
}

impl Mode {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Maseya,
        Self::Grayscale,
        Self::Negative,
        Self::Blackout,
        Self::Classic,
        Self::Dizzy,
        Self::Sick,
        Self::Puke,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Maseya => "maseya",
            Self::Grayscale => "grayscale",
            Self::Negative => "negative",
            Self::Blackout => "blackout",
            Self::Classic => "classic",
            Self::Dizzy => "dizzy",
            Self::Sick => "sick",
            Self::Puke => "puke",
        }
    }

    /// Transform, source and strategy for this mode. `None` has no entry.
    #[must_use]
    pub fn entry(self) -> Option<ModeEntry> {
        use SourceKind::{Fixed, Generator};
        use Strategy::{PerSlot, Uniform};

        let entry = match self {
            Self::None => return None,
            Self::Maseya => ModeEntry::new(maseya_blend, Generator, Uniform),
            Self::Grayscale => ModeEntry::new(grayscale, Fixed(ColorF::BLACK), Uniform),
            Self::Negative => ModeEntry::new(negative, Fixed(ColorF::BLACK), Uniform),
            Self::Blackout => ModeEntry::new(generated, Fixed(ColorF::BLACK), Uniform),
            Self::Classic => ModeEntry::new(acid_blend, Generator, Uniform),
            Self::Dizzy => ModeEntry::new(hue_blend, Generator, PerSlot),
            Self::Sick => ModeEntry::new(sick, Generator, PerSlot),
            Self::Puke => ModeEntry::new(generated, Generator, PerSlot),
        };
        Some(entry)
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Case-insensitive lookup including the accepted alternate spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.to_ascii_lowercase().as_str() {
            "none" => Self::None,
            "maseya" | "default" => Self::Maseya,
            "grayscale" | "greyscale" => Self::Grayscale,
            "negative" | "invert" | "inverse" | "inverted" => Self::Negative,
            "blackout" => Self::Blackout,
            "classic" => Self::Classic,
            "dizzy" => Self::Dizzy,
            "sick" => Self::Sick,
            "puke" => Self::Puke,
            _ => return Err(Error::UnknownMode(s.to_string())),
        };
        Ok(mode)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
