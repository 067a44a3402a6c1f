//! Addressed color slots inside a ROM image.
//!
//! A slot is either a raw CGRAM word (2 bytes) or an OAM color entry
//! (5 bytes). The OAM layout scatters the channels over separate bytes,
//! each tagged with a fixed marker bit:
//!
//! ```text
//! +0  red   | 0x20
//! +1  green | 0x40
//! +2  (not a color byte, never touched)
//! +3  green | 0x40   (duplicate of +1)
//! +4  blue  | 0x80
//! ```

use std::fmt;

use crate::{CHANNEL_MAX, ColorError, SnesColor};

pub const OAM_RED_MARK: u8 = 0x20;
pub const OAM_GREEN_MARK: u8 = 0x40;
pub const OAM_BLUE_MARK: u8 = 0x80;

/// On-disk layout of a color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Packed little-endian CGRAM word.
    Raw,
    /// Scattered 5-byte OAM form with marker bits.
    Oam,
}

impl Encoding {
    /// Number of bytes one color occupies.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Raw => 2,
            Self::Oam => 5,
        }
    }
}

/// A color location: byte offset plus the encoding used there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Raw(usize),
    Oam(usize),
}

impl Slot {
    /// Interpret a signed offset from an offset table.
    ///
    /// Non-negative offsets are raw slots; negative offsets are OAM slots at
    /// the absolute value. An OAM slot at offset 0 cannot be expressed this
    /// way and must be built with [`Slot::Oam`] directly.
    #[must_use]
    pub fn from_signed(offset: i64) -> Self {
        if offset >= 0 {
            Self::Raw(offset as usize)
        } else {
            Self::Oam(offset.unsigned_abs() as usize)
        }
    }

    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Raw(offset) | Self::Oam(offset) => offset,
        }
    }

    #[must_use]
    pub const fn encoding(self) -> Encoding {
        match self {
            Self::Raw(_) => Encoding::Raw,
            Self::Oam(_) => Encoding::Oam,
        }
    }

    #[must_use]
    pub const fn width(self) -> usize {
        self.encoding().width()
    }

    /// Fail unless the whole slot fits inside a buffer of `len` bytes.
    pub fn check(self, len: usize) -> Result<(), ColorError> {
        match self.offset().checked_add(self.width()) {
            Some(end) if end <= len => Ok(()),
            _ => Err(ColorError::OutOfBounds { slot: self, len }),
        }
    }

    /// Decode the color stored at this slot.
    pub fn read(self, data: &[u8]) -> Result<SnesColor, ColorError> {
        self.check(data.len())?;
        let at = self.offset();
        let color = match self {
            Self::Raw(_) => SnesColor::from_low_high(data[at], data[at + 1]),
            Self::Oam(_) => SnesColor::new(
                data[at] & CHANNEL_MAX,
                data[at + 1] & CHANNEL_MAX,
                data[at + 4] & CHANNEL_MAX,
            ),
        };
        Ok(color)
    }

    /// Encode `color` into this slot, leaving every other byte alone.
    pub fn write(self, data: &mut [u8], color: SnesColor) -> Result<(), ColorError> {
        self.check(data.len())?;
        let at = self.offset();
        match self {
            Self::Raw(_) => {
                data[at] = color.low();
                data[at + 1] = color.high();
            }
            Self::Oam(_) => {
                let green = color.green() | OAM_GREEN_MARK;
                data[at] = color.red() | OAM_RED_MARK;
                data[at + 1] = green;
                data[at + 3] = green;
                data[at + 4] = color.blue() | OAM_BLUE_MARK;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(offset) => write!(f, "raw slot ${offset:06X}"),
            Self::Oam(offset) => write!(f, "OAM slot ${offset:06X}"),
        }
    }
}
