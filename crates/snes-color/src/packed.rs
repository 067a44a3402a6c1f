//! SNES CGRAM color word.
//!
//! A color is three 5-bit channels packed into a little-endian word:
//!
//! ```text
//! high byte  low byte
//! 0bbbbbgg   gggrrrrr
//! ```
//!
//! Bit 15 is unused. It is ignored on decode and written back as zero.

use crate::ColorF;

/// Largest value a 5-bit channel can hold.
pub const CHANNEL_MAX: u8 = 0x1F;

/// A 15-bit SNES color with channels in `0..=31`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnesColor {
    red: u8,
    green: u8,
    blue: u8,
}

const fn clamp_channel(value: u8) -> u8 {
    if value > CHANNEL_MAX {
        CHANNEL_MAX
    } else {
        value
    }
}

/// Scale a unit-interval channel to the nearest 5-bit value.
fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * f64::from(CHANNEL_MAX)).round() as u8
}

impl SnesColor {
    /// Build a color from 5-bit channels. Out-of-range channels clamp to 31.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    #[must_use]
    pub const fn from_word(word: u16) -> Self {
        Self {
            red: (word & 0x1F) as u8,
            green: ((word >> 5) & 0x1F) as u8,
            blue: ((word >> 10) & 0x1F) as u8,
        }
    }

    #[must_use]
    pub const fn to_word(self) -> u16 {
        (self.red as u16) | ((self.green as u16) << 5) | ((self.blue as u16) << 10)
    }

    /// Decode from the two bytes of a CGRAM entry, low byte first.
    #[must_use]
    pub const fn from_low_high(low: u8, high: u8) -> Self {
        Self::from_word(u16::from_le_bytes([low, high]))
    }

    /// Red and the low 3 bits of green.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.to_word() as u8
    }

    /// High 2 bits of green and all of blue.
    #[must_use]
    pub const fn high(self) -> u8 {
        (self.to_word() >> 8) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.blue
    }

    /// Quantize a float color to the nearest 5-bit channel values.
    #[must_use]
    pub fn from_color_f(color: ColorF) -> Self {
        Self {
            red: quantize(color.red()),
            green: quantize(color.green()),
            blue: quantize(color.blue()),
        }
    }

    /// Scale each channel linearly into `[0, 1]`.
    #[must_use]
    pub fn to_color_f(self) -> ColorF {
        let max = f64::from(CHANNEL_MAX);
        ColorF::from_rgb(
            f64::from(self.red) / max,
            f64::from(self.green) / max,
            f64::from(self.blue) / max,
        )
    }
}

impl From<u16> for SnesColor {
    fn from(word: u16) -> Self {
        Self::from_word(word)
    }
}

impl From<SnesColor> for u16 {
    fn from(color: SnesColor) -> Self {
        color.to_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_layout() {
        let color = SnesColor::new(0x1F, 0, 0);
        assert_eq!(color.to_word(), 0x001F);
        let color = SnesColor::new(0, 0x1F, 0);
        assert_eq!(color.to_word(), 0x03E0);
        let color = SnesColor::new(0, 0, 0x1F);
        assert_eq!(color.to_word(), 0x7C00);
    }

    #[test]
    fn low_and_high_bytes_split_green() {
        // Green 0b10101: low 3 bits land in the low byte, high 2 in the high byte.
        let color = SnesColor::new(0b00011, 0b10101, 0b11000);
        assert_eq!(color.low(), 0b1010_0011);
        assert_eq!(color.high(), 0b0110_0010);
        assert_eq!(SnesColor::from_low_high(color.low(), color.high()), color);
    }

    #[test]
    fn bit_15_is_ignored() {
        assert_eq!(SnesColor::from_word(0x8000), SnesColor::default());
        assert_eq!(SnesColor::from_word(0xFFFF).to_word(), 0x7FFF);
    }

    #[test]
    fn channels_clamp_to_five_bits() {
        let color = SnesColor::new(32, 200, 255);
        assert_eq!((color.red(), color.green(), color.blue()), (31, 31, 31));
    }

    #[test]
    fn float_conversion_clamps_drift() {
        let color = SnesColor::from_color_f(ColorF::from_rgb(1.0, 0.0, 0.5));
        assert_eq!((color.red(), color.green(), color.blue()), (31, 0, 16));
    }

    #[test]
    fn u16_conversions() {
        let color: SnesColor = 0x1234.into();
        assert_eq!(u16::from(color), 0x1234);
    }
}
