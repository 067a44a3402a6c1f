//! Unit-interval RGB color with a hue/chroma/luma (HCY) view.
//!
//! Hue is hexagonal and measured in turns, so `hue + 1.0` names the same
//! hue. Chroma is `max - min` of the RGB channels. Luma is the Rec. 601
//! weighted sum of the channels. Because the weights sum to one, `from_hcy`
//! inverts `to_hcy` exactly up to float rounding, which keeps every 15-bit
//! color stable through a round trip.

use crate::SnesColor;

pub const LUMA_RED: f64 = 0.299;
pub const LUMA_GREEN: f64 = 0.587;
pub const LUMA_BLUE: f64 = 0.114;

/// Hue (turns), chroma and luma of a color.
///
/// Values here are unclamped: blend math may push them outside the
/// representable gamut before [`ColorF::from_hcy`] brings them back.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Hcy {
    pub hue: f64,
    pub chroma: f64,
    pub luma: f64,
}

/// RGB color with each channel clamped to `[0, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ColorF {
    red: f64,
    green: f64,
    blue: f64,
}

impl ColorF {
    pub const BLACK: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
    };

    pub const WHITE: Self = Self {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
    };

    #[must_use]
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
        }
    }

    /// Build a color from hue (turns, any real), chroma and luma.
    ///
    /// Channels that land outside `[0, 1]` are clamped.
    #[must_use]
    pub fn from_hcy(hue: f64, chroma: f64, luma: f64) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            // Sector 5, and h == 6.0 when a tiny negative hue wraps to 1.0.
            _ => (chroma, 0.0, x),
        };
        let m = luma - weighted_luma(r, g, b);
        Self::from_rgb(r + m, g + m, b + m)
    }

    #[must_use]
    pub const fn red(self) -> f64 {
        self.red
    }

    #[must_use]
    pub const fn green(self) -> f64 {
        self.green
    }

    #[must_use]
    pub const fn blue(self) -> f64 {
        self.blue
    }

    /// Position on the color wheel in `[0, 1)`. Neutral grays report 0.
    #[must_use]
    pub fn hue(self) -> f64 {
        let max = self.max();
        let chroma = self.chroma();
        if chroma == 0.0 {
            return 0.0;
        }
        let sector = if max == self.red {
            ((self.green - self.blue) / chroma).rem_euclid(6.0)
        } else if max == self.green {
            (self.blue - self.red) / chroma + 2.0
        } else {
            (self.red - self.green) / chroma + 4.0
        };
        sector / 6.0
    }

    #[must_use]
    pub fn chroma(self) -> f64 {
        self.max() - self.min()
    }

    #[must_use]
    pub fn luma(self) -> f64 {
        weighted_luma(self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_hcy(self) -> Hcy {
        Hcy {
            hue: self.hue(),
            chroma: self.chroma(),
            luma: self.luma(),
        }
    }

    /// The neutral gray with the same luma.
    #[must_use]
    pub fn grayscale(self) -> Self {
        Self::from_hcy(self.hue(), 0.0, self.luma())
    }

    /// Photographic negative: every channel complemented.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self::from_rgb(1.0 - self.red, 1.0 - self.green, 1.0 - self.blue)
    }

    #[must_use]
    pub fn to_snes(self) -> SnesColor {
        SnesColor::from_color_f(self)
    }

    fn max(self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    fn min(self) -> f64 {
        self.red.min(self.green).min(self.blue)
    }
}

impl From<Hcy> for ColorF {
    fn from(hcy: Hcy) -> Self {
        Self::from_hcy(hcy.hue, hcy.chroma, hcy.luma)
    }
}

impl From<SnesColor> for ColorF {
    fn from(color: SnesColor) -> Self {
        color.to_color_f()
    }
}

fn weighted_luma(red: f64, green: f64, blue: f64) -> f64 {
    LUMA_RED * red + LUMA_GREEN * green + LUMA_BLUE * blue
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn primaries_sit_on_hue_sextants() {
        assert_close(ColorF::from_rgb(1.0, 0.0, 0.0).hue(), 0.0);
        assert_close(ColorF::from_rgb(1.0, 1.0, 0.0).hue(), 1.0 / 6.0);
        assert_close(ColorF::from_rgb(0.0, 1.0, 0.0).hue(), 2.0 / 6.0);
        assert_close(ColorF::from_rgb(0.0, 1.0, 1.0).hue(), 3.0 / 6.0);
        assert_close(ColorF::from_rgb(0.0, 0.0, 1.0).hue(), 4.0 / 6.0);
        assert_close(ColorF::from_rgb(1.0, 0.0, 1.0).hue(), 5.0 / 6.0);
    }

    #[test]
    fn luma_uses_rec601_weights() {
        assert_close(ColorF::WHITE.luma(), 1.0);
        assert_close(ColorF::BLACK.luma(), 0.0);
        assert_close(ColorF::from_rgb(0.0, 1.0, 0.0).luma(), LUMA_GREEN);
    }

    #[test]
    fn grays_have_no_chroma() {
        let gray = ColorF::from_rgb(0.4, 0.4, 0.4);
        assert_close(gray.chroma(), 0.0);
        assert_close(gray.hue(), 0.0);
    }

    #[test]
    fn constructors_clamp() {
        let color = ColorF::from_rgb(-0.5, 0.5, 1.5);
        assert_eq!(color, ColorF::from_rgb(0.0, 0.5, 1.0));
        // Full chroma at full luma is out of gamut; channels clamp.
        let color = ColorF::from_hcy(0.0, 1.0, 1.0);
        assert!(color.red() <= 1.0 && color.green() <= 1.0 && color.blue() <= 1.0);
    }

    #[test]
    fn hcy_round_trip() {
        let color = ColorF::from_rgb(0.2, 0.7, 0.45);
        let back = ColorF::from(color.to_hcy());
        assert_close(back.red(), color.red());
        assert_close(back.green(), color.green());
        assert_close(back.blue(), color.blue());
    }

    #[test]
    fn hue_wraps_in_turns() {
        let color = ColorF::from_rgb(0.6, 0.3, 0.1);
        let Hcy { hue, chroma, luma } = color.to_hcy();
        for turns in [-2.0, -1.0, 1.0, 3.0] {
            let wrapped = ColorF::from_hcy(hue + turns, chroma, luma);
            assert_close(wrapped.red(), color.red());
            assert_close(wrapped.green(), color.green());
            assert_close(wrapped.blue(), color.blue());
        }
    }

    #[test]
    fn tiny_negative_hue_is_red() {
        let color = ColorF::from_hcy(-1e-18, 0.5, 0.5);
        assert!(color.red() > color.green());
        assert_close(color.green(), color.blue());
    }

    #[test]
    fn grayscale_keeps_luma() {
        let color = ColorF::from_rgb(0.9, 0.2, 0.4);
        let gray = color.grayscale();
        assert_close(gray.chroma(), 0.0);
        assert_close(gray.luma(), color.luma());
    }

    #[test]
    fn inverse_complements_channels() {
        let color = ColorF::from_rgb(0.25, 0.5, 1.0).inverse();
        assert_eq!(color, ColorF::from_rgb(0.75, 0.5, 0.0));
    }

    #[test]
    fn inverse_turns_hue_half_way() {
        let color = ColorF::from_rgb(0.8, 0.3, 0.1);
        let shift = (color.inverse().hue() - color.hue()).rem_euclid(1.0);
        assert_close(shift, 0.5);
    }
}
