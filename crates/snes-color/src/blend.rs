//! Blend functions.
//!
//! Every blend takes the existing color and a generated "change" color and
//! returns the replacement. For the maseya and acid blends the change
//! color's channels are three independent scalars in `[0, 1]`, not a color
//! to mix toward.

use crate::{ColorF, Hcy};

/// Signature shared by every blend.
pub type BlendFn = fn(ColorF, ColorF) -> ColorF;

/// Smallest hue rotation the maseya blend applies, in turns.
pub const MIN_HUE_SHIFT: f64 = 0.025;

/// Span of additional hue rotation driven by the change color's red channel.
pub const HUE_SHIFT_RANGE: f64 = 0.95;

/// Hue, chroma and luma produced by the maseya blend, before clamping.
///
/// The hue is not wrapped; `from_hcy` treats it cyclically.
#[must_use]
pub fn maseya_shift(color: ColorF, changes: ColorF) -> Hcy {
    let Hcy {
        hue: x_hue,
        chroma: x_chroma,
        luma: x_luma,
    } = color.to_hcy();

    // Always at least 2.5% and at most 97.5% of a turn.
    let hue = x_hue + MIN_HUE_SHIFT + HUE_SHIFT_RANGE * changes.red();

    let chroma_shift = changes.green() - 0.5;
    let chroma = if chroma_shift > 0.0 {
        // Soft ceiling: nearly saturated colors barely gain chroma.
        x_chroma * (1.0 + (1.0 - x_chroma) * chroma_shift * 0.5)
    } else {
        // Quarter ellipse: small desaturation is far likelier than large.
        x_chroma * (1.0 - (chroma_shift * 2.0).powi(2)).sqrt()
    };

    let luma_shift = changes.blue() - 0.5;
    let luma = if luma_shift > 0.0 {
        // Allow more brightening when chroma was just removed.
        let chroma_diff = (x_chroma - chroma).max(0.0);
        x_luma * (1.0 + (1.0 - x_luma) * luma_shift * (1.0 + chroma_diff))
    } else {
        x_luma * (1.0 + luma_shift / 2.0)
    };

    Hcy { hue, chroma, luma }
}

/// Default blend: shift a color while keeping it visually pleasing.
#[must_use]
pub fn maseya_blend(color: ColorF, changes: ColorF) -> ColorF {
    maseya_shift(color, changes).into()
}

/// Classic blend: rotate hue by `changes.red()` turns, keep chroma and luma.
#[must_use]
pub fn acid_blend(color: ColorF, changes: ColorF) -> ColorF {
    ColorF::from_hcy(color.hue() + changes.red(), color.chroma(), color.luma())
}

/// Chroma and luma of `color` with the hue of `source`.
#[must_use]
pub fn hue_blend(color: ColorF, source: ColorF) -> ColorF {
    ColorF::from_hcy(source.hue(), color.chroma(), color.luma())
}

/// Hue and chroma of `color` with the luma of `source`.
#[must_use]
pub fn luma_blend(color: ColorF, source: ColorF) -> ColorF {
    ColorF::from_hcy(color.hue(), color.chroma(), source.luma())
}
