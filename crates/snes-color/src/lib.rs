//! SNES 15-bit colors and the float color model used to blend them.
//!
//! Colors live in ROM images in two layouts: the packed CGRAM word and the
//! scattered OAM byte form. Both decode to [`SnesColor`], which converts to
//! [`ColorF`] for blending in hue/chroma/luma space and back again.

mod blend;
mod error;
mod float;
mod packed;
mod slot;

pub use blend::{
    BlendFn, HUE_SHIFT_RANGE, MIN_HUE_SHIFT, acid_blend, hue_blend, luma_blend, maseya_blend,
    maseya_shift,
};
pub use error::ColorError;
pub use float::{ColorF, Hcy, LUMA_BLUE, LUMA_GREEN, LUMA_RED};
pub use packed::{CHANNEL_MAX, SnesColor};
pub use slot::{Encoding, OAM_BLUE_MARK, OAM_GREEN_MARK, OAM_RED_MARK, Slot};
