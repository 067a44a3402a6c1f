//! Palette randomizer for A Link to the Past ROM images.
//!
//! Colors are read from offset collections, blended in HCY space according
//! to a [`Mode`], and written back to the ROM in place. One
//! [`PaletteEditor`] handles each collection; a [`ColorSource`] supplies the
//! generated colors the blends consume.

mod editor;
mod error;
mod mode;
mod offsets;
mod options;
mod randomize;
mod source;

pub use editor::PaletteEditor;
pub use error::Error;
pub use mode::{Mode, ModeEntry, SourceKind, Strategy};
pub use offsets::{OffsetTable, Subset};
pub use options::{DEFAULT_JSON_DIR, OUTPUT_SUFFIX, Options, append_to_file_name};
pub use randomize::{randomize, randomize_from_options, randomize_with};
pub use source::{ColorList, ColorSource, FixedColor, RandomColors};
