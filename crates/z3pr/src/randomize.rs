//! Top-level randomization driver.

use std::fs;
use std::path::{Path, PathBuf};

use snes_color::Slot;
use tracing::info;

use crate::{
    ColorSource, Error, FixedColor, Mode, ModeEntry, OffsetTable, Options, PaletteEditor,
    RandomColors, SourceKind,
};

/// Randomize the palettes in `rom` using the named mode.
///
/// `source` supplies generated colors; when `None`, an entropy-seeded
/// generator is used. Mode names are case-insensitive.
pub fn randomize<I>(
    rom: &mut [u8],
    mode: &str,
    collections: I,
    source: Option<&mut dyn ColorSource>,
) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: AsRef<[Slot]>,
{
    let mode: Mode = mode.parse()?;
    if mode == Mode::None {
        return Ok(());
    }
    match source {
        Some(source) => randomize_with(rom, mode, collections, source),
        None => randomize_with(rom, mode, collections, &mut RandomColors::from_entropy()),
    }
}

/// Randomize the palettes in `rom` with an already resolved mode.
///
/// Every collection is decoded before anything is written, so a bad offset
/// leaves the ROM untouched. Collections are then blended and written back
/// one at a time, drawing from `source` in collection order.
pub fn randomize_with<I>(
    rom: &mut [u8],
    mode: Mode,
    collections: I,
    source: &mut dyn ColorSource,
) -> Result<(), Error>
where
    I: IntoIterator,
    I::Item: AsRef<[Slot]>,
{
    let Some(entry) = mode.entry() else {
        return Ok(());
    };

    let mut editors = Vec::new();
    for collection in collections {
        editors.push(PaletteEditor::new(rom, collection.as_ref())?);
    }

    let slots = match entry.source {
        SourceKind::Generator => blend_all(rom, &mut editors, entry, source)?,
        SourceKind::Fixed(color) => blend_all(rom, &mut editors, entry, &mut FixedColor(color))?,
    };
    info!(
        %mode,
        collections = editors.len(),
        slots,
        "randomized palettes"
    );
    Ok(())
}

fn blend_all(
    rom: &mut [u8],
    editors: &mut [PaletteEditor],
    entry: ModeEntry,
    source: &mut dyn ColorSource,
) -> Result<usize, Error> {
    let mut slots = 0;
    for editor in editors {
        editor.apply(entry.strategy, entry.transform, source)?;
        editor.write_back(rom)?;
        slots += editor.len();
    }
    Ok(slots)
}

/// Read, randomize and write a ROM file as described by `options`.
///
/// Returns the path the randomized ROM was written to.
pub fn randomize_from_options(options: &Options) -> Result<PathBuf, Error> {
    let mode: Mode = options.mode.parse()?;
    let input = options.input_file.as_deref().ok_or(Error::MissingInput)?;
    let output = options.output_path().ok_or(Error::MissingInput)?;

    let mut rom = read_file(input)?;
    let subsets = options.subsets();
    let table = OffsetTable::load(&options.json_dir(), &subsets)?;

    let mut source = options
        .seed
        .map_or_else(RandomColors::from_entropy, RandomColors::seeded);
    randomize_with(&mut rom, mode, table.collections(&subsets), &mut source)?;

    fs::write(&output, &rom).map_err(|source| Error::Io {
        path: output.clone(),
        source,
    })?;
    info!(input = %input.display(), output = %output.display(), "wrote randomized ROM");
    Ok(output)
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
