//! Working set of colors for one offset collection.

use std::collections::HashSet;

use snes_color::{BlendFn, ColorF, Slot};
use tracing::debug;

use crate::{ColorSource, Error, Strategy};

/// Colors decoded from a fixed set of slots.
///
/// Slots keep the order they were given in; duplicates collapse to their
/// first occurrence. The slot set never changes after construction.
#[derive(Debug, Clone)]
pub struct PaletteEditor {
    items: Vec<(Slot, ColorF)>,
}

impl PaletteEditor {
    /// Decode every slot from `rom`.
    ///
    /// Fails without decoding anything if any slot runs past the buffer.
    pub fn new(rom: &[u8], slots: &[Slot]) -> Result<Self, Error> {
        for slot in slots {
            slot.check(rom.len())?;
        }

        let mut seen = HashSet::with_capacity(slots.len());
        let mut items = Vec::with_capacity(slots.len());
        for &slot in slots {
            if seen.insert(slot) {
                items.push((slot, slot.read(rom)?.to_color_f()));
            }
        }
        debug!(slots = items.len(), "decoded palette collection");
        Ok(Self { items })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.items.iter().map(|&(slot, _)| slot)
    }

    pub fn colors(&self) -> impl Iterator<Item = ColorF> + '_ {
        self.items.iter().map(|&(_, color)| color)
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<ColorF> {
        self.items
            .iter()
            .find(|&&(s, _)| s == slot)
            .map(|&(_, color)| color)
    }

    /// Draw one color and blend every slot with it.
    pub fn blend(&mut self, transform: BlendFn, source: &mut dyn ColorSource) -> Result<(), Error> {
        let changes = source.next_color()?;
        for (_, color) in &mut self.items {
            *color = transform(*color, changes);
        }
        Ok(())
    }

    /// Draw a fresh color for each slot, in slot order.
    pub fn blend_by_color(
        &mut self,
        transform: BlendFn,
        source: &mut dyn ColorSource,
    ) -> Result<(), Error> {
        for (_, color) in &mut self.items {
            *color = transform(*color, source.next_color()?);
        }
        Ok(())
    }

    pub fn apply(
        &mut self,
        strategy: Strategy,
        transform: BlendFn,
        source: &mut dyn ColorSource,
    ) -> Result<(), Error> {
        debug!(?strategy, slots = self.items.len(), "blending palette collection");
        match strategy {
            Strategy::Uniform => self.blend(transform, source),
            Strategy::PerSlot => self.blend_by_color(transform, source),
        }
    }

    /// Encode every slot back into `rom`.
    ///
    /// All slots are bounds-checked first, so either every slot is written
    /// or none is.
    pub fn write_back(&self, rom: &mut [u8]) -> Result<(), Error> {
        for (slot, _) in &self.items {
            slot.check(rom.len())?;
        }
        for &(slot, color) in &self.items {
            slot.write(rom, color.to_snes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use snes_color::SnesColor;

    use super::*;
    use crate::ColorList;

    fn take_generated(_: ColorF, changes: ColorF) -> ColorF {
        changes
    }

    fn two_slot_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 4];
        Slot::Raw(0)
            .write(&mut rom, SnesColor::new(1, 2, 3))
            .expect("in bounds");
        Slot::Raw(2)
            .write(&mut rom, SnesColor::new(4, 5, 6))
            .expect("in bounds");
        rom
    }

    fn first() -> ColorF {
        SnesColor::new(31, 0, 0).to_color_f()
    }

    fn second() -> ColorF {
        SnesColor::new(0, 0, 31).to_color_f()
    }

    #[test]
    fn decodes_in_given_order() {
        let rom = two_slot_rom();
        let editor = PaletteEditor::new(&rom, &[Slot::Raw(2), Slot::Raw(0)]).expect("in bounds");
        let slots: Vec<Slot> = editor.slots().collect();
        assert_eq!(slots, [Slot::Raw(2), Slot::Raw(0)]);
        let colors: Vec<SnesColor> = editor.colors().map(ColorF::to_snes).collect();
        assert_eq!(colors, [SnesColor::new(4, 5, 6), SnesColor::new(1, 2, 3)]);
        assert_eq!(
            editor.get(Slot::Raw(2)).map(ColorF::to_snes),
            Some(SnesColor::new(4, 5, 6))
        );
        assert_eq!(editor.get(Slot::Raw(4)), None);
    }

    #[test]
    fn empty_collection_has_no_colors() {
        let rom = two_slot_rom();
        let editor = PaletteEditor::new(&rom, &[]).expect("nothing to check");
        assert!(editor.is_empty());
        assert_eq!(editor.colors().count(), 0);
    }

    #[test]
    fn duplicate_slots_collapse() {
        let rom = two_slot_rom();
        let editor =
            PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2), Slot::Raw(0)]).expect("in bounds");
        assert_eq!(editor.len(), 2);
        assert!(!editor.is_empty());
    }

    #[test]
    fn uniform_blend_shares_one_color() {
        let mut rom = two_slot_rom();
        let mut editor = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2)]).expect("in bounds");
        let mut source = ColorList::new([first(), second()]);
        editor.blend(take_generated, &mut source).expect("one draw");
        assert_eq!(source.remaining(), 1);

        editor.write_back(&mut rom).expect("in bounds");
        assert_eq!(Slot::Raw(0).read(&rom).expect("in bounds"), SnesColor::new(31, 0, 0));
        assert_eq!(Slot::Raw(2).read(&rom).expect("in bounds"), SnesColor::new(31, 0, 0));
    }

    #[test]
    fn per_slot_blend_draws_in_order() {
        let mut rom = two_slot_rom();
        let mut editor = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2)]).expect("in bounds");
        let mut source = ColorList::new([first(), second()]);
        editor
            .blend_by_color(take_generated, &mut source)
            .expect("two draws");
        assert_eq!(source.remaining(), 0);

        editor.write_back(&mut rom).expect("in bounds");
        assert_eq!(Slot::Raw(0).read(&rom).expect("in bounds"), SnesColor::new(31, 0, 0));
        assert_eq!(Slot::Raw(2).read(&rom).expect("in bounds"), SnesColor::new(0, 0, 31));
    }

    #[test]
    fn apply_dispatches_on_strategy() {
        let rom = two_slot_rom();
        let mut editor = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2)]).expect("in bounds");
        let mut source = ColorList::new([first(), second(), first()]);
        editor
            .apply(Strategy::Uniform, take_generated, &mut source)
            .expect("one draw");
        assert_eq!(source.remaining(), 2);
        editor
            .apply(Strategy::PerSlot, take_generated, &mut source)
            .expect("two draws");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn per_slot_blend_fails_when_source_runs_dry() {
        let rom = two_slot_rom();
        let mut editor = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2)]).expect("in bounds");
        let mut source = ColorList::new([first()]);
        let err = editor
            .blend_by_color(take_generated, &mut source)
            .expect_err("only one color");
        assert!(matches!(err, Error::ColorSourceExhausted { drawn: 1 }));
    }

    #[test]
    fn out_of_range_slot_fails_construction() {
        let rom = two_slot_rom();
        let err = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Oam(1)]).expect_err("too short");
        assert!(matches!(err, Error::Color(_)));
    }

    #[test]
    fn write_back_is_all_or_nothing() {
        let rom = two_slot_rom();
        let mut editor = PaletteEditor::new(&rom, &[Slot::Raw(0), Slot::Raw(2)]).expect("in bounds");
        let mut source = ColorList::new([first()]);
        editor.blend(take_generated, &mut source).expect("one draw");

        let mut short = vec![0xAA; 3];
        assert!(editor.write_back(&mut short).is_err());
        assert_eq!(short, [0xAA; 3]);
    }
}
