//! Exhaustive round trips over all 32,768 SNES colors.

use snes_color::{ColorF, Encoding, SnesColor, Slot};

fn all_colors() -> impl Iterator<Item = SnesColor> {
    (0..0x8000u16).map(SnesColor::from_word)
}

#[test]
fn word_round_trip() {
    for word in 0..0x8000u16 {
        assert_eq!(SnesColor::from_word(word).to_word(), word);
    }
}

#[test]
fn raw_slot_round_trip() {
    let mut rom = [0u8; 2];
    for color in all_colors() {
        Slot::Raw(0).write(&mut rom, color).expect("in bounds");
        assert_eq!(Slot::Raw(0).read(&rom).expect("in bounds"), color);
    }
}

#[test]
fn oam_slot_round_trip() {
    let mut rom = [0u8; 5];
    for color in all_colors() {
        Slot::Oam(0).write(&mut rom, color).expect("in bounds");
        assert_eq!(Slot::Oam(0).read(&rom).expect("in bounds"), color);
    }
}

#[test]
fn encodings_report_their_width() {
    assert_eq!(Encoding::Raw.width(), 2);
    assert_eq!(Encoding::Oam.width(), 5);
    assert_eq!(Slot::from_signed(-3).encoding(), Encoding::Oam);
}

#[test]
fn color_f_round_trip() {
    for color in all_colors() {
        assert_eq!(SnesColor::from_color_f(color.to_color_f()), color);
    }
}

#[test]
fn hcy_round_trip() {
    for color in all_colors() {
        let float = color.to_color_f();
        let back = ColorF::from_hcy(float.hue(), float.chroma(), float.luma());
        assert_eq!(back.to_snes(), color, "HCY round trip failed for {color:?}");
    }
}

#[test]
fn inverse_is_channel_complement() {
    for color in all_colors() {
        let inverted = color.to_color_f().inverse().to_snes();
        assert_eq!(
            inverted,
            SnesColor::new(31 - color.red(), 31 - color.green(), 31 - color.blue())
        );
    }
}
