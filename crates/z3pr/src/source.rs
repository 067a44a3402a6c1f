//! Generated colors consumed by the blends.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snes_color::ColorF;

use crate::Error;

/// Produces the next generated color on demand.
///
/// Sources are single-consumer and order dependent: editors draw from them
/// in slot order, so a replayed list reproduces a run exactly.
pub trait ColorSource {
    fn next_color(&mut self) -> Result<ColorF, Error>;
}

impl<S: ColorSource + ?Sized> ColorSource for &mut S {
    fn next_color(&mut self) -> Result<ColorF, Error> {
        (**self).next_color()
    }
}

/// Unbounded source of uniformly random colors.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Result<ColorF, Error> {
        let red = self.rng.random();
        let green = self.rng.random();
        let blue = self.rng.random();
        Ok(ColorF::from_rgb(red, green, blue))
    }
}

/// Replays a fixed list of colors, then fails.
#[derive(Debug, Clone, Default)]
pub struct ColorList {
    colors: Vec<ColorF>,
    next: usize,
}

impl ColorList {
    pub fn new(colors: impl IntoIterator<Item = ColorF>) -> Self {
        Self {
            colors: colors.into_iter().collect(),
            next: 0,
        }
    }

    /// Colors not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.colors.len() - self.next
    }
}

impl ColorSource for ColorList {
    fn next_color(&mut self) -> Result<ColorF, Error> {
        let color = self
            .colors
            .get(self.next)
            .copied()
            .ok_or(Error::ColorSourceExhausted { drawn: self.next })?;
        self.next += 1;
        Ok(color)
    }
}

/// Yields the same color forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColor(pub ColorF);

impl ColorSource for FixedColor {
    fn next_color(&mut self) -> Result<ColorF, Error> {
        Ok(self.0)
    }
}
