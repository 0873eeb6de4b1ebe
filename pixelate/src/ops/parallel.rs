use rayon::prelude::*;
use tracing::debug;

use super::Pixelate;
use crate::common::Result;
use crate::frame::PixelView;

impl Pixelate {
    /// Splits the view into `band_count` block-aligned bands and pixelates them
    /// on the rayon pool.
    ///
    /// For Average and Median the result is identical to [`Pixelate::apply_all`].
    /// A seeded Random run gives band `i` the seed `seed + i`.
    pub fn apply_parallel(&self, view: PixelView<'_>, band_count: usize) -> Result<()> {
        self.validate()?;

        let bands = view.split_bands(self.pixel_size, band_count)?;
        debug!(
            strategy = %self.strategy,
            pixel_size = self.pixel_size,
            bands = bands.len(),
            "pixelating bands"
        );

        bands
            .into_par_iter()
            .enumerate()
            .try_for_each(|(index, mut band)| self.for_band(index).apply_all(&mut band))
    }

    fn for_band(&self, index: usize) -> Pixelate {
        Pixelate {
            seed: self.seed.map(|seed| seed.wrapping_add(index as u64)),
            ..*self
        }
    }
}
