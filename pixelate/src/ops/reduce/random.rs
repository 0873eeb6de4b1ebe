use rand::Rng;

use crate::blocks::Block;
use crate::common::{PixelColor, Result};
use crate::frame::PixelView;
use crate::ops::BlockReducer;

/// Picks one pixel per block: x then y, each uniform over the clipped block.
pub(crate) struct RandomPick<'r, R: Rng> {
    rng: &'r mut R,
}

impl<'r, R: Rng> RandomPick<'r, R> {
    pub(crate) fn new(rng: &'r mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BlockReducer for RandomPick<'_, R> {
    fn reduce(&mut self, view: &PixelView<'_>, block: &Block) -> Result<Option<PixelColor>> {
        // No draw is consumed for degenerate blocks.
        if block.is_empty() {
            return Ok(None);
        }

        let dx = self.rng.random_range(0..block.width);
        let dy = self.rng.random_range(0..block.height);
        view.pixel(block.x + dx, block.y + dy).map(Some)
    }
}
