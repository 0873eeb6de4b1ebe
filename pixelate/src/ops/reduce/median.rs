use crate::blocks::Block;
use crate::common::{PixelColor, Result};
use crate::frame::PixelView;
use crate::ops::BlockReducer;

/// Lower median (index `len / 2`) under ascending luminance.
///
/// Uses quickselect, so the block is only partially ordered. Among pixels of
/// equal luminance any one may be returned.
pub(crate) struct Median {
    scratch: Vec<PixelColor>,
}

impl Median {
    /// Reserves room for the largest block a frame of this size can produce.
    pub(crate) fn for_frame(width: u32, height: u32, pixel_size: u32) -> Self {
        let block_width = pixel_size.min(width) as usize;
        let block_height = pixel_size.min(height) as usize;
        Self {
            scratch: Vec::with_capacity(block_width * block_height),
        }
    }
}

impl BlockReducer for Median {
    fn reduce(&mut self, view: &PixelView<'_>, block: &Block) -> Result<Option<PixelColor>> {
        self.scratch.clear();
        for dy in 0..block.height {
            let row = view.block_row(block, dy)?;
            self.scratch.extend(row.iter().map(PixelColor::from_bgra));
        }

        if self.scratch.is_empty() {
            return Ok(None);
        }

        let mid = self.scratch.len() / 2;
        let (_, median, _) = self
            .scratch
            .select_nth_unstable_by(mid, |a, b| a.luminance().total_cmp(&b.luminance()));
        Ok(Some(*median))
    }
}
