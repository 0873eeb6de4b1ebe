use crate::blocks::Block;
use crate::common::color::{BLUE, GREEN, RED};
use crate::common::{PixelColor, Result};
use crate::frame::PixelView;
use crate::ops::BlockReducer;

/// Per-channel mean with truncating division by the block's actual pixel count.
pub(crate) struct Average;

impl BlockReducer for Average {
    fn reduce(&mut self, view: &PixelView<'_>, block: &Block) -> Result<Option<PixelColor>> {
        // u64 sums cannot overflow for any u32 block size.
        let mut sum = [0u64; 3];
        let mut count = 0u64;

        for dy in 0..block.height {
            let row = view.block_row(block, dy)?;
            for pixel in row {
                sum[0] += pixel[BLUE] as u64;
                sum[1] += pixel[GREEN] as u64;
                sum[2] += pixel[RED] as u64;
            }
            count += row.len() as u64;
        }

        if count == 0 {
            return Ok(None);
        }

        Ok(Some(PixelColor::new(
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
        )))
    }
}
