use std::ops::Range;

use super::PixelView;
use crate::common::{Error, Result};

/// Splits `rows` into at most `band_count` contiguous ranges aligned to
/// `pixel_size` (relative to `rows.start`), balanced by block rows.
///
/// Only the last range may end off-grid, at `rows.end`. Empty ranges are omitted.
pub fn band_ranges(rows: Range<u32>, pixel_size: u32, band_count: usize) -> Vec<Range<u32>> {
    if pixel_size == 0 || band_count == 0 || rows.start >= rows.end {
        return Vec::new();
    }

    let span = (rows.end - rows.start) as u64;
    let total_blocks = span.div_ceil(pixel_size as u64);
    // Bands past one per block row would all be empty.
    let bands = (band_count as u64).min(total_blocks);

    let to_row = |block: u64| -> u32 {
        let row = rows.start as u64 + block * pixel_size as u64;
        row.min(rows.end as u64) as u32
    };

    (0..bands)
        .map(|i| to_row(i * total_blocks / bands)..to_row((i + 1) * total_blocks / bands))
        .filter(|band| band.start < band.end)
        .collect()
}

impl<'a> PixelView<'a> {
    /// Consumes the view and returns disjoint views, one per non-empty band of
    /// [`band_ranges`]. Each band owns its rows exclusively.
    pub fn split_bands(self, pixel_size: u32, band_count: usize) -> Result<Vec<PixelView<'a>>> {
        if pixel_size == 0 {
            return Err(Error::InvalidPixelSize);
        }
        if band_count == 0 {
            return Err(Error::InvalidBandCount);
        }

        let desc = self.desc;
        let end_row = self.end_row();
        let ranges = band_ranges(self.covered_rows(), pixel_size, band_count);

        let mut bands = Vec::with_capacity(ranges.len());
        let mut rest = self.bytes;
        for range in ranges {
            let rows = range.end - range.start;
            let split = if range.end == end_row {
                rest.len()
            } else {
                rows as usize * desc.stride
            };

            let (head, tail) = std::mem::take(&mut rest).split_at_mut(split);
            bands.push(PixelView {
                desc,
                first_row: range.start,
                rows,
                bytes: head,
            });
            rest = tail;
        }

        Ok(bands)
    }
}
