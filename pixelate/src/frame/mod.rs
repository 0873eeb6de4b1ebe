mod bands;


use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::common::{Error, PixelColor, Result};

pub use bands::band_ranges;

/// Pixels are 4 bytes in B,G,R,A order.
pub const BYTES_PER_PIXEL: usize = 4;

/// Geometry of a BGRA framebuffer. `stride` may include row padding.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Serialize, Deserialize)]
pub struct FrameDesc {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl FrameDesc {
    pub fn new(width: u32, height: u32, stride: usize) -> Self {
        Self {
            width,
            height,
            stride,
        }
    }

    pub fn new_packed(width: u32, height: u32) -> Self {
        Self::new(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Returns the number of bytes per row without padding.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Returns true if stride equals row bytes (no padding).
    pub fn is_packed(&self) -> bool {
        self.stride == self.row_bytes()
    }

    pub fn validate(&self) -> Result<()> {
        if self.stride < self.row_bytes() {
            return Err(Error::InvalidStride {
                width: self.width,
                stride: self.stride,
            });
        }
        Ok(())
    }

    /// Bytes needed to hold the whole frame. Padding after the last row is not required.
    pub fn required_len(&self) -> usize {
        self.rows_len(self.height)
    }

    /// Bytes spanned by `rows` consecutive rows, without the last row's padding.
    pub fn rows_len(&self, rows: u32) -> usize {
        match rows {
            0 => 0,
            rows => (rows as usize - 1) * self.stride + self.row_bytes(),
        }
    }
}

impl std::fmt::Display for FrameDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} stride {}", self.width, self.height, self.stride)
    }
}

/// Mutable, bounds-checked view over the rows `[first_row, first_row + rows)`
/// of a borrowed BGRA framebuffer.
///
/// Coordinates are always in full-image space. Accessors fail with
/// [`Error::OutOfBounds`] for pixels outside the image width or outside the
/// covered rows; padding bytes are never exposed.
#[derive(Debug)]
pub struct PixelView<'a> {
    desc: FrameDesc,
    first_row: u32,
    rows: u32,
    bytes: &'a mut [u8],
}

impl<'a> PixelView<'a> {
    /// Views the whole frame.
    pub fn new(desc: FrameDesc, bytes: &'a mut [u8]) -> Result<Self> {
        Self::from_rows(desc, 0, desc.height, bytes)
    }

    /// Views `rows` rows starting at `first_row`; `bytes` begins at the first byte of `first_row`.
    pub fn from_rows(
        desc: FrameDesc,
        first_row: u32,
        rows: u32,
        bytes: &'a mut [u8],
    ) -> Result<Self> {
        desc.validate()?;

        let end = first_row as u64 + rows as u64;
        if end > desc.height as u64 {
            return Err(Error::InvalidRowRange {
                start: first_row,
                end: end.min(u32::MAX as u64) as u32,
                height: desc.height,
            });
        }

        let required = desc.rows_len(rows);
        if bytes.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            desc,
            first_row,
            rows,
            bytes,
        })
    }

    pub fn desc(&self) -> &FrameDesc {
        &self.desc
    }

    pub fn width(&self) -> u32 {
        self.desc.width
    }

    /// Height of the whole image, not of the covered rows.
    pub fn height(&self) -> u32 {
        self.desc.height
    }

    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    pub fn end_row(&self) -> u32 {
        self.first_row + self.rows
    }

    pub fn covered_rows(&self) -> Range<u32> {
        self.first_row..self.end_row()
    }

    /// Shorter-lived view over the same rows.
    pub fn reborrow(&mut self) -> PixelView<'_> {
        PixelView {
            desc: self.desc,
            first_row: self.first_row,
            rows: self.rows,
            bytes: &mut *self.bytes,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<PixelColor> {
        Ok(PixelColor::from_bgra(&self.bgra(x, y)?))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: PixelColor) -> Result<()> {
        let range = self.span(x, y, 1)?;
        let pixel: &mut [[u8; 4]] = bytemuck::try_cast_slice_mut(&mut self.bytes[range])?;
        color.write_bgra(&mut pixel[0]);
        Ok(())
    }

    /// Raw BGRA bytes of one pixel, alpha included.
    pub fn bgra(&self, x: u32, y: u32) -> Result<[u8; 4]> {
        let range = self.span(x, y, 1)?;
        let pixel: &[[u8; 4]] = bytemuck::try_cast_slice(&self.bytes[range])?;
        Ok(pixel[0])
    }

    /// Pixels of row `dy` of `block`.
    pub fn block_row(&self, block: &Block, dy: u32) -> Result<&[[u8; 4]]> {
        let range = self.block_span(block, dy)?;
        Ok(bytemuck::try_cast_slice(&self.bytes[range])?)
    }

    pub fn block_row_mut(&mut self, block: &Block, dy: u32) -> Result<&mut [[u8; 4]]> {
        let range = self.block_span(block, dy)?;
        Ok(bytemuck::try_cast_slice_mut(&mut self.bytes[range])?)
    }

    fn block_span(&self, block: &Block, dy: u32) -> Result<Range<usize>> {
        if dy >= block.height {
            return Err(Error::OutOfBounds {
                x: block.x,
                y: block.y.saturating_add(dy),
            });
        }
        self.span(block.x, block.y.saturating_add(dy), block.width)
    }

    /// Byte range of `count` pixels starting at (`x`, `y`).
    fn span(&self, x: u32, y: u32, count: u32) -> Result<Range<usize>> {
        let out_of_bounds = Error::OutOfBounds { x, y };

        if y < self.first_row || y >= self.end_row() {
            return Err(out_of_bounds);
        }
        if x as u64 + count as u64 > self.desc.width as u64 {
            return Err(out_of_bounds);
        }

        let start = (y - self.first_row) as usize * self.desc.stride + x as usize * BYTES_PER_PIXEL;
        Ok(start..start + count as usize * BYTES_PER_PIXEL)
    }
}
