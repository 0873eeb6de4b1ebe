//! Tiling of a row range into `pixel_size`-sized blocks, clipped at the image edges.

use std::ops::Range;

use crate::common::{Error, Result};

/// A tile of the image. `width`/`height` are already clipped to the image.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Block {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Block {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    pub fn columns(&self) -> Range<u32> {
        self.x..self.x + self.width
    }
}

/// Row-major iterator over the blocks whose top edge lies in `rows`.
///
/// Block tops start at `rows.start` and step by `pixel_size`; block heights
/// are clipped at the image height, not at `rows.end`.
#[derive(Clone, Debug)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    pixel_size: u32,
    end_row: u32,
    x: u32,
    y: u32,
}

impl BlockGrid {
    pub fn new(width: u32, height: u32, pixel_size: u32, rows: Range<u32>) -> Result<Self> {
        if pixel_size == 0 {
            return Err(Error::InvalidPixelSize);
        }

        Ok(Self {
            width,
            height,
            pixel_size,
            end_row: rows.end.min(height),
            x: 0,
            y: rows.start,
        })
    }

    /// Last row (exclusive) touched by any block of the grid.
    pub fn touched_end(&self) -> u32 {
        if self.y >= self.end_row {
            return self.y;
        }
        let span = (self.end_row - self.y) as u64;
        let block_rows = span.div_ceil(self.pixel_size as u64);
        let end = self.y as u64 + block_rows * self.pixel_size as u64;
        end.min(self.height as u64) as u32
    }
}

impl Iterator for BlockGrid {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        loop {
            if self.y >= self.end_row {
                return None;
            }

            if self.x < self.width {
                let block = Block {
                    x: self.x,
                    y: self.y,
                    width: self.pixel_size.min(self.width - self.x),
                    height: self.pixel_size.min(self.height - self.y),
                };
                self.x = self.x.saturating_add(self.pixel_size);
                return Some(block);
            }

            self.x = 0;
            self.y = self.y.saturating_add(self.pixel_size);
        }
    }
}
