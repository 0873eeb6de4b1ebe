mod parallel;
mod reduce;


use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

use crate::blocks::{Block, BlockGrid};
use crate::common::{Error, PixelColor, Result};
use crate::frame::PixelView;

use reduce::{Average, Median, RandomPick};

/// How the representative color of a block is chosen.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Per-channel integer mean.
    #[default]
    Average,
    /// Lower median by luminance.
    Median,
    /// One uniformly drawn pixel of the block.
    Random,
}

/// Computes the fill color of one block. `None` leaves the block untouched.
pub(crate) trait BlockReducer {
    fn reduce(&mut self, view: &PixelView<'_>, block: &Block) -> Result<Option<PixelColor>>;
}

/// Parameters for block pixelation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixelate {
    /// Edge length of a block in pixels. Must be greater than zero.
    pub pixel_size: u32,
    pub strategy: Strategy,
    /// Seed for [`Strategy::Random`]. `None` seeds from OS entropy on every call.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Pixelate {
    fn default() -> Self {
        Self {
            pixel_size: 8,
            strategy: Strategy::Average,
            seed: None,
        }
    }
}

impl Pixelate {
    pub fn new(pixel_size: u32, strategy: Strategy) -> Self {
        Self {
            pixel_size,
            strategy,
            seed: None,
        }
    }

    /// Builder method to set the block size.
    pub fn pixel_size(mut self, pixel_size: u32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Builder method to set the strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method to make [`Strategy::Random`] reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.pixel_size == 0 {
            return Err(Error::InvalidPixelSize);
        }
        Ok(())
    }

    /// Pixelates the blocks whose top edge lies in `rows`.
    ///
    /// Blocks extend up to `pixel_size` rows below their top edge (clipped at
    /// the image height), so the view must cover those rows too.
    pub fn apply(&self, view: &mut PixelView<'_>, rows: Range<u32>) -> Result<()> {
        match (self.strategy, self.seed) {
            (Strategy::Average, _) => average(view, self.pixel_size, rows),
            (Strategy::Median, _) => median(view, self.pixel_size, rows),
            (Strategy::Random, Some(seed)) => {
                let mut rng = StdRng::seed_from_u64(seed);
                random_with_rng(view, self.pixel_size, rows, &mut rng)
            }
            (Strategy::Random, None) => random(view, self.pixel_size, rows),
        }
    }

    /// Pixelates every row the view covers.
    pub fn apply_all(&self, view: &mut PixelView<'_>) -> Result<()> {
        let rows = view.covered_rows();
        self.apply(view, rows)
    }
}

/// Fills each block with the integer mean of its pixels.
pub fn average(view: &mut PixelView<'_>, pixel_size: u32, rows: Range<u32>) -> Result<()> {
    run(&mut Average, view, pixel_size, rows, "average")
}

/// Fills each block with its lower-median pixel by luminance.
pub fn median(view: &mut PixelView<'_>, pixel_size: u32, rows: Range<u32>) -> Result<()> {
    let mut median = Median::for_frame(view.width(), view.height(), pixel_size);
    run(&mut median, view, pixel_size, rows, "median")
}

/// Fills each block with one of its pixels, drawn from an entropy-seeded generator.
pub fn random(view: &mut PixelView<'_>, pixel_size: u32, rows: Range<u32>) -> Result<()> {
    let mut rng = StdRng::from_os_rng();
    random_with_rng(view, pixel_size, rows, &mut rng)
}

/// Like [`random`], drawing from `rng`. One generator serves every block of the call.
pub fn random_with_rng<R: Rng>(
    view: &mut PixelView<'_>,
    pixel_size: u32,
    rows: Range<u32>,
    rng: &mut R,
) -> Result<()> {
    run(&mut RandomPick::new(rng), view, pixel_size, rows, "random")
}

fn run<B: BlockReducer>(
    reducer: &mut B,
    view: &mut PixelView<'_>,
    pixel_size: u32,
    rows: Range<u32>,
    name: &str,
) -> Result<()> {
    let grid = BlockGrid::new(view.width(), view.height(), pixel_size, rows.clone())?;
    check_rows(view, &grid, &rows)?;

    let mut filled = 0usize;
    for block in grid {
        if block.is_empty() {
            continue;
        }
        if let Some(color) = reducer.reduce(view, &block)? {
            fill_block(view, &block, color)?;
            filled += 1;
        }
    }

    trace!(
        strategy = name,
        pixel_size,
        start = rows.start,
        end = rows.end,
        filled,
        "pixelated rows"
    );
    Ok(())
}

/// Rejects ranges past the image and blocks reaching rows the view does not own.
fn check_rows(view: &PixelView<'_>, grid: &BlockGrid, rows: &Range<u32>) -> Result<()> {
    if rows.start > rows.end || rows.end > view.height() {
        return Err(Error::InvalidRowRange {
            start: rows.start,
            end: rows.end,
            height: view.height(),
        });
    }
    if rows.is_empty() {
        return Ok(());
    }

    let touched_end = grid.touched_end();
    if rows.start < view.first_row() || touched_end > view.end_row() {
        return Err(Error::RowsNotCovered {
            start: rows.start,
            end: touched_end,
            first_row: view.first_row(),
            last_row: view.end_row(),
        });
    }
    Ok(())
}

fn fill_block(view: &mut PixelView<'_>, block: &Block, color: PixelColor) -> Result<()> {
    for dy in 0..block.height {
        for pixel in view.block_row_mut(block, dy)? {
            color.write_bgra(pixel);
        }
    }
    Ok(())
}
