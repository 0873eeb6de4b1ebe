// Colors and errors
pub use crate::common::{Error, PixelColor, Result};

// Framebuffer views
pub use crate::blocks::{Block, BlockGrid};
pub use crate::frame::{band_ranges, FrameDesc, PixelView, BYTES_PER_PIXEL};

// Operations
pub use crate::ops::{average, median, random, random_with_rng, Pixelate, Strategy};
