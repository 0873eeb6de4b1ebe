//! Block pixelation of BGRA framebuffers.
//!
//! The image is tiled into `pixel_size` squares (clipped at the right and
//! bottom edges) and every tile is filled with one representative color:
//! the channel mean, the luminance lower-median, or a randomly drawn pixel.
//! Alpha bytes and row padding are never written.
//!
//! ```rust,ignore
//! use pixelate::{FrameDesc, Pixelate, PixelView, Strategy};
//!
//! let desc = FrameDesc::new(width, height, stride);
//! let view = PixelView::new(desc, &mut bytes)?;
//! Pixelate::new(16, Strategy::Median).apply_parallel(view, 8)?;
//! ```

mod blocks;
mod common;
mod frame;
mod ops;

pub mod prelude;

pub use prelude::*;
