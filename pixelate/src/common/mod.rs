pub(crate) mod color;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod test_utils;

pub use color::PixelColor;
pub use error::{Error, Result};
