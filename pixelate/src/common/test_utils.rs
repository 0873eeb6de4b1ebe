use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frame::FrameDesc;

/// Value written to stride padding so tests can detect stray writes.
pub const PADDING_BYTE: u8 = 0xEE;

/// Builds a frame with per-pixel distinct colors and alpha; padding is filled
/// with [`PADDING_BYTE`]. `stride` of `None` means packed.
pub fn pattern_frame(width: u32, height: u32, stride: Option<usize>) -> (FrameDesc, Vec<u8>) {
    let desc = match stride {
        Some(stride) => FrameDesc::new(width, height, stride),
        None => FrameDesc::new_packed(width, height),
    };
    let mut bytes = vec![PADDING_BYTE; desc.stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let offset = y * desc.stride + x * 4;
            bytes[offset] = (x * 37 + y * 11) as u8;
            bytes[offset + 1] = (x * 7 + y * 53) as u8;
            bytes[offset + 2] = (x * 101 + y * 3) as u8;
            bytes[offset + 3] = (x + y * 13) as u8;
        }
    }
    (desc, bytes)
}

/// Like [`pattern_frame`] but with seeded random pixel values.
pub fn random_frame(
    width: u32,
    height: u32,
    stride: Option<usize>,
    seed: u64,
) -> (FrameDesc, Vec<u8>) {
    let (desc, mut bytes) = pattern_frame(width, height, stride);
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..height as usize {
        let row = &mut bytes[y * desc.stride..y * desc.stride + desc.row_bytes()];
        rng.fill(row);
    }
    (desc, bytes)
}

/// Fills every pixel of a packed frame with `bgra`.
pub fn uniform_frame(width: u32, height: u32, bgra: [u8; 4]) -> (FrameDesc, Vec<u8>) {
    let desc = FrameDesc::new_packed(width, height);
    let bytes = bgra.repeat(width as usize * height as usize);
    (desc, bytes)
}

pub fn bgra_at(desc: &FrameDesc, bytes: &[u8], x: u32, y: u32) -> [u8; 4] {
    let offset = y as usize * desc.stride + x as usize * 4;
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

pub fn assert_padding_untouched(desc: &FrameDesc, bytes: &[u8]) {
    for y in 0..desc.height as usize {
        let padding = &bytes[y * desc.stride + desc.row_bytes()..(y + 1) * desc.stride];
        assert!(
            padding.iter().all(|&b| b == PADDING_BYTE),
            "padding of row {y} was modified"
        );
    }
}

pub fn assert_alpha_unchanged(desc: &FrameDesc, before: &[u8], after: &[u8]) {
    for y in 0..desc.height {
        for x in 0..desc.width {
            assert_eq!(
                bgra_at(desc, before, x, y)[3],
                bgra_at(desc, after, x, y)[3],
                "alpha changed at ({x}, {y})"
            );
        }
    }
}
