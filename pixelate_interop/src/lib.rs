#![deny(improper_ctypes_definitions)]

//! C ABI for the pixelation engine.
//!
//! The row-range entry points share one signature:
//! `(buffer, width, height, stride, pixel_size, start_row, end_row)`. The
//! buffer is 4-byte BGRA rows of `stride` bytes. Calls on one buffer may run
//! concurrently when their row ranges are disjoint and aligned to
//! `pixel_size`. Invalid arguments are logged and the buffer is left as is.

use tracing::warn;

use pixelate::Strategy;

use crate::ffi::{frame_desc, frame_view, strategy_from_id, FfiResult, RowCall};

mod ffi;

/// # Safety
/// See [`RowCall::view`].
unsafe fn pixelate_rows(
    strategy: Strategy,
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    start_row: i32,
    end_row: i32,
) -> FfiResult<()> {
    let desc = frame_desc(width, height, stride)?;
    let call = RowCall::new(desc, strategy, pixel_size, start_row, end_row)?;
    let mut view = call.view(buffer)?;
    call.run(&mut view)
}

/// # Safety
/// See [`frame_view`].
unsafe fn pixelate_whole(
    strategy_id: i32,
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    thread_count: i32,
) -> FfiResult<()> {
    let strategy = strategy_from_id(strategy_id)?;
    let desc = frame_desc(width, height, stride)?;
    let call = RowCall::new(desc, strategy, pixel_size, 0, height)?;
    // Negative counts fall through to the band-count check.
    let band_count = usize::try_from(thread_count).unwrap_or(0);
    let view = frame_view(desc, buffer)?;
    call.params.apply_parallel(view, band_count)?;
    Ok(())
}

fn report(entry: &str, result: FfiResult<()>) {
    if let Err(err) = result {
        warn!("{entry} rejected: {err}");
    }
}

/// # Safety
/// `buffer` must point to at least `stride * height` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn pixelate_average(
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    start_row: i32,
    end_row: i32,
) {
    report(
        "pixelate_average",
        pixelate_rows(
            Strategy::Average,
            buffer,
            width,
            height,
            stride,
            pixel_size,
            start_row,
            end_row,
        ),
    );
}

/// # Safety
/// `buffer` must point to at least `stride * height` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn pixelate_median(
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    start_row: i32,
    end_row: i32,
) {
    report(
        "pixelate_median",
        pixelate_rows(
            Strategy::Median,
            buffer,
            width,
            height,
            stride,
            pixel_size,
            start_row,
            end_row,
        ),
    );
}

/// Entropy-seeded on every call.
///
/// # Safety
/// `buffer` must point to at least `stride * height` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn pixelate_random(
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    start_row: i32,
    end_row: i32,
) {
    report(
        "pixelate_random",
        pixelate_rows(
            Strategy::Random,
            buffer,
            width,
            height,
            stride,
            pixel_size,
            start_row,
            end_row,
        ),
    );
}

/// Pixelates the whole frame, split into `thread_count` bands on the rayon pool.
/// `algorithm`: 0 = average, 1 = median, 2 = random.
///
/// # Safety
/// `buffer` must point to at least `stride * height` writable bytes, and no
/// other call may use the buffer concurrently.
#[no_mangle]
pub unsafe extern "C" fn pixelate_image(
    buffer: *mut u8,
    width: i32,
    height: i32,
    stride: i32,
    pixel_size: i32,
    thread_count: i32,
    algorithm: i32,
) {
    report(
        "pixelate_image",
        pixelate_whole(
            algorithm,
            buffer,
            width,
            height,
            stride,
            pixel_size,
            thread_count,
        ),
    );
}

/// Installs console and file logging once. Returns false if setup failed.
#[no_mangle]
pub extern "C" fn pixelate_init_logging() -> bool {
    match common::setup_logging("info") {
        Ok(()) | Err(common::LogSetupError::AlreadyInitialized) => true,
        Err(err) => {
            eprintln!("pixelate logging setup failed: {err}");
            false
        }
    }
}
