use std::ops::Range;

use pixelate::{BlockGrid, FrameDesc, PixelView, Pixelate, Strategy};

#[derive(Debug, thiserror::Error)]
pub(crate) enum FfiError {
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i32 },
    #[error("Buffer pointer is null")]
    NullBuffer,
    #[error("Unknown algorithm id {0}")]
    UnknownAlgorithm(i32),
    #[error(transparent)]
    Pixelate(#[from] pixelate::Error),
}

pub(crate) type FfiResult<T> = Result<T, FfiError>;

fn non_negative(name: &'static str, value: i32) -> FfiResult<u32> {
    u32::try_from(value).map_err(|_| FfiError::Negative { name, value })
}

/// Algorithm ids shared with the host: 0 = average, 1 = median, 2 = random.
pub(crate) fn strategy_from_id(id: i32) -> FfiResult<Strategy> {
    match id {
        0 => Ok(Strategy::Average),
        1 => Ok(Strategy::Median),
        2 => Ok(Strategy::Random),
        _ => Err(FfiError::UnknownAlgorithm(id)),
    }
}

pub(crate) fn frame_desc(width: i32, height: i32, stride: i32) -> FfiResult<FrameDesc> {
    let desc = FrameDesc::new(
        non_negative("width", width)?,
        non_negative("height", height)?,
        non_negative("stride", stride)? as usize,
    );
    desc.validate()?;
    Ok(desc)
}

/// Arguments of one row-range call, checked against each other.
#[derive(Debug, Clone)]
pub(crate) struct RowCall {
    pub desc: FrameDesc,
    pub params: Pixelate,
    pub rows: Range<u32>,
    /// Rows the call may read or write: block tops in `rows` plus their block height.
    pub touched: Range<u32>,
}

impl RowCall {
    pub(crate) fn new(
        desc: FrameDesc,
        strategy: Strategy,
        pixel_size: i32,
        start_row: i32,
        end_row: i32,
    ) -> FfiResult<Self> {
        let params = Pixelate::new(non_negative("pixel_size", pixel_size)?, strategy);
        params.validate()?;

        let rows = non_negative("start_row", start_row)?..non_negative("end_row", end_row)?;
        if rows.start > rows.end || rows.end > desc.height {
            return Err(pixelate::Error::InvalidRowRange {
                start: rows.start,
                end: rows.end,
                height: desc.height,
            }
            .into());
        }

        let grid = BlockGrid::new(desc.width, desc.height, params.pixel_size, rows.clone())?;
        let touched = rows.start..grid.touched_end();

        Ok(Self {
            desc,
            params,
            rows,
            touched,
        })
    }

    /// Borrows only the touched rows of `buffer`, so calls on disjoint aligned
    /// ranges of one buffer never alias.
    ///
    /// # Safety
    /// `buffer` must be valid for reads and writes of `stride * height` bytes
    /// for `'a`, and no other live reference may cover the touched rows.
    pub(crate) unsafe fn view<'a>(&self, buffer: *mut u8) -> FfiResult<PixelView<'a>> {
        if buffer.is_null() {
            return Err(FfiError::NullBuffer);
        }

        let rows = self.touched.end - self.touched.start;
        // An empty range may start at `height`, past the last byte of an exact-size buffer.
        let bytes: &'a mut [u8] = if rows == 0 {
            &mut []
        } else {
            let offset = self.touched.start as usize * self.desc.stride;
            std::slice::from_raw_parts_mut(buffer.add(offset), self.desc.rows_len(rows))
        };

        Ok(PixelView::from_rows(
            self.desc,
            self.touched.start,
            rows,
            bytes,
        )?)
    }

    pub(crate) fn run(&self, view: &mut PixelView<'_>) -> FfiResult<()> {
        self.params.apply(view, self.rows.clone())?;
        Ok(())
    }
}

/// Borrows the whole frame.
///
/// # Safety
/// Same contract as [`RowCall::view`], for every row of the frame.
pub(crate) unsafe fn frame_view<'a>(desc: FrameDesc, buffer: *mut u8) -> FfiResult<PixelView<'a>> {
    if buffer.is_null() {
        return Err(FfiError::NullBuffer);
    }
    let bytes = std::slice::from_raw_parts_mut(buffer, desc.required_len());
    Ok(PixelView::new(desc, bytes)?)
}
