#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Pixel size must be greater than zero")]
    InvalidPixelSize,
    #[error("Stride {stride} is smaller than row size of {width} pixels")]
    InvalidStride { width: u32, stride: usize },
    #[error("Buffer of {actual} bytes is smaller than required {required} bytes")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("Invalid row range {start}..{end} for image height {height}")]
    InvalidRowRange { start: u32, end: u32, height: u32 },
    #[error("Rows {start}..{end} are outside the view rows {first_row}..{last_row}")]
    RowsNotCovered {
        start: u32,
        end: u32,
        first_row: u32,
        last_row: u32,
    },
    #[error("Pixel ({x}, {y}) is out of bounds")]
    OutOfBounds { x: u32, y: u32 },
    #[error("Band count must be greater than zero")]
    InvalidBandCount,
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<bytemuck::PodCastError> for Error {
    fn from(e: bytemuck::PodCastError) -> Self {
        Error::Conversion(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
