//! Convert 32 bit ARGB images into planar and semi planar YUV 4:2:0 buffers
//!
//! The destination is a single flat byte buffer holding the full resolution
//! luma plane followed by the two quarter resolution chroma planes, laid out
//! in one of the four layouts video encoders commonly accept:
//!
//! | Format | Chroma region |
//! |--------|---------------|
//! | [`Yuv420Format::IYUV`] | full U plane, then full V plane |
//! | [`Yuv420Format::YV12`] | full V plane, then full U plane |
//! | [`Yuv420Format::NV12`] | interleaved U,V pairs |
//! | [`Yuv420Format::NV21`] | interleaved V,U pairs |
//!
//! Samples are produced with the fixed studio swing BT.601 matrix, luma in
//! 16..=235 and chroma in 16..=240 for in range input. Chroma is sampled from
//! the top left pixel of every 2x2 block, so both image dimensions must be
//! even.
//!
//! ```
//! use ezk_yuv420::{ArgbImage, Yuv420Format, convert};
//!
//! // 2x2 image of a single opaque color, packed as 0xAARRGGBB
//! let pixels = [0xFF224488u32; 4];
//! let image = ArgbImage::new(&pixels, 2, 2)?;
//!
//! let mut yuv = vec![0u8; Yuv420Format::NV12.buffer_size(2, 2)];
//! convert(&image, Yuv420Format::NV12, &mut yuv)?;
//! # Ok::<(), ezk_yuv420::ConvertError>(())
//! ```

pub use argb::{ArgbImage, ArgbPixel};
pub use convert::{convert, convert_pixel, convert_to_vec};
pub use format::{InvalidFormatError, Yuv420Format};
pub use layout::Yuv420Layout;
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_multi_thread;

mod argb;
mod color;
mod convert;
mod format;
mod layout;
#[cfg(feature = "multi-thread")]
mod multi_thread;

/// Everything that can go wrong when converting an image
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormatError),

    #[error(
        "width and height must be positive and even for 4:2:0 sub sampling, but got {width}x{height}"
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("output buffer must hold at least {minimum} bytes, but got {got}")]
    BufferTooSmall { minimum: usize, got: usize },
}
