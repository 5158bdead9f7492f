use crate::{ConvertError, Yuv420Format};

/// Base offsets and chroma step addressing the three sample planes inside one
/// flat output buffer
///
/// Computed once per output buffer by [`Yuv420Layout::new`] and immutable
/// afterwards. The luma plane always starts at offset 0, the chroma region at
/// `width * height`. Where U and V land inside the chroma region depends on
/// the [`Yuv420Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuv420Layout {
    format: Yuv420Format,
    width: u32,
    height: u32,

    u: usize,
    v: usize,
    uv_step: usize,
}

impl Yuv420Layout {
    /// Compute the plane layout for the given format and image dimensions
    ///
    /// Fails with [`ConvertError::InvalidDimensions`] when `width` or `height`
    /// is zero or odd. 4:2:0 sub sampling maps every 2x2 pixel block onto a
    /// single chroma sample pair, so both dimensions must be even.
    pub fn new(format: Yuv420Format, width: u32, height: u32) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }

        let wh = width as usize * height as usize;

        let (u, v, uv_step) = match format {
            Yuv420Format::IYUV => (wh, wh + wh / 4, 1),
            Yuv420Format::YV12 => (wh + wh / 4, wh, 1),
            Yuv420Format::NV12 => (wh, wh + 1, 2),
            Yuv420Format::NV21 => (wh + 1, wh, 2),
        };

        Ok(Self {
            format,
            width,
            height,
            u,
            v,
            uv_step,
        })
    }

    pub fn format(&self) -> Yuv420Format {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Base offset of the U samples
    pub fn u_offset(&self) -> usize {
        self.u
    }

    /// Base offset of the V samples
    pub fn v_offset(&self) -> usize {
        self.v
    }

    /// Distance between two horizontally adjacent samples of the same chroma
    /// channel, 1 for planar and 2 for semi planar layouts
    pub fn uv_step(&self) -> usize {
        self.uv_step
    }

    /// Offset of the luma sample for the pixel at (x, y)
    #[inline(always)]
    pub fn luma_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Offset of the chroma sample pair covering the 2x2 block that starts at
    /// (x, y), relative to the U and V base offsets
    ///
    /// Only meaningful when both `x` and `y` are even. The shift form relies
    /// on the even width invariant enforced by [`Yuv420Layout::new`].
    #[inline(always)]
    pub fn chroma_offset(&self, x: u32, y: u32) -> usize {
        (((y as usize * self.width as usize) >> 2) + (x as usize >> 1)) * self.uv_step
    }

    /// Number of bytes the conversion writes into the output buffer
    pub fn buffer_size(&self) -> usize {
        self.format.buffer_size(self.width, self.height)
    }
}
