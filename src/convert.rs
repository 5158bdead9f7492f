use crate::{ArgbImage, ArgbPixel, ConvertError, Yuv420Format, Yuv420Layout, color};

/// Convert the whole source image into `out` using the given output layout
///
/// The buffer is validated against the computed layout before any byte is
/// written. Bytes past the layout's [`buffer_size`](Yuv420Layout::buffer_size)
/// are left untouched.
pub fn convert(
    src: &ArgbImage<'_>,
    format: Yuv420Format,
    out: &mut [u8],
) -> Result<(), ConvertError> {
    let layout = Yuv420Layout::new(format, src.width(), src.height())?;

    check_buffer(&layout, out)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            convert_pixel(src.pixel(x, y), x, y, &layout, out);
        }
    }

    Ok(())
}

/// Convert the source image into a freshly allocated buffer
pub fn convert_to_vec(src: &ArgbImage<'_>, format: Yuv420Format) -> Result<Vec<u8>, ConvertError> {
    let mut out = vec![0u8; format.buffer_size(src.width(), src.height())];

    convert(src, format, &mut out)?;

    Ok(out)
}

/// Write the samples of a single source pixel into `out`
///
/// The luma sample is written for every coordinate. The chroma sample pair is
/// written only when both `x` and `y` are even, the top left pixel of a 2x2
/// block decides the block's chroma. Two invocations with distinct
/// coordinates never write the same byte, so a caller running its own
/// dispatch may invoke this concurrently over the whole pixel grid.
///
/// # Panics
///
/// If (x, y) lies outside the layout's dimensions or `out` is smaller than
/// the layout's [`buffer_size`](Yuv420Layout::buffer_size)
#[inline(always)]
pub fn convert_pixel(pixel: ArgbPixel, x: u32, y: u32, layout: &Yuv420Layout, out: &mut [u8]) {
    out[layout.luma_offset(x, y)] = color::luma(pixel);

    if x % 2 == 0 && y % 2 == 0 {
        let offset = layout.chroma_offset(x, y);

        out[layout.u_offset() + offset] = color::chroma_u(pixel);
        out[layout.v_offset() + offset] = color::chroma_v(pixel);
    }
}

pub(crate) fn check_buffer(layout: &Yuv420Layout, out: &[u8]) -> Result<(), ConvertError> {
    let minimum = layout.buffer_size();

    if out.len() < minimum {
        return Err(ConvertError::BufferTooSmall {
            minimum,
            got: out.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_too_small() {
        let pixels = [0u32; 4];
        let image = ArgbImage::new(&pixels, 2, 2).unwrap();

        let mut out = [0u8; 5];
        let result = convert(&image, Yuv420Format::IYUV, &mut out);

        assert!(matches!(
            result,
            Err(ConvertError::BufferTooSmall { minimum: 6, got: 5 })
        ));

        // Nothing may be written when validation fails
        assert_eq!(out, [0u8; 5]);
    }

    #[test]
    fn oversized_buffer_tail_is_untouched() {
        let pixels = [0xFFFFFFFFu32; 4];
        let image = ArgbImage::new(&pixels, 2, 2).unwrap();

        let mut out = [0xABu8; 8];
        convert(&image, Yuv420Format::IYUV, &mut out).unwrap();

        assert_eq!(&out[6..], &[0xAB, 0xAB]);
    }
}
