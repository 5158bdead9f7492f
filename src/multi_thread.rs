use crate::convert::check_buffer;
use crate::{ArgbImage, ConvertError, Yuv420Format, Yuv420Layout, color, convert};
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Multi threaded variant of [`convert`]
///
/// Splits the output into per row slices so every worker owns the bytes it
/// writes, output is byte identical to the single threaded sweep.
#[inline(never)]
pub fn convert_multi_thread(
    src: &ArgbImage<'_>,
    format: Yuv420Format,
    out: &mut [u8],
) -> Result<(), ConvertError> {
    let layout = Yuv420Layout::new(format, src.width(), src.height())?;

    check_buffer(&layout, out)?;

    if num_cpus::get() == 1 {
        return convert(src, format, out);
    }

    let width = src.width() as usize;
    let wh = width * src.height() as usize;

    let (luma, chroma) = out[..layout.buffer_size()].split_at_mut(wh);

    luma.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, sample) in row.iter_mut().enumerate() {
                *sample = color::luma(src.pixel(x as u32, y as u32));
            }
        });

    // One chroma row covers two image rows, sampled from each block's top left pixel
    match format {
        Yuv420Format::IYUV | Yuv420Format::YV12 => {
            let (first, second) = chroma.split_at_mut(wh / 4);

            let (u_plane, v_plane) = if format == Yuv420Format::IYUV {
                (first, second)
            } else {
                (second, first)
            };

            u_plane
                .par_chunks_exact_mut(width / 2)
                .zip(v_plane.par_chunks_exact_mut(width / 2))
                .enumerate()
                .for_each(|(block_row, (u_row, v_row))| {
                    let y = block_row as u32 * 2;

                    for (block_col, (u, v)) in u_row.iter_mut().zip(v_row).enumerate() {
                        let pixel = src.pixel(block_col as u32 * 2, y);

                        *u = color::chroma_u(pixel);
                        *v = color::chroma_v(pixel);
                    }
                });
        }
        Yuv420Format::NV12 | Yuv420Format::NV21 => {
            chroma
                .par_chunks_exact_mut(width)
                .enumerate()
                .for_each(|(block_row, row)| {
                    let y = block_row as u32 * 2;

                    for (block_col, pair) in row.chunks_exact_mut(2).enumerate() {
                        let pixel = src.pixel(block_col as u32 * 2, y);

                        let u = color::chroma_u(pixel);
                        let v = color::chroma_v(pixel);

                        if format == Yuv420Format::NV12 {
                            pair[0] = u;
                            pair[1] = v;
                        } else {
                            pair[0] = v;
                            pair[1] = u;
                        }
                    }
                });
        }
    }

    Ok(())
}
